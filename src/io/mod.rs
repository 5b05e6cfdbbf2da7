// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - scene and shape loading

mod scene;

pub use scene::{parse_shape, Scene};
