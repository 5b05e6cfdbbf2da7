// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Utility modules

pub mod math;

pub use math::{Delta, Pos, EPSILON};
