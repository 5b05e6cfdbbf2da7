// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for shape construction and validation

use crate::geometry::ShapeKind;
use thiserror::Error;

/// Reasons a shape record is rejected by [`crate::geometry::Shape::validate`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{kind} has a non-finite {field}: {value}")]
    NonFinite {
        kind: ShapeKind,
        field: &'static str,
        value: f64,
    },

    #[error("{kind} has a negative {field}: {value}")]
    Negative {
        kind: ShapeKind,
        field: &'static str,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, ShapeError>;
