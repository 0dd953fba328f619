//! Error types

use thiserror::Error;

/// Errors from the wheel core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WheelError {
    /// Resolving or spinning needs at least one segment
    #[error("wheel has no segments")]
    NoSegments,
    #[error("rotation is not finite: {0}")]
    NonFiniteRotation(f64),
    /// The action is only valid once a winner has been resolved
    #[error("no settled winner")]
    NotSettled,
    #[error("index {index} out of range for {len} names")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Rejected roster input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("name is empty")]
    Empty,
    #[error("name already on the wheel: {0}")]
    Duplicate(String),
}

/// Rejected color input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("no custom color at index {0}")]
    NoSuchColor(usize),
}

/// Saved list errors
#[derive(Debug, Error)]
pub enum ListsError {
    #[error("malformed saved lists: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no saved list named {0:?}")]
    UnknownList(String),
    #[error("list title is empty")]
    EmptyTitle,
}
