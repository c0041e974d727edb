//! # Popup Error Types
//!
//! All errors that can occur while configuring or positioning a popup.
//! Showing, hiding and content updates never fail.

use thiserror::Error;

use crate::coordinate::Axis;

/// Errors that can occur in the popup system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PopupError {
    /// A coordinate could not be coerced to an integer pixel value.
    #[error("non-numeric {axis} coordinate: {input:?}")]
    NonNumericCoordinate {
        /// The axis the value was meant for.
        axis: Axis,
        /// The rejected input, as written by the caller.
        input: String,
    },

    /// Unknown direction hint.
    #[error("invalid direction: {0:?} (expected \"\", \"left\", \"right\" or \"none\")")]
    InvalidDirection(String),

    /// Invalid configuration file or value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for popup operations.
pub type PopupResult<T> = Result<T, PopupError>;
