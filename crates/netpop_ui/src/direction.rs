//! Directional hint carried on the popup surface.
//!
//! The hint is written to the surface's `direction` attribute so stylesheets
//! can draw an arrow towards the anchor.

use std::fmt;
use std::str::FromStr;

use crate::error::{PopupError, PopupResult};

/// Which side of the anchor the popup points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// No forced hint (`""`).
    #[default]
    Auto,
    /// Explicit left hint (`"left"`).
    Left,
    /// Explicit right hint (`"right"`).
    Right,
    /// Hint dropped because the popup was clamped (`"none"`).
    Suppressed,
}

impl Direction {
    /// Returns the attribute value written to the surface.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Auto => "",
            Self::Left => "left",
            Self::Right => "right",
            Self::Suppressed => "none",
        }
    }

    /// Returns true for a caller-forced `left`/`right` hint.
    #[inline]
    #[must_use]
    pub const fn is_explicit(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

impl FromStr for Direction {
    type Err = PopupError;

    fn from_str(s: &str) -> PopupResult<Self> {
        match s {
            "" => Ok(Self::Auto),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "none" => Ok(Self::Suppressed),
            other => Err(PopupError::InvalidDirection(other.to_string())),
        }
    }
}
