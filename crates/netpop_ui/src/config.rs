//! Popup configuration.
//!
//! Loaded once when the host surface is built, usually from a flat
//! TOML file:
//!
//! ```toml
//! padding = 8
//! class_name = "graph-tooltip"
//! ```
//!
//! Missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PopupError, PopupResult};
use crate::surface::DEFAULT_CLASS_NAME;

/// Default gap between the popup and the container edges, in pixels.
pub const DEFAULT_PADDING: i32 = 5;

/// Construction-time popup settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopupConfig {
    /// Minimum gap kept between popup edges and container edges.
    pub padding: i32,
    /// Stylesheet class applied to the surface.
    pub class_name: String,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl PopupConfig {
    /// Sets the padding.
    #[must_use]
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the stylesheet class.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::InvalidConfig`] if the text is not valid TOML,
    /// has unknown keys, or fails [`PopupConfig::validate`].
    pub fn from_toml_str(text: &str) -> PopupResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| PopupError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::InvalidConfig`] if the file cannot be read or
    /// its content is rejected by [`PopupConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> PopupResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PopupError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks the values.
    ///
    /// # Errors
    ///
    /// Returns [`PopupError::InvalidConfig`] for a negative padding or an
    /// empty class name.
    pub fn validate(&self) -> PopupResult<()> {
        if self.padding < 0 {
            return Err(PopupError::InvalidConfig(format!(
                "padding must be >= 0, got {}",
                self.padding
            )));
        }
        if self.class_name.trim().is_empty() {
            return Err(PopupError::InvalidConfig(
                "class_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
