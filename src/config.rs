//! Modal configuration files.
//!
//! ```toml
//! size = [0.5, 300]          # fraction of the viewport below 1, pixels otherwise
//! fill = "#f4f4f4"
//! backdrop = "#00000099"
//! corner_radius = 8
//! theme = "dark"
//! ```

use crate::color::Color;
use crate::dimension::Size;
use crate::error::ConfigError;
use crate::modal::{Appearance, ModalOptions};
use crate::style::{keys, Styles};
use crate::viewport::Viewport;
use serde::Deserialize;
use std::path::Path;

/// Modal appearance, as read from a configuration file.
///
/// Everything is optional; unset values fall back to the modal defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ModalConfig {
    /// Content size (width, height).
    pub size: Option<[f64; 2]>,
    /// Content background color.
    pub fill: Option<String>,
    /// Backdrop color.
    pub backdrop: Option<String>,
    pub corner_radius: Option<f64>,
    /// Theme hint passed on to the content.
    pub theme: Option<String>,
}

impl ModalConfig {
    pub fn from_toml(contents: &str) -> Result<ModalConfig, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<ModalConfig, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ModalConfig::from_toml(&contents)?;
        log::info!("Loaded modal config from {:?}", path);
        Ok(config)
    }

    /// Styles to open a modal with.
    pub fn styles(&self) -> Result<Styles, ConfigError> {
        let mut styles = Styles::new();
        if let Some([width, height]) = self.size {
            for value in &[width, height] {
                if !value.is_finite() || *value <= 0. {
                    return Err(ConfigError::InvalidSize(format!(
                        "{} is not a positive number",
                        value
                    )));
                }
            }
            styles.insert(keys::SIZE, Size::new(width, height));
        }
        if let Some(fill) = &self.fill {
            styles.insert(keys::FILL, Color::from_hex(fill)?);
        }
        if let Some(theme) = &self.theme {
            styles.insert(keys::THEME, theme.as_str());
        }
        Ok(styles)
    }

    pub fn appearance(&self) -> Result<Appearance, ConfigError> {
        let mut appearance = Appearance::default();
        if let Some(backdrop) = &self.backdrop {
            appearance.backdrop = Color::from_hex(backdrop)?;
        }
        if let Some(radius) = self.corner_radius {
            appearance.corner_radius = radius.max(0.);
        }
        Ok(appearance)
    }

    /// Modal options for the given viewport.
    pub fn options<V: Viewport + 'static>(&self, viewport: V) -> Result<ModalOptions, ConfigError> {
        Ok(ModalOptions::new(viewport)
            .with_styles(self.styles()?)
            .with_appearance(self.appearance()?))
    }
}
