use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/folio/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::from("<inline>"),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Page sizes of zero are accepted; the page-size resolver clamps them
    /// to one. Checks:
    /// - Breakpoints are ordered mobile <= tablet <= desktop
    /// - Zoom limits are sane (max >= 1, click zoom within [1, max], wheel step > 1)
    /// - Swipe distance is finite and non-negative
    /// - Autoplay interval and terminal tick are positive
    /// - Terminal column width is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bp = &self.carousel.breakpoints;
        if bp.mobile > bp.tablet || bp.tablet > bp.desktop {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Breakpoints must satisfy mobile <= tablet <= desktop (got {}/{}/{})",
                    bp.mobile, bp.tablet, bp.desktop
                ),
            });
        }

        let zoom = &self.zoom;
        if !zoom.max_zoom.is_finite() || zoom.max_zoom < 1.0 {
            return Err(ConfigError::ValidationError {
                message: format!("zoom.max_zoom must be >= 1 (got {})", zoom.max_zoom),
            });
        }
        if !zoom.click_zoom.is_finite() || zoom.click_zoom < 1.0 || zoom.click_zoom > zoom.max_zoom
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "zoom.click_zoom must be within [1, {}] (got {})",
                    zoom.max_zoom, zoom.click_zoom
                ),
            });
        }
        if !zoom.wheel_step.is_finite() || zoom.wheel_step <= 1.0 {
            return Err(ConfigError::ValidationError {
                message: format!("zoom.wheel_step must be > 1 (got {})", zoom.wheel_step),
            });
        }

        let distance = self.gesture.min_swipe_distance_px;
        if !distance.is_finite() || distance < 0.0 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "gesture.min_swipe_distance_px must be a non-negative number (got {})",
                    distance
                ),
            });
        }

        if self.carousel.autoplay_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.autoplay_interval_ms must be positive".to_string(),
            });
        }
        if self.terminal.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "terminal.tick_ms must be positive".to_string(),
            });
        }

        if self.terminal.column_px == 0 {
            return Err(ConfigError::ValidationError {
                message: "terminal.column_px must be positive".to_string(),
            });
        }

        Ok(())
    }
}
