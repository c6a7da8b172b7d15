//! Configuration file support for fgarage.
//!
//! Configuration is loaded from `~/.config/fgarage/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/fgarage/config.toml
//! content = "~/fgarage/site.toml"
//!
//! [carousel]
//! hero_interval_ms = 5000
//! gallery_interval_ms = 7500
//! testimonials_interval_ms = 6500
//! pause_on_hover = true
//! autoplay = true
//!
//! [slider]
//! nudge_step = 5.0
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::carousel::CarouselConfig;
use crate::error::{ConfigError, ConfigResult};

/// Shortest auto-advance interval accepted from a config file
pub const MIN_INTERVAL_MS: u64 = 500;

/// Environment variable naming a content file
pub const CONTENT_ENV: &str = "FGARAGE_CONTENT";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Site content file replacing the built-in content
    pub content: Option<PathBuf>,

    /// `--content` from the command line
    #[serde(skip)]
    pub cli_content: Option<PathBuf>,

    /// Auto-advance timing for the rotating views
    pub carousel: CarouselSettings,

    /// Before/after slider settings
    pub slider: SliderSettings,
}

/// Carousel timing and behaviour.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselSettings {
    pub hero_interval_ms: u64,
    pub gallery_interval_ms: u64,
    pub testimonials_interval_ms: u64,
    /// Hovering the gallery or testimonials suspends auto-advance
    pub pause_on_hover: bool,
    pub autoplay: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            hero_interval_ms: 5000,
            gallery_interval_ms: 7500,
            testimonials_interval_ms: 6500,
            pause_on_hover: true,
            autoplay: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SliderSettings {
    /// Percentage points moved per arrow key
    pub nudge_step: f32,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self { nudge_step: 5.0 }
    }
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }
        Self::load_or_default(&config_path)
    }

    /// Load a specific file, reporting any error and falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {} (using defaults)", e);
                Self::default()
            }
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        let intervals = [
            ("hero_interval_ms", self.carousel.hero_interval_ms),
            ("gallery_interval_ms", self.carousel.gallery_interval_ms),
            ("testimonials_interval_ms", self.carousel.testimonials_interval_ms),
        ];
        for (name, value) in intervals {
            if value < MIN_INTERVAL_MS {
                return Err(ConfigError::IntervalTooShort {
                    name,
                    value,
                    min: MIN_INTERVAL_MS,
                });
            }
        }
        let step = self.slider.nudge_step;
        if !(step > 0.0 && step <= 100.0) {
            return Err(ConfigError::InvalidNudgeStep(step));
        }
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fgarage")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, content: Option<PathBuf>, no_autoplay: bool) -> Self {
        if content.is_some() {
            self.cli_content = content;
        }
        if no_autoplay {
            self.carousel.autoplay = false;
        }
        self
    }

    /// Get the content file: CLI, then `FGARAGE_CONTENT`, then the config file.
    pub fn content_path(&self) -> Option<PathBuf> {
        let env = std::env::var_os(CONTENT_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.resolve_content(env)
    }

    fn resolve_content(&self, env: Option<PathBuf>) -> Option<PathBuf> {
        self.cli_content
            .clone()
            .or(env)
            .or_else(|| self.content.clone())
            .map(|p| expand_home(&p))
    }

    /// The hero rotates regardless of hover.
    pub fn hero(&self) -> CarouselConfig {
        CarouselConfig::new(Duration::from_millis(self.carousel.hero_interval_ms))
            .with_pause_on_hover(false)
            .with_autoplay(self.carousel.autoplay)
    }

    pub fn gallery(&self) -> CarouselConfig {
        CarouselConfig::new(Duration::from_millis(self.carousel.gallery_interval_ms))
            .with_pause_on_hover(self.carousel.pause_on_hover)
            .with_autoplay(self.carousel.autoplay)
    }

    pub fn testimonials(&self) -> CarouselConfig {
        CarouselConfig::new(Duration::from_millis(self.carousel.testimonials_interval_ms))
            .with_pause_on_hover(self.carousel.pause_on_hover)
            .with_autoplay(self.carousel.autoplay)
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
