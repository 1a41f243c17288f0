//! Configuration file support for clockwall.
//!
//! Settings live in `config.toml` under the platform config directory. Every
//! section is optional; missing keys fall back to the reference deployment
//! (a 16x9 grid of 32px faces at 60 fps on a 1280x720 surface).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use clockwall_core::{ColorTheme, GridLayout};
use directories::ProjectDirs;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How the hands move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Draw one frame, hold it, then exit.
    Static,
    /// Tween every face to the target time in a staggered wave.
    #[default]
    Tween,
    /// Follow the wall clock, one step per second.
    Continuous,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Static => "static",
            Mode::Tween => "tween",
            Mode::Continuous => "continuous",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Mode::Static),
            "tween" => Ok(Mode::Tween),
            "continuous" => Ok(Mode::Continuous),
            other => Err(format!(
                "unknown mode '{other}' (expected static, tween or continuous)"
            )),
        }
    }
}

/// Grid dimensions and spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    pub columns: usize,
    pub rows: usize,
    pub clock_radius: i32,
    pub gutter: i32,
}

impl Default for GridSection {
    fn default() -> Self {
        let layout = GridLayout::default();
        Self {
            columns: layout.columns,
            rows: layout.rows,
            clock_radius: layout.clock_radius,
            gutter: layout.gutter,
        }
    }
}

/// Logical size of the drawing surface in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceSection {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSection {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Target time of the tween wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenSection {
    pub target_minute: f64,
    pub target_hour: f64,
}

impl Default for TweenSection {
    fn default() -> Self {
        Self {
            target_minute: 240.0,
            target_hour: 9.0,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mode: Mode,
    pub frame_rate: u32,
    #[serde(
        serialize_with = "serialize_theme",
        deserialize_with = "deserialize_theme"
    )]
    pub theme: ColorTheme,
    /// How long the static mode keeps its frame on screen.
    pub static_display_secs: u64,
    /// Where log output goes. Logging is discarded when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub grid: GridSection,
    pub surface: SurfaceSection,
    pub tween: TweenSection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            frame_rate: GridLayout::default().frame_rate,
            theme: ColorTheme::default(),
            static_display_secs: 2,
            log_file: None,
            grid: GridSection::default(),
            surface: SurfaceSection::default(),
            tween: TweenSection::default(),
        }
    }
}

fn serialize_theme<S: Serializer>(theme: &ColorTheme, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(theme.name())
}

fn deserialize_theme<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ColorTheme, D::Error> {
    let name = String::deserialize(deserializer)?;
    ColorTheme::from_name(&name)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown theme '{name}'")))
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "clockwall").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, using defaults when there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => {
                warn!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), mode = %config.mode, "config loaded");
        Ok(config)
    }

    /// Reject values the grid and animation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be at least 1".into()));
        }
        if self.grid.columns == 0 || self.grid.rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one column and row, got {}x{}",
                self.grid.columns, self.grid.rows
            )));
        }
        if self.grid.clock_radius <= 0 {
            return Err(ConfigError::Invalid("grid.clock_radius must be positive".into()));
        }
        if self.grid.gutter < 0 {
            return Err(ConfigError::Invalid("grid.gutter must not be negative".into()));
        }
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "surface must not be empty, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }

        let (needed_w, needed_h) = self.layout().required_size();
        if needed_w > self.surface.width || needed_h > self.surface.height {
            warn!(
                needed_w,
                needed_h,
                width = self.surface.width,
                height = self.surface.height,
                "grid does not fit the surface, outer clocks will be clipped"
            );
        }
        Ok(())
    }

    /// Grid layout described by this configuration.
    pub fn layout(&self) -> GridLayout {
        GridLayout {
            columns: self.grid.columns,
            rows: self.grid.rows,
            clock_radius: self.grid.clock_radius,
            gutter: self.grid.gutter,
            frame_rate: self.frame_rate,
        }
    }

    pub fn static_display(&self) -> Duration {
        Duration::from_secs(self.static_display_secs)
    }
}
