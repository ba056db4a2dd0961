use crate::errors::{AppError, AppResult};
use crate::paint::ChartFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Canvas width in logical units.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Canvas height in logical units.
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub default_format: ChartFormat,
    /// ANSI colors in terminal output.
    #[serde(default = "default_color")]
    pub color: bool,
    /// Terminal chart width in character columns.
    #[serde(default = "default_text_columns")]
    pub text_columns: usize,
}

fn default_width() -> f64 {
    crate::chart::geometry::DEFAULT_WIDTH
}
fn default_height() -> f64 {
    crate::chart::geometry::DEFAULT_HEIGHT
}
fn default_color() -> bool {
    true
}
fn default_text_columns() -> usize {
    128
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            default_format: ChartFormat::default(),
            color: default_color(),
            text_columns: default_text_columns(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rdutylog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rdutylog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdutylog.conf")
    }

    /// `custom` if given, the standard location otherwise.
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0) {
            return Err(AppError::Config(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.text_columns < 24 {
            return Err(AppError::Config(format!(
                "text_columns must be at least 24, got {}",
                self.text_columns
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`. An existing file is left
    /// untouched; returns whether a file was written.
    pub fn init(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
