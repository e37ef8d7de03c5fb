use crate::errors::{AppError, AppResult};
use crate::ui::prompt::DEFAULT_CANCEL_KEYWORD;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every complete configuration file carries (used by `config --check`).
pub const CONFIG_KEYS: &[&str] = &[
    "title",
    "center_lat",
    "center_lng",
    "zoom",
    "max_zoom",
    "map_width",
    "map_height",
    "tile_url",
    "subdomains",
    "attribution",
    "cancel_keyword",
    "color",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    #[serde(default = "default_map_width")]
    pub map_width: u16,
    #[serde(default = "default_map_height")]
    pub map_height: u16,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_subdomains")]
    pub subdomains: Vec<String>,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    #[serde(default = "default_cancel_keyword")]
    pub cancel_keyword: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_title() -> String {
    "Oh, the places you've been!".to_string()
}
fn default_center_lat() -> f64 {
    39.8283
}
fn default_center_lng() -> f64 {
    -98.5795
}
fn default_zoom() -> u8 {
    4
}
fn default_max_zoom() -> u8 {
    19
}
fn default_map_width() -> u16 {
    72
}
fn default_map_height() -> u16 {
    18
}
fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}
fn default_subdomains() -> Vec<String> {
    vec!["a".into(), "b".into(), "c".into()]
}
fn default_attribution() -> String {
    "Map data © OpenStreetMap contributors".to_string()
}
fn default_cancel_keyword() -> String {
    DEFAULT_CANCEL_KEYWORD.to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            max_zoom: default_max_zoom(),
            map_width: default_map_width(),
            map_height: default_map_height(),
            tile_url: default_tile_url(),
            subdomains: default_subdomains(),
            attribution: default_attribution(),
            cancel_keyword: default_cancel_keyword(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("placemap")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("placemap.conf")
    }

    /// Resolve the config path: `--config` override or the platform default.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        let cfg = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str::<Config>(&content)?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.zoom > self.max_zoom {
            return Err(AppError::Config(format!(
                "zoom {} is above max_zoom {}",
                self.zoom, self.max_zoom
            )));
        }
        if self.max_zoom > 30 {
            return Err(AppError::Config(format!(
                "max_zoom {} is out of range (0..=30)",
                self.max_zoom
            )));
        }
        if self.map_width < 10 || self.map_height < 4 {
            return Err(AppError::Config(format!(
                "map size {}x{} is too small (min 10x4)",
                self.map_width, self.map_height
            )));
        }
        if self.tile_url.contains("{s}") && self.subdomains.is_empty() {
            return Err(AppError::Config(
                "tile_url uses {s} but no subdomains are configured".into(),
            ));
        }
        if self.cancel_keyword.trim().is_empty() {
            return Err(AppError::Config("cancel_keyword must not be blank".into()));
        }
        Ok(())
    }

    /// Keys from [`CONFIG_KEYS`] absent from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = yaml.as_mapping();

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| {
                map.map(|m| !m.contains_key(*k)).unwrap_or(true)
            })
            .collect())
    }

    /// Write a default configuration file to `path`.
    /// An existing file is kept unless `force` is set.
    pub fn init_file(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }
}
