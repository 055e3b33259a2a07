use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{Catalog, DashboardSummary, PlaceholderContent, Profile, TabbedWeek};
use crate::core::CatalogError;

/// On-disk configuration. Every section is optional; missing sections keep
/// the built-in catalog data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub courses: Option<Vec<String>>,

    #[serde(default)]
    pub dashboard: Option<DashboardSummary>,

    #[serde(default)]
    pub week10: Option<TabbedWeek>,

    #[serde(default)]
    pub placeholder: Option<PlaceholderContent>,

    #[serde(default)]
    pub profile: Option<Profile>,
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str::<Config>(content).context("invalid config TOML")
    }

    /// Overlay the configured sections onto the built-in catalog.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::default();
        if let Some(courses) = self.courses {
            catalog.set_courses(courses)?;
        }
        if let Some(dashboard) = self.dashboard {
            catalog.dashboard = dashboard;
        }
        if let Some(week10) = self.week10 {
            catalog.week10 = week10;
        }
        if let Some(placeholder) = self.placeholder {
            catalog.placeholder = placeholder;
        }
        if let Some(profile) = self.profile {
            catalog.profile = profile;
        }
        Ok(catalog)
    }
}

/// Load from the resolved config path. A missing file yields defaults.
pub fn load() -> Result<Config> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    Config::parse(&content).with_context(|| format!("in {}", path.display()))
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("COURSEDASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("coursedash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("coursedash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "coursedash", "coursedash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("coursedash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("coursedash"));
    }
    directories::ProjectDirs::from("io", "coursedash", "coursedash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}
