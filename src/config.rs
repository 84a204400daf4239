use crate::style::CaseStyle;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".caseconv.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Acronyms in priority order
    #[serde(default)]
    pub acronyms: Vec<String>,

    /// Style used by `convert` when none is given on the command line
    #[serde(default)]
    pub default_style: Option<String>,

    /// Colored output; unset in a file leaves the previous layer's choice
    #[serde(default)]
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_acronyms: Vec<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            config = config.merge(Self::from_file(&local_path)?);
        }

        // CLI acronyms rank after configured ones
        config.acronyms.extend(cli_acronyms);

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Reading config file {}", path.display());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // Surface a bad style name at load time rather than on first use
        config
            .default_style()
            .with_context(|| format!("Invalid default_style in {}", path.display()))?;

        Ok(config)
    }

    /// Later files add acronyms and override the remaining settings
    fn merge(mut self, other: Self) -> Self {
        self.acronyms.extend(other.acronyms);
        if other.default_style.is_some() {
            self.default_style = other.default_style;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        self
    }

    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn default_style(&self) -> Result<Option<CaseStyle>> {
        self.default_style
            .as_deref()
            .map(str::parse::<CaseStyle>)
            .transpose()
            .map_err(Into::into)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
