use crate::core::SortOrder;
use crate::core::layout::{AgentLayout, CdrLayout, DetectSpec, LayoutStrategy};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// How columns are located in the input sheets.
    #[serde(default = "default_strategy")]
    pub layout_strategy: LayoutStrategy,

    #[serde(default)]
    pub agent_layout: AgentLayout,

    #[serde(default)]
    pub cdr_layout: CdrLayout,

    #[serde(default)]
    pub detect: DetectSpec,

    /// Default row ordering of the generated report.
    #[serde(default)]
    pub sort: SortOrder,
}

fn default_strategy() -> LayoutStrategy {
    LayoutStrategy::Fixed
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout_strategy: default_strategy(),
            agent_layout: AgentLayout::default(),
            cdr_layout: CdrLayout::default(),
            detect: DetectSpec::default(),
            sort: SortOrder::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ccreport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ccreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ccreport.conf")
    }

    /// Load configuration from the given file, or the platform default
    /// location. Missing file means defaults; an unreadable or
    /// unparsable file is an error, not a silent fallback.
    pub fn load(custom_path: Option<&str>) -> AppResult<Self> {
        let path = match custom_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            if custom_path.is_some() {
                return Err(AppError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the default configuration file, creating the directory if
    /// needed. Refuses nothing: re-running `init` rewrites defaults.
    pub fn init_all() -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;

        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Validate a config file: parse it and sanity-check the layouts.
    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {} (run `ccreport init`)",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        if cfg.agent_layout.breaks.indices.is_empty() && cfg.agent_layout.breaks.aliases.is_empty()
        {
            return Err(AppError::InvalidLayout(
                "agent_layout.breaks has no columns and no aliases".to_string(),
            ));
        }
        if cfg.detect.markers.is_empty() {
            return Err(AppError::InvalidLayout(
                "detect.markers is empty, header detection can never match".to_string(),
            ));
        }

        Ok(())
    }
}
