//! Configuration management for rook
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (ROOK_*)
//! 3. Config file (~/.config/rook/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Issue creation backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Shell out to the `gh` CLI
    #[default]
    Gh,
    /// Call the GitHub REST API directly
    Api,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Gh => write!(f, "gh"),
            Backend::Api => write!(f, "api"),
        }
    }
}

/// Import-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Target repository (owner/repo or remote URL)
    pub repo: Option<String>,

    /// Default manifest path
    pub manifest: PathBuf,

    /// Which backend creates the issues
    pub backend: Backend,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            repo: None,
            manifest: PathBuf::from("phases.toml"),
            backend: Backend::Gh,
        }
    }
}

/// `gh` CLI configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GhConfig {
    /// Path to the gh executable
    pub path: String,
}

impl Default for GhConfig {
    fn default() -> Self {
        Self {
            path: "gh".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Import configuration
    pub import: ImportConfig,

    /// gh CLI configuration
    pub gh: GhConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/rook/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rook").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - ROOK_REPO: Target repository
    /// - ROOK_GH_PATH: Path to the gh executable
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(repo) = std::env::var("ROOK_REPO") {
            self.import.repo = Some(repo);
        }

        if let Ok(gh_path) = std::env::var("ROOK_GH_PATH") {
            self.gh.path = gh_path;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, repo: Option<String>, gh_path: Option<String>) -> Self {
        if let Some(repo) = repo {
            self.import.repo = Some(repo);
        }

        if let Some(path) = gh_path {
            self.gh.path = path;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(repo: Option<String>, gh_path: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(repo, gh_path))
    }
}
