//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Data file offered at the save/load prompts and used by subcommands.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Indentation width for saved JSON.
    #[serde(default = "default_indent")]
    pub indent: usize,
    /// Load `data_file` when the interactive menu starts.
    #[serde(default)]
    pub autoload: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("grades.json")
}
fn default_indent() -> usize {
    gradebook_core::persistence::DEFAULT_INDENT
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            indent: default_indent(),
            autoload: false,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<GradebookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => GradebookConfig::default(),
    };

    if let Ok(file) = std::env::var("GRADEBOOK_DATA_FILE") {
        if !file.trim().is_empty() {
            config.data_file = PathBuf::from(file);
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
