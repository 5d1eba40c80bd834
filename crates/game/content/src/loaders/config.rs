//! Game configuration loader.

use std::path::Path;

use crawler_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file yields
    /// [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.impaired_hit_threshold > 100 {
            anyhow::bail!(
                "impaired_hit_threshold must be a d100 value, got {}",
                config.impaired_hit_threshold
            );
        }

        tracing::debug!(target: "content::config", ?config, "loaded game config");
        Ok(config)
    }
}
