//! TOML configuration
//!
//! ```toml
//! catalog_path = "config/permissions.json"
//! navigation_path = "config/navigation.json"
//! prune_policy = "drop-empty-branches"
//!
//! [server]
//! bind = "127.0.0.1:8080"
//! ```
//!
//! Every key is optional. Without paths the built-in catalog and menu are used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{read_file, NavError, Result};
use crate::filter::PrunePolicy;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// JSON permission catalog; built-in when unset
    pub catalog_path: Option<PathBuf>,
    /// JSON navigation definition; built-in when unset
    pub navigation_path: Option<PathBuf>,
    pub prune_policy: PrunePolicy,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { bind: DEFAULT_BIND.to_string() }
    }
}

impl NavConfig {
    /// Load from a TOML file. Relative paths inside resolve against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut cfg: NavConfig =
            toml::from_str(&read_file(path)?).map_err(|source| NavError::Config { path: path.to_path_buf(), source })?;
        if let Some(dir) = path.parent() {
            cfg.catalog_path = cfg.catalog_path.map(|p| dir.join(p));
            cfg.navigation_path = cfg.navigation_path.map(|p| dir.join(p));
        }
        Ok(cfg)
    }

    pub fn from_toml(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = NavConfig::from_toml("").unwrap();
        assert_eq!(cfg, NavConfig::default());
        assert_eq!(cfg.server.bind, DEFAULT_BIND);
        assert_eq!(cfg.prune_policy, PrunePolicy::KeepEmptyBranches);
    }

    #[test]
    fn all_keys() {
        let cfg = NavConfig::from_toml(
            r#"
            catalog_path = "perms.json"
            navigation_path = "nav.json"
            prune_policy = "drop-empty-branches"

            [server]
            bind = "127.0.0.1:8080"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("perms.json")));
        assert_eq!(cfg.navigation_path, Some(PathBuf::from("nav.json")));
        assert_eq!(cfg.prune_policy, PrunePolicy::DropEmptyBranches);
        assert_eq!(cfg.server.bind, "127.0.0.1:8080");
    }

    #[test]
    fn typos_are_rejected() {
        assert!(NavConfig::from_toml("prune_polcy = \"keep-empty-branches\"").is_err());
        assert!(NavConfig::from_toml("prune_policy = \"sometimes\"").is_err());
    }
}
