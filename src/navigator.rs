//! The assembled pipeline: catalog + normalized tree, loaded once, queried per identity.

use tracing::info;

use crate::ability::{self, AbilitySet};
use crate::catalog::{PermissionCatalog, PermissionId};
use crate::config::NavConfig;
use crate::definition::{self, NavbarItem};
use crate::error::Result;
use crate::filter::{filter_with, PrunePolicy};
use crate::menu::{project, MenuItem};
use crate::normalize::normalize;
use crate::tree::{self, NavNode};

/// Read-only after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: PermissionCatalog,
    tree: Vec<NavNode>,
    policy: PrunePolicy,
    version: String,
}

impl Navigator {
    /// Built-in catalog and menu, default policy
    pub fn builtin() -> Result<Self> {
        Self::new(PermissionCatalog::builtin(), &definition::builtin()?, PrunePolicy::default())
    }

    pub fn from_config(cfg: &NavConfig) -> Result<Self> {
        let catalog = match &cfg.catalog_path {
            Some(p) => PermissionCatalog::from_path(p)?,
            None => PermissionCatalog::builtin(),
        };
        let items = match &cfg.navigation_path {
            Some(p) => definition::from_path(p)?,
            None => definition::builtin()?,
        };
        Self::new(catalog, &items, cfg.prune_policy)
    }

    /// Normalize, validate and fingerprint a definition
    pub fn new(catalog: PermissionCatalog, items: &[NavbarItem], policy: PrunePolicy) -> Result<Self> {
        let tree = normalize(items);
        tree::validate(&tree)?;
        let version = tree::fingerprint(&tree)?;
        let short = &version[..12];
        info!(
            nodes = tree::count(&tree),
            permissions = catalog.len(),
            ?policy,
            version = %short,
            "navigation loaded"
        );
        Ok(Navigator { catalog, tree, policy, version })
    }

    /// Fresh ability set for one identity; `None` when there is no session
    pub fn ability(&self, held: Option<&[PermissionId]>) -> AbilitySet {
        ability::build(held, &self.catalog)
    }

    /// Tree pruned for `ability`
    pub fn filtered(&self, ability: &AbilitySet) -> Vec<NavNode> {
        filter_with(&self.tree, ability, self.policy)
    }

    /// Menu one identity is allowed to see
    pub fn menu_for(&self, held: Option<&[PermissionId]>) -> Vec<MenuItem> {
        project(&self.filtered(&self.ability(held)))
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn tree(&self) -> &[NavNode] {
        &self.tree
    }

    pub fn policy(&self) -> PrunePolicy {
        self.policy
    }

    /// Hex SHA-256 of the normalized definition
    pub fn version(&self) -> &str {
        &self.version
    }
}
