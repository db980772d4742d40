//! Permission catalog: numeric permission ids issued by the identity backend,
//! resolved to the capability each one grants.
//!
//! A catalog is built once at startup and read-only afterwards. Ids missing
//! from it are not errors; they simply resolve to nothing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::caps::{Action, Capability, Subject};
use crate::constants::{MANAGE_ALL_ID, READ_ALL_ID, SUBJECT_ID_BASE};
use crate::error::{json_err, read_file, NavError, Result};

/// Opaque id the identity backend hands out
pub type PermissionId = i64;

/// One catalog row as it appears in a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: PermissionId,
    pub action: Action,
    pub subject: Subject,
}

impl CatalogEntry {
    pub fn capability(&self) -> Capability {
        Capability::new(self.action, self.subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionCatalog {
    entries: BTreeMap<PermissionId, Capability>,
}

impl PermissionCatalog {
    /// Catalog covering `read` and `manage` on every subject, plus the wildcards
    pub fn builtin() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(MANAGE_ALL_ID, Capability::manage(Subject::All));
        entries.insert(READ_ALL_ID, Capability::read(Subject::All));
        for (i, subject) in Subject::CONCRETE.iter().enumerate() {
            let read = builtin_id(i);
            entries.insert(read, Capability::read(*subject));
            entries.insert(read + 1, Capability::manage(*subject));
        }
        PermissionCatalog { entries }
    }

    /// Build a catalog from rows; a repeated id is rejected
    pub fn from_entries(rows: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for row in rows {
            if entries.insert(row.id, row.capability()).is_some() {
                return Err(NavError::DuplicatePermission(row.id));
            }
        }
        Ok(PermissionCatalog { entries })
    }

    /// Parse `[{"id": 1, "action": "read", "subject": "User"}, ...]`
    pub fn from_json(json: &str) -> Result<Self> {
        let rows: Vec<CatalogEntry> = serde_json::from_str(json).map_err(json_err("permission catalog"))?;
        Self::from_entries(rows)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rows: Vec<CatalogEntry> =
            serde_json::from_str(&read_file(path)?).map_err(json_err(path.display().to_string()))?;
        Self::from_entries(rows)
    }

    /// Capability granted by `id`, if the catalog knows it
    #[inline]
    pub fn resolve(&self, id: PermissionId) -> Option<Capability> {
        self.entries.get(&id).copied()
    }

    /// Rows in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = CatalogEntry> + '_ {
        self.entries.iter().map(|(id, c)| CatalogEntry { id: *id, action: c.action, subject: c.subject })
    }

    /// First id granting exactly `capability`
    pub fn id_of(&self, capability: Capability) -> Option<PermissionId> {
        self.entries.iter().find(|(_, c)| **c == capability).map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[inline]
fn builtin_id(position: usize) -> PermissionId {
    SUBJECT_ID_BASE + 2 * position as PermissionId
}
