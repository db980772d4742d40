//! navcap - Capability-gated navigation menus
//!
//! Permission ids held by an identity resolve through a [`PermissionCatalog`]
//! into an [`AbilitySet`] of `(action, subject)` capabilities. The navigation
//! definition is normalized once into a uniform [`NavNode`] tree, pruned per
//! ability set, and projected into [`MenuItem`]s for a recursive renderer.
//!
//! ```
//! use navcap::{Navigator, Subject, Capability};
//!
//! let nav = Navigator::builtin().unwrap();
//! // No session: only ungated entries remain
//! let public = nav.menu_for(None);
//! assert!(public.iter().any(|m| m.title == "Documentación"));
//! assert!(public.iter().all(|m| m.title != "Panel"));
//!
//! let id = nav.catalog().id_of(Capability::read(Subject::User)).unwrap();
//! assert!(nav.menu_for(Some(&[id])).iter().any(|m| m.title == "Panel"));
//! ```

pub mod ability;
pub mod caps;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod definition;
pub mod error;
pub mod filter;
pub mod menu;
pub mod navigator;
pub mod normalize;
pub mod tree;

pub use ability::{build, AbilityBuilder, AbilitySet};
pub use caps::{Action, Capability, Subject};
pub use catalog::{CatalogEntry, PermissionCatalog, PermissionId};
pub use config::{NavConfig, ServerConfig};
pub use constants::*;
pub use definition::{FirstSubItem, NavbarItem, SecondSubItem, ThirdSubItem};
pub use error::{NavError, Result};
pub use filter::{filter, filter_with, PrunePolicy};
pub use menu::{outline, project, render, ExpansionState, MenuItem, MenuRenderer, OutlineRenderer};
pub use navigator::Navigator;
pub use normalize::{normalize, LevelNode};
pub use tree::{fingerprint, validate, NavNode};
