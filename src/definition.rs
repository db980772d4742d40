//! Authoring format of the navigation menu.
//!
//! Definitions are written level by level: root items hold `firstSubItems`,
//! those hold `secondSubItems`, and those hold `thirdSubItems`, which are
//! always links. Each level is its own type so a definition cannot nest
//! deeper than four levels. [`crate::normalize`] turns this into the uniform
//! [`crate::tree::NavNode`] tree once at load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::caps::Capability;
use crate::error::{json_err, read_file, Result};

/// Built-in dashboard menu, versioned with the crate
const BUILTIN: &str = include_str!("../assets/navigation.json");

/// Root menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Capability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_sub_items: Option<Vec<FirstSubItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstSubItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Capability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_sub_items: Option<Vec<SecondSubItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondSubItem {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Capability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third_sub_items: Option<Vec<ThirdSubItem>>,
}

/// Deepest level; always a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdSubItem {
    pub title: String,
    pub description: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Capability>,
}

/// The dashboard menu shipped with the crate
pub fn builtin() -> Result<Vec<NavbarItem>> {
    from_json(BUILTIN)
}

pub fn from_json(json: &str) -> Result<Vec<NavbarItem>> {
    serde_json::from_str(json).map_err(json_err("navigation definition"))
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<NavbarItem>> {
    let path = path.as_ref();
    serde_json::from_str(&read_file(path)?).map_err(json_err(path.display().to_string()))
}
