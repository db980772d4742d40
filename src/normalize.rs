//! Reshape level-specific menu entries into the uniform [`NavNode`] tree.
//!
//! Each level type names its child list differently (`first_sub_items`,
//! `second_sub_items`, `third_sub_items`). [`LevelNode`] exposes them
//! uniformly so one recursive function can map any level. Nothing is dropped
//! or reordered. `NavNode` implements the trait too, so normalizing an
//! already-uniform tree returns an equal tree.

use crate::caps::Capability;
use crate::definition::{FirstSubItem, NavbarItem, SecondSubItem, ThirdSubItem};
use crate::tree::NavNode;

/// One node of some menu level
pub trait LevelNode {
    fn title(&self) -> &str;
    fn link(&self) -> Option<&str>;
    fn icon(&self) -> Option<&str> {
        None
    }
    fn description(&self) -> Option<&str> {
        None
    }
    fn permission(&self) -> Option<Capability>;
    /// This node's children, already normalized. `None` when the level
    /// declares no child list.
    fn normalized_children(&self) -> Option<Vec<NavNode>>;
}

/// Map a sequence of level nodes to uniform nodes, preserving order
pub fn normalize<N: LevelNode>(items: &[N]) -> Vec<NavNode> {
    items.iter().map(normalize_one).collect()
}

fn normalize_one<N: LevelNode>(item: &N) -> NavNode {
    NavNode {
        title: item.title().to_string(),
        link: item.link().map(str::to_string),
        icon: item.icon().map(str::to_string),
        description: item.description().map(str::to_string),
        permission: item.permission(),
        children: item.normalized_children(),
    }
}

impl LevelNode for NavbarItem {
    fn title(&self) -> &str {
        &self.title
    }
    fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }
    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
    fn permission(&self) -> Option<Capability> {
        self.permission
    }
    fn normalized_children(&self) -> Option<Vec<NavNode>> {
        self.first_sub_items.as_deref().map(normalize)
    }
}

impl LevelNode for FirstSubItem {
    fn title(&self) -> &str {
        &self.title
    }
    fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }
    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
    fn permission(&self) -> Option<Capability> {
        self.permission
    }
    fn normalized_children(&self) -> Option<Vec<NavNode>> {
        self.second_sub_items.as_deref().map(normalize)
    }
}

impl LevelNode for SecondSubItem {
    fn title(&self) -> &str {
        &self.title
    }
    fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }
    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
    fn permission(&self) -> Option<Capability> {
        self.permission
    }
    fn normalized_children(&self) -> Option<Vec<NavNode>> {
        self.third_sub_items.as_deref().map(normalize)
    }
}

impl LevelNode for ThirdSubItem {
    fn title(&self) -> &str {
        &self.title
    }
    fn link(&self) -> Option<&str> {
        Some(&self.href)
    }
    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
    fn permission(&self) -> Option<Capability> {
        self.permission
    }
    fn normalized_children(&self) -> Option<Vec<NavNode>> {
        None
    }
}

impl LevelNode for NavNode {
    fn title(&self) -> &str {
        &self.title
    }
    fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn permission(&self) -> Option<Capability> {
        self.permission
    }
    fn normalized_children(&self) -> Option<Vec<NavNode>> {
        self.children.as_deref().map(normalize)
    }
}
