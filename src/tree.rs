//! Uniform navigation tree
//!
//! Every level of the menu uses the same [`NavNode`] shape; depth is only a
//! runtime quantity. The tree is loaded once and never mutated; filtering
//! produces new trees.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::caps::Capability;
use crate::constants::MAX_DEPTH;
use crate::error::{json_err, NavError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavNode {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Capability the viewer needs to see this node and anything below it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Capability>,
    /// `Some(vec![])` only appears in filtered output, never in a valid definition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavNode>>,
}

impl NavNode {
    pub fn leaf(title: impl Into<String>, link: impl Into<String>) -> Self {
        NavNode {
            title: title.into(),
            link: Some(link.into()),
            icon: None,
            description: None,
            permission: None,
            children: None,
        }
    }

    pub fn branch(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        NavNode {
            title: title.into(),
            link: None,
            icon: None,
            description: None,
            permission: None,
            children: Some(children),
        }
    }

    pub fn requires(mut self, capability: Capability) -> Self {
        self.permission = Some(capability);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Children as a slice; empty for leaves
    #[inline]
    pub fn children(&self) -> &[NavNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including itself
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(NavNode::size).sum::<usize>()
    }

    /// Levels in this subtree, a leaf counting as one
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(NavNode::depth).max().unwrap_or(0)
    }
}

/// Number of nodes across a forest
pub fn count(tree: &[NavNode]) -> usize {
    tree.iter().map(NavNode::size).sum()
}

/// Check a definition is well formed: unique sibling titles, at most
/// `MAX_DEPTH` levels, no empty child lists, no leaf without a link.
pub fn validate(tree: &[NavNode]) -> Result<()> {
    check_level(tree, &mut Vec::new())
}

fn check_level<'a>(nodes: &'a [NavNode], path: &mut Vec<&'a str>) -> Result<()> {
    let mut seen = HashSet::with_capacity(nodes.len());
    for node in nodes {
        path.push(&node.title);
        if !seen.insert(node.title.as_str()) {
            return Err(NavError::DuplicateTitle { path: path.join(" / ") });
        }
        if path.len() > MAX_DEPTH {
            return Err(NavError::TooDeep { path: path.join(" / "), depth: path.len(), max: MAX_DEPTH });
        }
        match &node.children {
            Some(children) if children.is_empty() => {
                return Err(NavError::EmptyBranch { path: path.join(" / ") });
            }
            Some(children) => check_level(children, path)?,
            None if node.link.is_none() => {
                return Err(NavError::DeadLeaf { path: path.join(" / ") });
            }
            None => {}
        }
        path.pop();
    }
    Ok(())
}

/// SHA-256 of the tree's JSON form, hex encoded. Identifies a definition version.
pub fn fingerprint(tree: &[NavNode]) -> Result<String> {
    let bytes = serde_json::to_vec(tree).map_err(json_err("navigation tree"))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}
