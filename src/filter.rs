//! Capability-gated pruning of the navigation tree.
//!
//! A node whose permission the viewer lacks is removed together with its
//! whole subtree, without looking at the descendants. Survivors keep their
//! original sibling order. The input is never modified.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::ability::AbilitySet;
use crate::tree::NavNode;

/// What to do with a branch whose children were all pruned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrunePolicy {
    /// Keep it as a childless item; only capability checks remove nodes
    #[default]
    KeepEmptyBranches,
    /// Also remove it, unless it carries its own link
    DropEmptyBranches,
}

/// Prune `tree` for `ability`, keeping emptied branches
pub fn filter(tree: &[NavNode], ability: &AbilitySet) -> Vec<NavNode> {
    filter_with(tree, ability, PrunePolicy::default())
}

pub fn filter_with(tree: &[NavNode], ability: &AbilitySet, policy: PrunePolicy) -> Vec<NavNode> {
    tree.iter().filter_map(|node| prune(node, ability, policy)).collect()
}

fn prune(node: &NavNode, ability: &AbilitySet, policy: PrunePolicy) -> Option<NavNode> {
    if let Some(cap) = node.permission {
        if !ability.allows(cap) {
            trace!(title = %node.title, required = %cap, "pruned");
            return None;
        }
    }

    let children = node.children.as_deref().map(|c| filter_with(c, ability, policy));
    let emptied = matches!(&children, Some(c) if c.is_empty()) && !node.children().is_empty();
    if emptied && policy == PrunePolicy::DropEmptyBranches && node.link.is_none() {
        trace!(title = %node.title, "dropped emptied branch");
        return None;
    }

    Some(NavNode {
        title: node.title.clone(),
        link: node.link.clone(),
        icon: node.icon.clone(),
        description: node.description.clone(),
        permission: node.permission,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityBuilder;
    use crate::caps::{Action, Capability, Subject};

    fn reader(subjects: &[Subject]) -> AbilitySet {
        let mut b = AbilityBuilder::new();
        for s in subjects {
            b.can(Action::Read, *s);
        }
        b.build()
    }

    #[test]
    fn gated_leaf_removed_ungated_kept() {
        let tree = vec![
            NavNode::leaf("Panel", "/dashboard").requires(Capability::read(Subject::User)),
            NavNode::leaf("Docs", "/docs"),
        ];
        assert_eq!(filter(&tree, &AbilitySet::deny_all()), vec![NavNode::leaf("Docs", "/docs")]);
    }

    #[test]
    fn policies_differ_only_on_emptied_branches() {
        let tree = vec![
            NavNode::branch("Grupo", vec![NavNode::leaf("Oculto", "/x").requires(Capability::read(Subject::Rol))]),
            NavNode::leaf("Docs", "/docs"),
        ];
        let none = AbilitySet::default();

        let kept = filter_with(&tree, &none, PrunePolicy::KeepEmptyBranches);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].children, Some(vec![]));

        let dropped = filter_with(&tree, &none, PrunePolicy::DropEmptyBranches);
        assert_eq!(dropped, vec![NavNode::leaf("Docs", "/docs")]);

        let all = filter_with(&tree, &reader(&[Subject::Rol]), PrunePolicy::DropEmptyBranches);
        assert_eq!(all, tree);
    }

    #[test]
    fn emptied_branch_with_link_survives_drop_policy() {
        let mut group = NavNode::branch("Grupo", vec![NavNode::leaf("Oculto", "/x").requires(Capability::read(Subject::Rol))]);
        group.link = Some("/grupo".into());
        let out = filter_with(&[group], &AbilitySet::default(), PrunePolicy::DropEmptyBranches);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].children(), &[] as &[NavNode]);
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        let p: PrunePolicy = serde_json::from_str(r#""drop-empty-branches""#).unwrap();
        assert_eq!(p, PrunePolicy::DropEmptyBranches);
        assert_eq!(PrunePolicy::default(), PrunePolicy::KeepEmptyBranches);
    }
}
