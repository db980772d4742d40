//! Renderer-facing menu and the recursive rendering contract.
//!
//! [`project`] turns a filtered tree into [`MenuItem`]s: permissions are
//! gone, icons only survive at the top level, and `children` is present only
//! when something is left in it. [`render`] walks the items with an explicit
//! depth and hands each one to a [`MenuRenderer`]. Groups start collapsed;
//! expansion lives in [`ExpansionState`] and never feeds back into filtering.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::tree::NavNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,
}

impl MenuItem {
    /// Link target, `#` when the item has none
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }
}

/// Project a filtered tree into menu items
pub fn project(tree: &[NavNode]) -> Vec<MenuItem> {
    project_level(tree, 0)
}

fn project_level(nodes: &[NavNode], depth: usize) -> Vec<MenuItem> {
    nodes
        .iter()
        .map(|n| {
            let children = project_level(n.children(), depth + 1);
            MenuItem {
                title: n.title.clone(),
                link: n.link.clone(),
                icon: if depth == 0 { n.icon.clone() } else { None },
                description: n.description.clone(),
                children: (!children.is_empty()).then_some(children),
            }
        })
        .collect()
}

/// Which groups are open, keyed by the titles from the root down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashSet<Vec<String>>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.open.contains(&key(path))
    }

    pub fn expand<S: AsRef<str>>(&mut self, path: &[S]) {
        self.open.insert(key(path));
    }

    pub fn collapse<S: AsRef<str>>(&mut self, path: &[S]) {
        self.open.remove(&key(path));
    }

    /// Flip a group; returns whether it is now open
    pub fn toggle<S: AsRef<str>>(&mut self, path: &[S]) -> bool {
        let k = key(path);
        if !self.open.remove(&k) {
            self.open.insert(k);
            return true;
        }
        false
    }
}

fn key<S: AsRef<str>>(path: &[S]) -> Vec<String> {
    path.iter().map(|p| p.as_ref().to_owned()).collect()
}

/// Receives menu items in document order.
///
/// Depth 0 items are top-level entries (icon and tooltip); deeper items are
/// plain sub-entries. Implementations must not special-case titles.
pub trait MenuRenderer {
    type Output;

    fn leaf(&mut self, item: &MenuItem, depth: usize);
    fn open_group(&mut self, item: &MenuItem, depth: usize, expanded: bool);
    fn close_group(&mut self, _item: &MenuItem, _depth: usize, _expanded: bool) {}
    fn finish(self) -> Self::Output;
}

/// Walk `items`, descending only into expanded groups
pub fn render<R: MenuRenderer>(items: &[MenuItem], state: &ExpansionState, mut renderer: R) -> R::Output {
    let mut path = Vec::new();
    walk(items, 0, state, &mut path, &mut renderer);
    renderer.finish()
}

fn walk<'a, R: MenuRenderer>(
    items: &'a [MenuItem],
    depth: usize,
    state: &ExpansionState,
    path: &mut Vec<&'a str>,
    r: &mut R,
) {
    for item in items {
        path.push(&item.title);
        match &item.children {
            None => r.leaf(item, depth),
            Some(children) => {
                let expanded = state.is_expanded(path.as_slice());
                r.open_group(item, depth, expanded);
                if expanded {
                    walk(children, depth + 1, state, path, r);
                }
                r.close_group(item, depth, expanded);
            }
        }
        path.pop();
    }
}

/// Plain-text menu, one line per visible item
#[derive(Debug, Default)]
pub struct OutlineRenderer {
    out: String,
}

impl OutlineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn label(&mut self, item: &MenuItem, depth: usize) {
        if depth == 0 {
            let _ = write!(self.out, "[{}] {}", item.icon.as_deref().unwrap_or("-"), item.title);
        } else {
            let _ = write!(self.out, "{}- {}", "  ".repeat(depth), item.title);
        }
    }
}

impl MenuRenderer for OutlineRenderer {
    type Output = String;

    fn leaf(&mut self, item: &MenuItem, depth: usize) {
        self.label(item, depth);
        let _ = writeln!(self.out, " -> {}", item.href());
    }

    fn open_group(&mut self, item: &MenuItem, depth: usize, expanded: bool) {
        self.label(item, depth);
        let _ = writeln!(self.out, " {}", if expanded { "v" } else { ">" });
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Outline with every group expanded
pub fn outline(items: &[MenuItem]) -> String {
    let mut state = ExpansionState::new();
    expand_all(items, &mut Vec::new(), &mut state);
    render(items, &state, OutlineRenderer::new())
}

fn expand_all<'a>(items: &'a [MenuItem], path: &mut Vec<&'a str>, state: &mut ExpansionState) {
    for item in items {
        if let Some(children) = &item.children {
            path.push(&item.title);
            state.expand(path.as_slice());
            expand_all(children, path, state);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_only_at_top_level() {
        let tree = vec![NavNode::branch("Usuario", vec![NavNode::leaf("Mi Perfil", "/perfil").with_icon("user")]).with_icon("user")];
        let menu = project(&tree);
        assert_eq!(menu[0].icon.as_deref(), Some("user"));
        assert_eq!(menu[0].children.as_ref().unwrap()[0].icon, None);
    }

    #[test]
    fn emptied_branch_has_no_children_field() {
        let group = NavNode::branch("Grupo", vec![]);
        let menu = project(&[group]);
        assert!(menu[0].children.is_none());
        assert_eq!(menu[0].href(), "#");
    }

    #[test]
    fn toggle_flips() {
        let mut s = ExpansionState::new();
        assert!(!s.is_expanded(&["A"]));
        assert!(s.toggle(&["A"]));
        assert!(s.is_expanded(&["A"]));
        assert!(!s.is_expanded(&["A", "B"]));
        assert!(!s.toggle(&["A"]));
        assert!(!s.is_expanded(&["A"]));
    }

    #[test]
    fn paths_do_not_collide() {
        let mut s = ExpansionState::new();
        s.expand(&["A", "B"]);
        assert!(!s.is_expanded(&["A B"]));
        assert!(!s.is_expanded(&["AB"]));
    }

    #[test]
    fn separator_characters_in_titles_stay_distinct() {
        let mut s = ExpansionState::new();
        s.expand(&["A", "B"]);
        assert!(!s.is_expanded(&["A\u{1f}B"]));
        s.expand(&["A\u{1f}B"]);
        s.collapse(&["A", "B"]);
        assert!(s.is_expanded(&["A\u{1f}B"]));
    }
}
