//! Static definition checks
//!
//! Malformed definitions are configuration defects; these tests are where
//! they get caught for the built-in menu.

use navcap::{definition, fingerprint, normalize, tree, validate, Capability, NavError, NavNode, Subject, MAX_DEPTH};

#[test]
fn builtin_definition_is_well_formed() {
    let tree = normalize(&definition::builtin().unwrap());
    validate(&tree).unwrap();
    assert!(tree.iter().all(|n| n.depth() <= MAX_DEPTH));
    assert_eq!(tree.iter().map(NavNode::depth).max(), Some(MAX_DEPTH));
}

#[test]
fn builtin_top_level_order() {
    let items = definition::builtin().unwrap();
    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Panel", "Datos Generales", "Presupuestos", "Catálogos Globales", "Consultas y Reportes", "Usuario", "Documentación"]
    );
}

#[test]
fn builtin_gates() {
    let items = definition::builtin().unwrap();
    let gate = |title: &str| items.iter().find(|i| i.title == title).unwrap().permission;
    assert_eq!(gate("Panel"), Some(Capability::read(Subject::User)));
    assert_eq!(gate("Presupuestos"), Some(Capability::read(Subject::Projects)));
    assert_eq!(gate("Documentación"), None);
    assert_eq!(gate("Usuario"), None);
}

#[test]
fn fingerprint_is_stable_across_loads() {
    let a = fingerprint(&normalize(&definition::builtin().unwrap())).unwrap();
    let b = fingerprint(&normalize(&definition::builtin().unwrap())).unwrap();
    assert_eq!(a, b);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn empty_declared_children_is_a_defect() {
    let items = definition::from_json(r#"[{"title": "Usuario", "firstSubItems": []}]"#).unwrap();
    let err = validate(&normalize(&items)).unwrap_err();
    assert!(matches!(err, NavError::EmptyBranch { ref path } if path == "Usuario"));
}

#[test]
fn duplicate_nested_titles_are_a_defect() {
    let items = definition::from_json(
        r#"[{"title": "Usuario", "firstSubItems": [
            {"title": "Mi Perfil", "description": "", "href": "/a"},
            {"title": "Mi Perfil", "description": "", "href": "/b"}
        ]}]"#,
    )
    .unwrap();
    let err = validate(&normalize(&items)).unwrap_err();
    assert_eq!(err.to_string(), "duplicate sibling title at Usuario / Mi Perfil");
}

#[test]
fn root_without_link_or_children_is_a_defect() {
    let items = definition::from_json(r#"[{"title": "Huérfano"}]"#).unwrap();
    assert!(matches!(validate(&normalize(&items)), Err(NavError::DeadLeaf { .. })));
}

#[test]
fn count_covers_all_levels() {
    let t = vec![NavNode::branch("a", vec![NavNode::leaf("b", "/b"), NavNode::branch("c", vec![NavNode::leaf("d", "/d")])])];
    assert_eq!(tree::count(&t), 4);
}
