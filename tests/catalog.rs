//! Permission catalog loading tests

use std::io::Write;

use navcap::{Action, Capability, NavError, PermissionCatalog, Subject};
use tempfile::NamedTempFile;

#[test]
fn json_catalog_loads() {
    let catalog = PermissionCatalog::from_json(
        r#"[
            {"id": 1, "action": "manage", "subject": "all"},
            {"id": 12, "action": "read", "subject": "MtBusinessUnit"},
            {"id": 13, "action": "delete", "subject": "MtBusinessUnit"}
        ]"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.resolve(1), Some(Capability::manage(Subject::All)));
    assert_eq!(catalog.resolve(12), Some(Capability::read(Subject::MtBusinessUnit)));
    assert_eq!(catalog.resolve(13), Some(Capability::new(Action::Delete, Subject::MtBusinessUnit)));
    assert_eq!(catalog.resolve(14), None);
}

#[test]
fn duplicate_ids_rejected() {
    let err = PermissionCatalog::from_json(
        r#"[{"id": 5, "action": "read", "subject": "User"}, {"id": 5, "action": "read", "subject": "Rol"}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, NavError::DuplicatePermission(5)));
}

#[test]
fn unknown_names_rejected() {
    assert!(PermissionCatalog::from_json(r#"[{"id": 1, "action": "fly", "subject": "User"}]"#).is_err());
    assert!(PermissionCatalog::from_json(r#"[{"id": 1, "action": "read", "subject": "Plane"}]"#).is_err());
}

#[test]
fn empty_catalog_is_valid() {
    let catalog = PermissionCatalog::from_json("[]").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.resolve(1), None);
}

#[test]
fn catalog_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id": 3, "action": "read", "subject": "Projects"}}]"#).unwrap();

    let catalog = PermissionCatalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.resolve(3), Some(Capability::read(Subject::Projects)));
}

#[test]
fn missing_file_is_io_error() {
    let err = PermissionCatalog::from_path("/no/such/catalog.json").unwrap_err();
    assert!(matches!(err, NavError::Io { .. }));
}

/// The builtin catalog serializes back into a loadable file
#[test]
fn builtin_survives_a_trip_through_json() {
    let builtin = PermissionCatalog::builtin();
    let rows: Vec<_> = builtin.iter().collect();
    let json = serde_json::to_string(&rows).unwrap();
    assert_eq!(PermissionCatalog::from_json(&json).unwrap(), builtin);
}
