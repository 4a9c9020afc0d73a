use postgen::assemble::{build_collection, Collection};
use postgen::build_catalog;
use postgen::catalog::{Module, Role};

fn full() -> Collection {
    build_collection(&build_catalog())
}

#[test]
fn collection_info_is_fixed() {
    let collection = full();
    assert_eq!(collection.info.name, "DemoApp Backend API (Role-based)");
    assert_eq!(
        collection.info.schema,
        "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
    );
    assert!(collection.info.description.starts_with("Role-based Postman collection"));
}

#[test]
fn role_folders_are_complete_and_ordered() {
    let collection = full();
    let names: Vec<_> = collection.item.iter().map(|f| f.name).collect();
    assert_eq!(names, ["ADMIN", "DOCTOR", "RECEPTIONIST", "PATIENT"]);
}

#[test]
fn every_role_folder_ends_with_the_sentinel() {
    let collection = full();
    for role_folder in &collection.item {
        let last = role_folder.item.last().expect("role folder has modules");
        assert_eq!(last.name, "SYSTEM");
        assert!(last.item.is_empty());
        assert_eq!(last.description, Some("Chua trien khai"));
    }
}

#[test]
fn only_the_sentinel_folder_may_be_empty() {
    let collection = full();
    for role_folder in &collection.item {
        for module_folder in &role_folder.item {
            if module_folder.name != "SYSTEM" {
                assert!(
                    !module_folder.item.is_empty(),
                    "empty folder {} under {}",
                    module_folder.name,
                    role_folder.name
                );
            }
        }
    }
}

#[test]
fn module_folders_follow_the_display_order() {
    let collection = full();
    let order: Vec<&str> = Module::ORDER.iter().map(|m| m.label()).collect();
    for role_folder in &collection.item {
        let mut cursor = 0;
        for module_folder in &role_folder.item {
            let pos = order
                .iter()
                .position(|label| *label == module_folder.name)
                .expect("known module label");
            assert!(pos >= cursor, "out of order in {}", role_folder.name);
            cursor = pos;
        }
    }
}

#[test]
fn request_counts_match_role_visibility() {
    let catalog = build_catalog();
    let collection = build_collection(&catalog);
    for (folder, role) in collection.item.iter().zip(Role::ORDER) {
        let rendered: usize = folder.item.iter().map(|m| m.item.len()).sum();
        let visible = catalog.iter().filter(|e| e.visible_to(role)).count();
        assert_eq!(rendered, visible, "count mismatch for {role}");
    }
}

#[test]
fn patient_auth_folder_matches_catalog_order() {
    let collection = full();
    let patient = &collection.item[3];
    let auth = patient
        .item
        .iter()
        .find(|m| m.name == "AUTH")
        .expect("patient AUTH folder");
    let names: Vec<_> = auth.item.iter().map(|i| i.name).collect();
    assert_eq!(
        names,
        [
            "Register",
            "Login",
            "Refresh token",
            "Logout",
            "Forgot password",
            "Reset password",
            "OAuth - Google Login",
            "OAuth - Google Callback",
            "OAuth - Failure",
        ]
    );
}

#[test]
fn admin_only_modules_are_absent_for_patients() {
    let collection = full();
    let patient = &collection.item[3];
    let names: Vec<_> = patient.item.iter().map(|f| f.name).collect();
    assert!(!names.contains(&"PERMISSION"));
    assert!(!names.contains(&"SEARCH"));
}

#[test]
fn serialized_collection_is_byte_stable() {
    let catalog = build_catalog();
    let first = serde_json::to_string_pretty(&build_collection(&catalog)).expect("serialize");
    let second = serde_json::to_string_pretty(&build_collection(&catalog)).expect("serialize");
    assert_eq!(first, second);
}
