//! Collection assembly: the role-by-module folder tree around rendered
//! requests.
//!
//! The outer level is one folder per role in [`Role::ORDER`]; inside each,
//! one folder per module in [`Module::ORDER`] that has at least one visible
//! request. The sentinel placeholder module is the exception: its folder is
//! always emitted, empty, with a fixed description. Role folders are never
//! omitted, even when every module under them is empty.

use serde::Serialize;

use crate::catalog::{Endpoint, Module, Role};
use crate::render::{render_request, RequestItem};

pub const COLLECTION_NAME: &str = "DemoApp Backend API (Role-based)";
pub const COLLECTION_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";
pub const COLLECTION_DESCRIPTION: &str =
    "Role-based Postman collection grouped by module. Use environment variables for baseUrl and tokens.";

#[derive(Debug, Clone, Serialize)]
pub struct CollectionInfo {
    pub name: &'static str,
    pub schema: &'static str,
    pub description: &'static str,
}

/// Root of the collection document.
#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub info: CollectionInfo,
    pub item: Vec<RoleFolder>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleFolder {
    pub name: &'static str,
    pub description: String,
    pub item: Vec<ModuleFolder>,
}

/// Field order mirrors the document: the sentinel's description comes after
/// `item`, matching where it is inserted.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleFolder {
    pub name: &'static str,
    pub item: Vec<RequestItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Assemble the full collection from the catalogue. Pure and deterministic;
/// request order inside a module folder is catalogue order.
pub fn build_collection(catalog: &[Endpoint]) -> Collection {
    let item = Role::ORDER
        .into_iter()
        .map(|role| role_folder(role, catalog))
        .collect();

    Collection {
        info: CollectionInfo {
            name: COLLECTION_NAME,
            schema: COLLECTION_SCHEMA,
            description: COLLECTION_DESCRIPTION,
        },
        item,
    }
}

fn role_folder(role: Role, catalog: &[Endpoint]) -> RoleFolder {
    let mut modules = Vec::new();
    for module in Module::ORDER {
        let items: Vec<RequestItem> = catalog
            .iter()
            .filter(|e| e.module == module && e.visible_to(role))
            .map(render_request)
            .collect();

        if !items.is_empty() || module.is_sentinel() {
            modules.push(ModuleFolder {
                name: module.label(),
                item: items,
                description: module.sentinel_description(),
            });
        }
    }

    RoleFolder {
        name: role.as_str(),
        description: format!("Requests available for role: {role}"),
        item: modules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ADMIN_ONLY, ALL, PATIENT_ONLY};
    use http::Method;

    fn endpoint(
        name: &'static str,
        module: Module,
        roles: &'static [crate::catalog::Role],
    ) -> Endpoint {
        Endpoint::new(name, module, Method::GET, "/api/x", roles)
    }

    #[test]
    fn four_role_folders_in_fixed_order() {
        let collection = build_collection(&[]);
        let names: Vec<_> = collection.item.iter().map(|f| f.name).collect();
        assert_eq!(names, ["ADMIN", "DOCTOR", "RECEPTIONIST", "PATIENT"]);
        for folder in &collection.item {
            assert_eq!(
                folder.description,
                format!("Requests available for role: {}", folder.name)
            );
        }
    }

    #[test]
    fn empty_catalog_still_emits_sentinel_folder() {
        let collection = build_collection(&[]);
        for role_folder in &collection.item {
            assert_eq!(role_folder.item.len(), 1);
            let sentinel = &role_folder.item[0];
            assert_eq!(sentinel.name, "SYSTEM");
            assert!(sentinel.item.is_empty());
            assert_eq!(sentinel.description, Some("Chua trien khai"));
        }
    }

    #[test]
    fn empty_module_folders_are_omitted() {
        let catalog = vec![endpoint("A", Module::Auth, ALL)];
        let collection = build_collection(&catalog);
        let admin = &collection.item[0];
        let names: Vec<_> = admin.item.iter().map(|f| f.name).collect();
        assert_eq!(names, ["AUTH", "SYSTEM"]);
    }

    #[test]
    fn role_filter_preserves_catalog_order() {
        let catalog = vec![
            endpoint("First", Module::User, ALL),
            endpoint("Admin only", Module::User, ADMIN_ONLY),
            endpoint("Second", Module::User, ALL),
        ];
        let collection = build_collection(&catalog);
        let admin_user: Vec<_> = collection.item[0].item[0].item.iter().map(|i| i.name).collect();
        assert_eq!(admin_user, ["First", "Admin only", "Second"]);
        let patient_user: Vec<_> = collection.item[3].item[0].item.iter().map(|i| i.name).collect();
        assert_eq!(patient_user, ["First", "Second"]);
    }

    #[test]
    fn module_folders_follow_display_order_not_insertion_order() {
        let catalog = vec![
            endpoint("Late module", Module::Payroll, ALL),
            endpoint("Early module", Module::Auth, ALL),
        ];
        let collection = build_collection(&catalog);
        let names: Vec<_> = collection.item[0].item.iter().map(|f| f.name).collect();
        assert_eq!(names, ["AUTH", "PAYROLL", "SYSTEM"]);
    }

    #[test]
    fn endpoint_appears_under_every_listed_role() {
        let catalog = vec![endpoint("Shared", Module::Search, ALL)];
        let collection = build_collection(&catalog);
        for role_folder in &collection.item {
            let found = role_folder
                .item
                .iter()
                .any(|m| m.item.iter().any(|i| i.name == "Shared"));
            assert!(found, "missing in {}", role_folder.name);
        }
    }

    #[test]
    fn patient_only_endpoint_hidden_from_other_roles() {
        let catalog = vec![endpoint("Private", Module::Patient, PATIENT_ONLY)];
        let collection = build_collection(&catalog);
        for role_folder in &collection.item {
            let present = role_folder
                .item
                .iter()
                .any(|m| m.item.iter().any(|i| i.name == "Private"));
            assert_eq!(present, role_folder.name == "PATIENT");
        }
    }

    #[test]
    fn assembly_is_idempotent() {
        let catalog = vec![
            endpoint("A", Module::Auth, ALL),
            endpoint("B", Module::Billing, ADMIN_ONLY),
        ];
        let first = serde_json::to_string(&build_collection(&catalog)).unwrap_or_default();
        let second = serde_json::to_string(&build_collection(&catalog)).unwrap_or_default();
        assert_eq!(first, second);
    }
}
