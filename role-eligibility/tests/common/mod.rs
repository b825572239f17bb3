//! Shared fixtures for role-eligibility integration tests.

#![allow(dead_code)]

use role_eligibility::{
    Context, DeploymentMode, EligibilityEngine, Role, RoleCatalog, RoleId, Suite, TenantLevel,
};

/// Catalog payload in the shape the role catalog endpoint serves.
pub const CATALOG_JSON: &str = r#"{
    "SPICE": [
        {"id": 1,  "name": "SUPER_ADMIN",                "displayName": "Super Admin",                "suiteAccessName": "admin"},
        {"id": 2,  "name": "REGION_ADMIN",               "displayName": "Region Admin",               "suiteAccessName": "admin"},
        {"id": 3,  "name": "DISTRICT_ADMIN",             "displayName": "District Admin",             "suiteAccessName": "admin"},
        {"id": 4,  "name": "CHIEFDOM_ADMIN",             "displayName": "Chiefdom Admin",             "suiteAccessName": "admin"},
        {"id": 5,  "name": "HEALTH_FACILITY_ADMIN",      "displayName": "Health Facility Admin",      "suiteAccessName": "admin"},
        {"id": 6,  "name": "COMMUNITY_HEALTH_WORKER",    "displayName": "Community Health Worker",    "suiteAccessName": "mob", "appTypes": ["COMMUNITY"]},
        {"id": 7,  "name": "COMMUNITY_HEALTH_PROMOTER",  "displayName": "Community Health Promoter",  "suiteAccessName": "mob", "appTypes": ["COMMUNITY"]},
        {"id": 8,  "name": "COMMUNITY_HEALTH_ASSISTANT", "displayName": "Community Health Assistant", "suiteAccessName": "mob", "appTypes": ["COMMUNITY"]},
        {"id": 9,  "name": "PEER_SUPERVISOR",            "displayName": "Peer Supervisor",            "suiteAccessName": "mob", "appTypes": ["COMMUNITY"]},
        {"id": 10, "name": "PROVIDER",                   "displayName": "Provider",                   "suiteAccessName": "mob"},
        {"id": 11, "name": "PHYSICIAN_PRESCRIBER",       "displayName": "Physician Prescriber",       "suiteAccessName": "mob"},
        {"id": 12, "name": "NURSE",                      "displayName": "Nurse",                      "suiteAccessName": "mob"},
        {"id": 13, "name": "LAB_TECHNICIAN",             "displayName": "Lab Technician",             "suiteAccessName": "web"},
        {"id": 14, "name": "PHARMACIST",                 "displayName": "Pharmacist",                 "suiteAccessName": "web"},
        {"id": 15, "name": "HRIO",                       "displayName": "HRIO",                       "suiteAccessName": "web"},
        {"id": 16, "name": "RED_RISK",                   "displayName": "Red Risk",                   "suiteAccessName": "mob"},
        {"id": 17, "name": "SYSTEM_SYNC"}
    ],
    "REPORTS": [
        {"id": 30, "name": "REPORT_ADMIN",          "displayName": "Report Admin",          "suiteAccessName": "report"},
        {"id": 31, "name": "FACILITY_REPORT_ADMIN", "displayName": "Facility Report Admin", "suiteAccessName": "report"},
        {"id": 32, "name": "FACILITY_HF4_REPORT",   "displayName": "Facility HF4 Report",   "suiteAccessName": "report"}
    ],
    "INSIGHTS": [
        {"id": 40, "name": "INSIGHTS_USER",  "displayName": "Insights User",  "suiteAccessName": "insights"},
        {"id": 41, "name": "INSIGHTS_ADMIN", "displayName": "Insights Admin", "suiteAccessName": "insights"}
    ]
}"#;

pub fn catalog() -> RoleCatalog {
    RoleCatalog::from_json(CATALOG_JSON).expect("fixture catalog parses")
}

pub fn role(suite: Suite, name: &str) -> Role {
    catalog()
        .find(suite, name)
        .cloned()
        .unwrap_or_else(|| panic!("{name} missing from fixture"))
}

pub fn spice(name: &str) -> Role {
    role(Suite::Spice, name)
}

pub fn reports(name: &str) -> Role {
    role(Suite::Reports, name)
}

pub fn insights(name: &str) -> Role {
    role(Suite::Insights, name)
}

/// Every role a picker could ever offer, across suites.
pub fn all_roles() -> Vec<Role> {
    let catalog = catalog();
    Suite::ALL
        .iter()
        .flat_map(|suite| catalog.roles(*suite).to_vec())
        .collect()
}

pub fn community_admin_list() -> Context {
    Context::builder(DeploymentMode::Community)
        .admin_list(true)
        .build()
}

pub fn non_community_admin_list() -> Context {
    Context::builder(DeploymentMode::NonCommunity)
        .admin_list(true)
        .build()
}

/// Plain, site-user, admin-list, creation and every tenant-level context, in
/// both deployment modes.
pub fn form_contexts() -> Vec<Context> {
    let mut contexts = Vec::new();
    for mode in [DeploymentMode::Community, DeploymentMode::NonCommunity] {
        contexts.push(Context::builder(mode).build());
        contexts.push(Context::builder(mode).site_user(true).build());
        contexts.push(Context::builder(mode).admin_list(true).build());
        contexts.push(Context::builder(mode).hf_create(true).build());
        contexts.push(Context::builder(mode).region_create(true).build());
        for level in tenant_levels().into_iter().flatten() {
            contexts.push(Context::builder(mode).tenant_level(Some(level)).build());
        }
    }
    contexts
}

pub fn engine(context: Context) -> EligibilityEngine {
    EligibilityEngine::new(context, catalog())
}

pub fn option_names(roles: &[Role]) -> Vec<&str> {
    roles.iter().map(|r| r.name.as_str()).collect()
}

pub fn tenant_levels() -> Vec<Option<TenantLevel>> {
    vec![
        None,
        Some(TenantLevel::Region),
        Some(TenantLevel::District),
        Some(TenantLevel::Chiefdom),
        Some(TenantLevel::HealthFacility),
    ]
}

pub fn id_of(suite: Suite, name: &str) -> RoleId {
    role(suite, name).id
}
