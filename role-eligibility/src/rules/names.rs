//! Role business keys and the groupings the rules are written against.

pub const SUPER_ADMIN: &str = "SUPER_ADMIN";
pub const REGION_ADMIN: &str = "REGION_ADMIN";
pub const DISTRICT_ADMIN: &str = "DISTRICT_ADMIN";
pub const CHIEFDOM_ADMIN: &str = "CHIEFDOM_ADMIN";
pub const HEALTH_FACILITY_ADMIN: &str = "HEALTH_FACILITY_ADMIN";

pub const COMMUNITY_HEALTH_WORKER: &str = "COMMUNITY_HEALTH_WORKER";
pub const COMMUNITY_HEALTH_PROMOTER: &str = "COMMUNITY_HEALTH_PROMOTER";
pub const COMMUNITY_HEALTH_ASSISTANT: &str = "COMMUNITY_HEALTH_ASSISTANT";
pub const PEER_SUPERVISOR: &str = "PEER_SUPERVISOR";

pub const PROVIDER: &str = "PROVIDER";
pub const PHYSICIAN_PRESCRIBER: &str = "PHYSICIAN_PRESCRIBER";
pub const NURSE: &str = "NURSE";
pub const LAB_TECHNICIAN: &str = "LAB_TECHNICIAN";
pub const PHARMACIST: &str = "PHARMACIST";
pub const HRIO: &str = "HRIO";

/// Marker role for elevated-risk accounts; never offered in a picker.
pub const RED_RISK: &str = "RED_RISK";

pub const REPORT_ADMIN: &str = "REPORT_ADMIN";
pub const FACILITY_REPORT_ADMIN: &str = "FACILITY_REPORT_ADMIN";
/// Facility + HF4 combination report role.
pub const FACILITY_HF4_REPORT: &str = "FACILITY_HF4_REPORT";

pub const INSIGHTS_USER: &str = "INSIGHTS_USER";
pub const INSIGHTS_ADMIN: &str = "INSIGHTS_ADMIN";

pub const ADMIN_ROLES: &[&str] = &[
    SUPER_ADMIN,
    REGION_ADMIN,
    DISTRICT_ADMIN,
    CHIEFDOM_ADMIN,
    HEALTH_FACILITY_ADMIN,
];

pub const HIERARCHY_ADMIN_ROLES: &[&str] = &[REGION_ADMIN, DISTRICT_ADMIN, CHIEFDOM_ADMIN];

/// Village-based roles: need village and supervisor assignment.
pub const VILLAGE_ROLES: &[&str] = &[COMMUNITY_HEALTH_WORKER, COMMUNITY_HEALTH_PROMOTER];

pub const CHA_ROLES: &[&str] = &[COMMUNITY_HEALTH_ASSISTANT];

pub const CLINICAL_ROLES: &[&str] = &[
    PROVIDER,
    PHYSICIAN_PRESCRIBER,
    NURSE,
    LAB_TECHNICIAN,
    PHARMACIST,
    HRIO,
];

pub const FACILITY_REPORT_ROLES: &[&str] = &[FACILITY_REPORT_ADMIN, FACILITY_HF4_REPORT];

pub const INSIGHTS_USER_ROLES: &[&str] = &[INSIGHTS_USER];

/// SPICE roles whose permissions are bound to one facility, so the form
/// must ask which one.
pub const SPICE_FACILITY_PICKER_ROLES: &[&str] = &[
    PROVIDER,
    PHYSICIAN_PRESCRIBER,
    NURSE,
    LAB_TECHNICIAN,
    PHARMACIST,
    HRIO,
    COMMUNITY_HEALTH_ASSISTANT,
    PEER_SUPERVISOR,
    HEALTH_FACILITY_ADMIN,
];

pub fn is_village_role(name: &str) -> bool {
    VILLAGE_ROLES.contains(&name)
}

/// Roles valid at health-facility scope, across all three suites.
pub fn is_facility_scoped(name: &str) -> bool {
    is_village_role(name)
        || SPICE_FACILITY_PICKER_ROLES.contains(&name)
        || FACILITY_REPORT_ROLES.contains(&name)
        || INSIGHTS_USER_ROLES.contains(&name)
}
