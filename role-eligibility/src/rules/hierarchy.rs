//! Tenant hierarchy table: which role names a tenant level may hand out.
//!
//! Membership is cumulative from the facility upwards, so a region may
//! grant everything a district can, and so on.

use super::names::*;
use crate::models::TenantLevel;

/// Names introduced at `level` itself (facility-scoped roles are checked separately).
fn own_names(level: TenantLevel) -> &'static [&'static str] {
    match level {
        TenantLevel::HealthFacility => &[],
        TenantLevel::Chiefdom => &[CHIEFDOM_ADMIN],
        TenantLevel::District => &[DISTRICT_ADMIN],
        TenantLevel::Region => &[REGION_ADMIN, REPORT_ADMIN, INSIGHTS_ADMIN],
    }
}

pub fn allowed_at(level: TenantLevel, name: &str) -> bool {
    if is_facility_scoped(name) {
        return true;
    }
    TenantLevel::ASCENDING
        .iter()
        .take_while(|l| l.rank() <= level.rank())
        .any(|l| own_names(*l).contains(&name))
}
