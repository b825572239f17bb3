//! Which catalog roles are selectable at all in a form-session context.
//!
//! Each role is run through an ordered list of branches; the first branch
//! whose guard applies decides whether the role is kept.

use crate::models::{Context, Role, Suite, TenantLevel, has_any};
use crate::rules::hierarchy;
use crate::rules::names::{
    FACILITY_HF4_REPORT, PEER_SUPERVISOR, RED_RISK, SUPER_ADMIN, is_facility_scoped,
    is_village_role,
};

/// Branch of the filter that decided a role's fate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBranch {
    Reserved,
    FacilityReportGate,
    FacilityScope,
    SiteUser,
    TenantHierarchy,
    AdminList,
    ReportSuite,
    OperationalDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDecision {
    pub branch: FilterBranch,
    pub keep: bool,
}

impl FilterDecision {
    fn new(branch: FilterBranch, keep: bool) -> Self {
        Self { branch, keep }
    }
}

pub struct RoleCatalogFilter<'a> {
    context: &'a Context,
    peer_supervisor_selected: bool,
}

impl<'a> RoleCatalogFilter<'a> {
    /// `selection` is every role currently picked on the row, across all suites.
    pub fn new(context: &'a Context, selection: &[Role]) -> Self {
        Self {
            context,
            peer_supervisor_selected: has_any(selection, &[PEER_SUPERVISOR]),
        }
    }

    pub fn decide(&self, role: &Role) -> FilterDecision {
        let ctx = self.context;
        let name = role.name.as_str();

        if is_reserved(role) {
            return FilterDecision::new(FilterBranch::Reserved, false);
        }

        if name == FACILITY_HF4_REPORT && !self.peer_supervisor_selected {
            return FilterDecision::new(FilterBranch::FacilityReportGate, false);
        }

        if ctx.is_hf_create || ctx.is_facility_context() {
            let keep = hierarchy::allowed_at(TenantLevel::HealthFacility, name)
                && !(ctx.is_hf_create && is_village_role(name));
            return FilterDecision::new(FilterBranch::FacilityScope, keep);
        }

        if ctx.is_site_user {
            let keep = if ctx.is_community() {
                is_facility_scoped(name) || name == SUPER_ADMIN
            } else {
                !role.is_admin_suite()
            };
            return FilterDecision::new(FilterBranch::SiteUser, keep);
        }

        if let Some(level) = ctx.tenant_level {
            return FilterDecision::new(
                FilterBranch::TenantHierarchy,
                hierarchy::allowed_at(level, name),
            );
        }

        if ctx.is_admin_list {
            return FilterDecision::new(FilterBranch::AdminList, true);
        }

        if role.suite() == Some(Suite::Reports) && (!ctx.is_community() || ctx.is_region_create) {
            return FilterDecision::new(FilterBranch::ReportSuite, true);
        }

        FilterDecision::new(
            FilterBranch::OperationalDefault,
            role.suite() == Some(Suite::Spice),
        )
    }

    pub fn filter(&self, roles: &[Role]) -> Vec<Role> {
        roles
            .iter()
            .filter(|role| {
                let decision = self.decide(role);
                tracing::trace!(
                    role = %role.name,
                    branch = ?decision.branch,
                    keep = decision.keep,
                    "Catalog filter decision"
                );
                decision.keep
            })
            .cloned()
            .collect()
    }
}

/// Internal roles (no display name) and `RED_RISK` are never pickable, in any suite.
pub fn is_reserved(role: &Role) -> bool {
    role.is_internal() || role.name == RED_RISK
}

/// Roles of `roles` that are selectable in `context` given the row's `selection`.
pub fn filter_roles(roles: &[Role], context: &Context, selection: &[Role]) -> Vec<Role> {
    RoleCatalogFilter::new(context, selection).filter(roles)
}
