//! Picker option lists per suite.
//!
//! An option can be offered but disabled (see the disablement resolver) or
//! not offered at all; this module decides the latter.

use super::catalog_filter::{filter_roles, is_reserved};
use crate::models::{Context, PerSuite, Role, RoleCatalog, Suite, TenantLevel, has_any};
use crate::rules::names::{FACILITY_HF4_REPORT, PEER_SUPERVISOR, REPORT_ADMIN};

pub struct RoleOptionsResolver<'a> {
    catalog: &'a RoleCatalog,
    context: &'a Context,
}

impl<'a> RoleOptionsResolver<'a> {
    pub fn new(catalog: &'a RoleCatalog, context: &'a Context) -> Self {
        Self { catalog, context }
    }

    pub fn options(&self, suite: Suite, selection: &[Role]) -> Vec<Role> {
        let roles = self.catalog.roles(suite);
        let pickable = || roles.iter().filter(|role| !is_reserved(role));
        let mut options: Vec<Role> = match suite {
            Suite::Spice => filter_roles(roles, self.context, selection),
            Suite::Reports => {
                let peer_supervisor = has_any(selection, &[PEER_SUPERVISOR]);
                let hide_report_admin = self.context.is_community()
                    && self.context.tenant_level != Some(TenantLevel::Region);
                pickable()
                    .filter(|role| peer_supervisor || role.name != FACILITY_HF4_REPORT)
                    .filter(|role| !(hide_report_admin && role.name == REPORT_ADMIN))
                    .cloned()
                    .collect()
            }
            Suite::Insights => pickable().cloned().collect(),
        };
        sort_by_label(&mut options);
        options
    }

    pub fn resolve(&self, selection: &[Role]) -> PerSuite<Vec<Role>> {
        PerSuite::from_fn(|suite| self.options(suite, selection))
    }
}

/// Picker order: display label, then id so equal labels stay deterministic.
pub fn sort_by_label(roles: &mut [Role]) {
    roles.sort_by(|a, b| {
        a.display_label()
            .to_lowercase()
            .cmp(&b.display_label().to_lowercase())
            .then(a.id.cmp(&b.id))
    });
}
