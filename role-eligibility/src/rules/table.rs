//! Declarative trigger → effect table.
//!
//! Each entry names the roles that trigger it and, per suite, the role names
//! that stay *valid* while a trigger is selected. Everything else the suite
//! offers becomes disabled. Entries are never prioritised: every entry that
//! fires contributes, and the resolver unions the results.

use super::names::*;
use crate::models::{Context, PerSuite, Role, Suite};
use std::fmt;

/// Valid-set computed from the session context and the row's full selection.
pub type ValidRoleFn = fn(&Context, &[Role]) -> Vec<&'static str>;

#[derive(Clone, Copy)]
pub enum ValidRoles {
    /// The entry says nothing about this suite.
    Unconstrained,
    /// The entry explicitly leaves the whole suite enabled.
    AllowAll,
    /// Only these names stay enabled; an empty list disables the suite.
    Only(&'static [&'static str]),
    Dynamic(ValidRoleFn),
}

impl ValidRoles {
    /// `None` when nothing in the suite is disabled by this entry.
    pub fn allowed(&self, context: &Context, selection: &[Role]) -> Option<Vec<&'static str>> {
        match self {
            ValidRoles::Unconstrained | ValidRoles::AllowAll => None,
            ValidRoles::Only(names) => Some(names.to_vec()),
            ValidRoles::Dynamic(f) => Some(f(context, selection)),
        }
    }
}

impl fmt::Debug for ValidRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidRoles::Unconstrained => f.write_str("Unconstrained"),
            ValidRoles::AllowAll => f.write_str("AllowAll"),
            ValidRoles::Only(names) => f.debug_tuple("Only").field(names).finish(),
            ValidRoles::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleEntry {
    pub label: &'static str,
    pub triggers: &'static [&'static str],
    pub trigger_suite: Suite,
    pub valid: PerSuite<ValidRoles>,
}

impl RuleEntry {
    pub fn fires_for(&self, role: &Role) -> bool {
        role.suite() == Some(self.trigger_suite) && self.triggers.contains(&role.name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RuleTable {
    entries: Vec<RuleEntry>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    pub fn new(entries: Vec<RuleEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    pub fn push(&mut self, entry: RuleEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries fired by `role`, with their position in the table.
    pub fn matching<'a>(&'a self, role: &'a Role) -> impl Iterator<Item = (usize, &'a RuleEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, entry)| entry.fires_for(role))
    }

    pub fn standard() -> Self {
        use ValidRoles::*;

        Self::new(vec![
            RuleEntry {
                label: "village-based worker",
                triggers: VILLAGE_ROLES,
                trigger_suite: Suite::Spice,
                valid: PerSuite {
                    spice: Only(VILLAGE_ROLES),
                    reports: Only(&[FACILITY_HF4_REPORT]),
                    insights: Only(&[]),
                },
            },
            RuleEntry {
                label: "community health assistant",
                triggers: CHA_ROLES,
                trigger_suite: Suite::Spice,
                valid: PerSuite {
                    spice: Only(&[
                        COMMUNITY_HEALTH_ASSISTANT,
                        PEER_SUPERVISOR,
                        HEALTH_FACILITY_ADMIN,
                    ]),
                    reports: AllowAll,
                    insights: Unconstrained,
                },
            },
            RuleEntry {
                label: "peer supervisor",
                triggers: &[PEER_SUPERVISOR],
                trigger_suite: Suite::Spice,
                valid: PerSuite {
                    spice: Dynamic(peer_supervisor_spice),
                    reports: Only(FACILITY_REPORT_ROLES),
                    insights: Unconstrained,
                },
            },
            RuleEntry {
                label: "facility clinician",
                triggers: CLINICAL_ROLES,
                trigger_suite: Suite::Spice,
                valid: PerSuite {
                    spice: Only(&[
                        PROVIDER,
                        PHYSICIAN_PRESCRIBER,
                        NURSE,
                        LAB_TECHNICIAN,
                        PHARMACIST,
                        HRIO,
                        HEALTH_FACILITY_ADMIN,
                    ]),
                    reports: AllowAll,
                    insights: Unconstrained,
                },
            },
            RuleEntry {
                label: "super admin",
                triggers: &[SUPER_ADMIN],
                trigger_suite: Suite::Spice,
                valid: PerSuite {
                    spice: Only(&[SUPER_ADMIN]),
                    reports: Only(&[REPORT_ADMIN]),
                    insights: Only(&[INSIGHTS_ADMIN]),
                },
            },
            RuleEntry {
                label: "hierarchy admin",
                triggers: HIERARCHY_ADMIN_ROLES,
                trigger_suite: Suite::Spice,
                valid: PerSuite {
                    spice: Only(HIERARCHY_ADMIN_ROLES),
                    reports: Only(&[REPORT_ADMIN]),
                    insights: AllowAll,
                },
            },
            RuleEntry {
                label: "health facility admin",
                triggers: &[HEALTH_FACILITY_ADMIN],
                trigger_suite: Suite::Spice,
                valid: PerSuite {
                    spice: Dynamic(facility_spice_for_deployment),
                    reports: AllowAll,
                    insights: Unconstrained,
                },
            },
            RuleEntry {
                label: "facility report admin",
                triggers: FACILITY_REPORT_ROLES,
                trigger_suite: Suite::Reports,
                valid: PerSuite {
                    spice: Dynamic(facility_report_admin_spice),
                    reports: Only(FACILITY_REPORT_ROLES),
                    insights: Only(INSIGHTS_USER_ROLES),
                },
            },
            RuleEntry {
                label: "report admin",
                triggers: &[REPORT_ADMIN],
                trigger_suite: Suite::Reports,
                valid: PerSuite {
                    spice: Dynamic(admin_roles_for),
                    reports: Only(&[REPORT_ADMIN]),
                    insights: Unconstrained,
                },
            },
            RuleEntry {
                label: "insights user",
                triggers: INSIGHTS_USER_ROLES,
                trigger_suite: Suite::Insights,
                valid: PerSuite {
                    spice: Only(SPICE_FACILITY_PICKER_ROLES),
                    reports: AllowAll,
                    insights: Only(INSIGHTS_USER_ROLES),
                },
            },
            RuleEntry {
                label: "insights admin",
                triggers: &[INSIGHTS_ADMIN],
                trigger_suite: Suite::Insights,
                valid: PerSuite {
                    spice: Dynamic(admin_roles_for),
                    reports: Unconstrained,
                    insights: Only(&[INSIGHTS_ADMIN]),
                },
            },
        ])
    }
}

/// Admin roles an actor may combine with others. Super admin only in the admin list.
pub fn admin_roles(context: &Context) -> Vec<&'static str> {
    ADMIN_ROLES
        .iter()
        .copied()
        .filter(|name| context.is_admin_list || *name != SUPER_ADMIN)
        .collect()
}

fn admin_roles_for(context: &Context, _selection: &[Role]) -> Vec<&'static str> {
    admin_roles(context)
}

fn peer_supervisor_spice(context: &Context, _selection: &[Role]) -> Vec<&'static str> {
    let mut names = vec![PEER_SUPERVISOR, COMMUNITY_HEALTH_ASSISTANT];
    names.extend(admin_roles(context));
    names
}

fn facility_spice_for_deployment(context: &Context, _selection: &[Role]) -> Vec<&'static str> {
    let mut names = Vec::new();
    if context.is_community() {
        names.extend_from_slice(VILLAGE_ROLES);
        names.extend_from_slice(&[COMMUNITY_HEALTH_ASSISTANT, PEER_SUPERVISOR]);
    }
    names.extend_from_slice(CLINICAL_ROLES);
    names.push(HEALTH_FACILITY_ADMIN);
    names
}

/// Valid SPICE roles while a facility-report-admin-class role is selected.
pub fn facility_report_admin_spice(context: &Context, _selection: &[Role]) -> Vec<&'static str> {
    let mut names = Vec::new();
    if context.is_community() {
        names.extend_from_slice(VILLAGE_ROLES);
        names.push(PEER_SUPERVISOR);
    } else {
        names.extend_from_slice(CLINICAL_ROLES);
    }
    names.extend(admin_roles(context));
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeploymentMode;

    fn community() -> Context {
        Context::builder(DeploymentMode::Community).build()
    }

    #[test]
    fn test_standard_table_shape() {
        let table = RuleTable::standard();
        assert_eq!(table.len(), 11);
        for entry in table.entries() {
            assert!(!entry.triggers.is_empty(), "{} has no triggers", entry.label);
        }
    }

    #[test]
    fn test_matching_requires_trigger_suite() {
        let table = RuleTable::standard();
        let chw = Role::new(1, COMMUNITY_HEALTH_WORKER, Suite::Spice);
        let fired: Vec<&str> = table.matching(&chw).map(|(_, e)| e.label).collect();
        assert_eq!(fired, vec!["village-based worker"]);

        // Same business key filed under the wrong suite fires nothing.
        let misfiled = Role::new(2, COMMUNITY_HEALTH_WORKER, Suite::Reports);
        assert_eq!(table.matching(&misfiled).count(), 0);
    }

    #[test]
    fn test_unknown_role_fires_nothing() {
        let table = RuleTable::standard();
        let role = Role::new(3, "DATA_CLERK", Suite::Spice);
        assert_eq!(table.matching(&role).count(), 0);
    }

    #[test]
    fn test_allow_all_and_unconstrained_disable_nothing() {
        let ctx = community();
        assert!(ValidRoles::AllowAll.allowed(&ctx, &[]).is_none());
        assert!(ValidRoles::Unconstrained.allowed(&ctx, &[]).is_none());
        assert_eq!(ValidRoles::Only(&[]).allowed(&ctx, &[]), Some(vec![]));
    }

    #[test]
    fn test_facility_report_admin_spice_depends_on_deployment() {
        let community = facility_report_admin_spice(&community(), &[]);
        assert!(community.contains(&COMMUNITY_HEALTH_WORKER));
        assert!(community.contains(&PEER_SUPERVISOR));
        assert!(!community.contains(&PROVIDER));
        assert!(!community.contains(&SUPER_ADMIN));

        let ctx = Context::builder(DeploymentMode::NonCommunity)
            .admin_list(true)
            .build();
        let non_community = facility_report_admin_spice(&ctx, &[]);
        assert!(non_community.contains(&PROVIDER));
        assert!(non_community.contains(&SUPER_ADMIN));
        assert!(!non_community.contains(&COMMUNITY_HEALTH_WORKER));
    }
}
