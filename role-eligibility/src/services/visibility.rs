//! Dependent picker visibility and the CHA / CHW-CHP row flags.

use crate::models::{Context, Role, RowState, Suite};
use crate::rules::names::{
    CHA_ROLES, FACILITY_REPORT_ROLES, INSIGHTS_USER_ROLES, SPICE_FACILITY_PICKER_ROLES,
    VILLAGE_ROLES,
};

/// Flags only a SPICE selection can change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpiceFlags {
    pub villages: bool,
    pub community_unit: bool,
    pub is_cha: bool,
    pub is_chw_or_chp: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityOutcome {
    pub suite: Suite,
    pub facility: bool,
    pub spice: Option<SpiceFlags>,
}

impl VisibilityOutcome {
    /// Write this suite's slice of visibility into `state`, leaving the rest alone.
    pub fn apply(&self, state: &mut RowState) {
        *state.visibility.facility_mut(self.suite) = self.facility;
        if let Some(flags) = self.spice {
            state.visibility.villages = flags.villages;
            state.visibility.community_unit = flags.community_unit;
            state.is_cha = flags.is_cha;
            state.is_chw_or_chp = flags.is_chw_or_chp;
        }
    }
}

pub struct FieldVisibilityResolver<'a> {
    context: &'a Context,
}

fn any_named(roles: &[&Role], names: &[&str]) -> bool {
    roles.iter().any(|role| names.contains(&role.name.as_str()))
}

impl<'a> FieldVisibilityResolver<'a> {
    pub fn new(context: &'a Context) -> Self {
        Self { context }
    }

    /// `selected` must hold only the roles picked in `suite`.
    pub fn resolve(&self, suite: Suite, selected: &[&Role]) -> VisibilityOutcome {
        let ctx = self.context;
        match suite {
            Suite::Spice => {
                let is_chw_or_chp = any_named(selected, VILLAGE_ROLES);
                let is_cha = any_named(selected, CHA_ROLES);
                VisibilityOutcome {
                    suite,
                    facility: any_named(selected, SPICE_FACILITY_PICKER_ROLES)
                        && !ctx.is_facility_context()
                        && !ctx.is_hf_create
                        && ctx.is_site_user,
                    spice: Some(SpiceFlags {
                        villages: is_chw_or_chp && !ctx.is_hf_create,
                        community_unit: is_cha && ctx.is_community() && !ctx.is_hf_create,
                        is_cha,
                        is_chw_or_chp,
                    }),
                }
            }
            Suite::Reports => VisibilityOutcome {
                suite,
                facility: any_named(selected, FACILITY_REPORT_ROLES),
                spice: None,
            },
            Suite::Insights => VisibilityOutcome {
                suite,
                facility: any_named(selected, INSIGHTS_USER_ROLES),
                spice: None,
            },
        }
    }
}
