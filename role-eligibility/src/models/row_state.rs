//! Per-row computed state and the per-suite container it is built from.

use super::role::{RoleId, Suite};
use serde::Serialize;
use std::collections::BTreeSet;

/// One value per suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerSuite<T> {
    pub spice: T,
    pub reports: T,
    pub insights: T,
}

impl<T> PerSuite<T> {
    pub fn from_fn(mut f: impl FnMut(Suite) -> T) -> Self {
        Self {
            spice: f(Suite::Spice),
            reports: f(Suite::Reports),
            insights: f(Suite::Insights),
        }
    }

    pub fn get(&self, suite: Suite) -> &T {
        match suite {
            Suite::Spice => &self.spice,
            Suite::Reports => &self.reports,
            Suite::Insights => &self.insights,
        }
    }

    pub fn get_mut(&mut self, suite: Suite) -> &mut T {
        match suite {
            Suite::Spice => &mut self.spice,
            Suite::Reports => &mut self.reports,
            Suite::Insights => &mut self.insights,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suite, &T)> {
        Suite::ALL.into_iter().map(move |suite| (suite, self.get(suite)))
    }
}

/// Visibility of the dependent pickers on a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub villages: bool,
    pub spice_facility: bool,
    pub report_facility: bool,
    pub insight_facility: bool,
    pub community_unit: bool,
}

impl Visibility {
    /// Facility picker flag belonging to `suite`.
    pub fn facility_mut(&mut self, suite: Suite) -> &mut bool {
        match suite {
            Suite::Spice => &mut self.spice_facility,
            Suite::Reports => &mut self.report_facility,
            Suite::Insights => &mut self.insight_facility,
        }
    }

    pub fn facility(&self, suite: Suite) -> bool {
        match suite {
            Suite::Spice => self.spice_facility,
            Suite::Reports => self.report_facility,
            Suite::Insights => self.insight_facility,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowState {
    /// Picker contents per suite, in display order.
    pub option_ids: PerSuite<Vec<RoleId>>,
    pub disabled_role_ids: PerSuite<BTreeSet<RoleId>>,
    pub visibility: Visibility,
    #[serde(rename = "isCHA")]
    pub is_cha: bool,
    #[serde(rename = "isCHWorCHP")]
    pub is_chw_or_chp: bool,
}

impl RowState {
    pub fn is_disabled(&self, suite: Suite, id: RoleId) -> bool {
        self.disabled_role_ids.get(suite).contains(&id)
    }

    pub fn is_offered(&self, suite: Suite, id: RoleId) -> bool {
        self.option_ids.get(suite).contains(&id)
    }
}
