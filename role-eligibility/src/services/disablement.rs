//! Disabled-role resolution for one form row.
//!
//! Every selected role fires the rule entries it triggers. Each fired entry
//! disables, per suite, the candidate roles outside its valid set, and the
//! results are unioned. Disablement only grows within a resolution, so the
//! result does not depend on selection or table order.

use crate::models::{Context, PerSuite, Role, RoleId, Suite};
use crate::rules::RuleTable;
use std::collections::BTreeSet;

pub struct DisablementResolver<'a> {
    context: &'a Context,
    rules: &'a RuleTable,
}

impl<'a> DisablementResolver<'a> {
    pub fn new(context: &'a Context, rules: &'a RuleTable) -> Self {
        Self { context, rules }
    }

    /// Roles a rule may disable in `suite`: the suite's picker options plus
    /// the row's mandatory roles in that suite. SPICE options are already the
    /// filtered catalog; REPORTS and INSIGHTS options come from their own
    /// suite lists.
    fn candidates(suite: Suite, options: &[Role], mandatory: &[Role]) -> Vec<Role> {
        let mut candidates = options.to_vec();
        for role in mandatory.iter().filter(|role| role.suite() == Some(suite)) {
            if !candidates.iter().any(|c| c.id == role.id) {
                candidates.push(role.clone());
            }
        }
        candidates
    }

    pub fn resolve(
        &self,
        selection: &[Role],
        options: &PerSuite<Vec<Role>>,
        mandatory: &[Role],
    ) -> PerSuite<BTreeSet<RoleId>> {
        let candidates =
            PerSuite::from_fn(|suite| Self::candidates(suite, options.get(suite), mandatory));
        let mut disabled: PerSuite<BTreeSet<RoleId>> = PerSuite::default();

        for role in selection {
            for (index, entry) in self.rules.matching(role) {
                for suite in Suite::ALL {
                    let Some(valid) = entry.valid.get(suite).allowed(self.context, selection)
                    else {
                        continue;
                    };
                    let before = disabled.get(suite).len();
                    disabled.get_mut(suite).extend(
                        candidates
                            .get(suite)
                            .iter()
                            .filter(|c| !valid.contains(&c.name.as_str()))
                            .map(|c| c.id),
                    );
                    tracing::debug!(
                        rule = index,
                        label = entry.label,
                        trigger = %role.name,
                        suite = %suite,
                        newly_disabled = disabled.get(suite).len() - before,
                        "Rule fired"
                    );
                }
            }
        }

        disabled
    }
}
