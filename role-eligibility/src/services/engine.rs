//! Engine facade used by the form layer.
//!
//! A role-selection change on row `i` recomputes the option lists, then the
//! disabled sets, then picker visibility, and commits the finished
//! [`RowState`] to slot `i` in one assignment.

use super::disablement::DisablementResolver;
use super::options::RoleOptionsResolver;
use super::row_store::RowStateStore;
use super::visibility::FieldVisibilityResolver;
use crate::models::{Context, PerSuite, Role, RoleCatalog, RowState, Suite, roles_in_suite};
use crate::rules::RuleTable;
use std::borrow::Cow;

pub struct EligibilityEngine {
    context: Context,
    catalog: RoleCatalog,
    rules: RuleTable,
    rows: RowStateStore,
}

impl EligibilityEngine {
    pub fn new(context: Context, catalog: RoleCatalog) -> Self {
        Self::with_rules(context, catalog, RuleTable::standard())
    }

    pub fn with_rules(context: Context, catalog: RoleCatalog, rules: RuleTable) -> Self {
        tracing::debug!(
            deployment_mode = ?context.deployment_mode,
            tenant_level = ?context.tenant_level,
            roles = catalog.len(),
            rules = rules.len(),
            "Eligibility engine created"
        );
        Self {
            context,
            catalog,
            rules,
            rows: RowStateStore::new(),
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Options for one suite's picker, independent of disablement.
    pub fn filter_options(&self, suite: Suite, selection: &[Role]) -> Vec<Role> {
        RoleOptionsResolver::new(&self.catalog, &self.context).options(suite, selection)
    }

    /// Recompute every output for row `index` and commit it.
    pub fn compute_row(&mut self, index: usize, selection: &[Role]) -> RowState {
        let state = self.derive(index, selection, &Suite::ALL, RowState::default());
        self.commit(index, state)
    }

    /// Recompute row `index` after a change in `suite` only. Visibility owned
    /// by the other suites is carried over from the stored row.
    pub fn on_suite_change(&mut self, index: usize, suite: Suite, selection: &[Role]) -> RowState {
        let previous = self.rows.get(index).cloned().unwrap_or_default();
        let state = self.derive(index, selection, &[suite], previous);
        self.commit(index, state)
    }

    fn derive(
        &self,
        index: usize,
        selection: &[Role],
        visibility_suites: &[Suite],
        mut state: RowState,
    ) -> RowState {
        let selection = self.with_mandatory(index, selection);
        let mandatory = self.rows.mandatory(index);

        let options = RoleOptionsResolver::new(&self.catalog, &self.context).resolve(&selection);
        state.disabled_role_ids = DisablementResolver::new(&self.context, &self.rules)
            .resolve(&selection, &options, mandatory);
        state.option_ids = PerSuite::from_fn(|suite| {
            options.get(suite).iter().map(|role| role.id).collect()
        });

        let visibility = FieldVisibilityResolver::new(&self.context);
        for suite in visibility_suites {
            visibility
                .resolve(*suite, &roles_in_suite(&selection, *suite))
                .apply(&mut state);
        }
        state
    }

    /// Mandatory roles always count as selected.
    fn with_mandatory<'s>(&self, index: usize, selection: &'s [Role]) -> Cow<'s, [Role]> {
        let missing: Vec<&Role> = self
            .rows
            .mandatory(index)
            .iter()
            .filter(|m| !selection.iter().any(|s| s.id == m.id))
            .collect();
        if missing.is_empty() {
            return Cow::Borrowed(selection);
        }
        let mut merged = selection.to_vec();
        merged.extend(missing.into_iter().cloned());
        Cow::Owned(merged)
    }

    fn commit(&mut self, index: usize, state: RowState) -> RowState {
        tracing::debug!(
            row = index,
            disabled_spice = state.disabled_role_ids.spice.len(),
            disabled_reports = state.disabled_role_ids.reports.len(),
            disabled_insights = state.disabled_role_ids.insights.len(),
            villages = state.visibility.villages,
            "Row state committed"
        );
        self.rows.set(index, state.clone());
        state
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.push()
    }

    pub fn remove_row(&mut self, index: usize) -> Option<RowState> {
        let removed = self.rows.remove(index);
        if removed.is_some() {
            tracing::debug!(row = index, remaining = self.rows.len(), "Row removed");
        }
        removed
    }

    pub fn reset_row(&mut self, index: usize) {
        self.rows.reset(index);
    }

    pub fn row(&self, index: usize) -> Option<&RowState> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &RowStateStore {
        &self.rows
    }

    /// Record the pre-assigned roles of row `index` (e.g. from an existing user).
    pub fn set_mandatory_roles(&mut self, index: usize, roles: Vec<Role>) {
        self.rows.set_mandatory(index, roles);
    }

    /// Swap in a re-fetched catalog. Every row is blanked since its state was
    /// derived from the old one.
    pub fn replace_catalog(&mut self, catalog: RoleCatalog) {
        tracing::info!(
            roles = catalog.len(),
            rows = self.rows.len(),
            "Role catalog replaced; resetting rows"
        );
        self.catalog = catalog;
        self.rows.reset_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeploymentMode;
    use crate::rules::names::*;

    fn find(engine: &EligibilityEngine, suite: Suite, name: &str) -> Role {
        engine.catalog().find(suite, name).cloned().unwrap()
    }

    fn engine() -> EligibilityEngine {
        let catalog = RoleCatalog::from_roles(vec![
            Role::new(1, COMMUNITY_HEALTH_WORKER, Suite::Spice),
            Role::new(2, PROVIDER, Suite::Spice),
            Role::new(10, FACILITY_REPORT_ADMIN, Suite::Reports),
            Role::new(20, INSIGHTS_USER, Suite::Insights),
        ]);
        let ctx = Context::builder(DeploymentMode::Community)
            .admin_list(true)
            .build();
        EligibilityEngine::new(ctx, catalog)
    }

    #[test]
    fn test_compute_row_commits_state() {
        let mut engine = engine();
        let chw = find(&engine, Suite::Spice, COMMUNITY_HEALTH_WORKER);
        let state = engine.compute_row(0, &[chw]);
        assert_eq!(engine.row(0), Some(&state));
        assert!(state.visibility.villages);
        assert!(state.is_chw_or_chp);
    }

    #[test]
    fn test_suite_change_keeps_other_suites_visibility() {
        let mut engine = engine();
        let chw = find(&engine, Suite::Spice, COMMUNITY_HEALTH_WORKER);
        let fra = find(&engine, Suite::Reports, FACILITY_REPORT_ADMIN);

        engine.on_suite_change(0, Suite::Spice, &[chw.clone()]);
        let state = engine.on_suite_change(0, Suite::Reports, &[chw, fra]);

        assert!(state.visibility.villages);
        assert!(state.is_chw_or_chp);
        assert!(state.visibility.report_facility);
    }

    #[test]
    fn test_replace_catalog_resets_rows() {
        let mut engine = engine();
        let chw = find(&engine, Suite::Spice, COMMUNITY_HEALTH_WORKER);
        engine.compute_row(0, &[chw]);
        engine.replace_catalog(RoleCatalog::default());
        assert_eq!(engine.row_count(), 1);
        assert_eq!(engine.row(0), Some(&RowState::default()));
    }

    #[test]
    fn test_mandatory_roles_count_as_selected() {
        let mut engine = engine();
        let chw = find(&engine, Suite::Spice, COMMUNITY_HEALTH_WORKER);
        engine.set_mandatory_roles(0, vec![chw]);
        let state = engine.compute_row(0, &[]);
        assert!(state.is_chw_or_chp);
        assert!(state.is_disabled(Suite::Spice, crate::models::RoleId(2)));
    }
}
