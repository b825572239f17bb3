//! Role eligibility and dynamic form-visibility engine.
//!
//! Given the roles picked on one row of the multi-row user-creation form,
//! the engine works out which roles in each suite must be disabled, which
//! dependent pickers must be shown, and the auxiliary CHA / CHW-CHP flags.
//! Results are committed per row into a [`services::RowStateStore`] so that
//! editing one row never disturbs another.

pub mod config;
pub mod error;
pub mod models;
pub mod rules;
pub mod services;

pub use config::EligibilityConfig;
pub use error::EligibilityError;
pub use models::{
    Context, ContextBuilder, DeploymentMode, PerSuite, Role, RoleCatalog, RoleId, RowState,
    Suite, TenantLevel, Visibility,
};
pub use rules::RuleTable;
pub use services::{EligibilityEngine, RowStateStore};
