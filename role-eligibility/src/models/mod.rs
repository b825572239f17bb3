pub mod catalog;
pub mod context;
pub mod role;
pub mod row_state;

pub use catalog::RoleCatalog;
pub use context::{Context, ContextBuilder, TenantLevel};
pub use role::{DeploymentMode, Role, RoleId, Suite, has_any, roles_in_suite};
pub use row_state::{PerSuite, RowState, Visibility};
