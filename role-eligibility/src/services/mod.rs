pub mod catalog_filter;
pub mod disablement;
pub mod engine;
pub mod options;
pub mod row_store;
pub mod visibility;

pub use catalog_filter::{FilterBranch, FilterDecision, RoleCatalogFilter, filter_roles};
pub use disablement::DisablementResolver;
pub use engine::EligibilityEngine;
pub use options::RoleOptionsResolver;
pub use row_store::RowStateStore;
pub use visibility::{FieldVisibilityResolver, SpiceFlags, VisibilityOutcome};
