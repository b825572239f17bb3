pub mod hierarchy;
pub mod names;
pub mod table;

pub use table::{RuleEntry, RuleTable, ValidRoleFn, ValidRoles};
