//! Role model - catalog entries fetched per tenant, grouped by suite.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tenant-specific role identifier. Rule matching never uses it; see [`Role::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(pub u64);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Independent access domains a user can hold roles in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suite {
    /// Operational access.
    Spice,
    Reports,
    Insights,
}

impl Suite {
    pub const ALL: [Suite; 3] = [Suite::Spice, Suite::Reports, Suite::Insights];

    pub fn as_str(&self) -> &'static str {
        match self {
            Suite::Spice => "SPICE",
            Suite::Reports => "REPORTS",
            Suite::Insights => "INSIGHTS",
        }
    }

    /// Map a catalog `groupName` onto a suite. Unknown or empty names are inert.
    pub fn parse(group_name: &str) -> Option<Self> {
        match group_name.trim().to_ascii_uppercase().as_str() {
            "SPICE" => Some(Suite::Spice),
            "REPORTS" => Some(Suite::Reports),
            "INSIGHTS" => Some(Suite::Insights),
            _ => None,
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment flavour of the console; also used for a role's `appTypes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentMode {
    #[default]
    #[serde(alias = "community")]
    Community,
    #[serde(alias = "non_community", alias = "nonCommunity")]
    NonCommunity,
}

/// Role entity as served by the role catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RoleId,
    /// Stable business key used for rule matching.
    pub name: String,
    #[serde(default)]
    pub group_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub suite_access_name: String,
    #[serde(default)]
    pub app_types: Vec<DeploymentMode>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub tenant_ids: Vec<u64>,
}

impl Role {
    /// Create a displayable role in the given suite.
    pub fn new(id: u64, name: &str, suite: Suite) -> Self {
        Self {
            id: RoleId(id),
            name: name.to_string(),
            group_name: suite.as_str().to_string(),
            display_name: Some(humanize(name)),
            suite_access_name: String::new(),
            app_types: Vec::new(),
            level: None,
            tenant_ids: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: Option<&str>) -> Self {
        self.display_name = display_name.map(str::to_string);
        self
    }

    pub fn with_suite_access_name(mut self, suite_access_name: &str) -> Self {
        self.suite_access_name = suite_access_name.to_string();
        self
    }

    pub fn suite(&self) -> Option<Suite> {
        Suite::parse(&self.group_name)
    }

    /// Internal-only roles carry no display name and are never pickable.
    pub fn is_internal(&self) -> bool {
        self.display_name
            .as_deref()
            .is_none_or(|name| name.trim().is_empty())
    }

    /// Roles granted through the admin web suite.
    pub fn is_admin_suite(&self) -> bool {
        self.suite_access_name.eq_ignore_ascii_case("admin")
    }

    /// Label shown in the picker; falls back to the business key.
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(label) if !label.trim().is_empty() => label,
            _ => &self.name,
        }
    }
}

/// Turn `PEER_SUPERVISOR` into `Peer Supervisor`.
fn humanize(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let lower = part.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Roles of `selection` that belong to `suite`.
pub fn roles_in_suite(selection: &[Role], suite: Suite) -> Vec<&Role> {
    selection
        .iter()
        .filter(|role| role.suite() == Some(suite))
        .collect()
}

/// True if any role in `selection` carries one of `names`.
pub fn has_any(selection: &[Role], names: &[&str]) -> bool {
    selection.iter().any(|role| names.contains(&role.name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_parse_is_case_insensitive() {
        assert_eq!(Suite::parse("spice"), Some(Suite::Spice));
        assert_eq!(Suite::parse(" Reports "), Some(Suite::Reports));
        assert_eq!(Suite::parse("INSIGHTS"), Some(Suite::Insights));
        assert_eq!(Suite::parse(""), None);
        assert_eq!(Suite::parse("ADMIN"), None);
    }

    #[test]
    fn test_missing_group_name_is_inert() {
        let json = r#"{"id": 7, "name": "PROVIDER", "displayName": "Provider"}"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.group_name, "");
        assert_eq!(role.suite(), None);
    }

    #[test]
    fn test_internal_roles_have_no_display_name() {
        let role = Role::new(1, "SYSTEM", Suite::Spice);
        assert!(!role.is_internal());
        assert!(role.clone().with_display_name(None).is_internal());
        assert!(role.with_display_name(Some("  ")).is_internal());
    }

    #[test]
    fn test_display_label_and_humanize() {
        let role = Role::new(2, "PEER_SUPERVISOR", Suite::Spice);
        assert_eq!(role.display_label(), "Peer Supervisor");
        let hidden = role.with_display_name(None);
        assert_eq!(hidden.display_label(), "PEER_SUPERVISOR");
    }

    #[test]
    fn test_deployment_mode_accepts_config_spelling() {
        let mode: DeploymentMode = serde_json::from_str("\"non_community\"").unwrap();
        assert_eq!(mode, DeploymentMode::NonCommunity);
        let mode: DeploymentMode = serde_json::from_str("\"COMMUNITY\"").unwrap();
        assert_eq!(mode, DeploymentMode::Community);
    }

    #[test]
    fn test_admin_suite_flag() {
        let role = Role::new(3, "REGION_ADMIN", Suite::Spice).with_suite_access_name("Admin");
        assert!(role.is_admin_suite());
        assert!(!Role::new(4, "PROVIDER", Suite::Spice).is_admin_suite());
    }
}
