//! Role catalog - suite-bucketed roles for one form session.

use super::role::{Role, Suite};
use super::row_state::PerSuite;
use crate::error::EligibilityError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Payload shapes the role catalog endpoint is known to return.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    BySuite(BTreeMap<String, Vec<Role>>),
    Flat(Vec<Role>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: PerSuite<Vec<Role>>,
}

impl RoleCatalog {
    /// Bucket a flat role list by `groupName`. Roles without a known suite are dropped.
    pub fn from_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut catalog = Self::default();
        for role in roles {
            match role.suite() {
                Some(suite) => catalog.roles.get_mut(suite).push(role),
                None => tracing::debug!(
                    role = %role.name,
                    group_name = %role.group_name,
                    "Ignoring role with unknown suite"
                ),
            }
        }
        catalog
    }

    /// Parse the catalog endpoint's JSON, either keyed by suite or a flat array.
    pub fn from_json(json: &str) -> Result<Self, EligibilityError> {
        let payload: CatalogPayload = serde_json::from_str(json)?;
        let catalog = match payload {
            CatalogPayload::Flat(roles) => Self::from_roles(roles),
            CatalogPayload::BySuite(buckets) => {
                let mut catalog = Self::default();
                for (key, roles) in buckets {
                    let Some(suite) = Suite::parse(&key) else {
                        tracing::debug!(group = %key, "Ignoring unknown catalog group");
                        continue;
                    };
                    for mut role in roles {
                        // The bucket key names the suite when the role omits it.
                        if role.group_name.trim().is_empty() {
                            role.group_name = suite.as_str().to_string();
                        }
                        catalog.roles.get_mut(suite).push(role);
                    }
                }
                catalog
            }
        };
        Ok(catalog)
    }

    pub fn roles(&self, suite: Suite) -> &[Role] {
        self.roles.get(suite)
    }

    pub fn find(&self, suite: Suite, name: &str) -> Option<&Role> {
        self.roles(suite).iter().find(|role| role.name == name)
    }

    pub fn len(&self) -> usize {
        self.roles.iter().map(|(_, roles)| roles.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
