//! Form-session context - immutable for the lifetime of a user-creation form.

use super::role::DeploymentMode;
use serde::{Deserialize, Serialize};

/// Level of the tenant hierarchy the form is opened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TenantLevel {
    Region,
    District,
    Chiefdom,
    HealthFacility,
}

impl TenantLevel {
    /// Levels ordered from the facility upwards.
    pub const ASCENDING: [TenantLevel; 4] = [
        TenantLevel::HealthFacility,
        TenantLevel::Chiefdom,
        TenantLevel::District,
        TenantLevel::Region,
    ];

    /// Distance from the facility level (facility = 0, region = 3).
    pub fn rank(&self) -> u8 {
        match self {
            TenantLevel::HealthFacility => 0,
            TenantLevel::Chiefdom => 1,
            TenantLevel::District => 2,
            TenantLevel::Region => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub deployment_mode: DeploymentMode,
    pub is_site_user: bool,
    pub is_admin_list: bool,
    pub is_hf_create: bool,
    pub is_region_create: bool,
    pub tenant_level: Option<TenantLevel>,
    pub is_edit: bool,
}

impl Context {
    pub fn builder(deployment_mode: DeploymentMode) -> ContextBuilder {
        ContextBuilder {
            context: Context {
                deployment_mode,
                is_site_user: false,
                is_admin_list: false,
                is_hf_create: false,
                is_region_create: false,
                tenant_level: None,
                is_edit: false,
            },
        }
    }

    pub fn is_community(&self) -> bool {
        self.deployment_mode == DeploymentMode::Community
    }

    /// Form opened under a health facility tenant.
    pub fn is_facility_context(&self) -> bool {
        self.tenant_level == Some(TenantLevel::HealthFacility)
    }
}

#[derive(Debug, Clone)]
pub struct ContextBuilder {
    context: Context,
}

impl ContextBuilder {
    pub fn site_user(mut self, value: bool) -> Self {
        self.context.is_site_user = value;
        self
    }

    pub fn admin_list(mut self, value: bool) -> Self {
        self.context.is_admin_list = value;
        self
    }

    pub fn hf_create(mut self, value: bool) -> Self {
        self.context.is_hf_create = value;
        self
    }

    pub fn region_create(mut self, value: bool) -> Self {
        self.context.is_region_create = value;
        self
    }

    pub fn tenant_level(mut self, level: Option<TenantLevel>) -> Self {
        self.context.tenant_level = level;
        self
    }

    pub fn edit(mut self, value: bool) -> Self {
        self.context.is_edit = value;
        self
    }

    pub fn build(self) -> Context {
        self.context
    }
}
