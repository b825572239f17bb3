use crate::error::EligibilityError;
use crate::models::{Context, ContextBuilder, DeploymentMode};
use console_core::config::{self as core_config, load_layered};
use serde::Deserialize;

/// Deployment-wide settings for the eligibility engine.
///
/// Read from an optional `eligibility.{toml,yaml,json}` file and
/// `ELIGIBILITY__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default)]
    pub deployment_mode: DeploymentMode,
}

impl EligibilityConfig {
    pub fn load() -> Result<Self, EligibilityError> {
        Self::load_from("eligibility", "ELIGIBILITY")
    }

    pub fn load_from(file: &str, env_prefix: &str) -> Result<Self, EligibilityError> {
        let config: Self = load_layered(file, env_prefix)?;
        tracing::debug!(
            deployment_mode = ?config.deployment_mode,
            service = %config.common.service_name,
            "Eligibility configuration loaded"
        );
        Ok(config)
    }

    /// Start a form-session context for this deployment.
    pub fn context_builder(&self) -> ContextBuilder {
        Context::builder(self.deployment_mode)
    }
}
