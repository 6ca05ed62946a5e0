use serde::Serialize;

use crate::common::environment::DeploymentMode;
use crate::structures::app_info::APP_NAME;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub environment: DeploymentMode,
}

impl HealthStatus {
    pub fn healthy(environment: DeploymentMode) -> Self {
        Self { status: "healthy", service: APP_NAME, environment }
    }
}
