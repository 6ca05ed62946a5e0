use serde::Serialize;

use crate::common::environment::DeploymentMode;
use crate::structures::app_info::VERSION;

pub const GREETING: &str = "Hello from CI/CD Python App!";

// Réponse de /api/
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    pub version: &'static str,
    pub environment: DeploymentMode,
    pub status: &'static str,
}

impl Greeting {
    pub fn running(environment: DeploymentMode) -> Self {
        Self { message: GREETING, version: VERSION, environment, status: "running" }
    }
}
