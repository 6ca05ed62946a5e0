use std::collections::BTreeMap;

use serde::Serialize;

// Nom de service historique, conservé tel quel pour les sondes du pipeline
pub const APP_NAME: &str = "cicd-python-app";
pub const VERSION: &str = "1.0.0";
pub const DESCRIPTION: &str = "CI/CD Pipeline Deployment Demo using Ansible, Jenkins, and Docker";

// Routes documentées par /info. /api/ et /metrics n'y figurent pas.
const DOCUMENTED_ENDPOINTS: [(&str, &str); 3] = [
    ("/", "Main endpoint"),
    ("/health", "Health check"),
    ("/info", "Application info"),
];

#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub app_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    // BTreeMap: ordre des clés stable d'une requête à l'autre
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl AppInfo {
    pub fn current() -> Self {
        Self {
            app_name: APP_NAME,
            version: VERSION,
            description: DESCRIPTION,
            endpoints: DOCUMENTED_ENDPOINTS.into_iter().collect(),
        }
    }
}
