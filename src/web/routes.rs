use rocket::get;
use rocket::State;
use rocket::response::content::{RawHtml, RawText};
use rocket::serde::json::Json;

use crate::common::environment::DeploymentMode;
use crate::structures::{AppInfo, AppResult, Greeting, HealthStatus, Metrics};
use crate::web::page::render_dashboard;

// Sonde de santé pour le monitoring
#[get("/health")]
pub fn health(mode: DeploymentMode) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(mode))
}

// Tableau de bord HTML
#[get("/")]
pub fn index(mode: DeploymentMode) -> RawHtml<String> {
    RawHtml(render_dashboard(&mode))
}

// Rocket sert aussi /api/ (slash final) sur cette route
#[get("/api")]
pub fn api_hello(mode: DeploymentMode) -> Json<Greeting> {
    Json(Greeting::running(mode))
}

#[get("/info")]
pub fn info() -> Json<AppInfo> {
    Json(AppInfo::current())
}

// Endpoint Prometheus /metrics
#[get("/metrics")]
pub fn metrics_export(metrics: &State<Metrics>) -> AppResult<RawText<String>> {
    Ok(RawText(metrics.gather_text()?))
}
