pub mod common;
pub mod structures;
pub mod web;

pub use common::config::AppConfig;
pub use common::environment::DeploymentMode;
pub use web::build;
