pub mod app_info;
pub mod error;
pub mod greeting;
pub mod health;
pub mod metrics;

pub use app_info::AppInfo;
pub use error::{AppError, AppResult, ErrorPayload, FaultDetail};
pub use greeting::Greeting;
pub use health::HealthStatus;
pub use metrics::Metrics;
