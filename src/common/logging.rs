use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use time::macros::format_description;

// Logs JSON sur stdout. Les enregistrements `log` émis par Rocket sont
// redirigés vers tracing par `init()` (feature tracing-log du subscriber).
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    // RUST_LOG prime; sinon le niveau dérivé du mode de déploiement
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    // RFC3339-like with UTC
    let timer = UtcTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"));

    let fmt_layer = fmt::layer()
        .event_format(fmt::format().json().with_current_span(false).with_span_list(false))
        .fmt_fields(fmt::format::JsonFields::new())
        .with_timer(timer)
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

pub fn short_uuid() -> String {
    let id = uuid::Uuid::new_v4().to_string();
    id.split('-').next().unwrap_or(&id).to_string()
}

pub mod events {
    pub const APP_START: &str = "app_start";
    pub const APP_SHUTDOWN: &str = "app_shutdown";

    pub const HTTP_REQUEST: &str = "http_request";
    pub const HTTP_RESPONSE: &str = "http_response";
    pub const HTTP_FAULT: &str = "http_fault";
}
