use std::time::Instant;

use rocket::{Build, Data, Request, Response, Rocket};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{catchers, routes};
use tracing::debug;

use crate::common::config::AppConfig;
use crate::common::logging::{events, short_uuid};
use crate::structures::Metrics;

pub mod catchers;
pub mod page;
pub mod routes;

// Assemble l'application: routes, catchers, état partagé et fairing
pub fn build(config: &AppConfig) -> anyhow::Result<Rocket<Build>> {
    let metrics = Metrics::new()?;

    Ok(rocket::custom(config.figment())
        .manage(metrics)
        .attach(HttpMetricsFairing)
        .mount("/", routes![
            routes::health,
            routes::index,
            routes::api_hello,
            routes::info,
            routes::metrics_export,
        ])
        .register("/", catchers![catchers::not_found, catchers::internal_error]))
}

// Horodatage et identifiant posés à l'arrivée de la requête
struct RequestStart {
    at: Instant,
    id: String,
}

// Fairing Rocket: intercepte chaque requête pour mesurer la durée et incrémenter les compteurs
pub struct HttpMetricsFairing;

#[rocket::async_trait]
impl Fairing for HttpMetricsFairing {
    fn info(&self) -> Info {
        Info { name: "HTTP metrics and request log", kind: Kind::Request | Kind::Response }
    }

    async fn on_request(&self, req: &mut Request<'_>, _data: &mut Data<'_>) {
        let start = req.local_cache(|| RequestStart { at: Instant::now(), id: short_uuid() });
        debug!(event = events::HTTP_REQUEST, request_id = %start.id, method = %req.method(), uri = %req.uri());
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let start = req.local_cache(|| RequestStart { at: Instant::now(), id: short_uuid() });
        let elapsed = start.at.elapsed();
        let method = req.method().as_str();
        let status = res.status().code;
        let route = req.route().map(|r| r.uri.to_string()).unwrap_or_else(|| "unmatched".to_string());

        if let Some(metrics) = req.rocket().state::<Metrics>() {
            metrics.observe(method, &route, status, elapsed);
        }

        debug!(event = events::HTTP_RESPONSE, request_id = %start.id, method = method, route = %route, status = status, elapsed_ms = elapsed.as_millis() as u64);
    }
}
