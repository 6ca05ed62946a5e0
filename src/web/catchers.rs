use rocket::catch;
use rocket::request::Request;
use rocket::serde::json::Json;
use tracing::error;

use crate::common::logging::events;
use crate::structures::{ErrorPayload, FaultDetail};

#[catch(404)]
pub fn not_found() -> Json<ErrorPayload> {
    Json(ErrorPayload::NOT_FOUND)
}

// Le détail reste dans les logs; le client ne reçoit que le message générique.
// Sans détail enregistré, la panne vient d'un handler qui a paniqué.
#[catch(500)]
pub fn internal_error(req: &Request<'_>) -> Json<ErrorPayload> {
    let detail = req.local_cache(FaultDetail::default);
    let detail = detail.0.as_deref().unwrap_or("handler panicked");
    error!(event = events::HTTP_FAULT, method = %req.method(), uri = %req.uri(), detail = %detail, msg = "Internal server error");
    Json(ErrorPayload::INTERNAL)
}
