use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use serde::Serialize;
use thiserror::Error;

// Corps JSON renvoyé pour toute erreur: { "error": "..." }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: &'static str,
}

impl ErrorPayload {
    pub const NOT_FOUND: Self = Self { error: "Not found" };
    pub const INTERNAL: Self = Self { error: "Internal server error" };
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("environment variable {var} is not valid unicode")]
    InvalidEnvironment { var: &'static str },

    #[error("metrics export failed: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type AppResult<T> = Result<T, AppError>;

// Détail d'une panne, mémorisé dans le cache local de la requête pour le catcher 500.
// Jamais renvoyé au client.
#[derive(Debug, Default)]
pub struct FaultDetail(pub Option<String>);

impl AppError {
    pub fn record(&self, req: &Request<'_>) {
        req.local_cache(|| FaultDetail(Some(self.to_string())));
    }
}

// Une erreur applicative est toujours une panne interne: on note le détail
// puis on laisse le catcher 500 produire le corps générique.
impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        self.record(req);
        Err(Status::InternalServerError)
    }
}
