use std::env::{self, VarError};
use std::fmt;

use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use serde::Serialize;

use crate::structures::{AppError, AppResult};

pub const ENV_VAR: &str = "FLASK_ENV";
pub const DEFAULT_MODE: &str = "development";

// Mode de déploiement lu dans FLASK_ENV. Sert aussi de request guard:
// relu à chaque requête, jamais mis en cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeploymentMode(String);

impl DeploymentMode {
    pub fn new(mode: impl Into<String>) -> Self {
        Self(mode.into())
    }

    pub fn from_env() -> AppResult<Self> {
        Self::resolve(env::var(ENV_VAR))
    }

    // Absent -> valeur par défaut. Une valeur vide est renvoyée telle quelle.
    pub fn resolve(lookup: Result<String, VarError>) -> AppResult<Self> {
        match lookup {
            Ok(mode) => Ok(Self(mode)),
            Err(VarError::NotPresent) => Ok(Self(DEFAULT_MODE.to_string())),
            Err(VarError::NotUnicode(_)) => Err(AppError::InvalidEnvironment { var: ENV_VAR }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_development(&self) -> bool {
        self.0 == DEFAULT_MODE
    }
}

impl Default for DeploymentMode {
    fn default() -> Self {
        Self(DEFAULT_MODE.to_string())
    }
}

impl fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for DeploymentMode {
    type Error = AppError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match Self::from_env() {
            Ok(mode) => Outcome::Success(mode),
            Err(e) => {
                e.record(req);
                Outcome::Error((Status::InternalServerError, e))
            }
        }
    }
}
