use std::net::{IpAddr, Ipv4Addr};

use rocket::figment::Figment;

use crate::common::environment::DeploymentMode;
use crate::structures::AppResult;

pub const DEFAULT_PORT: u16 = 5000;

// Configuration du processus, résolue une seule fois au démarrage.
// Adresse et port sont fixes: ils écrasent Rocket.toml et les ROCKET_*.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: DeploymentMode,
    pub address: IpAddr,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::with_mode(DeploymentMode::from_env()?))
    }

    pub fn with_mode(mode: DeploymentMode) -> Self {
        Self {
            mode,
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }

    pub fn debug(&self) -> bool {
        self.mode.is_development()
    }

    pub fn log_filter(&self) -> &'static str {
        if self.debug() { "debug" } else { "info" }
    }

    // Pas de rechargement à chaud: Rocket n'en propose pas, rien à désactiver.
    pub fn figment(&self) -> Figment {
        let log_level = if self.debug() { "debug" } else { "critical" };
        rocket::Config::figment()
            .merge(("address", self.address))
            .merge(("port", self.port))
            .merge(("log_level", log_level))
            .merge(("cli_colors", false))
    }
}
