use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// The API always listens on this port.
pub const PORT: u16 = 3000;

const DEFAULT_DATABASE_URL: &str = "sqlite://database.sqlite";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown response style {0:?}, expected \"legacy\" or \"normalized\"")]
pub struct UnknownStyle(pub String);

/// Envelope convention used by every endpoint.
///
/// `Legacy` keeps the shapes existing clients depend on: the genre listing is
/// nested under `results`, player details under `result`, and a missing player
/// answers 400. It is not byte-for-byte: tournament details come back under
/// `tournament` (never `player`), the prize-pool sort under `tournaments`
/// (never `tournamnets`), and the empty tournament list under `message`
/// (never `messgae`).
///
/// `Normalized` puts every payload under its bare key and answers 404 for
/// every miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseStyle {
    #[default]
    Legacy,
    Normalized,
}

impl FromStr for ResponseStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ResponseStyle::Legacy),
            "normalized" | "normalised" => Ok(ResponseStyle::Normalized),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub response_style: ResponseStyle,
}

impl Config {
    /// Read configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let host = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "HOST", value })?,
            None => Ipv4Addr::UNSPECIFIED,
        };

        let response_style = match lookup("RESPONSE_STYLE") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "RESPONSE_STYLE", value })?,
            None => ResponseStyle::default(),
        };

        Ok(Config {
            database_url,
            host,
            response_style,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, PORT))
    }
}
