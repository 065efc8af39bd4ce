use serde::Deserialize;
use std::env;

use crate::infrastructure::repositories::DEFAULT_METADATA_URL;

const DEFAULT_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub addr: String,
    pub google_maps_api_key: String,
    pub metadata_url: String,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            addr: resolve_addr(env::var("ADDR").ok(), env::var("PORT").ok())?,
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default(),
            metadata_url: env::var("METADATA_URL")
                .unwrap_or_else(|_| DEFAULT_METADATA_URL.to_string()),
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// `ADDR` wins, then `PORT` on all interfaces, then the local default
fn resolve_addr(
    addr: Option<String>,
    port: Option<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(addr) = addr.filter(|a| !a.is_empty()) {
        return Ok(addr);
    }
    match port.filter(|p| !p.is_empty()) {
        Some(port) => {
            let port: u16 = port.parse()?;
            Ok(format!("0.0.0.0:{}", port))
        }
        None => Ok(DEFAULT_ADDR.to_string()),
    }
}
