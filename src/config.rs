use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub latency: LatencyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Controls whether the data-access facade sleeps to simulate backend I/O.
/// Disabled in tests so they run at full speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub enabled: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            latency: LatencyConfig {
                enabled: env::var("SIMULATED_LATENCY")
                    .map(|v| v != "0" && v.to_lowercase() != "false")
                    .unwrap_or(true),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
