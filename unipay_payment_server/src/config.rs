use std::env;

use log::*;
use unipay_tools::UnipayConfig;

const DEFAULT_UPG_HOST: &str = "127.0.0.1";
const DEFAULT_UPG_PORT: u16 = 8370;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Gateway mode, endpoints and merchant credentials. Loaded once at startup and shared read-only with every
    /// worker.
    pub unipay: UnipayConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_UPG_HOST.to_string(), port: DEFAULT_UPG_PORT, unipay: UnipayConfig::default() }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("UPG_HOST").ok().unwrap_or_else(|| DEFAULT_UPG_HOST.into());
        let port = env::var("UPG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for UPG_PORT. {e} Using the default, {DEFAULT_UPG_PORT}, instead."
                    );
                    DEFAULT_UPG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_UPG_PORT);
        let unipay = UnipayConfig::new_from_env_or_default();
        info!("🪛️ Unipay gateway is in {} mode. Payment forms will post to {}", unipay.mode, unipay.service_url());
        Self { host, port, unipay }
    }
}
