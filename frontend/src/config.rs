use std::sync::OnceLock;
use gloo_net::http::Request;
use shared::config::{ClientConfig, ConfigFile, CONFIG_PATH};
use shared::{Error, Result};
use tracing::{info, warn};

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

pub fn config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::default)
}

pub async fn load() -> &'static ClientConfig {
    let resolved = match fetch_config_file().await {
        Ok(file) => ClientConfig::default().merged(file),
        Err(e) => {
            warn!("Failed to load {}, using defaults: {}", CONFIG_PATH, e);
            ClientConfig::default()
        }
    };
    info!(api_url = %resolved.api_url, socket_url = %resolved.socket_url, "config resolved");

    if CONFIG.set(resolved).is_err() {
        warn!("config already initialised, keeping the first value");
    }
    config()
}

async fn fetch_config_file() -> Result<ConfigFile> {
    let response = Request::get(CONFIG_PATH).send().await.map_err(Error::network)?;
    if !response.ok() {
        return Err(Error::status(response.status()));
    }
    response.json::<ConfigFile>().await.map_err(Error::decode)
}
