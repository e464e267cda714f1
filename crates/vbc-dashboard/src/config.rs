//! Build-time configuration
//!
//! The browser has no process environment, so the backend address is baked
//! in when the bundle is built: `VBC_API_BASE_URL=https://... trunk build`.

use vbc_client::{CheckClient, ClientConfig, DEFAULT_BASE_URL};

pub fn client_config() -> ClientConfig {
    ClientConfig::new(option_env!("VBC_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
}

/// Client for the configured backend, or `None` if the address is unusable
pub fn build_client() -> Option<CheckClient> {
    let config = client_config();
    match CheckClient::new(&config) {
        Ok(client) => {
            tracing::info!("Using analysis API at {}", client.endpoint());
            Some(client)
        }
        Err(e) => {
            tracing::error!("Cannot build API client for {}: {}", config.base_url, e);
            None
        }
    }
}
