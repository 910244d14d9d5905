//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use quotegen::config::Config;

/// Config pointing at a mock backend endpoint.
pub fn config_for(api_url: &str) -> Config {
    let mut config = Config::default();
    config.backend.api_url = api_url.to_string();
    config
}
