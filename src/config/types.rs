use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Connection settings for the managed backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// GraphQL endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Environment variable holding the API key (default: "QUOTEGEN_API_KEY").
    #[serde(default = "default_api_key_env_var")]
    pub api_key_env_var: String,
    /// Query name discriminator for the counter record (default: "LIVE").
    #[serde(default = "default_query_name")]
    pub query_name: String,
    /// Deadline for the counter read in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the generator workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// What activating the button does while a generation is already in
    /// flight (default: ignore).
    #[serde(default)]
    pub retrigger: RetriggerPolicy,
    /// Deadline for the generate call in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Policy for re-activating the generator while one is processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetriggerPolicy {
    /// Re-activation is a no-op until the in-flight call settles.
    #[default]
    Ignore,
    /// Cancel the in-flight call and start over.
    Restart,
}

fn default_api_url() -> String {
    "https://api.quotegen.dev/graphql".to_string()
}

fn default_api_key_env_var() -> String {
    "QUOTEGEN_API_KEY".to_string()
}

fn default_query_name() -> String {
    "LIVE".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key_env_var: default_api_key_env_var(),
            query_name: default_query_name(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            retrigger: RetriggerPolicy::default(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}
