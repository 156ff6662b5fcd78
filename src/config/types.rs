use serde::{Deserialize, Serialize};

use crate::composer::{Action, Tone};

/// Environment variable consulted when `gateway.api_key` is not set.
pub const API_KEY_ENV: &str = "POSTCRAFT_API_KEY";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and how to reach the generation web API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Scheme + host + port (e.g., "http://127.0.0.1:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_generate_path")]
    pub generate_path: String,
    #[serde(default = "default_improve_path")]
    pub improve_path: String,
    /// Total request timeout in seconds (default: 60).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Sent as a bearer token when present.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Initial tone/action selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notice stays on screen (default: 3).
    #[serde(default = "default_notice_seconds")]
    pub notice_seconds: u64,
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_generate_path() -> String {
    "/api/generate".to_string()
}

fn default_improve_path() -> String {
    "/api/improve".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_notice_seconds() -> u64 {
    3
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl GatewayConfig {
    /// API key from config, falling back to [`API_KEY_ENV`].
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            improve_path: default_improve_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            api_key: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_seconds: default_notice_seconds(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
