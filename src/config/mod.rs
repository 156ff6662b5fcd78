//! Configuration loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, Defaults, GatewayConfig, UiConfig, API_KEY_ENV};
