//! Remote generation gateway.
//!
//! The composer only sees the [`Gateway`] trait: given a structured
//! request it eventually yields text or a [`RequestFailed`]. Transport,
//! authentication and encoding belong to the implementation.

mod error;
mod http;

use async_trait::async_trait;
use serde::Serialize;

use crate::composer::{Action, Tone};

pub use error::{GatewayError, RequestFailed};
pub use http::HttpGateway;

/// Initial generation from the user's draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    #[serde(rename = "tweet")]
    pub text: String,
    #[serde(rename = "mood")]
    pub tone: Tone,
    pub action: Action,
}

/// Refinement of a previous result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImproveRequest {
    #[serde(rename = "result")]
    pub prior_result: String,
    #[serde(rename = "mood")]
    pub tone: Tone,
    pub action: Action,
    #[serde(rename = "improvePrompt")]
    pub instructions: String,
    #[serde(rename = "tweet")]
    pub original_text: String,
}

#[async_trait]
pub trait Gateway: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, RequestFailed>;

    async fn improve(&self, request: &ImproveRequest) -> Result<String, RequestFailed>;
}
