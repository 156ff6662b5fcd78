//! Shared test utilities: a scripted gateway and a recording clipboard.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use postcraft::clipboard::{ClipboardError, TextClipboard};
use postcraft::composer::{Composer, ComposerState};
use postcraft::gateway::{Gateway, GenerateRequest, ImproveRequest, RequestFailed};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Notify;

/// A request the scripted gateway received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Generate(GenerateRequest),
    Improve(ImproveRequest),
}

/// Gateway that answers from a queue and records every call.
///
/// When held, each call waits for [`ScriptedGateway::release`] before
/// answering, so tests can observe the composer mid-request.
#[derive(Default)]
pub struct ScriptedGateway {
    responses: Mutex<VecDeque<Result<String, RequestFailed>>>,
    calls: Mutex<Vec<Call>>,
    gate: Option<Notify>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::default()
        }
    }

    pub fn reply(self, text: &str) -> Self {
        self.responses.lock().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, message: Option<&str>) -> Self {
        let failure = match message {
            Some(message) => RequestFailed::new(message),
            None => RequestFailed::without_message(),
        };
        self.responses.lock().push_back(Err(failure));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Yield until at least `n` calls have arrived.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls.lock().len() < n {
            tokio::task::yield_now().await;
        }
    }

    async fn answer(&self, call: Call) -> Result<String, RequestFailed> {
        self.calls.lock().push(call);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(RequestFailed::new("no scripted response")))
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, RequestFailed> {
        self.answer(Call::Generate(request.clone())).await
    }

    async fn improve(&self, request: &ImproveRequest) -> Result<String, RequestFailed> {
        self.answer(Call::Improve(request.clone())).await
    }
}

/// Clipboard that remembers what was written, or always fails.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub broken: bool,
}

impl TextClipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Write("no clipboard owner".into()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

pub fn composer_with(gateway: Arc<ScriptedGateway>, state: ComposerState) -> Composer {
    Composer::with_state(gateway, state)
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
