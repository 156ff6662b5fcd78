//! Composer state.

use crate::mvi::UiState;

use super::options::{Action, Tone};

/// Which gateway endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Generate,
    Improve,
}

impl RequestKind {
    /// Notice shown when a failure carries no message of its own.
    pub fn fallback_error(self) -> &'static str {
        match self {
            RequestKind::Generate => "Error refining post",
            RequestKind::Improve => "Error improving response",
        }
    }
}

/// Interaction phase.
///
/// Replaces a busy flag plus an improvement-mode flag, so that
/// "busy" and "collecting" can only combine in the ways listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,

    /// The instructions field is shown; no request is in flight.
    CollectingInstructions,

    /// A request is in flight.
    Submitting {
        request: RequestKind,
        /// Whether instructions were being collected when the request
        /// started. Restored if the request does not succeed.
        collecting: bool,
    },
}

/// Everything the composer view needs to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposerState {
    pub draft: String,
    pub result: Option<String>,
    pub instructions: String,
    pub tone: Tone,
    pub action: Action,
    pub phase: Phase,
}

impl UiState for ComposerState {}

impl ComposerState {
    pub fn with_selection(tone: Tone, action: Action) -> Self {
        Self {
            tone,
            action,
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// True while the instructions field should be shown.
    pub fn is_improvement_mode(&self) -> bool {
        matches!(
            self.phase,
            Phase::CollectingInstructions | Phase::Submitting { collecting: true, .. }
        )
    }

    /// Latest result, treating an empty string as no result.
    pub fn result_text(&self) -> Option<&str> {
        self.result.as_deref().filter(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_default() {
        let state = ComposerState::default();
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.is_busy());
        assert!(!state.is_improvement_mode());
        assert_eq!(state.result, None);
    }

    #[test]
    fn improvement_mode_survives_submission() {
        let state = ComposerState {
            phase: Phase::Submitting {
                request: RequestKind::Improve,
                collecting: true,
            },
            ..ComposerState::default()
        };
        assert!(state.is_busy());
        assert!(state.is_improvement_mode());
    }

    #[test]
    fn empty_result_is_no_result() {
        let state = ComposerState {
            result: Some(String::new()),
            ..ComposerState::default()
        };
        assert_eq!(state.result_text(), None);
    }
}
