//! The composer: turns user actions into at most one gateway request.

use parking_lot::Mutex;
use scopeguard::defer;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clipboard::TextClipboard;
use crate::gateway::{Gateway, GenerateRequest, ImproveRequest, RequestFailed};
use crate::mvi::Reducer;
use crate::notice::{Notice, NoticeBoard, NoticeLevel};

use super::intent::ComposerIntent;
use super::options::{Action, Tone};
use super::reducer::ComposerReducer;
use super::state::{ComposerState, Phase, RequestKind};

/// Notice pushed after a successful copy.
pub const COPIED_NOTICE: &str = "Text copied to clipboard";

/// What a `generate()` or `refine()` call ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A request succeeded and the result was replaced.
    Updated,
    /// Entered instruction collection. No request was sent.
    CollectingInstructions,
    /// Left instruction collection with nothing typed. No request was sent.
    Cancelled,
    /// The request failed. The result is unchanged and a notice was pushed.
    Failed(RequestFailed),
    /// Another request is still in flight. Nothing happened.
    Busy,
}

/// Interaction controller.
///
/// All operations take `&self`; state lives behind a mutex that is never
/// held across a gateway call, so the view can take snapshots while a
/// request is suspended.
pub struct Composer {
    state: Mutex<ComposerState>,
    notices: Mutex<NoticeBoard>,
    gateway: Arc<dyn Gateway>,
}

impl Composer {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self::with_state(gateway, ComposerState::default())
    }

    pub fn with_state(gateway: Arc<dyn Gateway>, state: ComposerState) -> Self {
        Self {
            state: Mutex::new(state),
            notices: Mutex::new(NoticeBoard::new()),
            gateway,
        }
    }

    pub fn snapshot(&self) -> ComposerState {
        self.state.lock().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.lock().is_busy()
    }

    pub fn dispatch(&self, intent: ComposerIntent) {
        let mut state = self.state.lock();
        *state = ComposerReducer::reduce(std::mem::take(&mut *state), intent);
    }

    pub fn set_draft(&self, draft: impl Into<String>) {
        self.dispatch(ComposerIntent::EditDraft(draft.into()));
    }

    pub fn set_instructions(&self, instructions: impl Into<String>) {
        self.dispatch(ComposerIntent::EditInstructions(instructions.into()));
    }

    pub fn select_tone(&self, tone: Tone) {
        self.dispatch(ComposerIntent::SelectTone(tone));
    }

    pub fn select_action(&self, action: Action) {
        self.dispatch(ComposerIntent::SelectAction(action));
    }

    pub fn cycle_tone(&self) -> Tone {
        let mut state = self.state.lock();
        let tone = state.tone.next();
        *state = ComposerReducer::reduce(std::mem::take(&mut *state), ComposerIntent::SelectTone(tone));
        tone
    }

    pub fn cycle_action(&self) -> Action {
        let mut state = self.state.lock();
        let action = state.action.next();
        *state =
            ComposerReducer::reduce(std::mem::take(&mut *state), ComposerIntent::SelectAction(action));
        action
    }

    /// Every notice pushed so far that has not been pruned, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().all()
    }

    pub fn active_notices(&self, now: Instant, ttl: Duration) -> Vec<Notice> {
        self.notices.lock().active(now, ttl)
    }

    pub fn prune_notices(&self, now: Instant, ttl: Duration) -> bool {
        self.notices.lock().prune(now, ttl)
    }

    /// Generate a rewrite of the current draft.
    ///
    /// The draft is sent as-is, even when empty.
    pub async fn generate(&self) -> Outcome {
        let request = {
            let mut state = self.state.lock();
            if state.is_busy() {
                return Outcome::Busy;
            }
            let request = GenerateRequest {
                text: state.draft.clone(),
                tone: state.tone,
                action: state.action,
            };
            *state = ComposerReducer::reduce(
                std::mem::take(&mut *state),
                ComposerIntent::Begin(RequestKind::Generate),
            );
            request
        };
        defer! {
            self.dispatch(ComposerIntent::Release);
        }

        tracing::debug!(
            tone = %request.tone,
            action = %request.action,
            draft_len = request.text.len(),
            "Generating"
        );

        match self.gateway.generate(&request).await {
            Ok(text) => {
                self.dispatch(ComposerIntent::Succeeded {
                    request: RequestKind::Generate,
                    text,
                });
                Outcome::Updated
            }
            Err(failure) => self.fail(RequestKind::Generate, failure),
        }
    }

    /// Ask for, cancel, or submit improvement instructions.
    ///
    /// | improvement mode | instructions | effect                       |
    /// |------------------|--------------|------------------------------|
    /// | off              | empty        | start collecting, no request |
    /// | on               | empty        | stop collecting, no request  |
    /// | any              | non-empty    | send an improve request      |
    pub async fn refine(&self) -> Outcome {
        let request = {
            let mut state = self.state.lock();
            if state.is_busy() {
                return Outcome::Busy;
            }
            if state.instructions.is_empty() {
                let entering = state.phase == Phase::Idle;
                *state = ComposerReducer::reduce(
                    std::mem::take(&mut *state),
                    ComposerIntent::ToggleInstructions,
                );
                return if entering {
                    Outcome::CollectingInstructions
                } else {
                    Outcome::Cancelled
                };
            }
            let request = ImproveRequest {
                prior_result: state.result.clone().unwrap_or_default(),
                tone: state.tone,
                action: state.action,
                instructions: state.instructions.clone(),
                original_text: state.draft.clone(),
            };
            *state = ComposerReducer::reduce(
                std::mem::take(&mut *state),
                ComposerIntent::Begin(RequestKind::Improve),
            );
            request
        };
        defer! {
            self.dispatch(ComposerIntent::Release);
        }

        tracing::debug!(
            tone = %request.tone,
            action = %request.action,
            instructions_len = request.instructions.len(),
            "Improving"
        );

        match self.gateway.improve(&request).await {
            Ok(text) => {
                self.dispatch(ComposerIntent::Succeeded {
                    request: RequestKind::Improve,
                    text,
                });
                Outcome::Updated
            }
            Err(failure) => self.fail(RequestKind::Improve, failure),
        }
    }

    /// Copy the latest result to `clipboard`.
    ///
    /// Returns false without touching the clipboard when there is no result.
    pub fn copy_result<C: TextClipboard + ?Sized>(&self, clipboard: &mut C) -> bool {
        let Some(text) = self.state.lock().result_text().map(String::from) else {
            return false;
        };

        match clipboard.set_text(&text) {
            Ok(()) => {
                self.notices.lock().push(NoticeLevel::Success, COPIED_NOTICE);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Copy failed");
                self.notices.lock().push(NoticeLevel::Error, err.to_string());
                false
            }
        }
    }

    fn fail(&self, request: RequestKind, failure: RequestFailed) -> Outcome {
        let message = failure.message_or(request.fallback_error()).to_string();
        tracing::warn!(request = ?request, error = %message, "Request failed");
        self.dispatch(ComposerIntent::Failed);
        self.notices.lock().push(NoticeLevel::Error, message);
        Outcome::Failed(failure)
    }
}
