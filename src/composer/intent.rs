//! Intents for the composer.

use crate::mvi::Intent;

use super::options::{Action, Tone};
use super::state::RequestKind;

#[derive(Debug, Clone)]
pub enum ComposerIntent {
    EditDraft(String),
    EditInstructions(String),
    SelectTone(Tone),
    SelectAction(Action),

    /// Enter instruction collection, or back out of it.
    ToggleInstructions,

    /// A request is about to be sent.
    Begin(RequestKind),

    /// The gateway answered with new text.
    Succeeded { request: RequestKind, text: String },

    /// The gateway call failed. The result is kept.
    Failed,

    /// End of the request scope. Returns to idle if nothing else did.
    Release,
}

impl Intent for ComposerIntent {}
