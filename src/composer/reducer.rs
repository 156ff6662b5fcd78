//! Reducer for composer state transitions.

use crate::mvi::Reducer;

use super::intent::ComposerIntent;
use super::state::{ComposerState, Phase, RequestKind};

pub struct ComposerReducer;

impl Reducer for ComposerReducer {
    type State = ComposerState;
    type Intent = ComposerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposerIntent::EditDraft(draft) => state.draft = draft,
            ComposerIntent::EditInstructions(instructions) => state.instructions = instructions,
            ComposerIntent::SelectTone(tone) => state.tone = tone,
            ComposerIntent::SelectAction(action) => state.action = action,

            ComposerIntent::ToggleInstructions => {
                state.phase = match state.phase {
                    Phase::Idle => Phase::CollectingInstructions,
                    Phase::CollectingInstructions => Phase::Idle,
                    submitting @ Phase::Submitting { .. } => submitting,
                };
            }

            ComposerIntent::Begin(request) => {
                state.phase = match state.phase {
                    Phase::Idle => Phase::Submitting {
                        request,
                        collecting: false,
                    },
                    Phase::CollectingInstructions => Phase::Submitting {
                        request,
                        collecting: true,
                    },
                    submitting @ Phase::Submitting { .. } => submitting,
                };
            }

            ComposerIntent::Succeeded { request, text } => {
                if let Phase::Submitting {
                    request: in_flight,
                    collecting,
                } = state.phase
                {
                    if in_flight == request {
                        state.result = Some(text);
                        state.phase = match request {
                            RequestKind::Generate => resting(collecting),
                            RequestKind::Improve => {
                                state.instructions.clear();
                                Phase::Idle
                            }
                        };
                    }
                }
            }

            ComposerIntent::Failed | ComposerIntent::Release => {
                if let Phase::Submitting { collecting, .. } = state.phase {
                    state.phase = resting(collecting);
                }
            }
        }
        state
    }
}

/// Phase to return to once a request is over.
fn resting(collecting: bool) -> Phase {
    if collecting {
        Phase::CollectingInstructions
    } else {
        Phase::Idle
    }
}
