//! Generation/refinement interaction.
//!
//! - `state.rs` - what the view renders
//! - `intent.rs` - edits, selections and request lifecycle events
//! - `reducer.rs` - pure state transitions
//! - `controller.rs` - [`Composer`], which runs gateway requests
//! - `options.rs` - tone and action

mod controller;
mod intent;
mod options;
mod reducer;
mod state;

pub use controller::{Composer, Outcome, COPIED_NOTICE};
pub use intent::ComposerIntent;
pub use options::{Action, ParseOptionError, Tone};
pub use reducer::ComposerReducer;
pub use state::{ComposerState, Phase, RequestKind};
