//! One-shot generation without the TUI.

use thiserror::Error;

use crate::composer::{Composer, Outcome, RequestKind};

#[derive(Debug, Error, PartialEq)]
pub enum HeadlessError {
    #[error("{0}")]
    RequestFailed(String),

    #[error("A request is already in flight")]
    Busy,

    #[error("The gateway returned no result")]
    NoResult,
}

/// Generate from the current draft, optionally refine, and return the
/// final result.
///
/// Blank `improve` instructions are skipped rather than toggling the
/// instructions field.
pub async fn run_once(composer: &Composer, improve: Option<&str>) -> Result<String, HeadlessError> {
    check(composer.generate().await, RequestKind::Generate)?;

    if let Some(instructions) = improve.filter(|i| !i.trim().is_empty()) {
        composer.set_instructions(instructions);
        check(composer.refine().await, RequestKind::Improve)?;
    }

    composer
        .snapshot()
        .result_text()
        .map(String::from)
        .ok_or(HeadlessError::NoResult)
}

fn check(outcome: Outcome, request: RequestKind) -> Result<(), HeadlessError> {
    match outcome {
        Outcome::Updated => Ok(()),
        Outcome::Failed(failure) => Err(HeadlessError::RequestFailed(
            failure.message_or(request.fallback_error()).to_string(),
        )),
        Outcome::Busy => Err(HeadlessError::Busy),
        Outcome::CollectingInstructions | Outcome::Cancelled => Err(HeadlessError::NoResult),
    }
}
