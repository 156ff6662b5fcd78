//! postcraft: rewrite short posts through a remote text-generation service.
//!
//! The [`composer`] owns the generation/refinement state machine; the
//! [`gateway`] reaches the remote service; [`ui`] is a terminal front-end
//! and [`headless`] a one-shot mode for scripts.

pub mod cli;
pub mod clipboard;
pub mod composer;
pub mod config;
pub mod gateway;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod notice;
pub mod ui;
