//! Generation parameters: tone and action.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Writing style requested from the gateway.
///
/// Sent on the wire by its display name. Read back case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Tone {
    Funny,
    Serious,
    #[default]
    Casual,
    Formal,
    Humorous,
    Sarcastic,
}

/// Kind of transformation requested from the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Action {
    #[default]
    Formatting,
    Improving,
    Correcting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
    expected: String,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Funny,
        Tone::Serious,
        Tone::Casual,
        Tone::Formal,
        Tone::Humorous,
        Tone::Sarcastic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Funny => "Funny",
            Tone::Serious => "Serious",
            Tone::Casual => "Casual",
            Tone::Formal => "Formal",
            Tone::Humorous => "Humorous",
            Tone::Sarcastic => "Sarcastic",
        }
    }

    /// Next tone in menu order, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Formatting, Action::Improving, Action::Correcting];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Formatting => "Formatting",
            Action::Improving => "Improving",
            Action::Correcting => "Correcting",
        }
    }

    /// Next action in menu order, wrapping around.
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

fn parse_named<T: Copy>(
    kind: &'static str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
    value: &str,
) -> Result<T, ParseOptionError> {
    let trimmed = value.trim();
    all.iter()
        .copied()
        .find(|v| name(*v).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ParseOptionError {
            kind,
            value: value.to_string(),
            expected: all.iter().map(|v| name(*v)).collect::<Vec<_>>().join(", "),
        })
}

impl FromStr for Tone {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("tone", &Self::ALL, Tone::as_str, s)
    }
}

impl FromStr for Action {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named("action", &Self::ALL, Action::as_str, s)
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
