use crate::composer::{ComposerState, Phase, RequestKind};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Header<'a> {
    state: &'a ComposerState,
    animation_tick: u8,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a ComposerState, animation_tick: u8) -> Self {
        Self {
            state,
            animation_tick,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let value_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  postcraft", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("Tone: ", text_style),
            Span::styled(self.state.tone.to_string(), value_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Action: ", text_style),
            Span::styled(self.state.action.to_string(), value_style),
        ];

        if let Some(status) = status_text(self.state.phase) {
            let spinner =
                SPINNER_FRAMES[(self.animation_tick as usize) % SPINNER_FRAMES.len()];
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} {}", spinner, status),
                Style::default().fg(STATUS_OK),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn status_text(phase: Phase) -> Option<&'static str> {
    match phase {
        Phase::Submitting {
            request: RequestKind::Generate,
            ..
        } => Some("Generating..."),
        Phase::Submitting {
            request: RequestKind::Improve,
            ..
        } => Some("Improving..."),
        Phase::Idle | Phase::CollectingInstructions => None,
    }
}
