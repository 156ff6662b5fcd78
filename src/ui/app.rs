use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clipboard::TextClipboard;
use crate::composer::{Composer, ComposerState, Outcome};
use crate::notice::Notice;
use crate::ui::input::InputAction;

/// Which text field receives typed characters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Draft,
    Instructions,
}

/// Work the runtime must run off the input path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UiCommand {
    Generate,
    Refine,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    composer: Arc<Composer>,
    clipboard: Box<dyn TextClipboard>,
    notice_ttl: Duration,
    animation_tick: u8,
}

impl App {
    pub fn new(
        composer: Arc<Composer>,
        clipboard: Box<dyn TextClipboard>,
        notice_ttl: Duration,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Draft,
            composer,
            clipboard,
            notice_ttl,
            animation_tick: 0,
        }
    }

    pub fn composer(&self) -> &Arc<Composer> {
        &self.composer
    }

    pub fn snapshot(&self) -> ComposerState {
        self.composer.snapshot()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn active_notices(&self) -> Vec<Notice> {
        self.composer.active_notices(Instant::now(), self.notice_ttl)
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.composer.prune_notices(Instant::now(), self.notice_ttl);
    }

    /// Apply a classified key press.
    ///
    /// Request triggers and selection changes are disabled while a request
    /// is in flight.
    pub fn apply(&mut self, action: InputAction) -> Option<UiCommand> {
        let busy = self.composer.is_busy();
        let command = match action {
            InputAction::None => None,
            InputAction::Quit => {
                self.should_quit = true;
                None
            }
            InputAction::Generate if !busy => Some(UiCommand::Generate),
            InputAction::Refine if !busy => Some(UiCommand::Refine),
            InputAction::Generate | InputAction::Refine => None,
            InputAction::Copy => {
                self.composer.copy_result(self.clipboard.as_mut());
                None
            }
            InputAction::CycleTone => {
                if !busy {
                    self.composer.cycle_tone();
                }
                None
            }
            InputAction::CycleAction => {
                if !busy {
                    self.composer.cycle_action();
                }
                None
            }
            InputAction::SwitchFocus => {
                if self.snapshot().is_improvement_mode() {
                    self.focus = match self.focus {
                        Focus::Draft => Focus::Instructions,
                        Focus::Instructions => Focus::Draft,
                    };
                }
                None
            }
            InputAction::FocusDraft => {
                self.focus = Focus::Draft;
                None
            }
            InputAction::Insert(ch) => {
                self.edit_focused(|text| text.push(ch));
                None
            }
            InputAction::Newline => {
                self.edit_focused(|text| text.push('\n'));
                None
            }
            InputAction::Backspace => {
                self.edit_focused(|text| {
                    text.pop();
                });
                None
            }
        };
        self.sync_focus();
        command
    }

    pub fn on_paste(&mut self, pasted: &str) {
        self.edit_focused(|text| text.push_str(pasted));
    }

    pub fn on_request_finished(&mut self, outcome: &Outcome) {
        if matches!(outcome, Outcome::CollectingInstructions) {
            self.focus = Focus::Instructions;
        }
        self.sync_focus();
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let state = self.snapshot();
        match self.focus {
            Focus::Draft => {
                let mut draft = state.draft;
                edit(&mut draft);
                self.composer.set_draft(draft);
            }
            Focus::Instructions => {
                let mut instructions = state.instructions;
                edit(&mut instructions);
                self.composer.set_instructions(instructions);
            }
        }
    }

    /// The instructions field only exists in improvement mode.
    fn sync_focus(&mut self) {
        if self.focus == Focus::Instructions && !self.snapshot().is_improvement_mode() {
            self.focus = Focus::Draft;
        }
    }
}
