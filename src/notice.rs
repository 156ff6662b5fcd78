//! Transient user notifications.
//!
//! A notice is shown for a fixed time after it is pushed and then
//! disappears on its own. Nothing here is persisted.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Oldest notices are dropped beyond this many.
const MAX_NOTICES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: Instant,
}

impl Notice {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: NoticeLevel, message: impl Into<String>, now: Instant) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            level,
            message: message.into(),
            created_at: now,
        });
    }

    /// All notices, oldest first, expired or not.
    pub fn all(&self) -> Vec<Notice> {
        self.notices.iter().cloned().collect()
    }

    /// Notices still visible at `now`, oldest first.
    pub fn active(&self, now: Instant, ttl: Duration) -> Vec<Notice> {
        self.notices
            .iter()
            .filter(|n| !n.is_expired(now, ttl))
            .cloned()
            .collect()
    }

    /// Drop expired notices. Returns true if anything was removed.
    pub fn prune(&mut self, now: Instant, ttl: Duration) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| !n.is_expired(now, ttl));
        self.notices.len() != before
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(3);

    #[test]
    fn notices_expire_after_ttl() {
        let start = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at(NoticeLevel::Error, "boom", start);

        assert_eq!(board.active(start + Duration::from_secs(1), TTL).len(), 1);
        assert!(board.active(start + TTL, TTL).is_empty());
    }

    #[test]
    fn prune_removes_only_expired() {
        let start = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at(NoticeLevel::Error, "old", start);
        board.push_at(NoticeLevel::Success, "new", start + Duration::from_secs(2));

        assert!(board.prune(start + TTL, TTL));
        let remaining = board.all();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "new");

        assert!(!board.prune(start + TTL, TTL));
    }

    #[test]
    fn board_is_bounded() {
        let mut board = NoticeBoard::new();
        for i in 0..(MAX_NOTICES + 4) {
            board.push(NoticeLevel::Success, format!("n{i}"));
        }
        assert_eq!(board.len(), MAX_NOTICES);
        assert_eq!(board.all()[0].message, "n4");
    }
}
