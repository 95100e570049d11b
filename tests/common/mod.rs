//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::time::{Duration, Instant};

use brainlearn::session::{ChatSession, DEFAULT_REPLY_DELAY_MS};

/// Drives a [`ChatSession`] with a virtual clock so tests never sleep
pub struct SessionDriver {
    pub session: ChatSession,
    now: Instant,
}

impl SessionDriver {
    /// A fresh, closed session
    pub fn new() -> Self {
        Self { session: ChatSession::new(), now: Instant::now() }
    }

    /// An open session with the given subject already selected (greeting seeded)
    pub fn open_with_subject(subject_id: &str) -> Self {
        let mut driver = Self::new();
        driver.session.select_subject(subject_id);
        driver.session.open();
        driver
    }

    /// Submit user text at the current virtual time
    pub fn submit(&mut self, text: &str) -> bool {
        self.session.submit_at(text, self.now)
    }

    /// Advance the virtual clock and drain due replies; returns how many landed
    pub fn advance_ms(&mut self, ms: u64) -> usize {
        self.now += Duration::from_millis(ms);
        self.session.poll_pending(self.now)
    }

    /// Advance past the default reply delay
    pub fn settle(&mut self) -> usize {
        self.advance_ms(DEFAULT_REPLY_DELAY_MS + 1)
    }
}

impl Default for SessionDriver {
    fn default() -> Self {
        Self::new()
    }
}
