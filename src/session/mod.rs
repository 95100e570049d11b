//! Chat session controller: conversation state and reply scheduling.
//!
//! The session is a small state machine over `{ closed, open without subject,
//! open with subject }`:
//!
//! - Opening with an active subject (or changing subject while open) clears
//!   the conversation and seeds the subject's greeting
//! - Opening without a subject, and closing, leave the conversation alone
//! - Submitting text appends the user message immediately and schedules the
//!   resolved reply a fixed delay later
//!
//! Scheduled replies are fire-and-forget: they cannot be cancelled and land
//! in the conversation even if the chat is closed before the delay elapses.
//! The session has exactly one writer (the event loop) and exposes read-only
//! [`SessionSnapshot`]s to the rendering layer, so no locking is needed.
//!
//! All time-dependent operations take an explicit `Instant` (`submit_at`,
//! `poll_pending`) so tests can drive the clock; the convenience wrappers
//! use `Instant::now()`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::models::{Message, Sender};
use crate::responses;

/// Default "thinking" delay before a scheduled reply lands. A UX constant,
/// not a correctness requirement; override with [`ChatSession::with_reply_delay`].
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// A reply that has been resolved but not yet appended
#[derive(Debug, Clone)]
struct PendingReply {
    due_at: Instant,
    text: String,
}

/// Read-only view of the session for the rendering layer
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub is_open: bool,
    pub active_subject: Option<&'a str>,
    pub messages: &'a [Message],
}

#[derive(Debug)]
pub struct ChatSession {
    is_open: bool,
    active_subject: Option<String>,
    messages: Vec<Message>,
    pending: VecDeque<PendingReply>,
    reply_delay: Duration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            is_open: false,
            active_subject: None,
            messages: Vec::new(),
            pending: VecDeque::new(),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn active_subject(&self) -> Option<&str> {
        self.active_subject.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while at least one scheduled reply has not landed yet
    pub fn has_pending_reply(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            is_open: self.is_open,
            active_subject: self.active_subject.as_deref(),
            messages: &self.messages,
        }
    }

    /// Open the chat. If a subject is already active the conversation is
    /// reseeded with its greeting; otherwise existing messages are kept.
    pub fn open(&mut self) {
        self.is_open = true;
        if let Some(id) = self.active_subject.clone() {
            self.seed_greeting(&id);
        }
    }

    /// Close the chat. Messages and pending replies are retained; a reply
    /// scheduled before closing still lands and is visible on reopen.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Record a subject selection. Changing the subject while the chat is
    /// open clears the conversation and seeds the new subject's greeting;
    /// re-selecting the current subject is a no-op.
    pub fn select_subject(&mut self, subject_id: &str) {
        if self.active_subject.as_deref() == Some(subject_id) {
            return;
        }
        self.active_subject = Some(subject_id.to_string());
        if self.is_open {
            self.seed_greeting(subject_id);
        }
    }

    fn seed_greeting(&mut self, subject_id: &str) {
        self.messages.clear();
        self.messages.push(Message::assistant(responses::greeting_for(subject_id)));
    }

    /// Submit user text. Whitespace-only input is silently ignored and
    /// returns false. Otherwise the user message is appended immediately,
    /// the reply is resolved against the current subject, and its delivery
    /// is scheduled `reply_delay` from now. Returns true.
    pub fn submit(&mut self, text: &str) -> bool {
        self.submit_at(text, Instant::now())
    }

    pub fn submit_at(&mut self, text: &str, now: Instant) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.messages.push(Message::user(text));

        // Subject context is captured at submit time, so a later subject
        // change does not alter an already-scheduled reply.
        let reply = responses::resolve(self.active_subject.as_deref(), text);
        self.pending.push_back(PendingReply { due_at: now + self.reply_delay, text: reply });
        true
    }

    /// Append every scheduled reply that is due, in scheduling order,
    /// regardless of open/closed state. Returns the number appended.
    pub fn poll_pending(&mut self, now: Instant) -> usize {
        let mut appended = 0;
        while self.pending.front().is_some_and(|reply| reply.due_at <= now) {
            if let Some(reply) = self.pending.pop_front() {
                self.messages.push(Message::assistant(reply.text));
                appended += 1;
            }
        }
        appended
    }

    /// Render the conversation as plain text for clipboard export
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|msg| {
                let who = match msg.sender {
                    Sender::User => "You",
                    Sender::Assistant => "Assistant",
                };
                format!("[{}] {}: {}", msg.created_at.format("%H:%M:%S"), who, msg.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
