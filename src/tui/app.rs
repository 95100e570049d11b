//! TUI application state and event handling.
//!
//! This module implements the main application logic for the BrainLearn
//! explorer. It manages:
//!
//! - **Subject selection**: Cursor over the brain-map nodes, Enter activates
//! - **Content tabs**: Cycling the four learning modes for the active subject
//! - **Chat session**: Opening/closing the assistant, feeding the input line,
//!   and draining scheduled replies every tick
//! - **Status messages**: Transient feedback for clipboard operations
//! - **Dirty state tracking**: Rendering only when state changes
//!
//! # Architecture
//!
//! The `App` struct owns all application state and runs the main event loop
//! via `run()`. Every mutation happens in response to a keyboard event or a
//! due reply drained from the [`ChatSession`]; the renderer only ever sees a
//! read-only [`RenderState`] snapshot.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_transcript;
use crate::models::{LearningMode, Subject};
use crate::session::ChatSession;
use crate::subjects;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;

/// Chat input is capped to keep the single-line input pane sane
const MAX_INPUT_LEN: usize = 500;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    subjects: &'static [Subject],
    selected_idx: usize,
    active_subject: Option<&'static Subject>,
    mode: LearningMode,
    session: ChatSession,
    input: String,
    should_quit: bool,
    // Status message (clipboard feedback, etc.)
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            subjects: subjects::all(),
            selected_idx: 0,
            active_subject: None,
            mode: LearningMode::Text,
            session: ChatSession::new().with_reply_delay(reply_delay),
            input: String::new(),
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Land any scheduled replies that came due; this happens whether
            // or not the chat pane is currently open
            if self.session.poll_pending(Instant::now()) > 0 {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let state = RenderState {
                        subjects: self.subjects,
                        selected_idx: self.selected_idx,
                        active_subject: self.active_subject,
                        mode: self.mode,
                        session: self.session.snapshot(),
                        input: &self.input,
                        thinking: self.session.has_pending_reply(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(100), self.session.is_open())?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::NextMode => {
                self.mode = self.mode.next();
                self.needs_redraw = true;
            }
            Action::PrevMode => {
                self.mode = self.mode.prev();
                self.needs_redraw = true;
            }
            Action::SelectSubject => {
                let subject: &'static Subject = &self.subjects[self.selected_idx];
                self.active_subject = Some(subject);
                self.session.select_subject(subject.id);
                self.needs_redraw = true;
            }
            Action::OpenChat => {
                self.session.open();
                self.needs_redraw = true;
            }
            Action::CloseChat => {
                self.session.close();
                self.needs_redraw = true;
            }
            Action::ChatInput(c) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                    self.needs_redraw = true;
                }
            }
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.needs_redraw = true;
                }
            }
            Action::SubmitMessage => {
                // Whitespace-only input is silently ignored; the buffer is
                // kept so the user can keep typing
                if self.session.submit(&self.input) {
                    self.input.clear();
                    self.needs_redraw = true;
                }
            }
            Action::CopyTranscript => {
                match copy_transcript(&self.session.transcript()) {
                    Ok(()) => {
                        self.set_status(
                            "✓ Transcript copied to clipboard",
                            MessageType::Success,
                            STATUS_SUCCESS_DURATION_MS,
                        );
                    }
                    Err(e) => {
                        self.set_status(
                            format!("✗ Clipboard error: {}", e),
                            MessageType::Error,
                            STATUS_ERROR_DURATION_MS,
                        );
                    }
                }
            }
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.subjects.len();
        if total == 0 {
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }
}
