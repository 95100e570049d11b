//! BrainLearn - An interactive educational brain map with a scripted assistant
//!
//! This library implements the logic behind the BrainLearn terminal explorer:
//!
//! - A static registry of subjects laid out as brain-map nodes
//! - Tabbed learning content for each subject (text, visual, audio, interactive)
//! - A scripted chat session: a pure keyword-rule resolver and a small
//!   open/close/subject state machine with delayed reply delivery
//!
//! # Example
//!
//! ```
//! use brainlearn::session::ChatSession;
//!
//! let mut chat = ChatSession::new();
//! chat.select_subject("math");
//! chat.open();
//! assert!(chat.messages()[0].text.contains("Mathematics"));
//! ```

pub mod cli;
pub mod clipboard;
pub mod content;
pub mod models;
pub mod responses;
pub mod session;
pub mod subjects;
pub mod tui;

// Re-export commonly used types
pub use models::{LearningMode, Message, Sender, Subject};
pub use responses::resolve;
pub use session::ChatSession;
