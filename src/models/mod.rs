//! Data models for the BrainLearn explorer.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Subject`] - A selectable topical area on the brain map
//! - [`Message`] - A single chat message (sender, text, timestamp)
//! - [`SubjectContent`] - Static learning material shown in the content pane
//! - [`LearningMode`] - The four content tabs (text, visual, audio, interactive)
//!
//! All of these are either immutable static data or created-once records;
//! nothing in here is mutated after construction.

pub mod content;
pub mod message;
pub mod subject;

pub use content::{LearningMode, SubjectContent};
pub use message::{Message, Sender};
pub use subject::Subject;
