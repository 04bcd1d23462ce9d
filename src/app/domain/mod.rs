//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document and DocumentId
//! - Character styles and the pending insertion style
//! - Application settings and theme identifiers
//! - Command types dispatched by the session

pub mod command;
pub mod document;
pub mod formatting;
pub mod settings;
pub mod theme;

pub use command::{Command, CommandOutcome};
pub use document::{Document, DocumentId};
pub use formatting::{FormattingState, StyleAttribute, StyleBuffer, StyleRun, TextStyle};
pub use settings::{AppSettings, FontSetting};
pub use theme::ThemeId;
