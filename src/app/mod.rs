//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, styles, Command, settings)
//! - `controllers/` - Orchestration (TabManager, AutoSaveScheduler)
//! - `services/` - Business operations (search, PDF export, settings store, theme)
//! - `infrastructure/` - Error types and the notification port
//! - `state.rs` - SessionManager, the single entry point for commands

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::autosave::{AutoSaveOutcome, AutoSaveScheduler, AutoSaveState};
pub use domain::{
    AppSettings, Command, CommandOutcome, Document, DocumentId, FontSetting, StyleAttribute,
    TextStyle, ThemeId,
};
pub use infrastructure::error::{AppError, ErrorKind};
pub use infrastructure::notifier::{LogNotifier, NoticeLevel, Notifier};
pub use services::search::SearchOutcome;
pub use services::settings::{JsonSettingsStore, MemorySettings, SettingsPort};
pub use state::SessionManager;
