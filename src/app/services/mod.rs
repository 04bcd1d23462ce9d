//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Text search and highlighting
//! - PDF export
//! - Settings store and theme persistence
//! - Text operations

pub mod pdf;
pub mod search;
pub mod settings;
pub mod text_ops;
pub mod theme;
