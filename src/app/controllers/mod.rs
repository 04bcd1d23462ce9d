//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Tab management
//! - Auto-save scheduling

pub mod autosave;
pub mod tabs;
