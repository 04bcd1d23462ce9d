//! InkPad core: a multi-document editing session with formatting state,
//! persistence, search, auto-save and PDF export.
//!
//! The FLTK front end lives in the binary (`gui` feature) and drives
//! [`app::SessionManager`] through [`app::Command`]s.

pub mod app;
