pub mod autosave_timer;
pub mod dialogs;
pub mod editor_view;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod messages;
pub mod notifier;
pub mod shell;
pub mod style_map;
pub mod theme;
