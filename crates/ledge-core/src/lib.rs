//! Shared types and collaborator seams for the ledge desktop shell.
//!
//! The session controller in `ledge-session` talks to the display
//! backend, settings store, window manager, and presentation widgets
//! exclusively through the traits defined here.

pub mod apps;
pub mod error;
pub mod geometry;
pub mod module;
pub mod screen;
pub mod settings;
pub mod shortcut;
pub mod surface;
pub mod wm;

// Re-export common error type
pub use error::{LedgeError, Result};
