//! The ledge desktop session controller.
//!
//! Owns root-window provisioning, the module cache and its invalidation
//! protocol, recent-application tracking, scale-factor derivation for
//! launched child processes, and global shortcut dispatch.

pub mod layout;
pub mod recent;
pub mod scale;
pub mod session;
pub mod shortcuts;

pub use session::{Session, SessionMode};
