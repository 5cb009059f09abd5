//! The window-manager seam.

use async_trait::async_trait;

use crate::error::{LedgeError, Result};

/// The window manager collaborating with a session.
///
/// The session calls `run` exactly once, asynchronously, at activation;
/// the window manager in turn forwards pointer enter/leave events to the
/// session (`Session::pointer_entered` / `Session::pointer_left`).
#[async_trait]
pub trait WindowManager: Send + Sync {
    /// Runs the window manager's event loop until process exit.
    async fn run(&self);

    /// Captures the full screen contents.
    ///
    /// # Errors
    ///
    /// Backends without capture support return `Unsupported`.
    async fn capture_screen(&self) -> Result<()> {
        Err(LedgeError::Unsupported("screen capture"))
    }

    /// Captures the currently focused window.
    ///
    /// # Errors
    ///
    /// Backends without capture support return `Unsupported`.
    async fn capture_window(&self) -> Result<()> {
        Err(LedgeError::Unsupported("window capture"))
    }
}

/// A no-op window manager for embedded (headless/test) sessions.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedWindowManager;

#[async_trait]
impl WindowManager for EmbeddedWindowManager {
    async fn run(&self) {}

    async fn capture_screen(&self) -> Result<()> {
        Ok(())
    }

    async fn capture_window(&self) -> Result<()> {
        Ok(())
    }
}
