//! Screen topology types and the provider seam.

use tokio::sync::mpsc;

use crate::geometry::Size;

/// A single physical or virtual screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub name: String,
    /// Width in physical pixels.
    pub width: u32,
    /// Height in physical pixels.
    pub height: u32,
    /// Canvas scale converting physical pixels to toolkit-logical units.
    pub scale: f32,
}

impl Screen {
    pub fn new(name: impl Into<String>, width: u32, height: u32, scale: f32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            scale,
        }
    }

    /// The screen's dimensions in toolkit-logical units.
    pub fn logical_size(&self) -> Size {
        Size::new(self.width as f32 / self.scale, self.height as f32 / self.scale)
    }
}

/// Enumerates the screen topology and notifies on changes.
///
/// Implemented by the display backend. The session reads the full screen
/// list and the designated primary screen synchronously; topology changes
/// are signalled by a token on the registered channel.
pub trait ScreenProvider: Send + Sync {
    /// All screens, in topology order.
    fn screens(&self) -> Vec<Screen>;

    /// The designated main display, used to size the root window.
    fn primary(&self) -> Screen;

    /// The screen currently holding the pointer/focus.
    fn active(&self) -> Screen;

    /// Registers a channel that receives a token on every topology change.
    fn watch(&self, notify: mpsc::Sender<()>);
}

/// A fixed single-screen provider for embedded (headless/test) sessions.
///
/// The topology never changes, so registered watchers are simply dropped.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedScreenProvider;

impl EmbeddedScreenProvider {
    fn screen() -> Screen {
        Screen::new("embedded", 1280, 720, 1.0)
    }
}

impl ScreenProvider for EmbeddedScreenProvider {
    fn screens(&self) -> Vec<Screen> {
        vec![Self::screen()]
    }

    fn primary(&self) -> Screen {
        Self::screen()
    }

    fn active(&self) -> Screen {
        Self::screen()
    }

    fn watch(&self, _notify: mpsc::Sender<()>) {}
}
