//! The presentation-surface seams.
//!
//! The session controller positions, resizes, and refreshes these
//! children but never draws them; rendering lives in the toolkit backend.

use std::path::Path;
use std::sync::Arc;

use crate::geometry::{Point, Size};
use crate::module::Module;

/// Base string carried in every root window title, used by window
/// managers to identify root windows.
pub const ROOT_WINDOW_TITLE: &str = "Ledge Desktop";

/// Title hint marking a normal window that should be skipped by the
/// taskbar, like the X11 SkipTaskbar hint.
pub const SKIP_TASKBAR_HINT: &str = "Ledge:skip";

/// The single top-level surface hosting the desktop shell.
pub trait RootWindow: Send + Sync {
    /// Resizes the window, in logical units.
    fn resize(&self, size: Size);

    /// The window's current size, in logical units.
    fn size(&self) -> Size;
}

/// The desktop background child, drawn below everything else.
pub trait Background: Send + Sync {
    fn resize(&self, size: Size);

    /// Swaps the background image. An empty path clears it.
    fn set_image(&self, path: &Path);
}

/// The launcher/taskbar child, docked to the bottom edge.
pub trait Dock: Send + Sync {
    /// Minimum height the dock needs, in logical units.
    fn min_height(&self) -> f32;

    fn resize(&self, size: Size);

    fn set_position(&self, position: Point);

    fn position(&self) -> Point;

    fn size(&self) -> Size;

    fn refresh(&self);

    /// Copies launcher appearance settings into the dock's runtime state.
    fn set_appearance(&self, icon_size: f32, zoom_scale: f32, zoom_disabled: bool);

    /// Rebuilds the dock's icon set from the current settings.
    fn update_icons(&self);

    /// Reorders icons; reads the icon list, so call after `update_icons`.
    fn update_icon_order(&self);

    /// Rebuilds the taskbar portion; reads the icon list.
    fn update_taskbar(&self);

    /// Forwards a synthesized pointer-enter event at `position`.
    fn pointer_in(&self, position: Point);

    /// Forwards a synthesized pointer-leave event.
    fn pointer_out(&self);

    /// Opens the application launcher overlay.
    fn show_launcher(&self);
}

/// The module widget panel child, docked to the right edge.
pub trait WidgetPanel: Send + Sync {
    /// Minimum width the panel needs, in logical units.
    fn min_width(&self) -> f32;

    fn resize(&self, size: Size);

    fn set_position(&self, position: Point);

    fn refresh(&self);

    /// Rebuilds the panel's widgets against a fresh module set.
    fn reload_modules(&self, modules: &[Arc<dyn Module>]);
}

/// The pointer overlay child, shown only while the window manager
/// delegates cursor drawing to the shell.
pub trait MouseOverlay: Send + Sync {
    fn show(&self);

    fn hide(&self);
}

/// Creates root windows for the two session modes.
pub trait WindowFactory: Send + Sync {
    /// A fullscreen root for real-device sessions; sized by the session
    /// from the primary screen.
    fn create_fullscreen(&self) -> Arc<dyn RootWindow>;

    /// A fixed-size windowed root for embedded (headless/test) sessions.
    fn create_embedded(&self) -> Arc<dyn RootWindow>;
}

/// Creates the opaque presentation children composed under the root.
pub trait SurfaceFactory: Send + Sync {
    fn create_background(&self) -> Arc<dyn Background>;

    fn create_dock(&self) -> Arc<dyn Dock>;

    fn create_widget_panel(&self) -> Arc<dyn WidgetPanel>;

    fn create_mouse_overlay(&self) -> Arc<dyn MouseOverlay>;
}
