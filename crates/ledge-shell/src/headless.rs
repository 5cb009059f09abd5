//! Headless presentation surfaces.
//!
//! Rendering backends implement the surface traits against a real
//! toolkit; this backend only tracks geometry and logs activity, which is
//! enough to drive an embedded session from a terminal.

use std::path::Path;
use std::sync::{Arc, Mutex};

use ledge_core::geometry::{Point, Size};
use ledge_core::module::Module;
use ledge_core::surface::{
    Background, Dock, MouseOverlay, RootWindow, SurfaceFactory, WidgetPanel, WindowFactory,
};

const EMBEDDED_WIDTH: f32 = 1280.0;
const EMBEDDED_HEIGHT: f32 = 720.0;

const DOCK_MIN_HEIGHT: f32 = 48.0;
const PANEL_MIN_WIDTH: f32 = 200.0;

/// Window and surface factory for headless sessions.
#[derive(Default)]
pub struct HeadlessToolkit;

impl HeadlessToolkit {
    pub fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

impl WindowFactory for HeadlessToolkit {
    fn create_fullscreen(&self) -> Arc<dyn RootWindow> {
        Arc::new(HeadlessWindow::new())
    }

    fn create_embedded(&self) -> Arc<dyn RootWindow> {
        Arc::new(HeadlessWindow::new())
    }
}

impl SurfaceFactory for HeadlessToolkit {
    fn create_background(&self) -> Arc<dyn Background> {
        Arc::new(HeadlessBackground)
    }

    fn create_dock(&self) -> Arc<dyn Dock> {
        Arc::new(HeadlessDock::default())
    }

    fn create_widget_panel(&self) -> Arc<dyn WidgetPanel> {
        Arc::new(HeadlessPanel)
    }

    fn create_mouse_overlay(&self) -> Arc<dyn MouseOverlay> {
        Arc::new(HeadlessOverlay)
    }
}

struct HeadlessWindow {
    size: Mutex<Size>,
}

impl HeadlessWindow {
    fn new() -> Self {
        Self {
            size: Mutex::new(Size::new(EMBEDDED_WIDTH, EMBEDDED_HEIGHT)),
        }
    }
}

impl RootWindow for HeadlessWindow {
    fn resize(&self, size: Size) {
        tracing::debug!("Root window resized to {}x{}", size.width, size.height);
        *self.size.lock().unwrap() = size;
    }

    fn size(&self) -> Size {
        *self.size.lock().unwrap()
    }
}

struct HeadlessBackground;

impl Background for HeadlessBackground {
    fn resize(&self, _size: Size) {}

    fn set_image(&self, path: &Path) {
        tracing::debug!("Background image set to '{}'", path.display());
    }
}

#[derive(Default)]
struct HeadlessDock {
    geometry: Mutex<(Point, Size)>,
}

impl Dock for HeadlessDock {
    fn min_height(&self) -> f32 {
        DOCK_MIN_HEIGHT
    }

    fn resize(&self, size: Size) {
        self.geometry.lock().unwrap().1 = size;
    }

    fn set_position(&self, position: Point) {
        self.geometry.lock().unwrap().0 = position;
    }

    fn position(&self) -> Point {
        self.geometry.lock().unwrap().0
    }

    fn size(&self) -> Size {
        self.geometry.lock().unwrap().1
    }

    fn refresh(&self) {}

    fn set_appearance(&self, icon_size: f32, zoom_scale: f32, zoom_disabled: bool) {
        tracing::debug!(
            "Dock appearance: icon size {icon_size}, zoom {zoom_scale}, zoom disabled {zoom_disabled}"
        );
    }

    fn update_icons(&self) {}

    fn update_icon_order(&self) {}

    fn update_taskbar(&self) {}

    fn pointer_in(&self, position: Point) {
        tracing::debug!("Pointer entered dock at {},{}", position.x, position.y);
    }

    fn pointer_out(&self) {
        tracing::debug!("Pointer left dock");
    }

    fn show_launcher(&self) {
        tracing::info!("Launcher requested");
    }
}

struct HeadlessPanel;

impl WidgetPanel for HeadlessPanel {
    fn min_width(&self) -> f32 {
        PANEL_MIN_WIDTH
    }

    fn resize(&self, _size: Size) {}

    fn set_position(&self, _position: Point) {}

    fn refresh(&self) {}

    fn reload_modules(&self, modules: &[Arc<dyn Module>]) {
        tracing::debug!("Widget panel reloaded with {} modules", modules.len());
    }
}

struct HeadlessOverlay;

impl MouseOverlay for HeadlessOverlay {
    fn show(&self) {}

    fn hide(&self) {}
}
