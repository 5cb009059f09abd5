//! Root-surface layout policy.
//!
//! Invoked whenever the root window is resized. Children are always
//! resized before they are moved, and refreshed last, so a child is never
//! visible at its old position with its new size.

use ledge_core::geometry::{Point, Size};

use crate::session::SurfaceSet;

/// Computed placement for one child: its new size and position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub size: Size,
    pub position: Point,
}

/// Dock placement: full width, minimum height, flush against the bottom
/// edge. One unit of height slack is added so rounding cannot trigger a
/// false pointer-out on the bottom edge.
pub fn dock_placement(surface: Size, min_height: f32) -> Placement {
    Placement {
        size: Size::new(surface.width, min_height + 1.0),
        position: Point::new(0.0, surface.height - min_height),
    }
}

/// Widget-panel placement: minimum width, full height, flush against the
/// right edge.
pub fn panel_placement(surface: Size, min_width: f32) -> Placement {
    Placement {
        size: Size::new(min_width, surface.height),
        position: Point::new(surface.width - min_width, 0.0),
    }
}

/// Applies the layout to every child of the root surface.
pub(crate) fn apply(surfaces: &SurfaceSet, size: Size) {
    surfaces.background.resize(size);

    let dock = dock_placement(size, surfaces.dock.min_height());
    surfaces.dock.resize(dock.size);
    surfaces.dock.set_position(dock.position);
    surfaces.dock.refresh();

    let panel = panel_placement(size, surfaces.widgets.min_width());
    surfaces.widgets.resize(panel.size);
    surfaces.widgets.set_position(panel.position);
    surfaces.widgets.refresh();
}
