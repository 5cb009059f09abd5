//! The settings-store seam.

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::error::Result;

/// User preferences consumed by the session core.
///
/// The live value behind this trait is always current: change
/// notifications carry no payload, and reactors re-read the accessors.
pub trait DeskSettings: Send + Sync {
    /// Path to the desktop background image. Empty means "no background".
    fn background(&self) -> PathBuf;

    /// Icon size for the launcher bar, in logical units.
    fn launcher_icon_size(&self) -> f32;

    /// Zoom factor applied to launcher icons under the pointer.
    fn launcher_zoom_scale(&self) -> f32;

    /// Whether launcher zoom is disabled entirely.
    fn launcher_zoom_disabled(&self) -> bool;

    /// Whether the named module is enabled.
    fn module_enabled(&self, name: &str) -> bool;

    /// The persisted recent-application names, most recent first.
    fn recent_apps(&self) -> Vec<String>;

    /// Persists the recent-application names, most recent first.
    fn save_recent_apps(&self, names: &[String]) -> Result<()>;

    /// Registers a channel that receives a token on every settings change.
    fn watch(&self, notify: mpsc::Sender<()>);
}
