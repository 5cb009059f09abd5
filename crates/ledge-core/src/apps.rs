//! Application lookup and launch handles.

use std::sync::Arc;

use crate::error::Result;

/// A launchable application known to the desktop.
///
/// App identity throughout the session core is the application name;
/// the recent-apps list dedupes on it.
pub trait AppData: Send + Sync {
    /// The application's unique display name.
    fn name(&self) -> &str;

    /// Starts the application process with the given extra environment.
    ///
    /// # Errors
    ///
    /// Returns a `Launch` error if the process failed to start.
    fn run(&self, env: &[(String, String)]) -> Result<()>;
}

/// Looks up applications (and their icons) from the operating system.
pub trait ApplicationProvider: Send + Sync {
    /// All applications the provider knows about.
    fn available_apps(&self) -> Vec<Arc<dyn AppData>>;

    /// Finds an application by its name.
    fn find_app(&self, name: &str) -> Option<Arc<dyn AppData>>;
}
