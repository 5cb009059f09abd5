//! Infrastructure implementations for the ledge session core: the
//! file-backed settings store, process-spawning application handles, path
//! resolution, and tracing setup.

pub mod launcher;
pub mod paths;
pub mod settings;
pub mod store;
pub mod telemetry;

pub use crate::launcher::{CommandApp, StaticAppProvider};
pub use crate::paths::LedgePaths;
pub use crate::settings::{DeskConfig, FileSettings};
pub use crate::store::TomlFile;
