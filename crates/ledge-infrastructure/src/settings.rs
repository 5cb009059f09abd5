//! The file-backed settings store.
//!
//! Settings live in a single TOML file and are cached in memory. Every
//! mutation goes through a locked read-modify-write on the file, refreshes
//! the cache, and then notifies registered watchers with an empty token.
//! Watchers re-read the accessors, so the notification itself carries no
//! payload and consecutive changes may coalesce into one token.

use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use ledge_core::Result;
use ledge_core::settings::DeskSettings;

use crate::paths::LedgePaths;
use crate::store::TomlFile;

/// The persisted settings schema.
///
/// Every field has a default so a partial or missing file still loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Path to the background image; empty means "no background".
    pub background: PathBuf,
    pub launcher_icon_size: f32,
    pub launcher_zoom_scale: f32,
    pub launcher_disable_zoom: bool,
    /// Names of modules the user has switched off.
    pub disabled_modules: Vec<String>,
    /// Recently launched application names, most recent first.
    pub recent_apps: Vec<String>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            background: PathBuf::new(),
            launcher_icon_size: 32.0,
            launcher_zoom_scale: 1.5,
            launcher_disable_zoom: false,
            disabled_modules: Vec::new(),
            recent_apps: Vec::new(),
        }
    }
}

/// File-backed implementation of [`DeskSettings`].
pub struct FileSettings {
    file: TomlFile<DeskConfig>,
    cached: RwLock<DeskConfig>,
    watchers: Mutex<Vec<mpsc::Sender<()>>>,
}

impl FileSettings {
    /// Opens the settings store at the given path, loading the current
    /// contents into the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = TomlFile::new(path);
        let cached = file.load()?.unwrap_or_default();

        Ok(Self {
            file,
            cached: RwLock::new(cached),
            watchers: Mutex::new(Vec::new()),
        })
    }

    /// Opens the settings store at the platform default location.
    pub fn open_default() -> Result<Self> {
        Self::open(LedgePaths::settings_file()?)
    }

    pub fn set_background(&self, path: PathBuf) -> Result<()> {
        self.mutate(|config| config.background = path)
    }

    pub fn set_launcher_icon_size(&self, size: f32) -> Result<()> {
        self.mutate(|config| config.launcher_icon_size = size)
    }

    pub fn set_launcher_zoom_scale(&self, scale: f32) -> Result<()> {
        self.mutate(|config| config.launcher_zoom_scale = scale)
    }

    pub fn set_launcher_zoom_disabled(&self, disabled: bool) -> Result<()> {
        self.mutate(|config| config.launcher_disable_zoom = disabled)
    }

    /// Enables or disables the named module.
    pub fn set_module_enabled(&self, name: &str, enabled: bool) -> Result<()> {
        self.mutate(|config| {
            config.disabled_modules.retain(|disabled| disabled != name);
            if !enabled {
                config.disabled_modules.push(name.to_string());
            }
        })
    }

    /// Applies a mutation through the file's locked update, refreshes the
    /// cache from the written value, and notifies watchers.
    fn mutate(&self, f: impl FnOnce(&mut DeskConfig)) -> Result<()> {
        let snapshot = self.cached.read().unwrap().clone();
        let updated = self.file.update(snapshot, f)?;
        *self.cached.write().unwrap() = updated;

        self.notify_watchers();
        Ok(())
    }

    fn notify_watchers(&self) {
        let watchers = self.watchers.lock().unwrap();
        for watcher in watchers.iter() {
            // a full channel already has a wakeup pending
            let _ = watcher.try_send(());
        }
    }
}

impl DeskSettings for FileSettings {
    fn background(&self) -> PathBuf {
        self.cached.read().unwrap().background.clone()
    }

    fn launcher_icon_size(&self) -> f32 {
        self.cached.read().unwrap().launcher_icon_size
    }

    fn launcher_zoom_scale(&self) -> f32 {
        self.cached.read().unwrap().launcher_zoom_scale
    }

    fn launcher_zoom_disabled(&self) -> bool {
        self.cached.read().unwrap().launcher_disable_zoom
    }

    fn module_enabled(&self, name: &str) -> bool {
        !self
            .cached
            .read()
            .unwrap()
            .disabled_modules
            .iter()
            .any(|disabled| disabled == name)
    }

    fn recent_apps(&self) -> Vec<String> {
        self.cached.read().unwrap().recent_apps.clone()
    }

    fn save_recent_apps(&self, names: &[String]) -> Result<()> {
        let names = names.to_vec();
        self.mutate(|config| config.recent_apps = names)
    }

    fn watch(&self, notify: mpsc::Sender<()>) {
        self.watchers.lock().unwrap().push(notify);
    }
}
