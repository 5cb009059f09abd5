//! Process-spawning application handles.

use std::process::Command;
use std::sync::Arc;

use ledge_core::apps::{AppData, ApplicationProvider};
use ledge_core::{LedgeError, Result};

/// An application launched by spawning an external command.
pub struct CommandApp {
    name: String,
    command: String,
    args: Vec<String>,
}

impl CommandApp {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl AppData for CommandApp {
    fn name(&self) -> &str {
        &self.name
    }

    /// Spawns the command with the given extra environment.
    ///
    /// The child is intentionally not waited on; it outlives the call.
    fn run(&self, env: &[(String, String)]) -> Result<()> {
        let mut command = Command::new(&self.command);
        command.args(&self.args);
        for (key, value) in env {
            command.env(key, value);
        }

        command
            .spawn()
            .map_err(|err| LedgeError::launch(&self.name, err.to_string()))?;

        tracing::debug!("Launched '{}'", self.name);
        Ok(())
    }
}

/// An application provider over a fixed list of apps.
///
/// Used by embedded sessions and tests; a desktop-entry scanner would
/// implement [`ApplicationProvider`] directly.
#[derive(Default)]
pub struct StaticAppProvider {
    apps: Vec<Arc<dyn AppData>>,
}

impl StaticAppProvider {
    pub fn new(apps: Vec<Arc<dyn AppData>>) -> Self {
        Self { apps }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl ApplicationProvider for StaticAppProvider {
    fn available_apps(&self) -> Vec<Arc<dyn AppData>> {
        self.apps.clone()
    }

    fn find_app(&self, name: &str) -> Option<Arc<dyn AppData>> {
        self.apps.iter().find(|app| app.name() == name).cloned()
    }
}
