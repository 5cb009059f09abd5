//! The bounded recency list of launched applications.

use std::sync::Arc;

use ledge_core::apps::{AppData, ApplicationProvider};

/// Maximum number of entries the recent-apps list retains.
pub const RECENT_APP_LIMIT: usize = 5;

/// An ordered, duplicate-free sequence of launched applications,
/// most-recently-used first and capacity-bounded.
#[derive(Default)]
pub struct RecentApps {
    entries: Vec<Arc<dyn AppData>>,
}

impl RecentApps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the list from persisted names, resolving each through the
    /// application provider. Names the provider no longer knows are
    /// dropped silently.
    pub fn restore(names: &[String], apps: &dyn ApplicationProvider) -> Self {
        let mut entries: Vec<_> = names.iter().filter_map(|name| apps.find_app(name)).collect();
        entries.truncate(RECENT_APP_LIMIT);
        Self { entries }
    }

    /// Records a successful launch.
    ///
    /// The app moves to the front; any earlier occurrence is removed. The
    /// duplicate scan starts at index 1 because the head was just
    /// inserted and is the one legitimate copy.
    pub fn record(&mut self, app: Arc<dyn AppData>) {
        let name = app.name().to_string();
        self.entries.insert(0, app);

        if let Some(earlier) = self
            .entries
            .iter()
            .skip(1)
            .position(|entry| entry.name() == name)
        {
            self.entries.remove(earlier + 1);
        }

        self.entries.truncate(RECENT_APP_LIMIT);
    }

    /// The current entries, most recent first.
    pub fn entries(&self) -> Vec<Arc<dyn AppData>> {
        self.entries.clone()
    }

    /// The current entry names, most recent first, for persistence.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledge_core::Result;

    struct FakeApp {
        name: String,
    }

    impl AppData for FakeApp {
        fn name(&self) -> &str {
            &self.name
        }

        fn run(&self, _env: &[(String, String)]) -> Result<()> {
            Ok(())
        }
    }

    fn app(name: &str) -> Arc<dyn AppData> {
        Arc::new(FakeApp {
            name: name.to_string(),
        })
    }

    struct FakeProvider {
        known: Vec<&'static str>,
    }

    impl ApplicationProvider for FakeProvider {
        fn available_apps(&self) -> Vec<Arc<dyn AppData>> {
            self.known.iter().map(|name| app(name)).collect()
        }

        fn find_app(&self, name: &str) -> Option<Arc<dyn AppData>> {
            self.known.contains(&name).then(|| app(name))
        }
    }

    #[test]
    fn test_record_prepends() {
        let mut recent = RecentApps::new();
        recent.record(app("editor"));
        recent.record(app("terminal"));
        assert_eq!(recent.names(), vec!["terminal", "editor"]);
    }

    #[test]
    fn test_record_moves_existing_to_front() {
        let mut recent = RecentApps::new();
        recent.record(app("editor"));
        recent.record(app("terminal"));
        recent.record(app("browser"));
        recent.record(app("editor"));
        assert_eq!(recent.names(), vec!["editor", "browser", "terminal"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut recent = RecentApps::new();
        for name in ["a", "b", "c", "d", "e", "f"] {
            recent.record(app(name));
        }
        assert_eq!(recent.len(), RECENT_APP_LIMIT);
        assert_eq!(recent.names(), vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_no_duplicates_after_relaunch_at_capacity() {
        let mut recent = RecentApps::new();
        for name in ["a", "b", "c", "d", "e"] {
            recent.record(app(name));
        }
        recent.record(app("c"));
        assert_eq!(recent.names(), vec!["c", "e", "d", "b", "a"]);
    }

    #[test]
    fn test_restore_skips_unknown_names() {
        let provider = FakeProvider {
            known: vec!["editor", "terminal"],
        };
        let names = vec![
            "editor".to_string(),
            "vanished".to_string(),
            "terminal".to_string(),
        ];
        let recent = RecentApps::restore(&names, &provider);
        assert_eq!(recent.names(), vec!["editor", "terminal"]);
    }
}
