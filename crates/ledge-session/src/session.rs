//! The desktop session controller.
//!
//! `Session` owns the root presentation surface, the module cache, the
//! shortcut table, and the recent-apps list, and mediates between the
//! window manager, screen topology provider, settings store, and the
//! opaque presentation children.

use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};

use ledge_core::apps::{AppData, ApplicationProvider};
use ledge_core::geometry::{Point, Rect, Size};
use ledge_core::module::{Module, ModuleRegistry};
use ledge_core::screen::{EmbeddedScreenProvider, Screen, ScreenProvider};
use ledge_core::settings::DeskSettings;
use ledge_core::shortcut::{Key, Modifiers, Shortcut, ShortcutAction};
use ledge_core::surface::{
    Background, Dock, MouseOverlay, RootWindow, SurfaceFactory, WidgetPanel, WindowFactory,
};
use ledge_core::wm::{EmbeddedWindowManager, WindowManager};
use ledge_core::Result;

use crate::layout;
use crate::recent::RecentApps;
use crate::scale;
use crate::shortcuts::{self, ShortcutTable};

/// Operating mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Fullscreen root sized from the primary screen; resized on every
    /// topology change.
    Full,
    /// Fixed-size windowed root for testing/headless contexts; never
    /// re-derives its size from topology.
    Embedded,
}

/// The root window and its composed children, created together on first
/// need and kept for the session's lifetime.
pub(crate) struct SurfaceSet {
    pub root: Arc<dyn RootWindow>,
    pub background: Arc<dyn Background>,
    pub dock: Arc<dyn Dock>,
    pub widgets: Arc<dyn WidgetPanel>,
    #[allow(dead_code)]
    pub mouse: Arc<dyn MouseOverlay>,
}

/// The desktop session controller.
///
/// Constructed once per process via [`Session::new_full`] or
/// [`Session::new_embedded`] and handed to every collaborator that needs
/// it; there is no process-wide singleton. Lives until process exit.
pub struct Session {
    mode: SessionMode,
    wm: Arc<dyn WindowManager>,
    apps: Arc<dyn ApplicationProvider>,
    settings: Arc<dyn DeskSettings>,
    screens: Arc<dyn ScreenProvider>,
    registry: Arc<ModuleRegistry>,
    windows: Arc<dyn WindowFactory>,
    surfaces: Arc<dyn SurfaceFactory>,

    state: RwLock<Option<SurfaceSet>>,
    /// Module cache; `None` means invalidated, rebuilt on next access.
    modules: RwLock<Option<Vec<Arc<dyn Module>>>>,
    recent: RwLock<RecentApps>,
    shortcuts: RwLock<ShortcutTable>,
}

impl Session {
    /// Creates a fullscreen session for real-device usage.
    ///
    /// Registers the default shortcuts, starts the settings-reaction and
    /// topology-watch tasks, and builds the root window sized from the
    /// primary screen.
    #[allow(clippy::too_many_arguments)]
    pub async fn new_full(
        wm: Arc<dyn WindowManager>,
        apps: Arc<dyn ApplicationProvider>,
        settings: Arc<dyn DeskSettings>,
        screens: Arc<dyn ScreenProvider>,
        registry: Arc<ModuleRegistry>,
        windows: Arc<dyn WindowFactory>,
        surfaces: Arc<dyn SurfaceFactory>,
    ) -> Arc<Self> {
        let session = Self::assemble(
            SessionMode::Full,
            wm,
            apps,
            settings,
            screens,
            registry,
            windows,
            surfaces,
        )
        .await;
        session.watch_topology();
        session.setup_root().await;
        session
    }

    /// Creates a windowed session for test/headless usage.
    ///
    /// Uses the no-op embedded window manager and the fixed single-screen
    /// provider; the root keeps whatever size the window factory gave it.
    pub async fn new_embedded(
        apps: Arc<dyn ApplicationProvider>,
        settings: Arc<dyn DeskSettings>,
        registry: Arc<ModuleRegistry>,
        windows: Arc<dyn WindowFactory>,
        surfaces: Arc<dyn SurfaceFactory>,
    ) -> Arc<Self> {
        let session = Self::assemble(
            SessionMode::Embedded,
            Arc::new(EmbeddedWindowManager),
            apps,
            settings,
            Arc::new(EmbeddedScreenProvider),
            registry,
            windows,
            surfaces,
        )
        .await;
        session.setup_root().await;
        session
    }

    #[allow(clippy::too_many_arguments)]
    async fn assemble(
        mode: SessionMode,
        wm: Arc<dyn WindowManager>,
        apps: Arc<dyn ApplicationProvider>,
        settings: Arc<dyn DeskSettings>,
        screens: Arc<dyn ScreenProvider>,
        registry: Arc<ModuleRegistry>,
        windows: Arc<dyn WindowFactory>,
        surfaces: Arc<dyn SurfaceFactory>,
    ) -> Arc<Self> {
        let recent = RecentApps::restore(&settings.recent_apps(), apps.as_ref());

        let session = Arc::new(Self {
            mode,
            wm,
            apps,
            settings,
            screens,
            registry,
            windows,
            surfaces,
            state: RwLock::new(None),
            modules: RwLock::new(None),
            recent: RwLock::new(recent),
            shortcuts: RwLock::new(ShortcutTable::new()),
        });

        session.register_default_shortcuts().await;
        session.watch_settings();
        session
    }

    /// Activates the session by starting the window manager's event loop.
    ///
    /// Called exactly once; the loop runs until process exit.
    pub fn run(self: &Arc<Self>) {
        let wm = Arc::clone(&self.wm);
        tokio::spawn(async move {
            wm.run().await;
        });
    }

    // ------------------------------------------------------------------
    // Root window lifecycle
    // ------------------------------------------------------------------

    /// Ensures the root window exists and matches the current topology.
    ///
    /// The root is created on first need and only ever resized afterward,
    /// never recreated. Full-mode roots take the primary screen's pixel
    /// dimensions divided by its canvas scale; embedded roots keep their
    /// fixed size.
    async fn setup_root(&self) {
        let mut state = self.state.write().await;

        if state.is_none() {
            let root = match self.mode {
                SessionMode::Full => self.windows.create_fullscreen(),
                SessionMode::Embedded => self.windows.create_embedded(),
            };
            let background = self.surfaces.create_background();
            let dock = self.surfaces.create_dock();
            let widgets = self.surfaces.create_widget_panel();
            let mouse = self.surfaces.create_mouse_overlay();
            mouse.hide();

            *state = Some(SurfaceSet {
                root,
                background,
                dock,
                widgets,
                mouse,
            });
        }

        let Some(surfaces) = state.as_ref() else {
            return;
        };

        let size = match self.mode {
            SessionMode::Full => {
                let size = self.screens.primary().logical_size();
                surfaces.root.resize(size);
                size
            }
            SessionMode::Embedded => surfaces.root.size(),
        };

        layout::apply(surfaces, size);
    }

    /// Re-lays-out the root surface's children.
    ///
    /// Called by the toolkit backend whenever the root window is resized.
    pub async fn layout(&self, size: Size) {
        let state = self.state.read().await;
        if let Some(surfaces) = state.as_ref() {
            layout::apply(surfaces, size);
        }
    }

    fn watch_topology(self: &Arc<Self>) {
        let (tx, mut rx) = mpsc::channel(1);
        self.screens.watch(tx);

        let session = Arc::clone(self);
        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                session.setup_root().await;
            }
        });
    }

    // ------------------------------------------------------------------
    // Module cache
    // ------------------------------------------------------------------

    /// Returns the enabled module instances, memoized after the first
    /// computation.
    ///
    /// Modules whose name is disabled in the settings store are skipped.
    /// Each instantiated module's declared shortcuts are registered into
    /// the shared shortcut table.
    pub async fn modules(&self) -> Vec<Arc<dyn Module>> {
        {
            let cache = self.modules.read().await;
            if let Some(modules) = cache.as_ref() {
                return modules.clone();
            }
        }

        let mut cache = self.modules.write().await;
        // raced with another rebuild
        if let Some(modules) = cache.as_ref() {
            return modules.clone();
        }

        let mut modules: Vec<Arc<dyn Module>> = Vec::new();
        for metadata in self.registry.available() {
            if !self.settings.module_enabled(metadata.name()) {
                continue;
            }

            let instance = metadata.instantiate();

            let bindings = instance.shortcuts();
            if !bindings.is_empty() {
                let mut table = self.shortcuts.write().await;
                for (shortcut, action) in bindings {
                    table.add(shortcut, action);
                }
            }

            modules.push(instance);
        }

        *cache = Some(modules.clone());
        modules
    }

    /// Invalidates the module cache.
    ///
    /// Every cached instance is torn down before the cache is cleared, so
    /// the next access rebuilds from scratch and no collaborator can
    /// observe a stale instance.
    pub async fn clear_module_cache(&self) {
        let mut cache = self.modules.write().await;
        if let Some(modules) = cache.take() {
            for module in modules {
                module.destroy();
            }
        }
    }

    // ------------------------------------------------------------------
    // Settings reaction
    // ------------------------------------------------------------------

    fn watch_settings(self: &Arc<Self>) {
        let (tx, mut rx) = mpsc::channel(1);
        self.settings.watch(tx);

        let session = Arc::clone(self);
        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                session.apply_settings_change().await;
            }
        });
    }

    /// Reacts to one settings-change event.
    ///
    /// The event carries no payload; the live settings value is already
    /// current. Ordering matters: the module cache is invalidated before
    /// the widget panel reloads, and the dock updates icons before icon
    /// order before taskbar, since later steps read the icon list.
    pub(crate) async fn apply_settings_change(&self) {
        self.clear_module_cache().await;
        let modules = self.modules().await;

        let state = self.state.read().await;
        let Some(surfaces) = state.as_ref() else {
            return;
        };

        surfaces.background.set_image(&self.settings.background());
        surfaces.widgets.reload_modules(&modules);

        surfaces.dock.set_appearance(
            self.settings.launcher_icon_size(),
            self.settings.launcher_zoom_scale(),
            self.settings.launcher_zoom_disabled(),
        );
        surfaces.dock.update_icons();
        surfaces.dock.update_icon_order();
        surfaces.dock.update_taskbar();
    }

    // ------------------------------------------------------------------
    // Application launch
    // ------------------------------------------------------------------

    /// Launches an application with scale-compatibility environment
    /// variables derived from the active screen.
    ///
    /// On success the app is recorded in the recent list, which is then
    /// persisted through the settings store.
    ///
    /// # Errors
    ///
    /// Returns the launch error unchanged; the recent list is not
    /// mutated on failure.
    pub async fn launch(&self, app: Arc<dyn AppData>) -> Result<()> {
        let env = scale::scale_environment(self.screens.active().scale, &self.screens.screens());
        app.run(&env)?;

        let names = {
            let mut recent = self.recent.write().await;
            recent.record(app);
            recent.names()
        };

        if let Err(err) = self.settings.save_recent_apps(&names) {
            tracing::warn!("Failed to persist recent apps: {err}");
        }

        Ok(())
    }

    /// The recently launched applications, most recent first.
    pub async fn recent_apps(&self) -> Vec<Arc<dyn AppData>> {
        self.recent.read().await.entries()
    }

    // ------------------------------------------------------------------
    // Shortcuts
    // ------------------------------------------------------------------

    async fn register_default_shortcuts(self: &Arc<Self>) {
        let mut table = self.shortcuts.write().await;

        let weak = Arc::downgrade(self);
        table.add(
            Shortcut::new("Show Launcher", Key::Space, Modifiers::USER),
            Arc::new(move || {
                if let Some(session) = weak.upgrade() {
                    tokio::spawn(async move {
                        let state = session.state.read().await;
                        if let Some(surfaces) = state.as_ref() {
                            surfaces.dock.show_launcher();
                        }
                    });
                }
            }),
        );

        table.add(
            Shortcut::new("Switch App Next", Key::Tab, Modifiers::USER),
            Arc::new(|| {
                // dummy - the wm handles the app switcher
            }),
        );
        table.add(
            Shortcut::new(
                "Switch App Previous",
                Key::Tab,
                Modifiers::USER | Modifiers::SHIFT,
            ),
            Arc::new(|| {
                // dummy - the wm handles the app switcher
            }),
        );

        let wm = Arc::clone(&self.wm);
        table.add(
            Shortcut::new("Print Screen", Key::PrintScreen, Modifiers::NONE),
            Arc::new(move || {
                let wm = Arc::clone(&wm);
                tokio::spawn(async move {
                    if let Err(err) = wm.capture_screen().await {
                        tracing::warn!("Screen capture failed: {err}");
                    }
                });
            }),
        );

        let wm = Arc::clone(&self.wm);
        table.add(
            Shortcut::new("Print Window", Key::PrintScreen, Modifiers::SHIFT),
            Arc::new(move || {
                let wm = Arc::clone(&wm);
                tokio::spawn(async move {
                    if let Err(err) = wm.capture_window().await {
                        tracing::warn!("Window capture failed: {err}");
                    }
                });
            }),
        );

        table.add(
            Shortcut::new("Calculator", Key::Calculator, Modifiers::NONE),
            Arc::new(shortcuts::open_calculator),
        );
    }

    /// Registers an additional shortcut; duplicates overwrite.
    pub async fn add_shortcut(&self, shortcut: Shortcut, action: ShortcutAction) {
        self.shortcuts.write().await.add(shortcut, action);
    }

    /// Dispatches a key event against the shortcut table.
    ///
    /// The bound action executes synchronously on the calling task.
    /// Returns whether a binding matched.
    pub async fn handle_shortcut(&self, key: Key, modifiers: Modifiers) -> bool {
        let action = self.shortcuts.read().await.lookup(key, modifiers);
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Pointer bridging
    // ------------------------------------------------------------------

    /// Called by the window manager when the cursor enters the canvas or
    /// moves within it.
    ///
    /// Forwards a synthesized enter-event to the dock only when the
    /// position falls inside the dock's rectangle (inclusive bounds).
    /// A no-op until the root window has been built.
    pub async fn pointer_entered(&self, position: Point) {
        let state = self.state.read().await;
        let Some(surfaces) = state.as_ref() else {
            return;
        };

        let rect = Rect::new(surfaces.dock.position(), surfaces.dock.size());
        if rect.contains(position) {
            surfaces.dock.pointer_in(position);
        }
    }

    /// Called by the window manager when the cursor leaves the canvas.
    ///
    /// A no-op until the root window has been built.
    pub async fn pointer_left(&self) {
        let state = self.state.read().await;
        if let Some(surfaces) = state.as_ref() {
            surfaces.dock.pointer_out();
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Usable content area of a screen in physical pixels.
    ///
    /// On the primary screen the widget panel's scaled width is reserved;
    /// other screens are fully usable.
    pub async fn content_size_pixels(&self, screen: &Screen) -> (u32, u32) {
        if self.screens.primary().name == screen.name {
            let panel_width = {
                let state = self.state.read().await;
                state
                    .as_ref()
                    .map(|surfaces| surfaces.widgets.min_width())
                    .unwrap_or(0.0)
            };
            let reserved = (panel_width * screen.scale) as u32;
            return (screen.width.saturating_sub(reserved), screen.height);
        }
        (screen.width, screen.height)
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn settings(&self) -> &Arc<dyn DeskSettings> {
        &self.settings
    }

    pub fn screens(&self) -> &Arc<dyn ScreenProvider> {
        &self.screens
    }

    pub fn window_manager(&self) -> &Arc<dyn WindowManager> {
        &self.wm
    }

    pub fn app_provider(&self) -> &Arc<dyn ApplicationProvider> {
        &self.apps
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
