//! Pluggable desktop modules and their registry.

use std::sync::Arc;

use crate::shortcut::{Shortcut, ShortcutAction};

/// A pluggable unit of desktop functionality, instantiated on demand.
pub trait Module: Send + Sync {
    /// The module's unique name, matched against the settings store's
    /// per-module enablement.
    fn name(&self) -> &str;

    /// Global shortcuts this module wants registered.
    ///
    /// The key-bind capability is declared by overriding this; the default
    /// is no bindings. Queried once, when the module is instantiated.
    fn shortcuts(&self) -> Vec<(Shortcut, ShortcutAction)> {
        Vec::new()
    }

    /// Releases any resources the module holds.
    ///
    /// Called exactly once before the instance is dropped from the
    /// module cache.
    fn destroy(&self);
}

/// Factory producing a fresh module instance.
pub type ModuleFactory = Box<dyn Fn() -> Arc<dyn Module> + Send + Sync>;

/// Metadata describing a discoverable module.
pub struct ModuleMetadata {
    name: &'static str,
    factory: ModuleFactory,
}

impl ModuleMetadata {
    pub fn new(
        name: &'static str,
        factory: impl Fn() -> Arc<dyn Module> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            factory: Box::new(factory),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Instantiates a fresh module via the factory.
    pub fn instantiate(&self) -> Arc<dyn Module> {
        (self.factory)()
    }
}

/// The set of modules discoverable by a session.
///
/// An explicit value handed to the session at construction; there is no
/// process-wide registry.
#[derive(Default)]
pub struct ModuleRegistry {
    entries: Vec<ModuleMetadata>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module's metadata to the registry.
    pub fn register(&mut self, metadata: ModuleMetadata) {
        self.entries.push(metadata);
    }

    /// All registered module metadata, in registration order.
    pub fn available(&self) -> &[ModuleMetadata] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullModule;

    impl Module for NullModule {
        fn name(&self) -> &str {
            "null"
        }

        fn destroy(&self) {}
    }

    #[test]
    fn test_registry_preserves_registration_order() {
        let mut registry = ModuleRegistry::new();
        registry.register(ModuleMetadata::new("first", || Arc::new(NullModule)));
        registry.register(ModuleMetadata::new("second", || Arc::new(NullModule)));

        let names: Vec<_> = registry.available().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_metadata_instantiates_fresh_instances() {
        let metadata = ModuleMetadata::new("null", || Arc::new(NullModule));
        let a = metadata.instantiate();
        let b = metadata.instantiate();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_default_module_declares_no_shortcuts() {
        let module = NullModule;
        assert!(module.shortcuts().is_empty());
    }
}
