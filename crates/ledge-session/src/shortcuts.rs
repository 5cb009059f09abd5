//! The global shortcut table.

use std::collections::HashMap;

use ledge_core::shortcut::{Key, Modifiers, Shortcut, ShortcutAction};

struct Binding {
    shortcut: Shortcut,
    action: ShortcutAction,
}

/// Maps key + modifier combinations to zero-argument actions.
///
/// Entries are never removed during normal operation; registering a
/// combination that already exists overwrites the previous binding.
#[derive(Default)]
pub struct ShortcutTable {
    bindings: HashMap<(Key, Modifiers), Binding>,
}

impl ShortcutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `action` under the shortcut's key combination.
    pub fn add(&mut self, shortcut: Shortcut, action: ShortcutAction) {
        self.bindings
            .insert(shortcut.combination(), Binding { shortcut, action });
    }

    /// Looks up the action bound to a key event.
    pub fn lookup(&self, key: Key, modifiers: Modifiers) -> Option<ShortcutAction> {
        self.bindings
            .get(&(key, modifiers))
            .map(|binding| binding.action.clone())
    }

    /// Names of all registered shortcuts, in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.bindings
            .values()
            .map(|binding| binding.shortcut.name.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Spawns the external calculator application.
///
/// Failure is logged and swallowed; there is no caller to surface it to.
pub(crate) fn open_calculator() {
    if let Err(err) = std::process::Command::new("calculator").spawn() {
        tracing::error!("Failed to open calculator: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_action(counter: &Arc<AtomicUsize>) -> ShortcutAction {
        let counter = Arc::clone(counter);
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_lookup_matches_combination() {
        let mut table = ShortcutTable::new();
        let fired = Arc::new(AtomicUsize::new(0));
        table.add(
            Shortcut::new("Show Launcher", Key::Space, Modifiers::USER),
            counting_action(&fired),
        );

        let action = table.lookup(Key::Space, Modifiers::USER).unwrap();
        action();
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        assert!(table.lookup(Key::Space, Modifiers::NONE).is_none());
        assert!(table.lookup(Key::Tab, Modifiers::USER).is_none());
    }

    #[test]
    fn test_duplicate_combination_overwrites() {
        let mut table = ShortcutTable::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        table.add(
            Shortcut::new("Old", Key::PrintScreen, Modifiers::NONE),
            counting_action(&first),
        );
        table.add(
            Shortcut::new("New", Key::PrintScreen, Modifiers::NONE),
            counting_action(&second),
        );

        assert_eq!(table.len(), 1);
        table.lookup(Key::PrintScreen, Modifiers::NONE).unwrap()();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(table.names(), vec!["New"]);
    }

    #[test]
    fn test_shift_variant_is_a_distinct_binding() {
        let mut table = ShortcutTable::new();
        let fired = Arc::new(AtomicUsize::new(0));
        table.add(
            Shortcut::new("Print Screen", Key::PrintScreen, Modifiers::NONE),
            counting_action(&fired),
        );
        table.add(
            Shortcut::new("Print Window", Key::PrintScreen, Modifiers::SHIFT),
            counting_action(&fired),
        );
        assert_eq!(table.len(), 2);
    }
}
