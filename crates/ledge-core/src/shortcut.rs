//! Global keyboard shortcut descriptors.

use std::ops::{BitOr, BitOrAssign};
use std::sync::Arc;

/// Keys that can participate in a global shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Tab,
    Return,
    Escape,
    PrintScreen,
    Calculator,
    Char(char),
}

/// A set of keyboard modifiers, stored as a bitset.
///
/// `USER` is the user-configured desktop modifier (typically Super), kept
/// distinct from the raw `SUPER` bit so that rebinding it does not change
/// registered shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CONTROL: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    pub const SUPER: Modifiers = Modifiers(1 << 3);
    pub const USER: Modifiers = Modifiers(1 << 4);

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Reports whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

/// A named key + modifier combination identifying a global binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub name: String,
    pub key: Key,
    pub modifiers: Modifiers,
}

impl Shortcut {
    pub fn new(name: impl Into<String>, key: Key, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            key,
            modifiers,
        }
    }

    /// The key event combination this shortcut matches on.
    pub fn combination(&self) -> (Key, Modifiers) {
        (self.key, self.modifiers)
    }
}

/// A zero-argument action bound to a shortcut.
pub type ShortcutAction = Arc<dyn Fn() + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_bitor() {
        let combined = Modifiers::USER | Modifiers::SHIFT;
        assert!(combined.contains(Modifiers::USER));
        assert!(combined.contains(Modifiers::SHIFT));
        assert!(!combined.contains(Modifiers::CONTROL));
    }

    #[test]
    fn test_modifiers_none_is_empty() {
        assert!(Modifiers::NONE.is_empty());
        assert!(!Modifiers::SHIFT.is_empty());
        // every set contains the empty set
        assert!(Modifiers::NONE.contains(Modifiers::NONE));
        assert!(Modifiers::SHIFT.contains(Modifiers::NONE));
    }

    #[test]
    fn test_shortcut_combination() {
        let shortcut = Shortcut::new("Show Launcher", Key::Space, Modifiers::USER);
        assert_eq!(shortcut.combination(), (Key::Space, Modifiers::USER));
    }
}
