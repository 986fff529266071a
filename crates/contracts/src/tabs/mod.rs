//! Single-active-panel selection for tabbed content.
//!
//! A [`TabGroup`] owns the only piece of state a tab widget has: which panel
//! is active. Triggers and panels register their keys and then only compare
//! against [`TabGroup::is_active`]; they never hold the state themselves.

use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("tab key {0} is not declared in this group")]
    UnknownKey(String),
}

/// Selection state of one tab group.
///
/// `K` is the panel key, a `String` by default. The group keeps keys in
/// declaration order; the first one doubles as the fallback default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup<K = String> {
    keys: Vec<K>,
    default: Option<K>,
    active: Option<K>,
    chosen: bool,
}

impl<K> Default for TabGroup<K> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            default: None,
            active: None,
            chosen: false,
        }
    }
}

impl<K: Clone + Eq + Debug> TabGroup<K> {
    /// Empty group. `default` becomes active once a panel with that key is
    /// registered; without one the first registered key is used.
    pub fn new(default: Option<K>) -> Self {
        Self {
            keys: Vec::new(),
            default,
            active: None,
            chosen: false,
        }
    }

    /// Group with all keys declared up front.
    pub fn with_keys<I>(keys: I, default: Option<K>) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut group = Self::new(default);
        for key in keys {
            group.register(key);
        }
        group
    }

    /// Declares a panel key. Registering the same key twice is a no-op.
    pub fn register(&mut self, key: K) {
        if self.keys.contains(&key) {
            return;
        }
        self.keys.push(key);
        self.settle_initial();
    }

    /// Makes `key` the active panel.
    ///
    /// Returns `Ok(true)` if the active key changed and `Ok(false)` if it was
    /// already active. An undeclared key leaves the state untouched.
    pub fn select(&mut self, key: &K) -> Result<bool, TabError> {
        if !self.keys.contains(key) {
            return Err(TabError::UnknownKey(format!("{:?}", key)));
        }
        self.chosen = true;
        if self.active.as_ref() == Some(key) {
            return Ok(false);
        }
        self.active = Some(key.clone());
        Ok(true)
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }

    /// `None` only while the group has no panels.
    pub fn active_key(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // Keeps the initial choice in step with registration order: the declared
    // default wins as soon as it shows up, otherwise the first key holds.
    fn settle_initial(&mut self) {
        if let Some(default) = &self.default {
            if self.keys.contains(default) {
                if !self.chosen {
                    self.active = Some(default.clone());
                }
                self.default = None;
                return;
            }
        }
        if self.active.is_none() {
            self.active = self.keys.first().cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq_group() -> TabGroup {
        TabGroup::with_keys(
            ["one", "two", "three", "four"].map(String::from),
            Some("one".to_string()),
        )
    }

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_default_is_active_after_construction() {
        let group = faq_group();
        assert_eq!(group.active_key(), Some(&key("one")));
        let visible: Vec<_> = group.keys().iter().filter(|k| group.is_active(k)).collect();
        assert_eq!(visible, vec![&key("one")]);
    }

    #[test]
    fn test_first_key_when_no_default() {
        let group = TabGroup::with_keys(["b", "a"].map(String::from), None);
        assert_eq!(group.active_key(), Some(&key("b")));
    }

    #[test]
    fn test_default_registered_late_still_wins() {
        let mut group = TabGroup::new(Some(key("three")));
        group.register(key("one"));
        group.register(key("two"));
        assert!(group.is_active(&key("one")));
        group.register(key("three"));
        assert!(group.is_active(&key("three")));
        group.register(key("four"));
        assert!(group.is_active(&key("three")));
    }

    #[test]
    fn test_missing_default_falls_back_to_first() {
        let group = TabGroup::with_keys(["x", "y"].map(String::from), Some(key("nope")));
        assert_eq!(group.active_key(), Some(&key("x")));
    }

    #[test]
    fn test_late_default_does_not_override_user_choice() {
        let mut group = TabGroup::new(Some(key("c")));
        group.register(key("a"));
        group.register(key("b"));
        group.select(&key("b")).unwrap();
        group.register(key("c"));
        assert!(group.is_active(&key("b")));
    }

    #[test]
    fn test_select_makes_exactly_one_active() {
        let mut group = faq_group();
        for k in group.keys().to_vec() {
            group.select(&k).unwrap();
            assert!(group.is_active(&k));
            for other in group.keys().iter().filter(|o| **o != k) {
                assert!(!group.is_active(other));
            }
        }
    }

    #[test]
    fn test_unknown_key_is_rejected_without_change() {
        let mut group = faq_group();
        group.select(&key("three")).unwrap();
        let before = group.clone();
        let err = group.select(&key("nonexistent")).unwrap_err();
        assert!(matches!(err, TabError::UnknownKey(_)));
        assert_eq!(group, before);
        assert!(group.is_active(&key("three")));
    }

    #[test]
    fn test_unknown_key_message_quotes_key_once() {
        let mut group = faq_group();
        let err = group.select(&key("nonexistent")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tab key \"nonexistent\" is not declared in this group"
        );

        let mut panes = TabGroup::with_keys([1u8, 2], None);
        let err = panes.select(&7).unwrap_err();
        assert_eq!(err.to_string(), "tab key 7 is not declared in this group");
    }

    #[test]
    fn test_repeated_select_is_idempotent() {
        let mut group = faq_group();
        assert_eq!(group.select(&key("two")), Ok(true));
        let after_first = group.clone();
        assert_eq!(group.select(&key("two")), Ok(false));
        assert_eq!(group, after_first);
    }

    #[test]
    fn test_faq_scenario() {
        let mut group = faq_group();
        assert!(group.is_active(&key("one")));
        group.select(&key("three")).unwrap();
        assert!(group.is_active(&key("three")));
        assert!(!group.is_active(&key("one")));
        let _ = group.select(&key("nonexistent"));
        assert!(group.is_active(&key("three")));
    }

    #[test]
    fn test_empty_group() {
        let mut group: TabGroup = TabGroup::new(Some(key("one")));
        assert!(group.is_empty());
        assert_eq!(group.active_key(), None);
        assert!(group.keys().is_empty());
        assert!(group.select(&key("one")).is_err());
        assert!(!group.is_active(&key("one")));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut group = faq_group();
        group.register(key("two"));
        assert_eq!(group.len(), 4);
        assert_eq!(group.keys()[1], "two");
    }

    #[test]
    fn test_opaque_keys() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Pane {
            Left,
            Right,
        }
        let mut group = TabGroup::with_keys([Pane::Left, Pane::Right], None);
        assert!(group.is_active(&Pane::Left));
        group.select(&Pane::Right).unwrap();
        assert!(group.is_active(&Pane::Right));
    }
}
