// Disclosure state for keyed sub-panels, so user-collapsed panels stay
// collapsed when their section re-renders.

use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelRegistry {
    open: HashMap<String, bool>,
}

impl PanelRegistry {
    /// Panels the user has never touched default to open.
    pub fn is_open(&self, key: &str) -> bool {
        self.open.get(key).copied().unwrap_or(true)
    }

    pub fn set(&mut self, key: String, open: bool) {
        self.open.insert(key, open);
    }

    /// Drop flags whose key is no longer present. A panel that vanishes and
    /// later reappears under the same key starts over in the default state.
    pub fn reconcile<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = String>,
    {
        let keep: HashSet<String> = keys.into_iter().collect();
        self.open.retain(|key, _| keep.contains(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_default_to_open() {
        let reg = PanelRegistry::default();
        assert!(reg.is_open("anything"));
    }

    #[test]
    fn set_then_reconcile_keeps_live_flags() {
        let mut reg = PanelRegistry::default();
        reg.set("a".to_string(), false);
        reg.set("b".to_string(), false);
        reg.reconcile(["a".to_string(), "c".to_string()]);
        assert!(!reg.is_open("a"));
        assert!(reg.is_open("b")); // pruned, back to default
        assert!(reg.is_open("c"));
    }
}
