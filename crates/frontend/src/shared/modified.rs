//! Cross-component "data changed" signals.
//!
//! A writer calls [`ModifiedRegistry::touch`] after a successful mutation;
//! readers that track [`ModifiedRegistry::version`] for the same key re-run
//! and refetch.

use leptos::prelude::*;
use std::collections::HashMap;

/// Key touched after a team is saved
pub const TEAMS_KEY: &str = "teams";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifiedVersions {
    versions: HashMap<String, u64>,
}

impl ModifiedVersions {
    pub fn touch(&mut self, key: &str) -> u64 {
        let v = self.versions.entry(key.to_string()).or_insert(0);
        *v += 1;
        *v
    }

    pub fn version(&self, key: &str) -> u64 {
        self.versions.get(key).copied().unwrap_or(0)
    }
}

#[derive(Clone, Copy)]
pub struct ModifiedRegistry {
    versions: RwSignal<ModifiedVersions>,
}

impl ModifiedRegistry {
    pub fn new() -> Self {
        Self {
            versions: RwSignal::new(ModifiedVersions::default()),
        }
    }

    pub fn touch(&self, key: &str) {
        let _ = self.versions.try_update(|v| v.touch(key));
    }

    /// Reactive read; tracks the registry inside effects
    pub fn version(&self, key: &str) -> u64 {
        self.versions.with(|v| v.version(key))
    }
}

impl Default for ModifiedRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_bumps_only_its_key() {
        let mut versions = ModifiedVersions::default();
        assert_eq!(versions.version(TEAMS_KEY), 0);
        assert_eq!(versions.touch(TEAMS_KEY), 1);
        assert_eq!(versions.touch(TEAMS_KEY), 2);
        assert_eq!(versions.version("websites"), 0);
    }
}
