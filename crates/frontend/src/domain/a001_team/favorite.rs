//! Favorite team marker.
//!
//! One team id per browser, stored under [`FAVORITE_TEAM_KEY`]. Marking a team
//! overwrites whatever was stored before; clearing removes the key no matter
//! which team holds it.

use crate::shared::storage::KeyValueStore;
use contracts::domain::a001_team::aggregate::FAVORITE_TEAM_KEY;

pub struct FavoriteTeam<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> FavoriteTeam<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    pub fn current(&self) -> Option<String> {
        self.store.get(FAVORITE_TEAM_KEY)
    }

    pub fn is_favorite(&self, team_id: &str) -> bool {
        self.current().as_deref() == Some(team_id)
    }

    pub fn mark(&self, team_id: &str) {
        self.store.set(FAVORITE_TEAM_KEY, team_id);
    }

    pub fn clear(&self) {
        self.store.remove(FAVORITE_TEAM_KEY);
    }

    /// Apply a toggle change for `team_id`
    pub fn set(&self, team_id: &str, checked: bool) {
        if checked {
            self.mark(team_id);
        } else {
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_mark_writes_team_id() {
        let store = MemoryStore::new();
        let fav = FavoriteTeam::new(&store);
        fav.set("abc", true);
        assert_eq!(store.get(FAVORITE_TEAM_KEY).as_deref(), Some("abc"));
        assert!(fav.is_favorite("abc"));
        assert!(!fav.is_favorite("xyz"));
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::new();
        let fav = FavoriteTeam::new(&store);
        fav.mark("abc");
        fav.mark("xyz");
        assert_eq!(fav.current().as_deref(), Some("xyz"));
    }

    #[test]
    fn test_clear_removes_key_held_by_other_team() {
        let store = MemoryStore::new();
        store.set(FAVORITE_TEAM_KEY, "other-team");
        FavoriteTeam::new(&store).set("abc", false);
        assert_eq!(store.get(FAVORITE_TEAM_KEY), None);
        assert!(store.is_empty());
    }
}
