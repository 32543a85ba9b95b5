//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{apply_filter, EntryCounts, EntryFilter};
use crate::models::{FoodEntry, User};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Entries visible to the signed-in user (all entries for admins)
    pub entries: Vec<FoodEntry>,
    /// True until the first entry load finishes
    pub entries_loading: bool,
    /// Active filter card
    pub filter: EntryFilter,
    /// All users (admin screen only)
    pub users: Vec<User>,
    pub users_loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            entries_loading: true,
            users_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the loaded entries
pub fn store_set_entries(store: &AppStore, entries: Vec<FoodEntry>) {
    *store.entries().write() = entries;
    store.entries_loading().set(false);
}

/// Entries passing the active filter
pub fn store_filtered_entries(store: &AppStore) -> Vec<FoodEntry> {
    let filter = store.filter().get();
    store.entries().with(|entries| apply_filter(entries, filter))
}

/// Card totals over all loaded entries
pub fn store_entry_counts(store: &AppStore) -> EntryCounts {
    store.entries().with(|entries| EntryCounts::of(entries))
}

/// Replace the loaded user list
pub fn store_set_users(store: &AppStore, users: Vec<User>) {
    *store.users().write() = users;
    store.users_loading().set(false);
}

/// Drop everything tied to the previous session
pub fn store_reset(store: &AppStore) {
    *store.write() = AppState::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn sample_entry(id: u32, is_safe: bool) -> FoodEntry {
        FoodEntry {
            id,
            user: "ana".to_string(),
            food: format!("food {}", id),
            quantity: 1,
            is_safe,
            date: None,
        }
    }

    fn sample_user() -> User {
        User {
            id: 1,
            username: "ana".to_string(),
            email: "ana@x.io".to_string(),
            full_name: None,
            role: Role::Admin,
            is_active: true,
        }
    }

    #[test]
    fn test_filtered_entries_and_counts() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new());

        store_set_entries(&store, vec![sample_entry(1, true), sample_entry(2, false)]);
        store.filter().set(EntryFilter::Unsafe);

        let filtered = store_filtered_entries(&store);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
        assert_eq!(store_entry_counts(&store).total, 2);
        assert!(!store.entries_loading().get());
    }

    #[test]
    fn test_reset_drops_session_data() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::new());

        store_set_entries(&store, vec![sample_entry(1, true), sample_entry(2, false)]);
        store_set_users(&store, vec![sample_user()]);
        store.filter().set(EntryFilter::Unsafe);

        store_reset(&store);

        assert!(store.entries().get().is_empty());
        assert!(store.users().get().is_empty());
        assert_eq!(store.filter().get(), EntryFilter::All);
        assert!(store.entries_loading().get());
        assert!(store.users_loading().get());
    }
}
