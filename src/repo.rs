//! Typed repositories over the key-value store.
//!
//! The stores never touch raw keys themselves; this module owns the key
//! layout and the JSON encoding of each record kind:
//! - `quiz-users` - ordered list of all accounts
//! - `quiz-purchased-themes-<username>` - list of purchased theme ids
//! - `quiz-active-theme-<username>` - the equipped theme id, as a bare string
//!
//! Repositories share one [`KeyValueStore`] behind `Rc<RefCell<..>>`; the
//! whole subsystem is single-threaded on the UI event loop.

use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

const USERS_KEY: &str = "quiz-users";
const PURCHASED_KEY_PREFIX: &str = "quiz-purchased-themes-";
const ACTIVE_KEY_PREFIX: &str = "quiz-active-theme-";

/// Shared handle to the backing store.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// A registered user: unique username, password, coin balance.
///
/// Coins are signed on purpose: the store does not clamp at zero, callers
/// own the "enough coins" check (see `OwnershipStore::purchase_with_payment`
/// for the checked path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
    pub coins: i64,
}

impl Account {
    /// Creates a new account with an empty coin balance.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            coins: 0,
        }
    }
}

/// Access to the persisted account registry.
pub trait AccountRepository {
    /// Loads all known accounts, in registration order.
    fn load_all(&self) -> Vec<Account>;

    /// Replaces the whole registry.
    fn save_all(&mut self, accounts: &[Account]);
}

/// Access to per-user theme ownership records.
pub trait OwnershipRepository {
    /// Loads the purchased theme ids for `username`, if a record exists.
    fn load_purchased(&self, username: &str) -> Option<Vec<String>>;

    /// Replaces the purchased theme ids for `username`.
    fn save_purchased(&mut self, username: &str, themes: &[String]);

    /// Loads the equipped theme id for `username`, if one was saved.
    fn load_active(&self, username: &str) -> Option<String>;

    /// Replaces the equipped theme id for `username`.
    fn save_active(&mut self, username: &str, theme_id: &str);

    /// Removes both ownership keys for `username`.
    fn delete(&mut self, username: &str);
}

/// Account registry backed by the key-value store.
pub struct KvAccountRepository {
    store: SharedStore,
}

impl KvAccountRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl AccountRepository for KvAccountRepository {
    fn load_all(&self) -> Vec<Account> {
        let raw = match self.store.borrow().get(USERS_KEY) {
            Some(raw) => raw,
            None => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(accounts) => accounts,
            Err(e) => {
                // A corrupt registry is unrecoverable; start empty rather
                // than wedging every login.
                log::error!("account registry is corrupt, ignoring it: {}", e);
                Vec::new()
            }
        }
    }

    fn save_all(&mut self, accounts: &[Account]) {
        match serde_json::to_string(accounts) {
            Ok(raw) => self.store.borrow_mut().set(USERS_KEY, raw),
            Err(e) => log::error!("failed to encode account registry: {}", e),
        }
    }
}

/// Ownership records backed by the key-value store.
pub struct KvOwnershipRepository {
    store: SharedStore,
}

impl KvOwnershipRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    fn purchased_key(username: &str) -> String {
        format!("{}{}", PURCHASED_KEY_PREFIX, username)
    }

    fn active_key(username: &str) -> String {
        format!("{}{}", ACTIVE_KEY_PREFIX, username)
    }
}

impl OwnershipRepository for KvOwnershipRepository {
    fn load_purchased(&self, username: &str) -> Option<Vec<String>> {
        let raw = self.store.borrow().get(&Self::purchased_key(username))?;
        match serde_json::from_str(&raw) {
            Ok(themes) => Some(themes),
            Err(e) => {
                log::error!("purchased-themes record for {:?} is corrupt: {}", username, e);
                None
            }
        }
    }

    fn save_purchased(&mut self, username: &str, themes: &[String]) {
        match serde_json::to_string(themes) {
            Ok(raw) => self
                .store
                .borrow_mut()
                .set(&Self::purchased_key(username), raw),
            Err(e) => log::error!("failed to encode purchased themes: {}", e),
        }
    }

    fn load_active(&self, username: &str) -> Option<String> {
        self.store.borrow().get(&Self::active_key(username))
    }

    fn save_active(&mut self, username: &str, theme_id: &str) {
        self.store
            .borrow_mut()
            .set(&Self::active_key(username), theme_id.to_string());
    }

    fn delete(&mut self, username: &str) {
        let mut store = self.store.borrow_mut();
        store.remove(&Self::purchased_key(username));
        store.remove(&Self::active_key(username));
    }
}

/// Wraps a [`crate::storage::MemoryStore`] (or any store) for sharing
/// between repositories.
pub fn shared_store(store: impl KeyValueStore + 'static) -> SharedStore {
    Rc::new(RefCell::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_account_registry_round_trip() {
        let store = shared_store(MemoryStore::new());
        let mut repo = KvAccountRepository::new(store.clone());

        assert!(repo.load_all().is_empty());

        let accounts = vec![Account::new("alice", "pw"), Account::new("bob", "pw2")];
        repo.save_all(&accounts);

        // A second repository over the same store sees the same registry
        let other = KvAccountRepository::new(store);
        assert_eq!(other.load_all(), accounts);
    }

    #[test]
    fn test_registry_order_is_preserved() {
        let store = shared_store(MemoryStore::new());
        let mut repo = KvAccountRepository::new(store);

        let accounts: Vec<Account> = ["c", "a", "b"]
            .iter()
            .map(|u| Account::new(*u, "pw"))
            .collect();
        repo.save_all(&accounts);

        let names: Vec<String> = repo.load_all().into_iter().map(|a| a.username).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_corrupt_registry_loads_empty() {
        let store = shared_store(MemoryStore::new());
        store
            .borrow_mut()
            .set("quiz-users", "not json".to_string());

        let repo = KvAccountRepository::new(store);
        assert!(repo.load_all().is_empty());
    }

    #[test]
    fn test_ownership_keys_are_per_user() {
        let store = shared_store(MemoryStore::new());
        let mut repo = KvOwnershipRepository::new(store);

        repo.save_purchased("alice", &["default".to_string(), "pink".to_string()]);
        repo.save_active("alice", "pink");

        assert_eq!(
            repo.load_purchased("alice"),
            Some(vec!["default".to_string(), "pink".to_string()])
        );
        assert_eq!(repo.load_active("alice"), Some("pink".to_string()));

        // Unknown user has no record at all
        assert_eq!(repo.load_purchased("bob"), None);
        assert_eq!(repo.load_active("bob"), None);
    }

    #[test]
    fn test_delete_removes_both_keys() {
        let store = shared_store(MemoryStore::new());
        let mut repo = KvOwnershipRepository::new(store);

        repo.save_purchased("alice", &["default".to_string()]);
        repo.save_active("alice", "default");
        repo.delete("alice");

        assert_eq!(repo.load_purchased("alice"), None);
        assert_eq!(repo.load_active("alice"), None);
    }
}
