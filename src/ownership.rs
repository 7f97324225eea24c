//! Per-user theme ownership and the currently equipped theme.
//!
//! The ownership store tracks which themes the active user has purchased
//! and which one is equipped. It never decides who is logged in: it learns
//! about session changes through the [`SessionListener`] events and reloads
//! or resets its record accordingly.
//!
//! Invariant: the equipped theme is always contained in the purchased set,
//! and the purchased set always contains the default theme. A persisted
//! record that violates this (e.g. written by an older build) is corrected
//! by falling back to the default theme on load.
//!
//! Persistence policy: every mutation writes through immediately. The
//! source behavior deferred the equipped theme to logout while purchases
//! saved at once; one consistent policy replaces that split. `flush`
//! remains as an explicit full write of both fields.

use crate::bus::SessionListener;
use crate::repo::OwnershipRepository;
use crate::session::SessionStore;
use crate::theme::{ThemeCatalog, DEFAULT_THEME_ID};
use std::fmt;

/// Failures surfaced by shop operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    /// The theme is already in the purchased set.
    AlreadyOwned,
    /// The identifier names no catalog theme.
    UnknownTheme,
    /// The current balance does not cover the price (checked path only).
    InsufficientCoins,
    /// No session is active.
    NotLoggedIn,
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::AlreadyOwned => write!(f, "theme is already owned"),
            ShopError::UnknownTheme => write!(f, "unknown theme"),
            ShopError::InsufficientCoins => write!(f, "not enough coins"),
            ShopError::NotLoggedIn => write!(f, "no user is logged in"),
        }
    }
}

impl std::error::Error for ShopError {}

/// Tracks purchased themes and the equipped theme for the active user.
pub struct OwnershipStore {
    repo: Box<dyn OwnershipRepository>,
    /// Username the in-memory record belongs to; None when logged out.
    username: Option<String>,
    purchased: Vec<String>,
    active: String,
}

impl OwnershipStore {
    /// Creates a store in the logged-out state: only the default theme.
    pub fn new(repo: Box<dyn OwnershipRepository>) -> Self {
        Self {
            repo,
            username: None,
            purchased: vec![DEFAULT_THEME_ID.to_string()],
            active: DEFAULT_THEME_ID.to_string(),
        }
    }

    // ===== Queries =====

    /// Purchased theme ids for the active user (always includes default).
    pub fn purchased(&self) -> &[String] {
        &self.purchased
    }

    /// The currently equipped theme id.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Returns true if `theme_id` is in the purchased set.
    pub fn is_owned(&self, theme_id: &str) -> bool {
        self.purchased.iter().any(|t| t == theme_id)
    }

    /// Price lookup, delegated to the catalog.
    pub fn price_of(&self, theme_id: &str) -> Option<u64> {
        ThemeCatalog::global().price_of(theme_id)
    }

    // ===== Mutations =====

    /// Records a purchase and persists the purchased set immediately.
    ///
    /// Performs no coin check or deduction: the caller pays separately via
    /// `SessionStore::add_coins(-price)`. That split can drive a balance
    /// negative if the caller skips its own sufficiency check - use
    /// [`Self::purchase_with_payment`] for the safe path.
    pub fn purchase(&mut self, theme_id: &str) -> Result<(), ShopError> {
        if !ThemeCatalog::global().contains(theme_id) {
            return Err(ShopError::UnknownTheme);
        }
        if self.is_owned(theme_id) {
            return Err(ShopError::AlreadyOwned);
        }
        let username = match self.username.as_deref() {
            Some(username) => username,
            None => return Err(ShopError::NotLoggedIn),
        };

        self.purchased.push(theme_id.to_string());
        self.repo.save_purchased(username, &self.purchased);
        log::info!("theme {:?} purchased by {:?}", theme_id, username);
        Ok(())
    }

    /// Validates funds, deducts the price and records ownership as one
    /// step with no partial-failure state.
    pub fn purchase_with_payment(
        &mut self,
        session: &mut SessionStore,
        theme_id: &str,
    ) -> Result<(), ShopError> {
        let price = ThemeCatalog::global()
            .price_of(theme_id)
            .ok_or(ShopError::UnknownTheme)?;
        if self.is_owned(theme_id) {
            return Err(ShopError::AlreadyOwned);
        }
        if self.username.is_none() || !session.is_logged_in() {
            return Err(ShopError::NotLoggedIn);
        }
        if session.coins() < price as i64 {
            return Err(ShopError::InsufficientCoins);
        }

        // All checks passed; neither step below can fail.
        session.add_coins(-(price as i64));
        self.purchase(theme_id)
    }

    /// Equips an owned theme and persists the choice immediately.
    /// No-op when the theme is not owned.
    pub fn equip(&mut self, theme_id: &str) {
        if !self.is_owned(theme_id) {
            log::debug!("equip ignored, {:?} is not owned", theme_id);
            return;
        }
        self.active = theme_id.to_string();
        if let Some(username) = self.username.clone() {
            self.repo.save_active(&username, &self.active);
        }
        log::info!("theme {:?} equipped", theme_id);
    }

    /// Forces the default theme; persists when a user is active.
    pub fn reset_active(&mut self) {
        self.active = DEFAULT_THEME_ID.to_string();
        if let Some(username) = self.username.clone() {
            self.repo.save_active(&username, &self.active);
        }
    }

    /// Persists both the purchased set and the equipped theme for the
    /// current user. No-op when logged out.
    pub fn flush(&mut self) {
        let username = match self.username.clone() {
            Some(username) => username,
            None => return,
        };
        self.repo.save_purchased(&username, &self.purchased);
        self.repo.save_active(&username, &self.active);
        log::info!("progress saved for {:?}", username);
    }

    /// Loads the persisted record for `username`, correcting violations.
    fn load_for(&mut self, username: &str) {
        let mut purchased = self
            .repo
            .load_purchased(username)
            .unwrap_or_else(|| vec![DEFAULT_THEME_ID.to_string()]);
        if !purchased.iter().any(|t| t == DEFAULT_THEME_ID) {
            purchased.insert(0, DEFAULT_THEME_ID.to_string());
        }

        let active = match self.repo.load_active(username) {
            Some(active) if purchased.iter().any(|t| t == &active) => {
                log::info!("theme restored for {:?}: {}", username, active);
                active
            }
            Some(stale) => {
                // Equipped theme is not owned; fall back rather than
                // leaving the invariant dangling.
                log::warn!(
                    "saved theme {:?} for {:?} is not owned, using default",
                    stale,
                    username
                );
                DEFAULT_THEME_ID.to_string()
            }
            None => DEFAULT_THEME_ID.to_string(),
        };

        self.username = Some(username.to_string());
        self.purchased = purchased;
        self.active = active;
    }

    /// Drops the in-memory record without persisting anything.
    fn reset_to_logged_out(&mut self) {
        self.username = None;
        self.purchased = vec![DEFAULT_THEME_ID.to_string()];
        self.active = DEFAULT_THEME_ID.to_string();
    }
}

impl SessionListener for OwnershipStore {
    fn on_session_active(&mut self, username: &str) {
        self.load_for(username);
    }

    fn on_session_ended(&mut self) {
        // The account's own copy was already written through on every
        // mutation; discarding here must not persist.
        self.reset_to_logged_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::SessionBus;
    use crate::repo::{
        shared_store, KvAccountRepository, KvOwnershipRepository, SharedStore,
    };
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Harness {
        shared: SharedStore,
        session: SessionStore,
        ownership: Rc<RefCell<OwnershipStore>>,
    }

    /// Wires a session store and ownership store over one memory store,
    /// the way the application does it.
    fn harness() -> Harness {
        let shared = shared_store(MemoryStore::new());
        let bus = Rc::new(RefCell::new(SessionBus::new()));
        let ownership = Rc::new(RefCell::new(OwnershipStore::new(Box::new(
            KvOwnershipRepository::new(shared.clone()),
        ))));
        bus.borrow_mut().register(ownership.clone());
        let session = SessionStore::new(
            Box::new(KvAccountRepository::new(shared.clone())),
            Box::new(KvOwnershipRepository::new(shared.clone())),
            bus,
        );
        Harness {
            shared,
            session,
            ownership,
        }
    }

    fn login_alice(h: &mut Harness) {
        h.session.signup("alice", "pw").unwrap();
        h.session.login("alice", "pw").unwrap();
    }

    #[test]
    fn test_purchase_requires_login() {
        let h = harness();
        assert_eq!(
            h.ownership.borrow_mut().purchase("pink"),
            Err(ShopError::NotLoggedIn)
        );
    }

    #[test]
    fn test_purchase_rejects_unknown_theme() {
        let mut h = harness();
        login_alice(&mut h);
        assert_eq!(
            h.ownership.borrow_mut().purchase("mauve"),
            Err(ShopError::UnknownTheme)
        );
    }

    #[test]
    fn test_purchase_is_idempotent() {
        let mut h = harness();
        login_alice(&mut h);

        assert_eq!(h.ownership.borrow_mut().purchase("pink"), Ok(()));
        let before: Vec<String> = h.ownership.borrow().purchased().to_vec();

        assert_eq!(
            h.ownership.borrow_mut().purchase("pink"),
            Err(ShopError::AlreadyOwned)
        );
        assert_eq!(h.ownership.borrow().purchased(), before.as_slice());
    }

    #[test]
    fn test_purchase_then_manual_payment() {
        // Scenario: price 10, balance 10, caller pays via add_coins
        let mut h = harness();
        login_alice(&mut h);
        h.session.add_coins(10);

        assert_eq!(h.ownership.borrow_mut().purchase("pink"), Ok(()));
        assert_eq!(
            h.ownership.borrow().purchased(),
            ["default".to_string(), "pink".to_string()]
        );
        h.session.add_coins(-10);
        assert_eq!(h.session.coins(), 0);
    }

    #[test]
    fn test_unchecked_purchase_can_drive_coins_negative() {
        // purchase() does not check funds; a caller that skips its own
        // sufficiency check ends up below zero. This is the documented
        // caller contract, not a store guarantee.
        let mut h = harness();
        login_alice(&mut h);
        h.session.add_coins(5);

        let price = h.ownership.borrow().price_of("pink").unwrap() as i64;
        assert_eq!(h.ownership.borrow_mut().purchase("pink"), Ok(()));
        h.session.add_coins(-price);
        assert_eq!(h.session.coins(), -5);
    }

    #[test]
    fn test_purchase_with_payment_success() {
        let mut h = harness();
        login_alice(&mut h);
        h.session.add_coins(25);

        let result = h
            .ownership
            .borrow_mut()
            .purchase_with_payment(&mut h.session, "green");
        assert_eq!(result, Ok(()));
        assert_eq!(h.session.coins(), 5);
        assert!(h.ownership.borrow().is_owned("green"));
    }

    #[test]
    fn test_purchase_with_payment_rejects_insufficient_funds() {
        let mut h = harness();
        login_alice(&mut h);
        h.session.add_coins(9);

        let result = h
            .ownership
            .borrow_mut()
            .purchase_with_payment(&mut h.session, "pink");
        assert_eq!(result, Err(ShopError::InsufficientCoins));
        // No partial state: no deduction, no ownership
        assert_eq!(h.session.coins(), 9);
        assert!(!h.ownership.borrow().is_owned("pink"));
    }

    #[test]
    fn test_equip_unowned_theme_is_noop() {
        let mut h = harness();
        login_alice(&mut h);

        h.ownership.borrow_mut().equip("pink");
        assert_eq!(h.ownership.borrow().active(), DEFAULT_THEME_ID);
    }

    #[test]
    fn test_equip_persists_immediately() {
        let mut h = harness();
        login_alice(&mut h);
        h.ownership.borrow_mut().purchase("pink").unwrap();
        h.ownership.borrow_mut().equip("pink");

        // Visible through a fresh repository without any flush call
        let repo = KvOwnershipRepository::new(h.shared.clone());
        assert_eq!(repo.load_active("alice"), Some("pink".to_string()));
    }

    #[test]
    fn test_active_stays_within_purchased() {
        let mut h = harness();
        login_alice(&mut h);

        let mut ownership = h.ownership.borrow_mut();
        ownership.purchase("pink").unwrap();
        ownership.equip("pink");
        ownership.purchase("blue").unwrap();
        ownership.equip("blue");
        ownership.equip("teal"); // not owned, ignored
        ownership.reset_active();
        ownership.equip("pink");

        let active = ownership.active().to_string();
        assert!(ownership.is_owned(&active));
    }

    #[test]
    fn test_flush_and_reload_round_trip() {
        let mut h = harness();
        login_alice(&mut h);
        {
            let mut ownership = h.ownership.borrow_mut();
            ownership.purchase("pink").unwrap();
            ownership.purchase("blue").unwrap();
            ownership.equip("blue");
            ownership.flush();
        }
        let purchased_before: Vec<String> = h.ownership.borrow().purchased().to_vec();

        // Logout resets in-memory state, re-login reloads it by event
        h.session.logout();
        assert_eq!(h.ownership.borrow().active(), DEFAULT_THEME_ID);
        assert_eq!(h.ownership.borrow().purchased().len(), 1);

        h.session.login("alice", "pw").unwrap();
        assert_eq!(h.ownership.borrow().purchased(), purchased_before.as_slice());
        assert_eq!(h.ownership.borrow().active(), "blue");
    }

    #[test]
    fn test_stale_active_falls_back_to_default() {
        let mut h = harness();
        h.session.signup("alice", "pw").unwrap();

        // Persisted record equips a theme that is not purchased
        {
            let mut repo = KvOwnershipRepository::new(h.shared.clone());
            repo.save_purchased("alice", &[DEFAULT_THEME_ID.to_string()]);
            repo.save_active("alice", "indigo");
        }

        h.session.login("alice", "pw").unwrap();
        assert_eq!(h.ownership.borrow().active(), DEFAULT_THEME_ID);
    }

    #[test]
    fn test_missing_default_is_restored_on_load() {
        let mut h = harness();
        h.session.signup("alice", "pw").unwrap();
        {
            let mut repo = KvOwnershipRepository::new(h.shared.clone());
            repo.save_purchased("alice", &["pink".to_string()]);
        }

        h.session.login("alice", "pw").unwrap();
        assert!(h.ownership.borrow().is_owned(DEFAULT_THEME_ID));
        assert!(h.ownership.borrow().is_owned("pink"));
    }

    #[test]
    fn test_session_ended_does_not_persist_reset() {
        let mut h = harness();
        login_alice(&mut h);
        h.ownership.borrow_mut().purchase("pink").unwrap();
        h.ownership.borrow_mut().equip("pink");

        h.session.logout();

        // The stored record still says pink; only memory was reset
        let repo = KvOwnershipRepository::new(h.shared.clone());
        assert_eq!(repo.load_active("alice"), Some("pink".to_string()));
        assert_eq!(
            repo.load_purchased("alice"),
            Some(vec!["default".to_string(), "pink".to_string()])
        );
    }

    #[test]
    fn test_admin_login_sees_full_catalog() {
        let mut h = harness();
        h.session.signup("Admin", "Admin").unwrap();
        h.session.login("Admin", "Admin").unwrap();

        assert_eq!(
            h.ownership.borrow().purchased(),
            ThemeCatalog::global().all_ids().as_slice()
        );
    }

    #[test]
    fn test_users_have_independent_records() {
        let mut h = harness();
        login_alice(&mut h);
        h.ownership.borrow_mut().purchase("pink").unwrap();
        h.ownership.borrow_mut().equip("pink");
        h.session.logout();

        h.session.signup("bob", "pw").unwrap();
        h.session.login("bob", "pw").unwrap();
        assert!(!h.ownership.borrow().is_owned("pink"));
        assert_eq!(h.ownership.borrow().active(), DEFAULT_THEME_ID);
    }
}
