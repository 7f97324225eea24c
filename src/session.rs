//! Account registry and the single current session.
//!
//! The session store owns "who is logged in". It keeps no cached registry:
//! every operation reads the persisted account list through the repository
//! and writes it back, so a login always sees coin balances saved by a
//! previous session. The current session itself is deliberately never
//! persisted - a fresh process starts logged out even when accounts exist.
//!
//! Lifecycle changes are announced on the [`SessionBus`]; the ownership
//! store and the theme application react to those events rather than being
//! called directly.

use crate::bus::SessionBus;
use crate::repo::{Account, AccountRepository, OwnershipRepository};
use crate::theme::ThemeCatalog;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Reserved credential pair that gets the full theme catalog at signup.
const ADMIN_USERNAME: &str = "Admin";
const ADMIN_PASSWORD: &str = "Admin";

/// Failures surfaced by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// Signup with a username that already exists (exact match).
    UsernameTaken,
    /// Signup with an empty username.
    EmptyUsername,
    /// Login with a username/password pair that matches no account.
    InvalidCredentials,
    /// Account deletion with a password that does not match.
    WrongPassword,
    /// Operation requires an active session.
    NotLoggedIn,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::UsernameTaken => write!(f, "username is already taken"),
            SessionError::EmptyUsername => write!(f, "username must not be empty"),
            SessionError::InvalidCredentials => write!(f, "invalid username or password"),
            SessionError::WrongPassword => write!(f, "wrong password"),
            SessionError::NotLoggedIn => write!(f, "no user is logged in"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Owns the user registry and the process-wide current session.
pub struct SessionStore {
    accounts: Box<dyn AccountRepository>,
    ownership: Box<dyn OwnershipRepository>,
    bus: Rc<RefCell<SessionBus>>,
    current: Option<Account>,
}

impl SessionStore {
    /// Creates a store with no active session.
    ///
    /// The ownership repository is needed for two bootstrap/teardown paths
    /// that bypass the shop: the admin full-catalog grant at signup and
    /// record removal on account deletion.
    pub fn new(
        accounts: Box<dyn AccountRepository>,
        ownership: Box<dyn OwnershipRepository>,
        bus: Rc<RefCell<SessionBus>>,
    ) -> Self {
        Self {
            accounts,
            ownership,
            bus,
            current: None,
        }
    }

    // ===== Session Queries =====

    /// Returns the currently logged-in account, if any.
    pub fn current_account(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// Returns the current username, if logged in.
    pub fn current_username(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.username.as_str())
    }

    /// Returns true if a session is active.
    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current coin balance, or 0 when logged out.
    pub fn coins(&self) -> i64 {
        self.current.as_ref().map(|a| a.coins).unwrap_or(0)
    }

    /// Returns all registered accounts, freshly loaded from storage.
    pub fn all_accounts(&self) -> Vec<Account> {
        self.accounts.load_all()
    }

    // ===== Session Mutations =====

    /// Registers a new account with zero coins.
    ///
    /// Does not log the new user in. The reserved Admin/Admin pair gets
    /// every catalog theme pre-granted to its ownership record.
    pub fn signup(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if username.is_empty() {
            return Err(SessionError::EmptyUsername);
        }

        let mut registry = self.accounts.load_all();
        if registry.iter().any(|a| a.username == username) {
            return Err(SessionError::UsernameTaken);
        }

        registry.push(Account::new(username, password));
        self.accounts.save_all(&registry);
        log::info!("account created for {:?}", username);

        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            let all = ThemeCatalog::global().all_ids();
            self.ownership.save_purchased(username, &all);
            log::info!("admin account: all {} themes granted", all.len());
        }

        Ok(())
    }

    /// Starts a session for an existing account.
    ///
    /// Reads the registry from storage first so the session picks up the
    /// latest persisted coin balance, then announces the new session on
    /// the bus.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        let registry = self.accounts.load_all();
        let account = registry
            .into_iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or(SessionError::InvalidCredentials)?;

        log::info!("login: {:?} ({} coins)", account.username, account.coins);
        self.current = Some(account);
        self.bus.borrow().publish_session_active(username);
        Ok(())
    }

    /// Ends the current session. Always succeeds, even when logged out.
    ///
    /// The in-memory account is written back to the registry first
    /// (last-writer-wins against the stored copy), then listeners are told
    /// the session ended - which also resets the displayed theme.
    pub fn logout(&mut self) {
        if let Some(account) = self.current.take() {
            self.persist_account(&account);
            log::info!("user data saved for {:?} before logout", account.username);
        }
        self.bus.borrow().publish_session_ended();
    }

    /// Adds `amount` coins (negative for a spend) to the current account
    /// and persists the registry. No-op when logged out.
    ///
    /// The balance is intentionally not clamped at zero: callers own the
    /// sufficiency check. Use `OwnershipStore::purchase_with_payment` for
    /// the checked spend path.
    pub fn add_coins(&mut self, amount: i64) {
        let account = match self.current.as_mut() {
            Some(account) => account,
            None => return,
        };
        account.coins += amount;
        let snapshot = account.clone();
        self.persist_account(&snapshot);
    }

    /// Deletes the current account after password confirmation.
    ///
    /// Removes the account from the registry and its ownership record from
    /// storage, then ends the session.
    pub fn delete_account(&mut self, password: &str) -> Result<(), SessionError> {
        let account = self.current.as_ref().ok_or(SessionError::NotLoggedIn)?;
        if account.password != password {
            return Err(SessionError::WrongPassword);
        }

        let username = account.username.clone();
        let registry: Vec<Account> = self
            .accounts
            .load_all()
            .into_iter()
            .filter(|a| a.username != username)
            .collect();
        self.accounts.save_all(&registry);
        self.ownership.delete(&username);
        log::info!("account {:?} deleted", username);

        self.current = None;
        self.bus.borrow().publish_session_ended();
        Ok(())
    }

    /// Writes one account back into the persisted registry.
    fn persist_account(&mut self, account: &Account) {
        let mut registry = self.accounts.load_all();
        match registry.iter_mut().find(|a| a.username == account.username) {
            Some(slot) => *slot = account.clone(),
            // Account vanished from storage (e.g. external edit); re-add it,
            // last writer wins.
            None => registry.push(account.clone()),
        }
        self.accounts.save_all(&registry);
    }
}
