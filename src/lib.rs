pub mod storage;
pub mod repo;
pub mod theme;
pub mod bus;
pub mod session;
pub mod ownership;
pub mod questions;

// Export storage layer
pub use storage::{DiskStore, KeyValueStore, MemoryStore};

// Export repositories
pub use repo::{
    shared_store, Account, AccountRepository, KvAccountRepository,
    KvOwnershipRepository, OwnershipRepository, SharedStore,
};

// Export theme catalog
pub use theme::{
    adjust_brightness, hex_to_color32, Theme, ThemeCatalog, ThemeColors, DEFAULT_THEME_ID,
};

// Export session and ownership stores
pub use bus::{SessionBus, SessionListener, SharedListener};
pub use session::{SessionError, SessionStore};
pub use ownership::{OwnershipStore, ShopError};

// Export question bank
pub use questions::{
    question_bank, shuffled_questions, Difficulty, Question, BASE_COIN_REWARD,
};
