//! Error types for game operations.
//!
//! Every variant except the persistence ones is a user-input rejection: the
//! operation that produced it did nothing, and the display string is what the
//! player sees as a notification.

use thiserror::Error;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// Cast attempted without an active bait.
    #[error("You need to use a bait before casting!")]
    NoBait,

    /// Cast attempted while a session is already running.
    #[error("Already fishing")]
    NotIdle,

    #[error("Not enough coins: need {required}, have {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Not enough Stonehenge Relics!")]
    InsufficientRelics,

    #[error("Daily enchant roll limit reached ({limit} per day)")]
    DailyRollCapReached { limit: u32 },

    #[error("No skill points to spend")]
    NoSkillPoints,

    #[error("Requires level {required}")]
    LevelTooLow { required: u32 },

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Item cannot be used: {0}")]
    NotUsable(String),

    #[error("Rod not owned: {0}")]
    RodNotOwned(String),

    #[error("Rod already owned: {0}")]
    RodAlreadyOwned(String),

    /// Rod can only be unlocked, never bought.
    #[error("{name} cannot be bought ({unlock})")]
    RodNotForSale { name: String, unlock: String },

    #[error("Rod is not strong enough for {0}")]
    LocationLocked(String),

    #[error("No enchantment waiting to be applied")]
    NoPendingEnchantment,

    #[error("No {0} fish to sell")]
    NothingToSell(String),

    #[error("Username already exists!")]
    UsernameTaken,

    #[error("Wrong username or password!")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GameError {
    /// True for rejections the player caused, false for storage failures.
    pub fn is_user_rejection(&self) -> bool {
        !matches!(self, GameError::Io(_) | GameError::Serialization(_))
    }
}
