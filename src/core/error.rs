use thiserror::Error;

/// Reasons a requested change to the profile did not happen.
///
/// None of these are fatal. When a transition returns one of them the
/// profile is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("not enough coins: need {needed}, have {available}")]
    InsufficientCoins { needed: u64, available: u64 },

    #[error("not enough gems: need {needed}, have {available}")]
    InsufficientGems { needed: u64, available: u64 },

    #[error("no item with id {0} in inventory")]
    UnknownItem(String),

    #[error("item {0} is equipped and cannot be sold")]
    ItemEquipped(String),

    #[error("no chest is sold for {0} coins")]
    UnknownChest(u64),

    #[error("no combat in progress")]
    NotInCombat,

    #[error("already in combat")]
    AlreadyInCombat,
}

pub type ActionResult<T> = Result<T, ActionError>;
