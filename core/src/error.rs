use thiserror::Error;

use crate::CardIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A round is already in progress")]
    NotIdle,
    #[error("Not accepting guesses right now")]
    NotGuessing,
    #[error("Card index {0} is out of range")]
    InvalidCardIndex(CardIndex),
    #[error("No timer is pending")]
    NoTimerPending,
    #[error("Timer does not belong to the current round")]
    StaleTimer,
}

pub type Result<T> = core::result::Result<T, GameError>;
