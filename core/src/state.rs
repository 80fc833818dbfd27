use serde::{Deserialize, Serialize};

/// Phase of the current round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player to press play.
    Idle,
    /// Colors are visible, memorize window.
    Started,
    /// Colors are hidden, waiting for a card click.
    Guessing,
    Correct,
    Incorrect,
}

/// What drives the state machine forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Play,
    Elapsed,
    Guess { correct: bool },
}

impl GameState {
    /// The transition function, `None` when the input is not accepted in this state.
    pub const fn next(self, input: Input) -> Option<GameState> {
        use GameState::*;
        match (self, input) {
            (Idle, Input::Play) => Some(Started),
            (Started, Input::Elapsed) => Some(Guessing),
            (Guessing, Input::Guess { correct: true }) => Some(Correct),
            (Guessing, Input::Guess { correct: false }) => Some(Incorrect),
            (Correct | Incorrect, Input::Elapsed) => Some(Idle),
            _ => None,
        }
    }

    pub const fn accepts_play(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn accepts_guess(self) -> bool {
        matches!(self, Self::Guessing)
    }

    /// Whether the real card colors are on screen.
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Started | Self::Correct | Self::Incorrect)
    }

    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Correct | Self::Incorrect)
    }

    /// Whether a timer is expected to move this state on.
    pub const fn is_timed(self) -> bool {
        matches!(self, Self::Started | Self::Correct | Self::Incorrect)
    }

    pub const fn status_message(self) -> &'static str {
        use GameState::*;
        match self {
            Idle => "Click play to start!",
            Started => "Memorize position of each color!",
            Guessing => "Click the card that matches the color!",
            Correct => "Too easy!",
            Incorrect => "Hard luck!",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Idle
    }
}
