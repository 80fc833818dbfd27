use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The nine cards on the board, indexed by grid position (row-major).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: [Color; DECK_SIZE],
}

impl Deck {
    pub const fn new() -> Self {
        Self { cards: Color::ALL }
    }

    /// Fisher-Yates: walk from the last position down to 1 and swap each with a uniform pick at or below it.
    pub fn shuffle(&mut self, random: &mut impl RandomSource) {
        for i in (1..self.cards.len()).rev() {
            let j = random.index_below(i + 1);
            self.cards.swap(i, j);
        }
    }

    pub fn validate_index(&self, index: CardIndex) -> Result<CardIndex> {
        if usize::from(index) < self.cards.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidCardIndex(index))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.cards.iter().copied()
    }

    pub fn position_of(&self, color: Color) -> Option<CardIndex> {
        self.cards
            .iter()
            .position(|&card| card == color)
            .map(|pos| pos as CardIndex)
    }

    /// Whether the deck holds every color exactly once.
    pub fn is_complete(&self) -> bool {
        let mut sorted = self.cards;
        sorted.sort_unstable();
        sorted == Color::ALL
    }

    pub const fn as_array(&self) -> &[Color; DECK_SIZE] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Color; DECK_SIZE]> for Deck {
    fn from(cards: [Color; DECK_SIZE]) -> Self {
        Self { cards }
    }
}

impl Index<CardIndex> for Deck {
    type Output = Color;

    fn index(&self, index: CardIndex) -> &Self::Output {
        &self.cards[usize::from(index)]
    }
}
