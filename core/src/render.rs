use crate::*;

/// Glyph drawn on top of a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardGlyph {
    /// The guessed card, when the guess was right.
    Check,
    /// The guessed card, when the guess was wrong.
    Cross,
    /// Any other card: a cross painted in the card's own color so it blends in.
    Camouflaged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub index: CardIndex,
    /// CSS color the card is painted with.
    pub fill: &'static str,
    pub glyph: CardGlyph,
}

impl CardView {
    /// CSS color of the glyph.
    pub const fn glyph_color(&self) -> &'static str {
        match self.glyph {
            CardGlyph::Check | CardGlyph::Cross => "black",
            CardGlyph::Camouflaged => self.fill,
        }
    }
}

/// Everything the screen shows, derived from the game state alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    pub state: GameState,
    pub status: &'static str,
    pub cards: [CardView; DECK_SIZE],
    /// Color of the target swatch, only present once colors are hidden.
    pub swatch: Option<&'static str>,
    pub play_enabled: bool,
    pub cards_clickable: bool,
}

impl BoardView {
    pub fn new(
        deck: &Deck,
        state: GameState,
        target: CardIndex,
        guessed: Option<CardIndex>,
    ) -> Self {
        let cards = core::array::from_fn(|pos| {
            let index = pos as CardIndex;
            let fill = displayed_color(state, deck[index]);
            let glyph = match guessed {
                Some(guessed) if guessed == index && state == GameState::Correct => {
                    CardGlyph::Check
                }
                Some(guessed) if guessed == index => CardGlyph::Cross,
                _ => CardGlyph::Camouflaged,
            };
            CardView { index, fill, glyph }
        });

        let swatch = matches!(
            state,
            GameState::Guessing | GameState::Correct | GameState::Incorrect
        )
        .then(|| deck[target].css_name());

        Self {
            state,
            status: state.status_message(),
            cards,
            swatch,
            play_enabled: state.accepts_play(),
            cards_clickable: state.accepts_guess(),
        }
    }

    /// Cards grouped by grid row.
    pub fn rows(&self) -> impl Iterator<Item = &[CardView]> {
        self.cards.chunks(GRID_COLUMNS)
    }
}

/// Color a card is painted with in `state`.
pub const fn displayed_color(state: GameState, color: Color) -> &'static str {
    if state.is_revealed() {
        color.css_name()
    } else {
        NEUTRAL_COLOR
    }
}
