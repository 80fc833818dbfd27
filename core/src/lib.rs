#![no_std]

extern crate alloc;

pub use color::*;
pub use deck::*;
pub use engine::*;
pub use error::*;
pub use random::*;
pub use render::*;
pub use state::*;

mod color;
mod deck;
mod engine;
mod error;
mod random;
mod render;
mod state;

/// Grid position of a card, row-major.
pub type CardIndex = u8;

/// Number of cards on the board.
pub const DECK_SIZE: usize = Color::ALL.len();

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;
