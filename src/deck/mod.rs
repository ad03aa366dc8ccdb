//! Boards of paired tiles and the deck builder that shuffles them.

pub mod board;
pub mod builder;
pub mod tile;

pub use board::Board;
pub use builder::{shuffle, DeckBuilder};
pub use tile::{Tile, TileState};
