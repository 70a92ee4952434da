//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart
//! from board storage so search and the game loop share one definition.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, has_line};
