//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! search engine can compose them freely.

pub mod draw;
pub mod moves;
pub mod outcome;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{actions, result};
pub use outcome::{outcome, terminal, utility};
pub use turn::player;
pub use win::winner;
