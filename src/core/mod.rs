//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game::{ActivePiece, Game};
pub use rng::{PiecePicker, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
