//! Omok (five in a row) on a standard 19x19 board
//!
//! Two stone colors alternate placements on grid intersections; the first
//! five or more in a row along any of the four axes wins, and a full board
//! with no five is a draw. The crate splits into:
//! - [`board`]: grid representation and coordinates
//! - [`rules`]: the five-in-a-row win condition
//! - [`game`]: game state with placement, undo, and outcome tracking
//! - [`ai`]: the random-move computer opponent
//! - [`ui`]: native egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use omok::{GameState, Outcome, Stone};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.place(9, 9), Ok(Outcome::InProgress));
//! assert_eq!(game.turn(), Stone::White);
//!
//! // Take the move back
//! let undone = game.undo().unwrap();
//! assert_eq!(undone.stone, Stone::Black);
//! assert_eq!(game.turn(), Stone::Black);
//! ```

pub mod ai;
pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use ai::RandomAi;
pub use board::{Board, Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use game::{GameError, GameState, Move, Outcome};
