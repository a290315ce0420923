//! Game rules: the five-in-a-row win condition.

pub mod win;

// Re-exports for convenient access
pub use win::{has_five_at, winning_line_at, WIN_LENGTH};
