//! GUI module for the Omok game
//!
//! Native egui/eframe front end: menu screen, board rendering, and the
//! session layer that paces the computer opponent.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::OmokApp;
pub use session::{GameMode, Notice, NoticeKind, Session};
