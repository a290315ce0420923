//! One sitting at the table: game, mode, scores, and computer pacing.
//!
//! [`Session`] wraps the core [`GameState`] with everything the screens
//! need between games: which mode is active, the running win counters,
//! the banner notice, and the delayed computer reply. The computer move
//! is not run on a thread; [`Session::poll_ai`] is called every frame
//! and plays the reply once its deadline has passed.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::ai::RandomAi;
use crate::board::{Pos, Stone};
use crate::game::{GameState, Outcome};

/// Pause before the computer answers, so the reply reads as a turn
/// rather than an instant flicker.
const AI_MOVE_DELAY: Duration = Duration::from_millis(1000);

/// Who is playing. In [`GameMode::PvE`] the human holds Black and the
/// computer holds White.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PvP,
    PvE,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::PvP => "Two Players",
            GameMode::PvE => "vs Computer",
        }
    }
}

/// How a banner notice should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Victory,
    Draw,
}

/// Transient banner text shown in the side panel.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }
}

pub struct Session {
    pub game: GameState,
    pub mode: GameMode,
    pub black_wins: u32,
    pub white_wins: u32,
    pub notice: Option<Notice>,
    ai: RandomAi,
    ai_deadline: Option<Instant>,
    ai_delay: Duration,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Self::with_ai_delay(mode, AI_MOVE_DELAY)
    }

    /// Same as [`Session::new`] but with a custom reply delay. Tests pass
    /// [`Duration::ZERO`] so `poll_ai` fires on the next call.
    pub fn with_ai_delay(mode: GameMode, ai_delay: Duration) -> Self {
        info!(mode = mode.label(), "session started");
        Self {
            game: GameState::new(),
            mode,
            black_wins: 0,
            white_wins: 0,
            notice: Some(Notice::info("Black begins")),
            ai: RandomAi::new(),
            ai_deadline: None,
            ai_delay,
        }
    }

    /// False while the computer holds the turn in PvE.
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvP => true,
            GameMode::PvE => self.game.turn() == Stone::Black,
        }
    }

    /// True between the human move and the scheduled computer reply.
    pub fn ai_pending(&self) -> bool {
        self.ai_deadline.is_some()
    }

    /// Time left until the computer reply, if one is scheduled.
    pub fn ai_wait_remaining(&self) -> Option<Duration> {
        self.ai_deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Handle a click on a board cell. Ignored while it is not the human's
    /// turn; illegal cells are rejected by the core without any banner.
    pub fn try_place(&mut self, pos: Pos) {
        if self.ai_pending() || !self.is_human_turn() {
            debug!(row = pos.row, col = pos.col, "click ignored, computer to move");
            return;
        }
        match self.game.place(pos.row as i32, pos.col as i32) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(err) => debug!(row = pos.row, col = pos.col, %err, "placement rejected"),
        }
    }

    /// Take back the last move. Refused in PvE so the human cannot retract
    /// into the computer's turn; in PvP a revoked winning move also takes
    /// its score back.
    pub fn undo(&mut self) {
        if self.mode == GameMode::PvE {
            self.notice = Some(Notice::info("Undo is not available against the computer"));
            return;
        }
        let outcome_before = self.game.outcome();
        match self.game.undo() {
            Ok(undone) => {
                if let Outcome::Win(winner) = outcome_before {
                    self.revoke_win(winner);
                }
                debug!(row = undone.pos.row, col = undone.pos.col, "move undone");
                self.notice = Some(Notice::info("Move undone"));
            }
            Err(err) => debug!(%err, "undo ignored"),
        }
    }

    /// Start the next game; the win counters carry over.
    pub fn reset(&mut self) {
        self.game.reset();
        self.ai_deadline = None;
        self.notice = Some(Notice::info("Black begins"));
        info!("new game");
    }

    /// Play the scheduled computer reply once its deadline has passed.
    /// Returns true when a move was made this call.
    pub fn poll_ai(&mut self) -> bool {
        let Some(deadline) = self.ai_deadline else {
            return false;
        };
        if Instant::now() < deadline {
            return false;
        }
        self.ai_deadline = None;

        let Some(pos) = self.ai.pick(self.game.board()) else {
            return false;
        };
        match self.game.place(pos.row as i32, pos.col as i32) {
            Ok(outcome) => {
                info!(row = pos.row, col = pos.col, "computer played");
                self.apply_outcome(outcome);
                true
            }
            Err(err) => {
                debug!(row = pos.row, col = pos.col, %err, "computer move rejected");
                false
            }
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(winner) => {
                if winner == Stone::Black {
                    self.black_wins += 1;
                } else {
                    self.white_wins += 1;
                }
                info!(winner = ?winner, black = self.black_wins, white = self.white_wins, "game over");
                let text = match (self.mode, winner) {
                    (GameMode::PvE, Stone::White) => "Computer wins!",
                    (GameMode::PvE, _) => "You win!",
                    (GameMode::PvP, Stone::White) => "White wins!",
                    (GameMode::PvP, _) => "Black wins!",
                };
                self.notice = Some(Notice {
                    kind: NoticeKind::Victory,
                    text: text.to_owned(),
                });
            }
            Outcome::Draw => {
                info!("game over, draw");
                self.notice = Some(Notice {
                    kind: NoticeKind::Draw,
                    text: "Board full, it's a draw".to_owned(),
                });
            }
            Outcome::InProgress => {
                if self.mode == GameMode::PvE && !self.is_human_turn() {
                    self.ai_deadline = Some(Instant::now() + self.ai_delay);
                    self.notice = Some(Notice::info("Computer is thinking..."));
                } else {
                    self.notice = None;
                }
            }
        }
    }

    fn revoke_win(&mut self, winner: Stone) {
        if winner == Stone::Black {
            self.black_wins = self.black_wins.saturating_sub(1);
        } else {
            self.white_wins = self.white_wins.saturating_sub(1);
        }
        info!(winner = ?winner, "win revoked by undo");
    }
}
