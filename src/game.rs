//! Core game state: placement, undo, and win/draw detection.
//!
//! [`GameState`] is a plain value with no global instance: the presentation
//! layer constructs one, forwards translated grid coordinates into
//! [`GameState::place`] and [`GameState::undo`], and re-renders from the
//! returned [`Outcome`]. Rejected operations leave the state untouched and
//! are reported through [`GameError`]; nothing here panics.

use derive_more::{Display, Error};

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::rules::win::{winning_line_at, WIN_LENGTH};

/// A single recorded placement, immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Stone),
    Draw,
}

impl Outcome {
    /// Win or draw: play halts until reset or undo.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Why an operation was rejected. Neither kind is ever escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Out-of-bounds coordinate, occupied cell, or game already decided.
    #[display("illegal move")]
    IllegalMove,
    /// Undo with no moves on record.
    #[display("nothing to undo")]
    EmptyHistory,
}

/// Full state of one game: grid, turn, move history, and outcome.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Stone,
    history: Vec<Move>,
    outcome: Outcome,
    winning_line: Option<[Pos; WIN_LENGTH]>,
}

impl GameState {
    /// Fresh game: empty grid, empty history, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Stone::Black,
            history: Vec::with_capacity(TOTAL_CELLS),
            outcome: Outcome::InProgress,
            winning_line: None,
        }
    }

    /// Discard everything and start over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// True iff both coordinates are on the board, the game is still in
    /// progress, and the cell is empty.
    pub fn is_legal(&self, row: i32, col: i32) -> bool {
        Pos::at(row, col)
            .is_some_and(|pos| self.outcome == Outcome::InProgress && self.board.is_empty(pos))
    }

    /// Place a stone for the current player.
    ///
    /// Sets the cell, records the move, and re-evaluates the outcome from
    /// the placed cell: five or more in a row ends the game as a win, a
    /// full board with no win ends it as a draw, anything else passes the
    /// turn to the opponent. The turn does not advance on a terminal
    /// placement, so the winner stays the current player.
    pub fn place(&mut self, row: i32, col: i32) -> Result<Outcome, GameError> {
        let pos = Pos::at(row, col).ok_or(GameError::IllegalMove)?;
        if self.outcome.is_terminal() || !self.board.is_empty(pos) {
            return Err(GameError::IllegalMove);
        }

        let stone = self.turn;
        self.board.place_stone(pos, stone);
        self.history.push(Move { pos, stone });

        if let Some(line) = winning_line_at(&self.board, pos, stone) {
            self.outcome = Outcome::Win(stone);
            self.winning_line = Some(line);
        } else if self.history.len() == TOTAL_CELLS {
            self.outcome = Outcome::Draw;
        } else {
            self.turn = stone.opponent();
        }
        Ok(self.outcome)
    }

    /// Take back the last move.
    ///
    /// Clears its cell, hands the turn back to the player who made it, and
    /// reopens the game even from a terminal outcome. Returns the undone
    /// move.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let last = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.board.remove_stone(last.pos);
        self.turn = last.stone;
        self.outcome = Outcome::InProgress;
        self.winning_line = None;
        Ok(last)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next.
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The five highlighted cells while the outcome is a win.
    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; WIN_LENGTH]> {
        self.winning_line
    }

    /// All moves in order of play.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn play(game: &mut GameState, moves: &[(i32, i32)]) {
        for &(r, c) in moves {
            game.place(r, c).unwrap();
        }
    }

    /// Black on row 9 while White answers on row 0; the fifth Black stone
    /// at (9, 9) wins.
    fn play_black_row_win(game: &mut GameState) {
        play(
            game,
            &[
                (9, 5),
                (0, 0),
                (9, 6),
                (0, 1),
                (9, 7),
                (0, 2),
                (9, 8),
                (0, 3),
                (9, 9),
            ],
        );
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.moves().is_empty());
        assert!(game.last_move().is_none());
        assert_eq!(game.board().stone_count(), 0);
    }

    #[test]
    fn test_place_alternates_turn() {
        let mut game = GameState::new();
        assert_eq!(game.place(9, 9), Ok(Outcome::InProgress));
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.place(9, 10), Ok(Outcome::InProgress));
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.board().get(Pos::new(9, 9)), Stone::Black);
        assert_eq!(game.board().get(Pos::new(9, 10)), Stone::White);
    }

    #[test]
    fn test_place_occupied_rejected() {
        let mut game = GameState::new();
        game.place(9, 9).unwrap();
        assert_eq!(game.place(9, 9), Err(GameError::IllegalMove));
        // Still White's turn, stone untouched.
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.board().get(Pos::new(9, 9)), Stone::Black);
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_place_out_of_bounds_rejected() {
        let mut game = GameState::new();
        for (r, c) in [(-1, 0), (0, -1), (19, 0), (0, 19), (100, 100)] {
            assert_eq!(game.place(r, c), Err(GameError::IllegalMove));
        }
        assert!(game.moves().is_empty());
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_is_legal() {
        let mut game = GameState::new();
        assert!(game.is_legal(0, 0));
        assert!(game.is_legal(18, 18));
        assert!(!game.is_legal(-1, 0));
        assert!(!game.is_legal(0, 19));

        game.place(0, 0).unwrap();
        assert!(!game.is_legal(0, 0));
        assert!(game.is_legal(0, 1));
    }

    #[test]
    fn test_is_legal_false_after_win() {
        let mut game = GameState::new();
        play_black_row_win(&mut game);
        assert!(!game.is_legal(5, 5));
        assert!(!game.is_legal(9, 10));
    }

    #[test]
    fn test_place_then_undo_restores_state() {
        let mut game = GameState::new();
        play(&mut game, &[(9, 9), (9, 10), (10, 10)]);

        let board_before = game.board().clone();
        let turn_before = game.turn();

        game.place(0, 5).unwrap();
        game.undo().unwrap();

        assert_eq!(*game.board(), board_before);
        assert_eq!(game.turn(), turn_before);
        assert_eq!(game.moves().len(), 3);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut game = GameState::new();
        assert_eq!(game.undo(), Err(GameError::EmptyHistory));
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_undo_returns_last_move() {
        let mut game = GameState::new();
        play(&mut game, &[(3, 3), (4, 4)]);
        let undone = game.undo().unwrap();
        assert_eq!(undone.pos, Pos::new(4, 4));
        assert_eq!(undone.stone, Stone::White);
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.last_move(), Some(Move { pos: Pos::new(3, 3), stone: Stone::Black }));
    }

    #[test]
    fn test_horizontal_win_through_place() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[(9, 5), (0, 0), (9, 6), (0, 1), (9, 7), (0, 2), (9, 8), (0, 3)],
        );
        assert_eq!(game.outcome(), Outcome::InProgress);

        assert_eq!(game.place(9, 9), Ok(Outcome::Win(Stone::Black)));
        assert_eq!(game.outcome(), Outcome::Win(Stone::Black));
        // The winner stays the current player.
        assert_eq!(game.turn(), Stone::Black);

        let line = game.winning_line().unwrap();
        assert_eq!(line[0], Pos::new(9, 5));
        assert_eq!(line[4], Pos::new(9, 9));
    }

    #[test]
    fn test_diagonal_win_through_place() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[
                (5, 5),
                (0, 0),
                (6, 6),
                (0, 1),
                (7, 7),
                (0, 2),
                (8, 8),
                (0, 3),
            ],
        );
        assert_eq!(game.place(9, 9), Ok(Outcome::Win(Stone::Black)));
        let line = game.winning_line().unwrap();
        assert_eq!(line[0], Pos::new(5, 5));
        assert_eq!(line[4], Pos::new(9, 9));
    }

    #[test]
    fn test_vertical_win_through_place() {
        let mut game = GameState::new();
        play(
            &mut game,
            &[
                (5, 3),
                (0, 0),
                (6, 3),
                (0, 1),
                (7, 3),
                (0, 2),
                (8, 3),
                (0, 3),
            ],
        );
        assert_eq!(game.place(9, 3), Ok(Outcome::Win(Stone::Black)));
        let line = game.winning_line().unwrap();
        assert_eq!(line[0], Pos::new(5, 3));
        assert_eq!(line[4], Pos::new(9, 3));
    }

    #[test]
    fn test_anti_diagonal_win_through_place() {
        let mut game = GameState::new();
        // Black walks down-left from (4, 12); White answers on row 0.
        play(
            &mut game,
            &[
                (4, 12),
                (0, 0),
                (5, 11),
                (0, 1),
                (6, 10),
                (0, 2),
                (7, 9),
                (0, 3),
            ],
        );
        assert_eq!(game.place(8, 8), Ok(Outcome::Win(Stone::Black)));
        let line = game.winning_line().unwrap();
        assert_eq!(line[0], Pos::new(4, 12));
        assert_eq!(line[4], Pos::new(8, 8));
    }

    #[test]
    fn test_place_after_win_rejected() {
        let mut game = GameState::new();
        play_black_row_win(&mut game);
        assert_eq!(game.place(5, 5), Err(GameError::IllegalMove));
        assert_eq!(game.moves().len(), 9);
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut game = GameState::new();
        play_black_row_win(&mut game);
        assert_eq!(game.outcome(), Outcome::Win(Stone::Black));

        let undone = game.undo().unwrap();
        assert_eq!(undone.pos, Pos::new(9, 9));
        assert_eq!(undone.stone, Stone::Black);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.turn(), Stone::Black);
        assert!(game.winning_line().is_none());

        // A neighbor of the formerly winning line is playable again.
        assert_eq!(game.place(9, 10), Ok(Outcome::InProgress));
    }

    /// Tiling where Black takes cells with `(2r + c) mod 4 < 2`. The longest
    /// same-color run in every direction is 2, and Black gets exactly 181 of
    /// the 361 cells, so playing blacks and whites alternately fills the
    /// board without ever making five.
    fn draw_tiling() -> (Vec<Pos>, Vec<Pos>) {
        let mut blacks = Vec::new();
        let mut whites = Vec::new();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if (2 * pos.row as usize + pos.col as usize) % 4 < 2 {
                blacks.push(pos);
            } else {
                whites.push(pos);
            }
        }
        (blacks, whites)
    }

    #[test]
    fn test_full_board_without_five_is_draw() {
        let (blacks, whites) = draw_tiling();
        assert_eq!(blacks.len(), 181);
        assert_eq!(whites.len(), 180);

        let mut game = GameState::new();
        for i in 0..TOTAL_CELLS {
            let pos = if i % 2 == 0 {
                blacks[i / 2]
            } else {
                whites[i / 2]
            };
            let outcome = game.place(pos.row as i32, pos.col as i32).unwrap();
            if i < TOTAL_CELLS - 1 {
                assert_eq!(outcome, Outcome::InProgress);
            }
        }

        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(game.winning_line().is_none());
        assert!(!game.is_legal(0, 0));
        assert_eq!(game.place(0, 0), Err(GameError::IllegalMove));
    }

    #[test]
    fn test_undo_reopens_draw() {
        let (blacks, whites) = draw_tiling();
        let mut game = GameState::new();
        for i in 0..TOTAL_CELLS {
            let pos = if i % 2 == 0 {
                blacks[i / 2]
            } else {
                whites[i / 2]
            };
            game.place(pos.row as i32, pos.col as i32).unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Draw);

        let undone = game.undo().unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.turn(), Stone::Black);
        // Replaying the same cell fills the board again.
        assert_eq!(
            game.place(undone.pos.row as i32, undone.pos.col as i32),
            Ok(Outcome::Draw)
        );
    }

    #[test]
    fn test_reset() {
        let mut game = GameState::new();
        play_black_row_win(&mut game);
        game.reset();

        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.moves().is_empty());
        assert_eq!(game.board().stone_count(), 0);
        assert!(game.winning_line().is_none());
    }

    #[test]
    fn test_random_place_undo_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut game = GameState::new();

        for _ in 0..100 {
            let open: Vec<Pos> = game.board().empty_cells().collect();
            let &pos = open.choose(&mut rng).unwrap();

            let board_before = game.board().clone();
            let turn_before = game.turn();
            let len_before = game.moves().len();

            game.place(pos.row as i32, pos.col as i32).unwrap();
            game.undo().unwrap();

            assert_eq!(*game.board(), board_before);
            assert_eq!(game.turn(), turn_before);
            assert_eq!(game.moves().len(), len_before);
            assert_eq!(game.outcome(), Outcome::InProgress);

            // Put the stone back so later rounds see fuller boards.
            game.place(pos.row as i32, pos.col as i32).unwrap();
            if game.outcome().is_terminal() {
                break;
            }
        }
    }
}
