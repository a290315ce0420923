//! Win condition checking: five or more stones in a row.
//!
//! All checks start from a single cell and scan outward along each of the
//! four line axes, in both opposite directions, until the first cell that is
//! off the board or does not hold the given color.

use crate::board::{Board, Pos, Stone};

/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Consecutive `stone` cells strictly beyond `from` in direction `(dr, dc)`.
fn count_dir(board: &Board, from: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut cur = from.offset(dr, dc);
    while let Some(pos) = cur {
        if board.get(pos) != stone {
            break;
        }
        count += 1;
        cur = pos.offset(dr, dc);
    }
    count
}

/// Five-in-a-row check through a just-placed stone.
///
/// Counts the placed cell plus the unbroken run on both sides of each axis.
/// No allocation; only the four lines through `pos` are inspected.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, stone: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_dir(board, pos, stone, dr, dc) + count_dir(board, pos, stone, -dr, -dc)
            >= WIN_LENGTH
    })
}

/// Find the winning line through a just-placed stone, if any.
///
/// Returns the first [`WIN_LENGTH`] cells of the run counted from its low
/// end, so overlines still yield exactly five cells for highlighting.
pub fn winning_line_at(board: &Board, pos: Pos, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    for &(dr, dc) in &DIRECTIONS {
        let back = count_dir(board, pos, stone, -dr, -dc);
        let forward = count_dir(board, pos, stone, dr, dc);
        if back + forward + 1 < WIN_LENGTH {
            continue;
        }

        // Walk to the low end of the run, then collect five cells forward.
        let mut start = pos;
        for _ in 0..back {
            start = start.offset(-dr, -dc)?;
        }
        let mut line = [start; WIN_LENGTH];
        for i in 1..WIN_LENGTH {
            line[i] = line[i - 1].offset(dr, dc)?;
        }
        return Some(line);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: u8, cols: std::ops::Range<u8>, stone: Stone) {
        for col in cols {
            board.place_stone(Pos::new(row, col), stone);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        row_of(&mut board, 9, 0..5, Stone::Black);
        assert!(has_five_at(&board, Pos::new(9, 2), Stone::Black));
        assert!(!has_five_at(&board, Pos::new(9, 2), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::Black);
        }
        assert!(has_five_at(&board, Pos::new(0, 9), Stone::Black));
        assert!(has_five_at(&board, Pos::new(4, 9), Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(has_five_at(&board, Pos::new(2, 2), Stone::White));
    }

    #[test]
    fn test_diagonal_sw_five() {
        let mut board = Board::new();
        // Diagonal from (4, 8) to (8, 4)
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert!(has_five_at(&board, Pos::new(6, 6), Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        row_of(&mut board, 9, 0..6, Stone::Black);
        assert!(has_five_at(&board, Pos::new(9, 3), Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        row_of(&mut board, 9, 0..4, Stone::Black);
        assert!(!has_five_at(&board, Pos::new(9, 0), Stone::Black));
        assert!(winning_line_at(&board, Pos::new(9, 0), Stone::Black).is_none());
    }

    #[test]
    fn test_four_blocked_both_ends_not_win() {
        let mut board = Board::new();
        board.place_stone(Pos::new(9, 4), Stone::White);
        row_of(&mut board, 9, 5..9, Stone::Black);
        board.place_stone(Pos::new(9, 9), Stone::White);
        for col in 5..9 {
            assert!(!has_five_at(&board, Pos::new(9, col), Stone::Black));
        }
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        row_of(&mut board, 9, 0..2, Stone::Black);
        board.place_stone(Pos::new(9, 2), Stone::White);
        row_of(&mut board, 9, 3..6, Stone::Black);
        assert!(!has_five_at(&board, Pos::new(9, 4), Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        row_of(&mut board, 18, 0..5, Stone::Black);
        assert!(has_five_at(&board, Pos::new(18, 0), Stone::Black));
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new();
        // Diagonal from (14, 14) to (18, 18)
        for i in 0..5 {
            board.place_stone(Pos::new(14 + i, 14 + i), Stone::White);
        }
        assert!(has_five_at(&board, Pos::new(18, 18), Stone::White));
    }

    #[test]
    fn test_injected_row_detected_from_middle() {
        // Black stones written straight onto the grid, no turn alternation.
        let mut board = Board::new();
        for col in 9..14 {
            board.place_stone(Pos::new(9, col), Stone::Black);
        }
        assert!(has_five_at(&board, Pos::new(9, 11), Stone::Black));
    }

    #[test]
    fn test_empty_board_no_five() {
        let board = Board::new();
        assert!(!has_five_at(&board, Pos::new(9, 9), Stone::Black));
        assert!(!has_five_at(&board, Pos::new(9, 9), Stone::White));
    }

    #[test]
    fn test_winning_line_ordering() {
        let mut board = Board::new();
        row_of(&mut board, 9, 5..10, Stone::Black);
        let line = winning_line_at(&board, Pos::new(9, 7), Stone::Black).unwrap();
        let expected: Vec<Pos> = (5..10).map(|c| Pos::new(9, c)).collect();
        assert_eq!(line.to_vec(), expected);
    }

    #[test]
    fn test_winning_line_overline_takes_low_end() {
        let mut board = Board::new();
        row_of(&mut board, 9, 5..11, Stone::Black); // six in a row
        let line = winning_line_at(&board, Pos::new(9, 10), Stone::Black).unwrap();
        assert_eq!(line[0], Pos::new(9, 5));
        assert_eq!(line[4], Pos::new(9, 9));
    }

    #[test]
    fn test_winning_line_vertical() {
        let mut board = Board::new();
        for i in 3..8 {
            board.place_stone(Pos::new(i, 0), Stone::White);
        }
        let line = winning_line_at(&board, Pos::new(5, 0), Stone::White).unwrap();
        assert_eq!(line[0], Pos::new(3, 0));
        assert_eq!(line[4], Pos::new(7, 0));
    }
}
