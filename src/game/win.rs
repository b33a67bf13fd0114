//! Anchor-local win detection.
//!
//! Only a line through the disc that was just placed can newly reach four, so
//! each check reads at most seven cells in each of the four orientations.

use super::board::Board;
use super::player::Player;

/// Number of aligned discs needed to win.
pub const WIN_LENGTH: usize = 4;

const REACH: isize = WIN_LENGTH as isize - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right, `\`
    DiagonalDown,
    /// Bottom-left to top-right, `/`
    DiagonalUp,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDown,
        Orientation::DiagonalUp,
    ];

    /// (row, col) delta of one step along the line
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDown => (1, 1),
            Orientation::DiagonalUp => (1, -1),
        }
    }
}

/// Four aligned cells that decided the game, ordered along the orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub orientation: Orientation,
    pub cells: [(usize, usize); WIN_LENGTH],
}

impl WinningLine {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Find a run of four `player` discs passing through `(row, col)`.
pub fn find_win(board: &Board, row: usize, col: usize, player: Player) -> Option<WinningLine> {
    Orientation::ALL
        .into_iter()
        .find_map(|orientation| scan_line(board, row, col, player, orientation))
}

/// Check if the disc at `(row, col)` completes four in a row for `player`
pub fn is_win(board: &Board, row: usize, col: usize, player: Player) -> bool {
    find_win(board, row, col, player).is_some()
}

fn scan_line(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    orientation: Orientation,
) -> Option<WinningLine> {
    let (dr, dc) = orientation.step();
    let target = player.to_cell();
    let (row, col) = (row as isize, col as isize);

    let mut count = 0;
    for offset in -REACH..=REACH {
        let (r, c) = (row + offset * dr, col + offset * dc);
        // Off-board cells break the run like an opponent disc would.
        if board.probe(r, c) != Some(target) {
            count = 0;
            continue;
        }
        count += 1;
        if count == WIN_LENGTH {
            let cells = std::array::from_fn(|i| {
                let back = (WIN_LENGTH - 1 - i) as isize;
                ((r - back * dr) as usize, (c - back * dc) as usize)
            });
            return Some(WinningLine {
                player,
                orientation,
                cells,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::default()
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = board();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_disc(col, Player::A).unwrap();
        }
        let line = find_win(&board, 5, 2, Player::A).unwrap(); // Check middle of the line
        assert_eq!(line.orientation, Orientation::Horizontal);
        assert_eq!(line.cells, [(5, 0), (5, 1), (5, 2), (5, 3)]);
    }

    #[test]
    fn test_horizontal_win_at_both_edges() {
        let mut left = board();
        for col in 0..4 {
            left.drop_disc(col, Player::B).unwrap();
        }
        assert!(is_win(&left, 5, 0, Player::B));

        let mut right = board();
        for col in 3..7 {
            right.drop_disc(col, Player::B).unwrap();
        }
        assert!(is_win(&right, 5, 6, Player::B));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = board();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_disc(3, Player::B).unwrap();
        }
        let line = find_win(&board, 2, 3, Player::B).unwrap(); // Check the 4th disc
        assert_eq!(line.orientation, Orientation::Vertical);
        assert_eq!(line.cells, [(2, 3), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = board();
        // Create diagonal / pattern
        board.drop_disc(0, Player::A).unwrap();

        board.drop_disc(1, Player::B).unwrap();
        board.drop_disc(1, Player::A).unwrap();

        board.drop_disc(2, Player::B).unwrap();
        board.drop_disc(2, Player::B).unwrap();
        board.drop_disc(2, Player::A).unwrap();

        board.drop_disc(3, Player::B).unwrap();
        board.drop_disc(3, Player::B).unwrap();
        board.drop_disc(3, Player::B).unwrap();
        let row = board.drop_disc(3, Player::A).unwrap();

        let line = find_win(&board, row, 3, Player::A).unwrap();
        assert_eq!(line.orientation, Orientation::DiagonalUp);
        assert!(line.contains(5, 0) && line.contains(2, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = board();
        // Create diagonal \ pattern
        board.drop_disc(6, Player::A).unwrap();

        board.drop_disc(5, Player::B).unwrap();
        board.drop_disc(5, Player::A).unwrap();

        board.drop_disc(4, Player::B).unwrap();
        board.drop_disc(4, Player::B).unwrap();
        board.drop_disc(4, Player::A).unwrap();

        board.drop_disc(3, Player::B).unwrap();
        board.drop_disc(3, Player::B).unwrap();
        board.drop_disc(3, Player::B).unwrap();
        let row = board.drop_disc(3, Player::A).unwrap();

        let line = find_win(&board, row, 3, Player::A).unwrap();
        assert_eq!(line.orientation, Orientation::DiagonalDown);
        assert_eq!(line.cells, [(2, 3), (3, 4), (4, 5), (5, 6)]);
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = board();
        for col in 0..3 {
            board.drop_disc(col, Player::A).unwrap();
        }
        assert!(!is_win(&board, 5, 1, Player::A)); // Only 3 in a row
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = board();
        for col in [0, 1, 3, 4] {
            board.drop_disc(col, Player::A).unwrap();
        }
        board.drop_disc(2, Player::B).unwrap();
        assert!(!is_win(&board, 5, 1, Player::A));
        assert!(!is_win(&board, 5, 3, Player::A));
    }

    #[test]
    fn test_other_player_discs_do_not_count() {
        let mut board = board();
        for col in 0..4 {
            board.drop_disc(col, Player::A).unwrap();
        }
        assert!(!is_win(&board, 5, 3, Player::B));
    }
}
