use super::board::Board;
use super::player::Player;
use super::win::{self, WinningLine};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won(Player),
    Drawn,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        self != Phase::Playing
    }
}

/// Where a disc settled after a successful turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Turn-based state machine around a single board.
///
/// Rejected moves (`OutOfRange`, `ColumnFull`, `GameOver`) leave the engine
/// exactly as it was; in particular the same player is asked to move again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    phase: Phase,
    winning_line: Option<WinningLine>,
    last_move: Option<Placement>,
    move_count: usize,
}

impl GameEngine {
    /// Start a game on an empty `rows` x `cols` board
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let engine = Self::with_board(Board::new(rows, cols)?);
        log::info!("new {rows}x{cols} game");
        Ok(engine)
    }

    fn with_board(board: Board) -> Self {
        GameEngine {
            board,
            current_player: Player::FIRST,
            phase: Phase::Playing,
            winning_line: None,
            last_move: None,
            move_count: 0,
        }
    }

    /// Drop the current player's disc into `col` and advance the game.
    pub fn play_turn(&mut self, col: usize) -> Result<Placement, MoveError> {
        if self.phase.is_terminal() {
            log::debug!("rejected move in column {col}: game over");
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_disc(col, player).inspect_err(|err| {
            log::debug!("rejected move for {player:?}: {err}");
        })?;
        let placement = Placement { row, col, player };
        self.last_move = Some(placement);
        self.move_count += 1;
        log::debug!("{player:?} placed at ({row}, {col})");

        if let Some(line) = win::find_win(&self.board, row, col, player) {
            log::info!("{player:?} wins after {} moves ({:?})", self.move_count, line.orientation);
            self.winning_line = Some(line);
            self.phase = Phase::Won(player);
        } else if self.board.is_full() {
            log::info!("board full after {} moves, game drawn", self.move_count);
            self.phase = Phase::Drawn;
        } else {
            self.current_player = player.other();
        }

        Ok(placement)
    }

    /// Row a disc dropped into `col` would land in. Never mutates.
    pub fn preview_column(&self, col: usize) -> Result<usize, MoveError> {
        self.board.landing_row(col)
    }

    /// Return to the initial configuration, keeping the board size.
    pub fn reset(&mut self) {
        self.board.clear();
        *self = Self::with_board(std::mem::take(&mut self.board));
        log::info!("game reset");
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The four cells that won the game, once it has been won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Columns that can still take a disc; empty once the game is over
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}
