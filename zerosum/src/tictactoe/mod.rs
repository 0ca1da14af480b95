//! Tic-Tac-Toe on a 3x3 board.

use crate::{Cell, Evaluation, Grid, Playable, Side, State};

/// The board size.
pub const N: usize = 3;

/// A cell of the Tic-Tac-Toe board.
pub type Move = crate::Move<{ N as u8 }>;

pub type Board = [[Cell; N]; N];

/// The directions of the row, the column and the two diagonals through a cell.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A position in a game of Tic-Tac-Toe.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TicTacToeState {
    board: Board,
    last_move: Move,
    turn: Side,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::new()
    }
}

impl Move {
    /// Is the side to move allowed to place a mark here?
    pub fn allowed(self, state: &TicTacToeState) -> bool {
        self.is_valid() && state.board[self.i as usize][self.j as usize].is_empty()
    }
}

impl TicTacToeState {
    /// The empty board, with O to move.
    pub fn new() -> Self {
        Self {
            board: [[Cell::Empty; N]; N],
            last_move: Move::PASS,
            turn: Side::O,
        }
    }

    /// Creates a position from an arbitrary board.
    ///
    /// `last_move` should be the cell that was filled last, by the opponent of `turn`.
    pub fn from_board(board: Board, last_move: Move, turn: Side) -> Self {
        Self {
            board,
            last_move,
            turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Did the last move complete a line?
    pub fn has_line(&self) -> bool {
        self.last_move.is_valid() && AXES.into_iter().any(|axis| self.line_through_last_move(axis))
    }

    /// Has the game ended, either with a line or with a full board?
    pub fn is_end(&self) -> bool {
        self.has_line() || self.board.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// The position after the side to move places a mark at `mv`.
    ///
    /// Returns `None` if that is not allowed.
    pub fn play(&self, mv: Move) -> Option<Self> {
        if !mv.allowed(self) {
            return None;
        }
        let mut board = self.board;
        board[mv.i as usize][mv.j as usize] = Cell::from(self.turn);
        Some(Self {
            board,
            last_move: mv,
            turn: self.turn.opponent(),
        })
    }

    // Counts the run of equal marks through the last move along the axis,
    // and checks whether it spans the board.
    fn line_through_last_move(&self, (di, dj): (isize, isize)) -> bool {
        let (mut i, mut j) = (self.last_move.i as isize, self.last_move.j as isize);
        let mark = self.board[i as usize][j as usize];
        if mark.is_empty() {
            return false;
        }
        while self.holds(i - di, j - dj, mark) {
            i -= di;
            j -= dj;
        }
        let mut n = 1;
        while self.holds(i + di, j + dj, mark) {
            i += di;
            j += dj;
            n += 1;
        }
        n == N
    }

    fn holds(&self, i: isize, j: isize, mark: Cell) -> bool {
        (0..N as isize).contains(&i)
            && (0..N as isize).contains(&j)
            && self.board[i as usize][j as usize] == mark
    }
}

impl State for TicTacToeState {
    fn eval(&self) -> Evaluation {
        if !self.has_line() {
            return Evaluation::DRAW;
        }
        // The line belongs to the side that just moved
        match self.turn {
            Side::O => Evaluation::LOST,
            Side::X => Evaluation::WON,
        }
    }

    fn next(&self) -> Vec<Self> {
        if self.is_end() {
            return Vec::new();
        }
        (0..N as u8)
            .flat_map(|i| (0..N as u8).map(move |j| Move::new(i, j)))
            .filter_map(|mv| self.play(mv))
            .collect()
    }
}

impl Grid for TicTacToeState {
    fn dim(&self) -> (usize, usize) {
        (N, N)
    }

    fn token(&self, i: usize, j: usize) -> char {
        self.board[i][j].token()
    }
}

impl Playable for TicTacToeState {
    type Move = Move;

    fn turn(&self) -> Side {
        self.turn
    }

    fn last_move(&self) -> Move {
        self.last_move
    }

    fn play(&self, mv: Move) -> Option<Self> {
        TicTacToeState::play(self, mv)
    }

    fn is_end(&self) -> bool {
        TicTacToeState::is_end(self)
    }

    fn winner(&self) -> Option<Side> {
        match self.eval() {
            Evaluation::WON => Some(Side::O),
            Evaluation::LOST => Some(Side::X),
            _ => None,
        }
    }
}
