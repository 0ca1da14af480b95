//! Othello on an 8x8 board.

mod weights;

use std::cmp::Ordering;

pub use weights::{MOVE_ORDER, WEIGHTS};

use crate::{Cell, Evaluation, Grid, Playable, Side, State};

/// The board size.
pub const N: usize = 8;

/// A cell of the Othello board.
pub type Move = crate::Move<{ N as u8 }>;

pub type Board = [[Cell; N]; N];

/// The eight directions a capture can go in, as (row, column) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position in a game of Othello.
///
/// The disc counts are derived from the board and kept up to date by every move.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OthelloState {
    board: Board,
    count_o: u8,
    count_x: u8,
    last_move: Move,
    turn: Side,
}

impl Default for OthelloState {
    fn default() -> Self {
        Self::new()
    }
}

impl Move {
    /// Is the side to move allowed to place a disc here?
    ///
    /// This is the case if the cell is empty and placing a disc would capture
    /// at least one disc of the opponent.
    pub fn allowed(self, state: &OthelloState) -> bool {
        if !self.is_valid() {
            return false;
        }
        let (i, j) = (self.i as usize, self.j as usize);
        state.board[i][j].is_empty()
            && DIRECTIONS
                .into_iter()
                .any(|dir| state.run_length(i, j, dir) > 0)
    }
}

impl OthelloState {
    /// The position at the start of the game, with O to move.
    pub fn new() -> Self {
        const A: usize = N / 2 - 1;
        const B: usize = A + 1;
        let mut board = [[Cell::Empty; N]; N];
        board[A][A] = Cell::O;
        board[A][B] = Cell::X;
        board[B][A] = Cell::X;
        board[B][B] = Cell::O;
        Self {
            board,
            count_o: 2,
            count_x: 2,
            last_move: Move::PASS,
            turn: Side::O,
        }
    }

    /// Creates a position from an arbitrary board.
    pub fn from_board(board: Board, last_move: Move, turn: Side) -> Self {
        let count = |side: Side| {
            board
                .iter()
                .flatten()
                .filter(|&&cell| cell == side)
                .count() as u8
        };
        Self {
            count_o: count(Side::O),
            count_x: count(Side::X),
            board,
            last_move,
            turn,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of O's and X's on the board.
    pub fn count(&self) -> (u8, u8) {
        (self.count_o, self.count_x)
    }

    /// Has the game ended?
    ///
    /// Note that two passes in a row do not end the game by this definition.
    /// Such a position simply has no successors.
    pub fn is_end(&self) -> bool {
        self.count_o == 0 || self.count_x == 0 || usize::from(self.count_o + self.count_x) == N * N
    }

    /// Does the side to move have no allowed move anywhere?
    pub fn must_pass(&self) -> bool {
        !MOVE_ORDER.into_iter().any(|mv| mv.allowed(self))
    }

    /// The position after the side to move passes.
    pub fn pass(&self) -> Self {
        Self {
            last_move: Move::PASS,
            turn: self.turn.opponent(),
            ..self.clone()
        }
    }

    /// The position after the side to move places a disc at `mv`.
    ///
    /// Returns `None` if that is not allowed.
    pub fn play(&self, mv: Move) -> Option<Self> {
        if !mv.is_valid() {
            return None;
        }
        let (i, j) = (mv.i as usize, mv.j as usize);
        if !self.board[i][j].is_empty() {
            return None;
        }

        let mut next: Option<Self> = None;
        for dir in DIRECTIONS {
            let n = self.run_length(i, j, dir);
            if n > 0 {
                let t = next.get_or_insert_with(|| {
                    let mut t = self.clone();
                    t.board[i][j] = Cell::from(self.turn);
                    t
                });
                t.flip(i, j, dir, n);
            }
        }

        let mut t = next?;
        match self.turn {
            Side::O => t.count_o += 1,
            Side::X => t.count_x += 1,
        }
        t.last_move = mv;
        t.turn = self.turn.opponent();
        Some(t)
    }

    // How many discs of the opponent would be captured in the given direction
    // by placing a disc at (i, j).
    fn run_length(&self, i: usize, j: usize, (di, dj): (isize, isize)) -> u8 {
        let mover = Cell::from(self.turn);
        let (mut i, mut j) = (i as isize, j as isize);
        let mut n = 0;
        loop {
            i += di;
            j += dj;
            if !(0..N as isize).contains(&i) || !(0..N as isize).contains(&j) {
                return 0;
            }
            match self.board[i as usize][j as usize] {
                Cell::Empty => return 0,
                cell if cell == mover => return n,
                _ => n += 1,
            }
        }
    }

    // Turns the `n` discs after (i, j) in the given direction to the side to move.
    fn flip(&mut self, i: usize, j: usize, (di, dj): (isize, isize), n: u8) {
        match self.turn {
            Side::O => {
                self.count_o += n;
                self.count_x -= n;
            }
            Side::X => {
                self.count_o -= n;
                self.count_x += n;
            }
        }
        let (mut i, mut j) = (i as isize, j as isize);
        for _ in 0..n {
            i += di;
            j += dj;
            self.board[i as usize][j as usize] = Cell::from(self.turn);
        }
    }
}

impl State for OthelloState {
    fn eval(&self) -> Evaluation {
        if self.is_end() {
            return match self.count_o.cmp(&self.count_x) {
                Ordering::Greater => Evaluation::WON,
                Ordering::Less => Evaluation::LOST,
                Ordering::Equal => Evaluation::DRAW,
            };
        }
        let mut eval = Evaluation::DRAW;
        for (row, weights) in self.board.iter().zip(WEIGHTS.iter()) {
            for (&cell, &weight) in row.iter().zip(weights) {
                match cell {
                    Cell::O => eval += i32::from(weight),
                    Cell::X => eval -= i32::from(weight),
                    Cell::Empty => {}
                }
            }
        }
        eval
    }

    fn next(&self) -> Vec<Self> {
        let mut nxt: Vec<Self> = MOVE_ORDER.into_iter().filter_map(|mv| self.play(mv)).collect();
        if nxt.is_empty() && !self.is_end() && !self.last_move.is_pass() {
            nxt.push(self.pass());
        }
        nxt
    }
}

impl Grid for OthelloState {
    fn dim(&self) -> (usize, usize) {
        (N, N)
    }

    fn token(&self, i: usize, j: usize) -> char {
        self.board[i][j].token()
    }
}

impl Playable for OthelloState {
    type Move = Move;

    fn turn(&self) -> Side {
        self.turn
    }

    fn last_move(&self) -> Move {
        self.last_move
    }

    fn play(&self, mv: Move) -> Option<Self> {
        OthelloState::play(self, mv)
    }

    fn is_end(&self) -> bool {
        OthelloState::is_end(self)
    }

    fn must_pass(&self) -> bool {
        OthelloState::must_pass(self)
    }

    fn passed(&self) -> bool {
        self.last_move.is_pass()
    }

    fn pass(&self) -> Option<Self> {
        Some(OthelloState::pass(self))
    }

    fn tally(&self) -> Option<(u8, u8)> {
        Some(self.count())
    }

    fn winner(&self) -> Option<Side> {
        match self.count_o.cmp(&self.count_x) {
            Ordering::Greater => Some(Side::O),
            Ordering::Less => Some(Side::X),
            Ordering::Equal => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::Line;
    use crate::min_max;

    const E: Cell = Cell::Empty;
    const O: Cell = Cell::O;
    const X: Cell = Cell::X;

    fn packed_board() -> Board {
        [
            [O, O, O, O, O, O, O, O],
            [O, O, X, X, X, X, X, X],
            [O, O, O, O, O, O, X, X],
            [O, O, O, O, O, O, X, X],
            [O, O, O, O, O, O, X, X],
            [O, O, O, O, O, O, X, X],
            [O, O, O, O, O, O, O, X],
            [O, X, O, E, O, O, E, O],
        ]
    }

    #[test]
    fn must_pass() {
        let s = OthelloState::from_board(packed_board(), Move::new(6, 7), Side::O);
        assert!(s.must_pass());
        assert!(!s.is_end());

        let s = OthelloState::from_board(
            [
                [E, O, O, O, O, E, E, E],
                [E, E, O, O, O, O, E, E],
                [O, O, O, O, O, O, O, E],
                [E, O, O, O, O, O, O, E],
                [E, X, X, X, X, O, O, E],
                [X, X, X, X, O, O, O, E],
                [X, X, X, O, O, O, E, E],
                [X, X, O, E, E, E, O, E],
            ],
            Move::new(7, 2),
            Side::O,
        );
        assert!(!s.must_pass());
    }

    #[test]
    fn forced_pass_is_the_only_successor() {
        let s = OthelloState::from_board(packed_board(), Move::new(6, 7), Side::O);
        let nxt = s.next();
        assert_eq!(nxt.len(), 1);
        assert_eq!(nxt[0].board, s.board);
        assert_eq!(nxt[0].turn, Side::X);
        assert!(nxt[0].last_move.is_pass());
        // X can answer on H4, capturing H3
        assert!(Move::new(7, 3).allowed(&nxt[0]));
    }

    #[test]
    fn double_pass_is_a_leaf_but_not_the_end() {
        let mut board = [[E; N]; N];
        board[0][0] = O;
        board[7][7] = X;
        let s = OthelloState::from_board(board, Move::new(7, 7), Side::O);
        let passed = s.next();
        assert_eq!(passed.len(), 1);
        assert!(passed[0].next().is_empty());
        assert!(!passed[0].is_end());
        assert_eq!(passed[0].eval(), Evaluation(0));
    }

    #[test]
    fn flip() {
        let mut s = OthelloState::new();
        let n = s.run_length(2, 4, (1, 0));
        assert_eq!(n, 1);
        s.board[2][4] = O;
        s.flip(2, 4, (1, 0), n);
        let reference = [
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, O, E, E, E],
            [E, E, E, O, O, E, E, E],
            [E, E, E, X, O, E, E, E],
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, E, E, E, E],
        ];
        assert_eq!(s.board, reference);
    }

    #[test]
    fn play() {
        let s = OthelloState::new();
        let t = s.play(Move::new(2, 4)).unwrap();
        let reference = [
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, O, E, E, E],
            [E, E, E, O, O, E, E, E],
            [E, E, E, X, O, E, E, E],
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, E, E, E, E],
            [E, E, E, E, E, E, E, E],
        ];
        assert_eq!(t.board, reference);
        assert_eq!(t.count(), (4, 1));
        assert_eq!(t.turn, Side::X);
        assert_eq!(t.last_move, Move::new(2, 4));
        // The source position is untouched
        assert_eq!(s, OthelloState::new());
    }

    #[test]
    fn illegal_moves_yield_nothing() {
        let s = OthelloState::new();
        assert!(s.play(Move::new(3, 3)).is_none());
        assert!(s.play(Move::new(0, 0)).is_none());
        assert!(s.play(Move::PASS).is_none());
        assert!(!Move::PASS.allowed(&s));
    }

    #[test]
    fn opening_moves() {
        let moves: Vec<Move> = OthelloState::new()
            .next()
            .iter()
            .map(|t| t.last_move)
            .collect();
        assert_eq!(
            moves,
            vec![
                Move::new(2, 4),
                Move::new(3, 5),
                Move::new(4, 2),
                Move::new(5, 3)
            ]
        );
    }

    #[test]
    fn heuristic_eval() {
        assert_eq!(OthelloState::new().eval(), Evaluation(0));
        let t = OthelloState::new().play(Move::new(2, 4)).unwrap();
        // Only C5 is worth anything, the centre cells are neutral
        assert_eq!(t.eval(), Evaluation(4));
    }

    #[test]
    fn terminal_eval() {
        let mut board = [[O; N]; N];
        board[0][0] = X;
        let s = OthelloState::from_board(board, Move::new(0, 1), Side::X);
        assert!(s.is_end());
        assert_eq!(s.eval(), Evaluation::WON);

        let board = [[X; N]; N];
        let s = OthelloState::from_board(board, Move::new(0, 1), Side::O);
        assert!(s.is_end());
        assert_eq!(s.eval(), Evaluation::LOST);
        assert_eq!(s.winner(), Some(Side::X));

        let mut board = [[O; N]; N];
        for row in board.iter_mut().take(N / 2) {
            *row = [X; N];
        }
        let s = OthelloState::from_board(board, Move::new(0, 1), Side::O);
        assert!(s.is_end());
        assert_eq!(s.eval(), Evaluation::DRAW);
        assert_eq!(s.winner(), None);
        assert!(s.next().is_empty());
    }

    #[test]
    fn search_prefers_the_corner() {
        // O to move can take the corner A1 by capturing B2
        let mut board = [[E; N]; N];
        board[1][1] = X;
        board[2][2] = O;
        board[3][3] = X;
        board[3][4] = O;
        let s = OthelloState::from_board(board, Move::new(3, 3), Side::O);
        let (next, _) = min_max(&s, 1, false);
        assert_eq!(next.unwrap().last_move, Move::new(0, 0));
    }

    quickcheck! {
        fn legality_soundness(line: Line) -> bool {
            line.positions(OthelloState::new()).iter().all(|s| {
                (0..N as u8).all(|i| {
                    (0..N as u8).all(|j| {
                        let mv = Move::new(i, j);
                        s.play(mv).is_some() == mv.allowed(s)
                    })
                })
            })
        }

        fn tally_conservation(line: Line) -> bool {
            let positions = line.positions(OthelloState::new());
            positions.windows(2).all(|pair| {
                let (before, after) = (&pair[0], &pair[1]);
                let (o0, x0) = before.count();
                let (o1, x1) = after.count();
                let placed = if after.last_move.is_pass() { 0 } else { 1 };
                o1 + x1 == o0 + x0 + placed
                    && after.turn == before.turn.opponent()
                    && OthelloState::from_board(after.board, after.last_move, after.turn) == *after
            })
        }

        fn terminal_eval_matches_tally(line: Line) -> bool {
            line.positions(OthelloState::new()).iter().filter(|s| s.is_end()).all(|s| {
                let (o, x) = s.count();
                let expected = match o.cmp(&x) {
                    Ordering::Greater => Evaluation::WON,
                    Ordering::Less => Evaluation::LOST,
                    Ordering::Equal => Evaluation::DRAW,
                };
                s.eval() == expected
            })
        }

        fn search_is_deterministic(line: Line) -> bool {
            let positions = line.positions(OthelloState::new());
            let s = positions.last().unwrap();
            let find_min = s.turn == Side::X;
            min_max(s, 2, find_min) == min_max(s, 2, find_min)
        }
    }
}
