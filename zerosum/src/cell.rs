/// One of the two players.
///
/// `O` always moves first, and positive [evaluations](crate::Evaluation) favour `O`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    O,
    X,
}

/// The content of a single cell of a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty,
    O,
    X,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::O => Side::X,
            Side::X => Side::O,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Cell {
        match side {
            Side::O => Cell::O,
            Side::X => Cell::X,
        }
    }
}

impl Cell {
    /// The side owning this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::O => Some(Side::O),
            Cell::X => Some(Side::X),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Render this cell as a single character.
    pub fn token(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::O => 'O',
            Cell::X => 'X',
        }
    }
}

impl PartialEq<Side> for Cell {
    fn eq(&self, side: &Side) -> bool {
        *self == Cell::from(*side)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Cell::from(*self))
    }
}
