/// The error type for the [`FromStr`](std::str::FromStr) instance of [`Move`](crate::Move).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveFromStrErr {
    /// A move is written as exactly two characters, e.g. `C4`.
    WrongLength,
    /// The first character is not a row letter on this board.
    InvalidRow { row: char },
    /// The second character is not a column digit on this board.
    InvalidColumn { column: char },
}

impl std::error::Error for MoveFromStrErr {}

impl std::fmt::Display for MoveFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveFromStrErr::WrongLength => {
                write!(f, "A move is a row letter followed by a column digit, e.g. C4")
            }
            MoveFromStrErr::InvalidRow { row } => {
                write!(f, "'{}' is not a row on this board", row)
            }
            MoveFromStrErr::InvalidColumn { column } => {
                write!(f, "'{}' is not a column on this board", column)
            }
        }
    }
}
