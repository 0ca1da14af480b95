use std::ops::{AddAssign, SubAssign};

/// The number measuring how good a position is.
///
/// It is positive if the position favours [`Side::O`](crate::Side::O) and
/// negative if it favours [`Side::X`](crate::Side::X). The absolute value
/// measures how likely that side is to win, and zero means both sides are
/// equally likely to win.
///
/// Arithmetic saturates, so summing heuristic terms can never wrap around
/// past [`Evaluation::WON`] or [`Evaluation::LOST`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Evaluation(pub i32);

impl Evaluation {
    /// O will definitely win.
    pub const WON: Evaluation = Evaluation(i32::MAX);
    /// O will definitely lose.
    pub const LOST: Evaluation = Evaluation(i32::MIN);
    pub const DRAW: Evaluation = Evaluation(0);

    /// Is this one of the two sentinels for a decided game?
    pub fn is_decided(self) -> bool {
        self == Self::WON || self == Self::LOST
    }
}

impl From<i32> for Evaluation {
    fn from(value: i32) -> Self {
        Evaluation(value)
    }
}

impl AddAssign<i32> for Evaluation {
    fn add_assign(&mut self, rhs: i32) {
        self.0 = self.0.saturating_add(rhs);
    }
}

impl SubAssign<i32> for Evaluation {
    fn sub_assign(&mut self, rhs: i32) {
        self.0 = self.0.saturating_sub(rhs);
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::WON => write!(f, "won"),
            Self::LOST => write!(f, "lost"),
            Self(value) => write!(f, "{}", value),
        }
    }
}
