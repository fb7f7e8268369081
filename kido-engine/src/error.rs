use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    OutOfTurn,
    Overwrite,
    Suicide,
    NotOnBoard,
    KoViolation,
}

impl GoError {
    /// Stable machine-readable code, safe to hand to clients.
    pub fn code(&self) -> &'static str {
        match self {
            GoError::OutOfTurn => "not_your_turn",
            GoError::Overwrite => "occupied",
            GoError::Suicide => "suicide",
            GoError::NotOnBoard => "out_of_bounds",
            GoError::KoViolation => "ko_violation",
        }
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfTurn => write!(f, "Not your turn."),
            GoError::Overwrite => write!(f, "Intersection is already occupied."),
            GoError::Suicide => write!(f, "Illegal suicide move."),
            GoError::NotOnBoard => write!(f, "Invalid coordinates."),
            GoError::KoViolation => {
                write!(f, "Illegal Ko move. Cannot repeat the previous board state.")
            }
        }
    }
}

impl std::error::Error for GoError {}
