//! Error types shared by the search engine and the maze generator.

use std::fmt;

use crate::geom::Cell;

/// Which endpoint a precondition failure refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// A violated precondition on the board or its endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Board side length outside the accepted range.
    InvalidSize(i32),
    /// An endpoint lies outside the board.
    OutOfBounds { endpoint: Endpoint, cell: Cell },
    /// An endpoint sits on a wall.
    Blocked { endpoint: Endpoint, cell: Cell },
    /// An endpoint cannot move onto the other endpoint.
    Occupied { endpoint: Endpoint, cell: Cell },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "invalid board size {n}"),
            Self::OutOfBounds { endpoint, cell } => {
                write!(f, "{endpoint} cell {cell} is outside the board")
            }
            Self::Blocked { endpoint, cell } => write!(f, "{endpoint} cell {cell} is a wall"),
            Self::Occupied { endpoint, cell } => {
                write!(f, "{endpoint} cannot move to {cell}: cell holds the other endpoint")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The run was stopped through its cancellation token.
///
/// Step functions return `Result<_, Cancelled>` so that a tripped token
/// unwinds the whole run with `?`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("run cancelled")
    }
}

impl std::error::Error for Cancelled {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = GridError::Blocked {
            endpoint: Endpoint::End,
            cell: Cell::new(2, 3),
        };
        assert_eq!(e.to_string(), "end cell (2, 3) is a wall");
        assert_eq!(GridError::InvalidSize(0).to_string(), "invalid board size 0");
        assert_eq!(Cancelled.to_string(), "run cancelled");
    }
}
