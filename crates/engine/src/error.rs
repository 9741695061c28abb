//! Error types for parsing squares and board notation.
//!
//! Rules operations never fail; illegal input is absorbed as a no-op by the
//! state machine. Only text coming in from outside the engine can be malformed.

/// Errors that can occur when reading square names or board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("malformed square name: {0:?}")]
    BadSquare(String),

    #[error("square {0} is not a playable (dark) square")]
    UnplayableSquare(String),

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} describes {width} cells")]
    RowWidth { row: usize, width: usize },

    #[error("unknown piece character {0:?}")]
    UnknownPiece(char),

    #[error("piece on non-playable cell at row {row}, col {col}")]
    PieceOnLightCell { row: usize, col: usize },

    #[error("unknown side to move {0:?}")]
    BadSide(String),

    #[error("unrecognised position: {0:?}")]
    BadPosition(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_error_display() {
        let err = NotationError::RowWidth { row: 3, width: 9 };
        assert_eq!(err.to_string(), "row 3 describes 9 cells");

        let err = NotationError::BadSquare("z9".to_string());
        assert_eq!(err.to_string(), "malformed square name: \"z9\"");
    }
}
