//! Defines the representation of a move in the engine.

use crate::coords::square_name;

/// Represents a single executed move.
///
/// A move is encoded as a 16-bit integer:
/// - Bits 0-5:   origin (0-63)
/// - Bits 6-11:  destination (0-63)
/// - Bit 12:     a piece was captured
/// - Bit 13:     the mover was promoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

const CAPTURE_FLAG: u16 = 1 << 12;
const PROMOTION_FLAG: u16 = 1 << 13;

impl Move {
    /// Creates a new move.
    pub fn new(origin: usize, destination: usize, is_capture: bool, is_promotion: bool) -> Self {
        let mut move_val = (origin as u16 & 0x3F) | ((destination as u16 & 0x3F) << 6);
        if is_capture {
            move_val |= CAPTURE_FLAG;
        }
        if is_promotion {
            move_val |= PROMOTION_FLAG;
        }
        Move(move_val)
    }

    /// Gets the origin square.
    pub fn origin(&self) -> usize {
        (self.0 & 0x3F) as usize
    }

    /// Gets the destination square.
    pub fn destination(&self) -> usize {
        ((self.0 >> 6) & 0x3F) as usize
    }

    /// Checks if the move removed an opposing piece.
    pub fn is_capture(&self) -> bool {
        self.0 & CAPTURE_FLAG != 0
    }

    pub fn is_promotion(&self) -> bool {
        self.0 & PROMOTION_FLAG != 0
    }

    /// `c3-d4` for a slide, `c3xe5` for a capture.
    pub fn to_notation(&self) -> String {
        let separator = if self.is_capture() { 'x' } else { '-' };
        format!("{}{}{}", square_name(self.origin()), separator, square_name(self.destination()))
    }
}
