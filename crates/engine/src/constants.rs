//! Constants and piece identity for the draughts engine.

pub const BOARD_SIZE: usize = 8;
pub const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Rows filled with men on each side at the start of a game.
pub const SETUP_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

/// The content of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Color {
    /// Get the opponent of this color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    /// Row step a man of this color moves in.
    /// Dark starts on row 0 and moves down the board, Light the other way.
    pub fn forward(self) -> isize {
        match self {
            Color::Dark => 1,
            Color::Light => -1,
        }
    }

    /// The row on which a man of this color is promoted.
    pub fn promotion_row(self) -> usize {
        match self {
            Color::Dark => BOARD_SIZE - 1,
            Color::Light => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Dark => "dark",
            Color::Light => "light",
        }
    }

    /// Side-to-move character used in position notation.
    pub fn to_char(self) -> char {
        match self {
            Color::Dark => 'd',
            Color::Light => 'l',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'd' => Some(Color::Dark),
            'l' => Some(Color::Light),
            _ => None,
        }
    }
}

impl Piece {
    pub const DARK_MAN: Piece = Piece::new(Color::Dark, Rank::Man);
    pub const DARK_KING: Piece = Piece::new(Color::Dark, Rank::King);
    pub const LIGHT_MAN: Piece = Piece::new(Color::Light, Rank::Man);
    pub const LIGHT_KING: Piece = Piece::new(Color::Light, Rank::King);

    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// Returns the piece as it stands after landing on `row`.
    /// Men reaching their promotion row become kings; kings are unchanged.
    pub fn promoted_at(self, row: usize) -> Piece {
        if self.rank == Rank::Man && row == self.color.promotion_row() {
            Piece::new(self.color, Rank::King)
        } else {
            self
        }
    }
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// True if the cell holds a man or king of `color`.
    pub fn belongs_to(self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color == color)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

// Notation and display conversions
impl Cell {
    pub fn to_char(self) -> char {
        match self.piece().map(|p| (p.color, p.rank)) {
            None => '.',
            Some((Color::Dark, Rank::Man)) => 'd',
            Some((Color::Dark, Rank::King)) => 'D',
            Some((Color::Light, Rank::Man)) => 'l',
            Some((Color::Light, Rank::King)) => 'L',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'd' => Some(Piece::DARK_MAN.into()),
            'D' => Some(Piece::DARK_KING.into()),
            'l' => Some(Piece::LIGHT_MAN.into()),
            'L' => Some(Piece::LIGHT_KING.into()),
            _ => None,
        }
    }

    /// Symbol used when drawing the board for a person.
    pub fn glyph(self) -> char {
        match self.piece().map(|p| (p.color, p.rank)) {
            None => ' ',
            Some((Color::Dark, Rank::Man)) => '●',
            Some((Color::Light, Rank::Man)) => '○',
            Some((Color::Dark, Rank::King)) => '♚',
            Some((Color::Light, Rank::King)) => '♔',
        }
    }
}
