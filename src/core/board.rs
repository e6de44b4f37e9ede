//! Square letter grid
//!
//! Cells are stored row-major in a flat vector and addressed by index.

use std::fmt;

/// Row/column offsets of the eight neighbours of a cell
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// An `n × n` grid of single characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<char>,
}

/// Error type for malformed boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
    NotSquare(usize),
    InvalidCharacter(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Board must contain at least one letter"),
            Self::NotSquare(len) => {
                write!(f, "Board needs a square number of letters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "Board contains invalid character {c:?}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl Board {
    /// Create a board from row-major cells
    ///
    /// # Errors
    /// Returns `BoardError` if `cells` is empty or its length is not a perfect
    /// square.
    pub fn new(cells: Vec<char>) -> Result<Self, BoardError> {
        if cells.is_empty() {
            return Err(BoardError::Empty);
        }

        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(BoardError::NotSquare(cells.len()));
        }

        Ok(Self { size, cells })
    }

    /// Parse a board from letters, ignoring whitespace and row separators
    ///
    /// Letters are upper-cased to match the dictionary. Only ASCII letters are
    /// accepted, since a cell holds exactly one character.
    ///
    /// # Errors
    /// Returns `BoardError` for characters other than ASCII letters or a
    /// non-square count.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::core::Board;
    ///
    /// let board = Board::parse("cat/ats/xxx").unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.get(1, 2), 'S');
    /// ```
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let cells = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != ',')
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    Ok(c.to_ascii_uppercase())
                } else {
                    Err(BoardError::InvalidCharacter(c))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(cells)
    }

    /// Side length of the grid
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Number of cells (`size²`)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Character at `(row, col)`
    ///
    /// # Panics
    /// Panics if the position is outside the grid
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[self.index(row, col)]
    }

    /// Flat index of `(row, col)`
    #[inline]
    #[must_use]
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// `(row, col)` of a flat index
    #[inline]
    #[must_use]
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// In-bounds neighbours of a cell, orthogonal and diagonal
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.position(index);
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.size && c < self.size).then(|| self.index(r, c))
        })
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
