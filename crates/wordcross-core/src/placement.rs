//! Committed word positions.

use crate::{direction::Direction, position::Position, word::Word};

/// A word committed to the board: the anchor cell of its first letter and
/// the axis it runs along.
///
/// The word's letters occupy a contiguous run of cells starting at the
/// anchor and advancing along the placement's direction.
///
/// # Examples
///
/// ```
/// use wordcross_core::{Direction, Placement, Position, Word};
///
/// let word = Word::parse("cat").unwrap();
/// let placement = Placement::new(word, Position::new(2, 5), Direction::Down);
///
/// let cells: Vec<_> = placement.cells().collect();
/// assert_eq!(cells[0], (Position::new(2, 5), 'C'));
/// assert_eq!(cells[2], (Position::new(4, 5), 'T'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: Word,
    anchor: Position,
    direction: Direction,
}

impl Placement {
    /// Creates a placement record.
    #[must_use]
    pub const fn new(word: Word, anchor: Position, direction: Direction) -> Self {
        Self {
            word,
            anchor,
            direction,
        }
    }

    /// Returns the placed word.
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the cell of the first letter.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }

    /// Returns the axis the word runs along.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the number of cells in the run.
    #[must_use]
    #[expect(clippy::len_without_is_empty, reason = "a run is never empty")]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Returns the cell of the last letter.
    #[must_use]
    pub fn end(&self) -> Position {
        self.anchor.step(self.direction, self.word.len() - 1)
    }

    /// Iterates over the run as `(cell, letter)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .letters()
            .enumerate()
            .map(|(i, letter)| (self.anchor.step(self.direction, i), letter))
    }
}
