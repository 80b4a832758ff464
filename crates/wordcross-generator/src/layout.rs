//! The immutable result of a generation pass.

use std::fmt::{self, Display};

use wordcross_core::{Board, CellNumbers, Direction, Grid, GridBounds, Placement, Position, Word};

use crate::seed::LayoutSeed;

/// A finished crossword layout.
///
/// `Layout` is the read-only query surface renderers and exporters consume:
/// grid contents by cell, the placement list, crossword cell numbers, the
/// bounding box of filled cells, and how many of the requested words were
/// actually placed. It never changes after generation; to get a different
/// layout, generate again.
///
/// # Examples
///
/// ```
/// use wordcross_core::WordList;
/// use wordcross_generator::LayoutGenerator;
///
/// let words = WordList::parse("cat, dog, tiger");
/// let layout = LayoutGenerator::new().generate(&words)?;
///
/// println!("placed {}/{} words", layout.placed_count(), layout.word_count());
/// for clue in layout.across() {
///     println!("{clue}");
/// }
/// for clue in layout.down() {
///     println!("{clue}");
/// }
/// # Ok::<(), wordcross_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    board: Board,
    numbers: CellNumbers,
    across: Vec<Clue>,
    down: Vec<Clue>,
    word_count: usize,
    seed: LayoutSeed,
}

impl Layout {
    pub(crate) fn new(board: Board, word_count: usize, seed: LayoutSeed) -> Self {
        let numbers = CellNumbers::assign(board.grid(), board.placements());
        let clues = |direction: Direction| {
            let mut clues: Vec<Clue> = board
                .placements()
                .iter()
                .filter(|p| p.direction() == direction)
                .map(|p| {
                    let number = numbers
                        .get(p.anchor())
                        .expect("every placement anchor is numbered");
                    Clue::new(number, p.word().clone(), p.anchor())
                })
                .collect();
            clues.sort_by_key(Clue::number);
            clues
        };
        let (across, down) = (clues(Direction::Across), clues(Direction::Down));
        Self {
            board,
            numbers,
            across,
            down,
            word_count,
            seed,
        }
    }

    /// Returns the grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.board.grid()
    }

    /// Returns the letter at `pos`, or `None` for empty or off-grid cells.
    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.grid().get(pos)
    }

    /// Returns the placements in commit order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        self.board.placements()
    }

    /// Returns the crossword cell numbers.
    #[must_use]
    pub const fn numbers(&self) -> &CellNumbers {
        &self.numbers
    }

    /// Returns the cell number at `pos`, if that cell was assigned one.
    #[must_use]
    pub fn number_at(&self, pos: Position) -> Option<u32> {
        self.numbers.get(pos)
    }

    /// Returns the bounding box of filled cells.
    ///
    /// A layout always places at least one word, so the box is never
    /// degenerate here; exporters reading a raw [`Grid`] still get the
    /// `{0, 0, 0, 0}` convention for an all-empty grid.
    #[must_use]
    pub fn bounds(&self) -> GridBounds {
        self.grid().bounds()
    }

    /// Returns how many words the caller asked for, duplicates included.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns how many words ended up on the grid.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placements().len()
    }

    /// Returns `true` when every requested word was placed.
    ///
    /// A list containing duplicates can never be complete: the duplicate
    /// is skipped at placement time but still counts as requested.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.placed_count() == self.word_count
    }

    /// Returns the seed that produced this layout.
    #[must_use]
    pub const fn seed(&self) -> LayoutSeed {
        self.seed
    }

    /// Returns the across clues, sorted by ascending cell number.
    #[must_use]
    pub fn across(&self) -> &[Clue] {
        &self.across
    }

    /// Returns the down clues, sorted by ascending cell number.
    #[must_use]
    pub fn down(&self) -> &[Clue] {
        &self.down
    }
}

/// One entry of a clue list: a cell number and the word it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    number: u32,
    word: Word,
    anchor: Position,
}

impl Clue {
    const fn new(number: u32, word: Word, anchor: Position) -> Self {
        Self {
            number,
            word,
            anchor,
        }
    }

    /// Returns the cell number of the word's anchor.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the word.
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the anchor cell.
    #[must_use]
    pub const fn anchor(&self) -> Position {
        self.anchor
    }
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.word)
    }
}
