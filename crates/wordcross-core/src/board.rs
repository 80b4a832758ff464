//! The grid/placement pair and the crossword-validity rules.

use crate::{
    direction::Direction, grid::Grid, placement::Placement, position::Position, word::Word,
};

/// A grid together with the placements that produced it.
///
/// `Board` is the exclusive owner of both structures: every filled cell
/// belongs to a committed placement, and [`place`](Self::place) is the only
/// operation that mutates either, so grid and placement set never diverge.
///
/// Feasibility is probed with [`can_place`](Self::can_place), which has no
/// side effects and can be called any number of times; commits revalidate,
/// so a stale feasibility result is never trusted.
///
/// # Examples
///
/// ```
/// use wordcross_core::{Board, Direction, Position, Word};
///
/// let tiger = Word::parse("tiger").unwrap();
/// let cat = Word::parse("cat").unwrap();
///
/// let mut board = Board::new(11);
/// assert!(board.place(&tiger, Position::new(5, 3), Direction::Across));
///
/// // CAT crosses TIGER at the shared T; a position with no crossing
/// // is rejected because every word after the first must intersect.
/// assert!(!board.place(&cat, Position::new(0, 0), Direction::Across));
/// assert!(board.place(&cat, Position::new(3, 3), Direction::Down));
///
/// assert_eq!(board.placements().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    placements: Vec<Placement>,
}

impl Board {
    /// Creates an empty board over a `size` × `size` grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            placements: Vec::new(),
        }
    }

    /// Returns the grid side length.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the committed placements in commit order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns `true` when `word` is already on the board.
    ///
    /// Comparison is by exact normalized text, so a duplicate in the input
    /// is placed at most once.
    #[must_use]
    pub fn is_placed(&self, word: &Word) -> bool {
        self.placements.iter().any(|p| p.word() == word)
    }

    /// Checks whether `word` could be committed at `anchor` along
    /// `direction` without breaking any crossword rule.
    ///
    /// The checks run in order, failing fast:
    ///
    /// 1. the whole run must fit inside the grid;
    /// 2. per cell along the run: a different letter is a conflict; the
    ///    same letter counts as an intersection; an empty cell must not
    ///    touch a filled perpendicular neighbor (two parallel words may
    ///    not run side by side without crossing);
    /// 3. the cells immediately before the anchor and after the run's end,
    ///    along the word's own axis, must be empty or off-grid (two
    ///    collinear words may not abut end to end);
    /// 4. unless the board is empty, the run must intersect at least one
    ///    existing letter.
    ///
    /// Note that rule 2's neighbor check only applies to cells that are
    /// empty at probe time: a matching letter is a confirmed intersection
    /// and its surroundings are not re-validated.
    ///
    /// No side effects; safe to probe candidate positions repeatedly.
    #[must_use]
    pub fn can_place(&self, word: &Word, anchor: Position, direction: Direction) -> bool {
        let size = self.grid.size();
        if anchor.row() >= size || anchor.col() >= size {
            return false;
        }
        let end = anchor.step(direction, word.len() - 1);
        if end.row() >= size || end.col() >= size {
            return false;
        }

        let mut intersections = 0;
        for (i, letter) in word.letters().enumerate() {
            let pos = anchor.step(direction, i);
            match self.grid.get(pos) {
                Some(existing) if existing != letter => return false,
                Some(_) => intersections += 1,
                None => {
                    let perpendicular = direction.perpendicular();
                    let touches = pos
                        .offset_along(perpendicular, -1)
                        .is_some_and(|p| self.grid.is_filled(p))
                        || self.grid.is_filled(pos.step(perpendicular, 1));
                    if touches {
                        return false;
                    }
                }
            }
        }

        let head_blocked = anchor
            .offset_along(direction, -1)
            .is_some_and(|p| self.grid.is_filled(p));
        let tail_blocked = self.grid.is_filled(anchor.step(direction, word.len()));
        if head_blocked || tail_blocked {
            return false;
        }

        self.placements.is_empty() || intersections > 0
    }

    /// Commits `word` at `anchor` along `direction`.
    ///
    /// Revalidates with [`can_place`](Self::can_place) first; on success
    /// every letter is written to the grid and a placement record is
    /// appended. Returns `false` without touching any state when the
    /// placement is not feasible — a word is either fully committed or not
    /// committed at all.
    #[must_use]
    pub fn place(&mut self, word: &Word, anchor: Position, direction: Direction) -> bool {
        if !self.can_place(word, anchor, direction) {
            return false;
        }

        let placement = Placement::new(word.clone(), anchor, direction);
        for (pos, letter) in placement.cells() {
            self.grid.set(pos, letter);
        }
        self.placements.push(placement);
        true
    }
}
