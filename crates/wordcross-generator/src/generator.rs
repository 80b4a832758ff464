//! Randomized greedy layout construction.

use std::cmp::Reverse;

use derive_more::{Display, Error};
use log::debug;
use rand::seq::SliceRandom as _;
use wordcross_core::{Board, Direction, Position, Word, WordList};

use crate::{layout::Layout, seed::LayoutSeed};

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 40;

/// Default attempt budget for [`LayoutGenerator::generate_best_of`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Error aborting a generation pass before any word is placed.
///
/// Both variants are deterministic for a given word list and grid size, so
/// retrying with a different seed cannot recover from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// No token survived normalization (every token was shorter than
    /// three characters, or the input was blank).
    #[display("word list contains no usable words")]
    EmptyWordList,
    /// The longest word is wider than the grid, so not even the anchor
    /// placement fits. The grid is never resized to compensate.
    #[display("longest word does not fit on the grid")]
    AnchorDoesNotFit,
}

/// Generates crossword layouts from word lists.
///
/// Generation is a single greedy pass: the longest word is placed
/// horizontally through the center of the grid, then every remaining word
/// (longest first) is tried against each position where one of its letters
/// lines up with a letter already on the board, in seeded-random order,
/// committing the first position that passes the crossword rules. Words
/// with no legal position are dropped rather than failing the pass; there
/// is no backtracking.
///
/// Every pass works on fresh state, so a generator can be reused — and
/// shared — freely.
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
/// // The longest word anchors the puzzle and is always placed.
/// assert!(layout.placed_count() >= 1);
/// assert_eq!(layout.word_count(), 3);
/// # Ok::<(), wordcross_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGenerator {
    grid_size: usize,
}

impl LayoutGenerator {
    /// Creates a generator over the default 40-cell grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
        }
    }

    /// Creates a generator over a `grid_size` × `grid_size` grid.
    #[must_use]
    pub const fn with_grid_size(grid_size: usize) -> Self {
        Self { grid_size }
    }

    /// Returns the grid side length used for every pass.
    #[must_use]
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Runs one generation pass with a fresh random seed.
    ///
    /// The drawn seed is reported by the returned [`Layout`], so the run
    /// can be reproduced with [`generate_with_seed`](Self::generate_with_seed).
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyWordList`] when `words` is empty and
    /// [`GenerateError::AnchorDoesNotFit`] when the longest word exceeds
    /// the grid side.
    pub fn generate(&self, words: &WordList) -> Result<Layout, GenerateError> {
        self.generate_with_seed(words, LayoutSeed::random())
    }

    /// Runs one generation pass driven by `seed`.
    ///
    /// The same seed, word list, and grid size always produce the same
    /// layout.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyWordList`] when `words` is empty and
    /// [`GenerateError::AnchorDoesNotFit`] when the longest word exceeds
    /// the grid side.
    pub fn generate_with_seed(
        &self,
        words: &WordList,
        seed: LayoutSeed,
    ) -> Result<Layout, GenerateError> {
        let mut queue: Vec<&Word> = words.iter().collect();
        // Stable sort: ties keep input order.
        queue.sort_by_key(|word| Reverse(word.len()));
        let Some((&anchor_word, rest)) = queue.split_first() else {
            return Err(GenerateError::EmptyWordList);
        };

        let mut rng = seed.rng();
        let mut board = Board::new(self.grid_size);

        // The longest word anchors the puzzle: horizontal, centered.
        let anchor = self
            .centered_anchor(anchor_word)
            .ok_or(GenerateError::AnchorDoesNotFit)?;
        if !board.place(anchor_word, anchor, Direction::Across) {
            return Err(GenerateError::AnchorDoesNotFit);
        }

        for &word in rest {
            if board.is_placed(word) {
                continue;
            }
            let mut candidates = find_candidates(&board, word);
            candidates.shuffle(&mut rng);
            let placed = candidates
                .iter()
                .any(|c| board.place(word, c.anchor, c.direction));
            if !placed {
                debug!("no legal position for {word}, dropping it");
            }
        }

        Ok(Layout::new(board, words.len(), seed))
    }

    /// Generates repeatedly with fresh seeds, keeping the best layout.
    ///
    /// Returns as soon as an attempt places every word; otherwise runs the
    /// whole budget and returns the attempt that placed the most words.
    /// At least one attempt always runs, so `attempts == 0` behaves like 1.
    ///
    /// # Errors
    ///
    /// Propagates the first [`GenerateError`] immediately: generation
    /// errors are deterministic and no amount of retrying recovers from
    /// them.
    pub fn generate_best_of(
        &self,
        words: &WordList,
        attempts: usize,
    ) -> Result<Layout, GenerateError> {
        let mut best = self.generate(words)?;
        if best.is_complete() {
            return Ok(best);
        }

        for attempt in 2..=attempts {
            let layout = self.generate(words)?;
            if layout.is_complete() {
                debug!("complete layout on attempt {attempt}");
                return Ok(layout);
            }
            if layout.placed_count() > best.placed_count() {
                best = layout;
            }
        }

        debug!(
            "no complete layout within {attempts} attempt(s); best places {}/{}",
            best.placed_count(),
            best.word_count(),
        );
        Ok(best)
    }

    fn centered_anchor(&self, word: &Word) -> Option<Position> {
        let col = self.grid_size.checked_sub(word.len())? / 2;
        Some(Position::new(self.grid_size / 2, col))
    }
}

impl Default for LayoutGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw candidate position produced by [`find_candidates`].
///
/// Candidates are geometric alignments only; feasibility against the
/// crossword rules is checked when the candidate is tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Cell of the word's first letter.
    pub anchor: Position,
    /// Axis the word would run along.
    pub direction: Direction,
}

/// Collects every position where `word` could cross an existing placement.
///
/// For each placement on the board and each pair of matching letters —
/// one in `word`, one in the placed word — the anchor of a perpendicular
/// placement aligning the two letters is computed. Anchors outside the
/// grid are discarded; nothing else is filtered, so the list may contain
/// infeasible positions and duplicates.
///
/// Restricting the search to matching letters keeps it proportional to
/// the letters already on the board times the word length, instead of the
/// grid area.
///
/// # Examples
///
/// ```
/// use wordcross_core::{Board, Direction, Position, Word};
/// use wordcross_generator::find_candidates;
///
/// let tiger = Word::parse("tiger").unwrap();
/// let cat = Word::parse("cat").unwrap();
/// let mut board = Board::new(11);
/// assert!(board.place(&tiger, Position::new(5, 3), Direction::Across));
///
/// // CAT and TIGER share only the T, which is TIGER's first letter:
/// // one candidate, anchored so CAT's final T lands on it.
/// let candidates = find_candidates(&board, &cat);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].anchor, Position::new(3, 3));
/// assert_eq!(candidates[0].direction, Direction::Down);
/// ```
#[must_use]
pub fn find_candidates(board: &Board, word: &Word) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let size = board.size();

    for placement in board.placements() {
        for (j, letter) in word.letters().enumerate() {
            for (k, placed_letter) in placement.word().letters().enumerate() {
                if letter != placed_letter {
                    continue;
                }
                // Align word[j] with the placed word's k-th letter and run
                // perpendicular to it.
                let anchor = match placement.direction() {
                    Direction::Across => placement
                        .anchor()
                        .row()
                        .checked_sub(j)
                        .map(|row| Position::new(row, placement.anchor().col() + k)),
                    Direction::Down => placement
                        .anchor()
                        .col()
                        .checked_sub(j)
                        .map(|col| Position::new(placement.anchor().row() + k, col)),
                };
                let Some(anchor) = anchor else {
                    continue;
                };
                if anchor.row() < size && anchor.col() < size {
                    candidates.push(Candidate {
                        anchor,
                        direction: placement.direction().perpendicular(),
                    });
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordcross_core::CellNumbers;

    use super::*;

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    fn seed(phrase: &str) -> LayoutSeed {
        LayoutSeed::from_phrase(phrase)
    }

    /// Replays a layout's placements on a fresh board, re-validating every
    /// crossword rule, and checks the grids match cell for cell.
    fn assert_layout_valid(layout: &Layout) {
        let mut board = Board::new(layout.grid().size());
        for placement in layout.placements() {
            assert!(
                board.place(placement.word(), placement.anchor(), placement.direction()),
                "replaying {} at {} {} breaks a crossword rule",
                placement.word(),
                placement.anchor(),
                placement.direction(),
            );
        }
        assert_eq!(board.grid(), layout.grid());
        assert_eq!(
            &CellNumbers::assign(board.grid(), board.placements()),
            layout.numbers(),
        );
    }

    #[test]
    fn test_generate_places_longest_word_centered() {
        let generator = LayoutGenerator::new();
        let words = WordList::parse("cat, dog, tiger");
        let layout = generator.generate(&words).unwrap();

        assert_eq!(layout.word_count(), 3);
        assert!(layout.placed_count() >= 1);
        assert!(layout.placed_count() <= 3);

        // TIGER anchors the puzzle regardless of seed.
        let anchor = &layout.placements()[0];
        assert_eq!(anchor.word().as_str(), "TIGER");
        assert_eq!(anchor.anchor(), Position::new(20, 17));
        assert_eq!(anchor.direction(), Direction::Across);

        assert_layout_valid(&layout);
    }

    #[test]
    fn test_generate_fails_on_empty_list() {
        let generator = LayoutGenerator::new();
        assert_eq!(
            generator.generate(&WordList::parse("ab, cd")),
            Err(GenerateError::EmptyWordList),
        );
        assert_eq!(
            generator.generate(&WordList::parse("")),
            Err(GenerateError::EmptyWordList),
        );
    }

    #[test]
    fn test_generate_fails_when_anchor_word_too_long() {
        let generator = LayoutGenerator::with_grid_size(5);
        let words = WordList::parse("elephant, cat");
        assert_eq!(
            generator.generate(&words),
            Err(GenerateError::AnchorDoesNotFit),
        );
    }

    #[test]
    fn test_duplicate_words_placed_once() {
        let generator = LayoutGenerator::new();
        let words = WordList::parse("cat, cat, dog");
        let layout = generator.generate(&words).unwrap();

        assert_eq!(layout.word_count(), 3);
        let cats = layout
            .placements()
            .iter()
            .filter(|p| p.word().as_str() == "CAT")
            .count();
        assert!(cats <= 1);
        assert_layout_valid(&layout);
    }

    #[test]
    fn test_same_seed_reproduces_layout() {
        let generator = LayoutGenerator::new();
        let words = WordList::parse("lemon, melon, salmon, almond, monday");
        let seed = seed("reproducible");

        let a = generator.generate_with_seed(&words, seed).unwrap();
        let b = generator.generate_with_seed(&words, seed).unwrap();
        assert_eq!(a, b);
        assert_layout_valid(&a);
    }

    #[test]
    fn test_generated_layout_reports_its_seed() {
        let generator = LayoutGenerator::new();
        let words = WordList::parse("cat, dog, tiger");
        let layout = generator.generate(&words).unwrap();

        let replayed = generator
            .generate_with_seed(&words, layout.seed())
            .unwrap();
        assert_eq!(layout, replayed);
    }

    #[test]
    fn test_unplaceable_word_is_dropped() {
        let generator = LayoutGenerator::new();
        // SOAP shares no letter with TIGER, so it can never intersect.
        let words = WordList::parse("tiger, soap");
        let layout = generator.generate(&words).unwrap();

        assert_eq!(layout.placed_count(), 1);
        assert_eq!(layout.word_count(), 2);
        assert!(!layout.is_complete());
        assert_layout_valid(&layout);
    }

    #[test]
    fn test_generate_best_of_reaches_complete_layout() {
        let generator = LayoutGenerator::new();
        // CAT and DOG each cross TIGER at exactly one letter and the
        // crossings cannot collide, so every attempt places all three.
        let words = WordList::parse("cat, dog, tiger");
        let layout = generator
            .generate_best_of(&words, DEFAULT_MAX_ATTEMPTS)
            .unwrap();
        assert!(layout.is_complete());
        assert_layout_valid(&layout);
    }

    #[test]
    fn test_generate_best_of_returns_best_partial() {
        let generator = LayoutGenerator::new();
        // The duplicate CAT can never be placed twice, so no attempt is
        // complete and the budget runs out; the best partial comes back.
        let words = WordList::parse("cat, cat, tiger");
        let layout = generator.generate_best_of(&words, 5).unwrap();
        assert_eq!(layout.placed_count(), 2);
        assert_layout_valid(&layout);
    }

    #[test]
    fn test_find_candidates_aligns_matching_letters() {
        let mut board = Board::new(11);
        assert!(board.place(&word("tiger"), Position::new(5, 3), Direction::Across));

        // DOG shares only the G with TIGER (index 2), giving exactly one
        // alignment: DOG's G (index 2) on TIGER's G.
        let candidates = find_candidates(&board, &word("dog"));
        assert_eq!(candidates.len(), 1);
        assert_eq!(
            candidates[0],
            Candidate {
                anchor: Position::new(3, 5),
                direction: Direction::Down,
            },
        );
    }

    #[test]
    fn test_find_candidates_discards_out_of_grid_anchors() {
        let mut board = Board::new(7);
        assert!(board.place(&word("tiger"), Position::new(0, 1), Direction::Across));

        // CAT's T is its last letter; anchoring it on TIGER's T in row 0
        // would push the anchor above the grid.
        let candidates = find_candidates(&board, &word("cat"));
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_find_candidates_on_empty_board() {
        let board = Board::new(11);
        assert!(find_candidates(&board, &word("cat")).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_generated_layouts_replay_cleanly(
            texts in proptest::collection::vec("[a-z]{3,8}", 1..8),
            bytes in any::<[u8; 32]>(),
        ) {
            let words: WordList = texts
                .iter()
                .filter_map(|text| Word::parse(text))
                .collect();
            let generator = LayoutGenerator::new();
            let layout = generator
                .generate_with_seed(&words, LayoutSeed::from_bytes(bytes))
                .unwrap();

            prop_assert!(layout.placed_count() >= 1);
            prop_assert!(layout.placed_count() <= layout.word_count());
            assert_layout_valid(&layout);

            // Every filled cell sits inside the reported bounds.
            let bounds = layout.bounds();
            for (pos, _) in layout.grid().filled_cells() {
                prop_assert!(pos.row() >= bounds.min_row && pos.row() <= bounds.max_row);
                prop_assert!(pos.col() >= bounds.min_col && pos.col() <= bounds.max_col);
            }
        }
    }
}
