//! Crossword layout generation.
//!
//! This crate turns a normalized word list into a crossword layout: words
//! crossing each other on a bounded grid, cells numbered for clue
//! references, and a read-only query surface for renderers and exporters.
//!
//! # Overview
//!
//! - [`generator`]: the randomized greedy construction —
//!   [`LayoutGenerator`] runs single passes, [`find_candidates`] restricts
//!   the search to positions where letters line up.
//! - [`layout`]: the immutable [`Layout`] result and its [`Clue`] lists.
//! - [`seed`]: reproducibility — every pass is driven by a [`LayoutSeed`],
//!   and every layout reports the seed that produced it.
//!
//! Generation is randomized and greedy, with no backtracking: words that
//! cannot legally cross the existing layout are dropped. Callers wanting a
//! denser result retry with fresh seeds, either by hand or through
//! [`LayoutGenerator::generate_best_of`].
//!
//! # Examples
//!
//! ```
//! use wordcross_core::WordList;
//! use wordcross_generator::LayoutGenerator;
//!
//! let words = WordList::parse("cat, dog, tiger");
//! let layout = LayoutGenerator::new().generate(&words)?;
//!
//! assert!(layout.placed_count() >= 1);
//!
//! // Reproduce the exact same layout from its seed.
//! let again = LayoutGenerator::new().generate_with_seed(&words, layout.seed())?;
//! assert_eq!(layout, again);
//! # Ok::<(), wordcross_generator::GenerateError>(())
//! ```

pub mod generator;
pub mod layout;
pub mod seed;

// Re-export commonly used types
pub use self::{
    generator::{
        Candidate, DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, GenerateError, LayoutGenerator,
        find_candidates,
    },
    layout::{Clue, Layout},
    seed::{LayoutSeed, SeedParseError},
};
