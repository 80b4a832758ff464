//! Example demonstrating crossword layout generation.
//!
//! This example shows how to:
//! - Parse a comma-separated word list
//! - Generate a layout, seeded or with a retry budget
//! - Sample many seeds in parallel and keep the densest layout
//! - Read the query surface: grid, bounds, numbering, clue lists
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_layout -- --words "cat, dog, tiger"
//! ```
//!
//! Reproduce a layout from its reported seed:
//!
//! ```sh
//! cargo run --example generate_layout -- --words "cat, dog, tiger" \
//!     --seed <64-hex-chars>
//! ```
//!
//! Sample seeds in parallel, keeping the layout that places the most
//! words (smallest bounding box breaks ties):
//!
//! ```sh
//! cargo run --example generate_layout -- --words "cat, dog, tiger" \
//!     --sample 1000
//! ```
//!
//! Show the letters instead of blank cells:
//!
//! ```sh
//! cargo run --example generate_layout -- --words "cat, dog, tiger" --answers
//! ```

use std::{cmp::Reverse, process, str::FromStr as _};

use clap::Parser;
use rayon::prelude::*;
use wordcross_core::{Grid, Position, WordList};
use wordcross_generator::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, GenerateError, Layout, LayoutGenerator, LayoutSeed,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Comma-separated candidate words; tokens shorter than three
    /// characters are discarded.
    #[arg(short, long, value_name = "WORDS")]
    words: String,

    /// Seed (64 hex characters) for a reproducible layout.
    #[arg(long, value_name = "SEED", conflicts_with_all = ["sample", "attempts"])]
    seed: Option<String>,

    /// Grid side length.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Attempt budget when searching for a complete layout.
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Sample this many random seeds in parallel and keep the densest
    /// layout.
    #[arg(long, value_name = "COUNT")]
    sample: Option<usize>,

    /// Show the letters instead of blank cells.
    #[arg(long)]
    answers: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let words = WordList::parse(&args.words);
    if words.is_empty() {
        eprintln!("No usable words: every token must be longer than two characters.");
        process::exit(2);
    }

    let generator = LayoutGenerator::with_grid_size(args.grid_size);
    let result = if let Some(seed) = &args.seed {
        match LayoutSeed::from_str(seed) {
            Ok(seed) => generator.generate_with_seed(&words, seed),
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        }
    } else if let Some(samples) = args.sample {
        sample_layouts(&generator, &words, samples)
    } else {
        generator.generate_best_of(&words, args.attempts)
    };

    match result {
        Ok(layout) => print_layout(&layout, args.answers),
        Err(err) => {
            eprintln!("Layout failed: {err}");
            process::exit(1);
        }
    }
}

/// Generates `samples` layouts on the rayon pool and keeps the one placing
/// the most words; ties go to the tighter bounding box.
fn sample_layouts(
    generator: &LayoutGenerator,
    words: &WordList,
    samples: usize,
) -> Result<Layout, GenerateError> {
    let layouts: Result<Vec<Layout>, GenerateError> = (0..samples.max(1))
        .into_par_iter()
        .map(|_| generator.generate(words))
        .collect();

    let best = layouts?
        .into_iter()
        .max_by_key(|layout| {
            let bounds = layout.bounds();
            (
                layout.placed_count(),
                Reverse(bounds.height() * bounds.width()),
            )
        })
        .expect("at least one sample is generated");
    Ok(best)
}

fn print_layout(layout: &Layout, answers: bool) {
    println!("Seed:");
    println!("  {}", layout.seed());
    println!();

    println!(
        "Placed {} of {} words",
        layout.placed_count(),
        layout.word_count(),
    );
    println!();

    let bounds = layout.bounds();
    for row in bounds.min_row..=bounds.max_row {
        let line: String = (bounds.min_col..=bounds.max_col)
            .map(|col| match layout.letter(Position::new(row, col)) {
                Some(letter) if answers => letter,
                Some(_) => '_',
                None => Grid::EMPTY,
            })
            .collect();
        println!("  {line}");
    }
    println!();

    println!("Across:");
    for clue in layout.across() {
        println!("  {clue}");
    }
    println!();
    println!("Down:");
    for clue in layout.down() {
        println!("  {clue}");
    }
}
