//! Letter-board generation for Wordrush.
//!
//! A board is a 4×4 grid of uppercase letters that a round is played
//! against. Two generators are provided:
//!
//! - [`BoardMode::Dice`] (default) — reproduces the classic tabletop
//!   method: 16 six-sided letter dice are shuffled into the 16 cells,
//!   then each die is rolled to pick the cell's letter.
//! - [`BoardMode::Frequency`] — each cell is drawn independently from a
//!   pool weighted by English letter frequency.
//!
//! Both are pure functions of the caller-supplied random source, so a
//! seeded RNG reproduces the same board.
//!
//! The letter `Q` stands for the compound "Qu". It occupies a single
//! cell; [`Board::display_rows`] expands it for presentation.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Boards are always square with this side length.
pub const BOARD_SIZE: usize = 4;

/// The 16 letter dice of the classic tabletop set, one face set per die.
///
/// The `Q` face on the 15th die is the "Qu" compound.
const DICE: [[char; 6]; 16] = [
    ['A', 'A', 'E', 'E', 'G', 'N'],
    ['A', 'B', 'B', 'J', 'O', 'O'],
    ['A', 'C', 'H', 'O', 'P', 'S'],
    ['A', 'F', 'F', 'K', 'P', 'S'],
    ['A', 'O', 'O', 'T', 'T', 'W'],
    ['C', 'I', 'M', 'O', 'T', 'U'],
    ['D', 'E', 'I', 'L', 'R', 'X'],
    ['D', 'E', 'L', 'R', 'V', 'Y'],
    ['D', 'I', 'S', 'T', 'T', 'Y'],
    ['E', 'E', 'G', 'H', 'N', 'W'],
    ['E', 'E', 'I', 'N', 'S', 'U'],
    ['E', 'H', 'R', 'T', 'V', 'W'],
    ['E', 'I', 'O', 'S', 'S', 'T'],
    ['E', 'L', 'R', 'T', 'T', 'Y'],
    ['H', 'I', 'M', 'N', 'Q', 'U'],
    ['H', 'L', 'N', 'N', 'R', 'Z'],
];

/// Per-letter draw weights for [`BoardMode::Frequency`], A through Z,
/// in units of 0.01% of English text.
const LETTER_WEIGHTS: [u32; 26] = [
    817, 149, 278, 425, 1270, 223, 202, 609, 697, 15, 77, 403, 241, //
    675, 751, 193, 10, 599, 633, 906, 276, 98, 236, 15, 197, 7,
];

// ---------------------------------------------------------------------------
// BoardMode
// ---------------------------------------------------------------------------

/// Selects which generator produces a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardMode {
    /// Classic 16-dice method. The default, and the one the start-game
    /// flow exercises.
    #[default]
    Dice,
    /// Independent per-cell draw from a letter-frequency-weighted pool.
    Frequency,
}

/// The mode string didn't name a known generator.
#[derive(Debug, thiserror::Error)]
#[error("unknown board mode {0:?} (expected \"dice\" or \"frequency\")")]
pub struct ParseBoardModeError(String);

impl std::str::FromStr for BoardMode {
    type Err = ParseBoardModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dice" => Ok(Self::Dice),
            "frequency" => Ok(Self::Frequency),
            _ => Err(ParseBoardModeError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// A 4×4 grid of uppercase letters.
///
/// Serializes as nested arrays of single-character strings, row-major —
/// the shape clients render directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[char; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Builds a board from raw cells. Intended for fixtures; generated
    /// boards come from [`generate`].
    pub fn from_cells(cells: [[char; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The letter at `(row, col)`. Panics if out of bounds, like array
    /// indexing.
    pub fn cell(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Row-major access to all cells.
    pub fn rows(&self) -> &[[char; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Presentation form of each row: `Q` expands to `"Qu"`, every other
    /// letter is itself.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| {
                        if c == 'Q' {
                            "Qu".to_string()
                        } else {
                            c.to_string()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.display_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Generates a board with the given mode and random source.
pub fn generate(mode: BoardMode, rng: &mut impl Rng) -> Board {
    match mode {
        BoardMode::Dice => generate_dice(rng),
        BoardMode::Frequency => generate_frequency(rng),
    }
}

/// Shuffles the 16 dice across the 16 cells, then rolls each die.
fn generate_dice(rng: &mut impl Rng) -> Board {
    let mut dice = DICE;
    dice.shuffle(rng);

    let mut cells = [['A'; BOARD_SIZE]; BOARD_SIZE];
    for (i, die) in dice.iter().enumerate() {
        cells[i / BOARD_SIZE][i % BOARD_SIZE] = die[rng.random_range(0..die.len())];
    }
    Board { cells }
}

/// Draws each cell independently from the frequency-weighted pool.
fn generate_frequency(rng: &mut impl Rng) -> Board {
    let dist = WeightedIndex::new(LETTER_WEIGHTS)
        .expect("letter weight table is non-empty and positive");

    let mut cells = [['A'; BOARD_SIZE]; BOARD_SIZE];
    for row in cells.iter_mut() {
        for cell in row.iter_mut() {
            *cell = (b'A' + dist.sample(rng) as u8) as char;
        }
    }
    Board { cells }
}

// =========================================================================
// Tests
// =========================================================================
