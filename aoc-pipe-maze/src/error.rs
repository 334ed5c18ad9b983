//! Error types for loading and surveying a pipe grid

use crate::grid::{Direction, Position};
use thiserror::Error;

/// The input text is not a well-formed grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("input contains no grid rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at {at}")]
    UnknownSymbol { symbol: char, at: Position },
    #[error("start cell not found")]
    MissingStart,
    #[error("second start marker at {second}, first at {first}")]
    MultipleStarts { first: Position, second: Position },
}

/// Surveying the loop failed; there is no partial answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error(transparent)]
    Parse(#[from] GridParseError),

    /// Fewer than two neighbours connect back to the start
    #[error("start cell at {at} connects to {found} neighbour(s), a loop needs 2")]
    InvalidLoop { at: Position, found: usize },

    /// A traced pipe opens towards a cell that doesn't open back
    #[error("pipe at {at} leads {towards} into nothing")]
    BrokenLoop { at: Position, towards: Direction },

    /// A cell beyond the first step links straight back into the start
    #[error("pipe at {at} leads {towards} back into the start")]
    ReentersStart { at: Position, towards: Direction },

    /// The start's loop neighbours don't pick out a single pipe piece
    #[error("start cell at {at} cannot be resolved from connections {links:?}")]
    AmbiguousStart { at: Position, links: Vec<Direction> },

    #[error("loop of {length} cells cannot have its farthest point at {farthest}")]
    OddLoop { length: usize, farthest: u32 },

    #[error("start cell at {at} must be resolved before classifying cells")]
    UnresolvedStart { at: Position },
}
