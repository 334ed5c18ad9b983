//! Pipe Maze solver
//!
//! The input is a grid of pipe pieces with a single start marker `S` sitting
//! on one closed loop. Surveying the grid answers two questions:
//!
//! 1. how many steps along the loop the farthest cell is from the start, and
//! 2. how many cells the loop encloses.
//!
//! The survey runs in a fixed order over one mutable [`Grid`]: the
//! [`tracer`] walks the loop and assigns distances, the [`resolver`]
//! replaces the start marker with the pipe it stands on, and the
//! [`classifier`] counts enclosed cells with an even-odd scanline rule.
//!
//! ```
//! let answers = aoc_pipe_maze::solve(".....\n.S-7.\n.|.|.\n.L-J.\n.....").unwrap();
//! assert_eq!(answers.farthest, 4);
//! assert_eq!(answers.enclosed, 1);
//! ```
//!
//! With the default `auto-register` feature the solver is also submitted to
//! the `aoc-solver` plugin registry as year 2023, day 10.

pub mod classifier;
pub mod error;
pub mod grid;
pub mod resolver;
pub mod tracer;

#[cfg(feature = "auto-register")]
pub mod plugin;

pub use error::{GridParseError, MazeError};
pub use grid::{Cell, Direction, Grid, Position, Symbol};
pub use tracer::LoopTrace;

use tracing::debug;

/// Both puzzle answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Answers {
    /// Steps from the start to the farthest point on the loop
    pub farthest: u32,
    /// Cells enclosed by the loop
    pub enclosed: usize,
}

/// Trace, resolve and classify `grid` in place.
pub fn survey(grid: &mut Grid) -> Result<Answers, MazeError> {
    let LoopTrace { farthest, length } = tracer::trace_loop(grid)?;
    if length != 2 * farthest as usize {
        return Err(MazeError::OddLoop { length, farthest });
    }
    resolver::resolve_start(grid)?;
    let enclosed = classifier::interior_cells(grid)?.len();
    debug!(farthest, enclosed, "surveyed grid");
    Ok(Answers { farthest, enclosed })
}

/// Parse `input` and survey it.
pub fn solve(input: &str) -> Result<Answers, MazeError> {
    let mut grid: Grid = input.parse()?;
    survey(&mut grid)
}
