//! Traits a puzzle implements: one parser, one solver per part, and the
//! dispatch that ties the parts together

use crate::error::{ParseError, SolveError};
use std::ops::RangeInclusive;

/// Reads the puzzle input once.
///
/// The result is handed mutably to every part, so whatever one part works
/// out can be stashed there for the next.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Starts;
///
/// impl AocParser for Starts {
///     type SharedData<'a> = Vec<(usize, usize)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let found: Vec<_> = input
///             .lines()
///             .enumerate()
///             .flat_map(|(row, line)| line.match_indices('S').map(move |(col, _)| (row, col)))
///             .collect();
///         if found.is_empty() {
///             return Err(ParseError::MissingData("no start marker".into()));
///         }
///         Ok(found)
///     }
/// }
///
/// assert_eq!(Starts::parse("..\n.S").unwrap(), vec![(1, 1)]);
/// assert!(Starts::parse("..").is_err());
/// ```
pub trait AocParser {
    /// Parsed input, possibly borrowing from the text through `'a`.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N`.
///
/// One impl per part; `#[derive(AocSolver)]` collects them into
/// [`Solver::solve_part`].
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Height;
///
/// impl AocParser for Height {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Height {
///     fn solve(grid: &mut &str) -> Result<String, SolveError> {
///         Ok(grid.lines().count().to_string())
///     }
/// }
///
/// let mut grid = Height::parse(".S-7.\n.|.|.\n.L-J.").unwrap();
/// assert_eq!(<Height as PartSolver<1>>::solve(&mut grid).unwrap(), "3");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Part count plus dispatch by part number.
///
/// `solve_part` is normally generated:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Tiles;
///
/// impl AocParser for Tiles {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Tiles {
///     fn solve(grid: &mut &str) -> Result<String, SolveError> {
///         Ok(grid.chars().filter(|c| *c != '\n').count().to_string())
///     }
/// }
///
/// impl PartSolver<2> for Tiles {
///     fn solve(grid: &mut &str) -> Result<String, SolveError> {
///         Ok(grid.matches('.').count().to_string())
///     }
/// }
///
/// let mut grid = Tiles::parse("..\n.S").unwrap();
/// assert_eq!(Tiles::part_range(), 1..=2);
/// assert_eq!(Tiles::solve_checked(&mut grid, 1).unwrap(), "4");
/// assert_eq!(Tiles::solve_checked(&mut grid, 2).unwrap(), "3");
/// assert!(Tiles::solve_checked(&mut grid, 3).is_err());
/// ```
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Unchecked dispatch. Parts with no [`PartSolver`] impl give
    /// `SolveError::PartNotImplemented`.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;

    /// Part numbers this solver answers.
    fn part_range() -> RangeInclusive<u8> {
        1..=Self::PARTS
    }

    /// [`Solver::solve_part`] for parts inside [`Solver::part_range`];
    /// anything else is `SolveError::PartOutOfRange`.
    fn solve_checked(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        if !Self::part_range().contains(&part) {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}
