//! Puzzle solver harness
//!
//! A small, type-safe harness for puzzle solvers keyed by year and day.
//! A solver parses its input once into shared data and then answers one or
//! more numbered parts from it.
//!
//! # Overview
//!
//! - [`AocParser`]: input text to shared data
//! - [`PartSolver<N>`]: one impl per part
//! - [`Solver`]: part count and dispatch, usually `#[derive(AocSolver)]`
//! - [`SolverInstance`] / [`DynSolver`]: parsed input behind a type-erased,
//!   timed interface
//! - [`SolverRegistry`]: year/day lookup, filled by hand or from plugins
//!   submitted with `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Ground;
//!
//! impl AocParser for Ground {
//!     type SharedData<'a> = Vec<&'a str>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.lines().collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Ground {
//!     fn solve(rows: &mut Vec<&str>) -> Result<String, SolveError> {
//!         Ok(rows.iter().map(|r| r.matches('.').count()).sum::<usize>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Ground {
//!     fn solve(rows: &mut Vec<&str>) -> Result<String, SolveError> {
//!         Ok(rows.len().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Ground>(2023, 10)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 10, "..F7.\n.FJ|.").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "5");
//! assert_eq!(solver.solve(2).unwrap().answer, "2");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Span};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder, plugins,
};
pub use solver::{AocParser, PartSolver, Solver};

// Used by code generated from #[derive(AutoRegisterSolver)]
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
