//! Parsed puzzle input behind a timed, type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::Solver;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

/// Wall-clock interval around one parse or solve step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    fn measure<T>(step: impl FnOnce() -> T) -> (T, Self) {
        let start = Utc::now();
        let value = step();
        let end = Utc::now();
        (value, Self { start, end })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// One answered part.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub span: Span,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// Input for one year/day parsed by `S`.
///
/// The shared data lives as long as the instance, so a solver that works
/// out every answer in one pass only pays for it on the first part asked.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parsed: Span,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parsed) = Span::measure(|| S::parse(input));
        let shared = shared?;
        debug!(year, day, elapsed = %parsed.duration(), "parsed input");
        Ok(Self {
            year,
            day,
            shared,
            parsed,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// What the registry hands out: a solver with its input already parsed.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(mut solver: Box<dyn DynSolver>) -> Result<(), aoc_solver::SolveError> {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for result in solver.solve_all()? {
///         println!("part {}: {} ({})", result.part, result.answer, result.duration());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Answer `part`; parts outside `1..=parts()` are `PartOutOfRange`.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_span(&self) -> Span;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_span().duration()
    }

    /// Answer every part in order, stopping at the first failure.
    fn solve_all(&mut self) -> Result<Vec<SolveResult>, SolveError> {
        (1..=self.parts()).map(|part| self.solve(part)).collect()
    }
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, span) = Span::measure(|| S::solve_checked(&mut self.shared, part));
        let answer = answer?;
        debug!(
            year = self.year,
            day = self.day,
            part,
            elapsed = %span.duration(),
            "solved part"
        );
        Ok(SolveResult { part, answer, span })
    }

    fn parse_span(&self) -> Span {
        self.parsed
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
