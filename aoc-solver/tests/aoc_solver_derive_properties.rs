//! Property-based tests for `#[derive(AocSolver)]` dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Row statistics for a grid of `.` and `#` cells
#[derive(Debug)]
struct Rows {
    widths: Vec<usize>,
    filled: Option<usize>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct RowSolver;

impl AocParser for RowSolver {
    type SharedData<'a> = Rows;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut filled = 0;
        let widths = input
            .lines()
            .map(|line| {
                if let Some(bad) = line.chars().find(|c| !matches!(c, '.' | '#')) {
                    return Err(ParseError::InvalidFormat(format!("unexpected {bad:?}")));
                }
                filled += line.matches('#').count();
                Ok(line.len())
            })
            .collect::<Result<_, _>>()?;
        Ok(Rows {
            widths,
            filled: Some(filled),
        })
    }
}

impl PartSolver<1> for RowSolver {
    fn solve(shared: &mut Rows) -> Result<String, SolveError> {
        Ok(shared.widths.iter().sum::<usize>().to_string())
    }
}

impl PartSolver<2> for RowSolver {
    fn solve(shared: &mut Rows) -> Result<String, SolveError> {
        // consumes the cached count; a second call has nothing left
        shared
            .filled
            .take()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("filled count already consumed".into()))
    }
}

fn grid_text(rows: &[Vec<bool>]) -> String {
    rows.iter()
        .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// solve_part(N) gives the same answer as PartSolver<N>::solve
    #[test]
    fn solve_part_dispatches_to_part_solver(
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 1..8), 1..6),
        part in 1u8..=2,
    ) {
        let input = grid_text(&rows);
        let mut via_solver = RowSolver::parse(&input).unwrap();
        let mut direct = RowSolver::parse(&input).unwrap();

        let dispatched = RowSolver::solve_part(&mut via_solver, part).unwrap();
        let expected = match part {
            1 => <RowSolver as PartSolver<1>>::solve(&mut direct),
            _ => <RowSolver as PartSolver<2>>::solve(&mut direct),
        }
        .unwrap();
        prop_assert_eq!(dispatched, expected);
    }

    /// Parts without a PartSolver impl are PartNotImplemented, not a panic
    #[test]
    fn undeclared_parts_are_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = RowSolver::parse("#.\n.#").unwrap();
        match RowSolver::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    /// Mutations made by one part are visible to the next call
    #[test]
    fn shared_data_persists_between_calls(
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 1..8), 1..6),
    ) {
        let input = grid_text(&rows);
        let filled = rows.iter().flatten().filter(|&&on| on).count();
        let mut shared = RowSolver::parse(&input).unwrap();

        prop_assert_eq!(RowSolver::solve_part(&mut shared, 2).unwrap(), filled.to_string());
        prop_assert!(shared.filled.is_none());
        prop_assert!(RowSolver::solve_part(&mut shared, 2).is_err());
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<RowSolver as Solver>::PARTS, 2);
}

#[test]
fn parse_errors_surface_unchanged() {
    assert!(matches!(
        RowSolver::parse("#.\n.S"),
        Err(ParseError::InvalidFormat(msg)) if msg.contains("'S'")
    ));
}
