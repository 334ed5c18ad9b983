use crate::{Answers, Grid, GridParseError};
use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["pipe-maze", "grid", "bfs"])]
pub struct PipeMaze;

#[derive(Debug)]
pub struct SharedData {
    grid: Grid,
    answers: Option<Answers>,
}

impl SharedData {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Set once either part has run.
    pub fn answers(&self) -> Option<Answers> {
        self.answers
    }
}

impl AocParser for PipeMaze {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .parse::<Grid>()
            .map(|grid| SharedData {
                grid,
                answers: None,
            })
            .map_err(|e| match e {
                GridParseError::MissingStart => ParseError::MissingData(e.to_string()),
                _ => ParseError::InvalidFormat(e.to_string()),
            })
    }
}

impl PartSolver<1> for PipeMaze {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(survey_once_for_both(shared)?.farthest.to_string())
    }
}

impl PartSolver<2> for PipeMaze {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(survey_once_for_both(shared)?.enclosed.to_string())
    }
}

fn survey_once_for_both(shared: &mut SharedData) -> Result<Answers, SolveError> {
    if let Some(answers) = shared.answers {
        return Ok(answers);
    }
    let answers = crate::survey(&mut shared.grid)
        .with_context(|| {
            format!(
                "surveying {}x{} grid from start {}",
                shared.grid.width(),
                shared.grid.height(),
                shared.grid.start()
            )
        })
        .map_err(|e| SolveError::SolveFailed(e.into()))?;
    shared.answers = Some(answers);
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn both_parts_share_one_survey() {
        let mut shared = PipeMaze::parse(".....\n.S-7.\n.|.|.\n.L-J.\n.....").unwrap();
        assert!(shared.answers().is_none());

        assert_eq!(PipeMaze::solve_part(&mut shared, 2).unwrap(), "1");
        assert_eq!(
            shared.answers(),
            Some(Answers {
                farthest: 4,
                enclosed: 1
            })
        );
        assert_eq!(PipeMaze::solve_part(&mut shared, 1).unwrap(), "4");
        assert!(shared.grid().start_cell().is_origin());
    }

    #[test]
    fn part_three_is_out_of_range() {
        let mut shared = PipeMaze::parse("S7\nLJ").unwrap();
        assert!(matches!(
            PipeMaze::solve_checked(&mut shared, 3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }

    #[test]
    fn missing_start_is_missing_data() {
        assert!(matches!(
            PipeMaze::parse("F7\nLJ"),
            Err(ParseError::MissingData(_))
        ));
        assert!(matches!(
            PipeMaze::parse("S7\nL"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn survey_failures_carry_context() {
        let mut shared = PipeMaze::parse("...\n.S-\n...").unwrap();
        let err = PipeMaze::solve_part(&mut shared, 1).unwrap_err();
        let SolveError::SolveFailed(source) = err else {
            panic!("expected SolveFailed");
        };
        let message = source.to_string();
        assert!(message.starts_with("surveying 3x3 grid from start (1, 1)"), "{message}");
        let cause = source.source().map(ToString::to_string).unwrap_or_default();
        assert!(cause.contains("connects to 1 neighbour"), "{cause}");
        assert!(shared.answers().is_none());
    }
}
