use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, RegistrationError, SolveError,
    SolverError, SolverRegistryBuilder,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct Width;

impl AocParser for Width {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .next()
            .ok_or_else(|| ParseError::MissingData("no rows".into()))
    }
}

impl PartSolver<1> for Width {
    fn solve(first_row: &mut &str) -> Result<String, SolveError> {
        Ok(first_row.len().to_string())
    }
}

#[test]
fn duplicate_registration_is_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_solver::<Width>(2023, 10)
        .unwrap()
        .register_solver::<Width>(2023, 10);
    assert_eq!(
        result.err(),
        Some(RegistrationError::DuplicateSolver(2023, 10))
    );
}

#[test]
fn out_of_range_year_or_day_is_rejected() {
    for (year, day) in [(2014, 1), (2035, 1), (2023, 0), (2023, 26)] {
        let result = SolverRegistryBuilder::new().register_solver::<Width>(year, day);
        assert_eq!(
            result.err(),
            Some(RegistrationError::InvalidYearDay(year, day))
        );
    }
}

#[test]
fn lookup_errors() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Width>(2023, 10)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2023, 11, "..."),
        Err(SolverError::NotFound(2023, 11))
    ));
    assert!(matches!(
        registry.create_solver(1999, 10, "..."),
        Err(SolverError::InvalidYearDay(1999, 10))
    ));
    assert!(matches!(
        registry.create_solver(2023, 10, ""),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn info_is_ordered_by_year_then_day() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Width>(2024, 1)
        .unwrap()
        .register_solver::<Width>(2023, 10)
        .unwrap()
        .register_solver::<Width>(2023, 3)
        .unwrap()
        .build();

    let keys: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(keys, vec![(2023, 3), (2023, 10), (2024, 1)]);
    assert_eq!(registry.len(), 3);
    assert!(registry.iter_info().all(|i| i.parts == 1));
}

#[test]
fn instances_report_metadata_and_timing() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Width>(2023, 10)
        .unwrap()
        .build();

    let mut solver: Box<dyn DynSolver> = registry.create_solver(2023, 10, ".S-7.\n.|.|.").unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2023, 10, 1));
    assert!(solver.parse_span().end >= solver.parse_span().start);

    let result = solver.solve(1).unwrap();
    assert_eq!((result.part, result.answer.as_str()), (1, "5"));
    assert!(result.duration() >= chrono::TimeDelta::zero());
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
}

#[test]
fn solve_all_answers_each_part_in_order() {
    let registry = SolverRegistryBuilder::new()
        .register_solver::<Width>(2023, 10)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2023, 10, "S-7\n|.|\nL-J").unwrap();
    let results = solver.solve_all().unwrap();
    let answers: Vec<(u8, &str)> = results
        .iter()
        .map(|r| (r.part, r.answer.as_str()))
        .collect();
    assert_eq!(answers, vec![(1, "3")]);
    assert!(results.iter().all(|r| r.span.end >= r.span.start));
}
