//! Breadth-first walk around the loop from the start cell

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Position};
use tracing::{debug, trace};

/// Outcome of tracing the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTrace {
    /// Last round that reached a new cell: the farthest distance from the start
    pub farthest: u32,
    /// Number of cells on the loop, start included
    pub length: usize,
}

/// Directions from the start towards neighbours that open back at it.
pub fn start_links(grid: &Grid) -> Vec<Direction> {
    let start = grid.start();
    Direction::ALL
        .into_iter()
        .filter(|&direction| grid.link(start, direction).is_some())
        .collect()
}

/// Walk the loop from both ends at once, assigning each cell its distance.
///
/// With more than two pipes opening towards the start, every pair of them
/// is walked and the single pair that closes a loop wins; stray pipes that
/// merely point at the start are left untouched.
///
/// Previous distances are cleared first, so tracing an already traced grid
/// gives the same result.
pub fn trace_loop(grid: &mut Grid) -> Result<LoopTrace, MazeError> {
    let start = grid.start();
    let links = start_links(grid);
    if let found @ 0..=1 = links.len() {
        grid.clear_distances();
        return Err(MazeError::InvalidLoop { at: start, found });
    }
    if let &[a, b] = links.as_slice() {
        return trace_pair(grid, [a, b]);
    }

    let mut closing = Vec::new();
    let mut failure = None;
    for (i, &a) in links.iter().enumerate() {
        for &b in &links[i + 1..] {
            match trace_pair(grid, [a, b]) {
                Ok(_) => closing.push([a, b]),
                Err(err) => {
                    trace!(%a, %b, %err, "start pair does not close");
                    failure.get_or_insert(err);
                }
            }
        }
    }

    match closing.as_slice() {
        &[pair] => trace_pair(grid, pair),
        [] => {
            grid.clear_distances();
            Err(failure.unwrap_or(MazeError::AmbiguousStart { at: start, links }))
        }
        _ => {
            grid.clear_distances();
            Err(MazeError::AmbiguousStart { at: start, links })
        }
    }
}

/// Trace the loop that leaves the start through `pair`.
///
/// Only the two cells reached in round one may link back into the start;
/// any other loop cell doing so means the walk took a wrong turn.
fn trace_pair(grid: &mut Grid, pair: [Direction; 2]) -> Result<LoopTrace, MazeError> {
    grid.clear_distances();

    let start = grid.start();
    grid.start_cell_mut().set_distance(0);
    let mut frontier: Vec<Position> = pair
        .iter()
        .filter_map(|&direction| grid.link(start, direction))
        .collect();

    let mut round = 0;
    let mut farthest = 0;
    let mut length = 1;
    loop {
        round += 1;
        let mut reached = Vec::with_capacity(frontier.len());
        for position in frontier.drain(..) {
            if let Some(cell) = grid.get_mut(position)
                && cell.distance().is_none()
            {
                cell.set_distance(round);
                reached.push(position);
            }
        }
        if reached.is_empty() {
            break;
        }
        trace!(round, cells = reached.len(), "loop round");
        farthest = round;
        length += reached.len();

        for position in reached {
            let Some(cell) = grid.get(position) else {
                continue;
            };
            for &towards in cell.symbol().openings() {
                let next = grid
                    .link(position, towards)
                    .ok_or(MazeError::BrokenLoop { at: position, towards })?;
                if next == start && round > 1 {
                    return Err(MazeError::ReentersStart { at: position, towards });
                }
                if grid.get(next).is_some_and(|cell| !cell.is_boundary()) {
                    frontier.push(next);
                }
            }
        }
    }

    debug!(farthest, length, "traced loop");
    Ok(LoopTrace { farthest, length })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(input: &str) -> Grid {
        input.parse().unwrap()
    }

    #[test]
    fn assigns_distances_around_square_loop() {
        let mut grid = grid(".....\n.S-7.\n.|.|.\n.L-J.\n.....");
        let trace = trace_loop(&mut grid).unwrap();
        assert_eq!(trace, LoopTrace { farthest: 4, length: 8 });

        let distances: Vec<Vec<Option<u32>>> = grid
            .rows()
            .map(|row| row.iter().map(|cell| cell.distance()).collect())
            .collect();
        assert_eq!(distances[1], vec![None, Some(0), Some(1), Some(2), None]);
        assert_eq!(distances[2], vec![None, Some(1), None, Some(3), None]);
        assert_eq!(distances[3], vec![None, Some(2), Some(3), Some(4), None]);
    }

    #[test]
    fn ignores_pipes_off_the_loop() {
        let mut grid = grid("-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF");
        let trace = trace_loop(&mut grid).unwrap();
        assert_eq!(trace, LoopTrace { farthest: 4, length: 8 });
        assert!(!grid.get(Position::new(2, 2)).unwrap().is_boundary());
        assert!(!grid.get(Position::new(0, 1)).unwrap().is_boundary());
    }

    #[test]
    fn start_links_only_count_pipes_opening_back() {
        let grid = grid("-L|F7\n7S-7|\nL|7||\n-L-J|\nL|-JF");
        assert_eq!(start_links(&grid), vec![Direction::South, Direction::East]);
    }

    #[test]
    fn start_with_one_connection_is_invalid() {
        let mut grid = grid("...\n.S-\n...");
        assert_eq!(
            trace_loop(&mut grid),
            Err(MazeError::InvalidLoop {
                at: Position::new(1, 1),
                found: 1
            })
        );
    }

    #[test]
    fn stray_pipe_pointing_at_start_is_skipped() {
        let mut grid = grid(".F-7.\n-S.|.\n.L-J.");
        assert_eq!(
            start_links(&grid),
            vec![Direction::North, Direction::South, Direction::West]
        );
        let trace = trace_loop(&mut grid).unwrap();
        assert_eq!(trace, LoopTrace { farthest: 4, length: 8 });
        assert_eq!(grid.get(Position::new(1, 0)).unwrap().distance(), None);
        assert_eq!(grid.get(Position::new(0, 1)).unwrap().distance(), Some(1));
        assert_eq!(grid.get(Position::new(2, 1)).unwrap().distance(), Some(1));
    }

    #[test]
    fn walk_that_comes_back_into_start_is_rejected() {
        let mut grid = grid(".....\n|.F7.\nL-SJ.\n.....");
        assert_eq!(
            trace_pair(&mut grid, [Direction::North, Direction::West]),
            Err(MazeError::ReentersStart {
                at: Position::new(2, 3),
                towards: Direction::West
            })
        );
        assert_eq!(
            trace_loop(&mut grid),
            Ok(LoopTrace { farthest: 2, length: 4 })
        );
    }

    #[test]
    fn no_closing_pair_reports_the_first_failure() {
        let mut grid = grid(".|.\n-S-\n...");
        assert_eq!(
            trace_loop(&mut grid),
            Err(MazeError::BrokenLoop {
                at: Position::new(0, 1),
                towards: Direction::North
            })
        );
        assert!(grid.cells().all(|cell| cell.distance().is_none()));
    }

    #[test]
    fn two_closing_pairs_are_ambiguous() {
        let mut grid = grid(".....\n..F7.\n.FSJ.\n.LJ..\n.....");
        assert_eq!(
            trace_loop(&mut grid),
            Err(MazeError::AmbiguousStart {
                at: Position::new(2, 2),
                links: Direction::ALL.to_vec()
            })
        );
    }

    #[test]
    fn dead_end_breaks_the_loop() {
        let mut grid = grid("S-7\n|.|\nL-.");
        assert!(matches!(
            trace_loop(&mut grid),
            Err(MazeError::BrokenLoop { .. })
        ));
    }

    #[test]
    fn retracing_is_idempotent() {
        let mut grid = grid("7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ");
        let first = trace_loop(&mut grid).unwrap();
        let second = trace_loop(&mut grid).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.farthest, 8);
        assert_eq!(first.length, 16);
    }
}
