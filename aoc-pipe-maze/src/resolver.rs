//! Infers which pipe piece the start marker is standing on

use crate::error::MazeError;
use crate::grid::{Direction, Grid, Symbol};
use crate::tracer::start_links;
use tracing::debug;

/// Replace the start marker with the pipe joining its two loop neighbours.
///
/// Must run after [`crate::tracer::trace_loop`]: only the pair the tracer
/// left through, the neighbours one step from the start, count. Stray pipes
/// opening towards the start are ignored. The cell keeps distance 0 and
/// stays flagged as the origin. Resolving an already resolved grid yields
/// the same symbol.
pub fn resolve_start(grid: &mut Grid) -> Result<Symbol, MazeError> {
    let at = grid.start();
    let links: Vec<Direction> = start_links(grid)
        .into_iter()
        .filter(|&direction| {
            grid.link(at, direction)
                .and_then(|next| grid.get(next))
                .is_some_and(|cell| cell.distance() == Some(1))
        })
        .collect();

    let symbol = match links.as_slice() {
        &[a, b] => Symbol::joining(a, b),
        _ => None,
    }
    .ok_or_else(|| MazeError::AmbiguousStart {
        at,
        links: links.clone(),
    })?;

    debug!(%at, %symbol, "resolved start cell");
    grid.start_cell_mut().resolve_origin(symbol);
    Ok(symbol)
}
