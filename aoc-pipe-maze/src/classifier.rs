//! Even-odd scanline test for cells enclosed by the loop

use crate::error::MazeError;
use crate::grid::{Cell, Grid, Position, Symbol};

/// Crossing parity of a ray cast from the left edge of a row.
///
/// `|` always crosses. An `L` or `F` opens a run along the loop; the elbow
/// closing it crosses only if it bends the other way (`L..7`, `F..J`), so
/// the pair together counts once and `L..J` or `F..7` count zero times.
#[derive(Debug, Default)]
struct Crossings {
    inside: bool,
    opened: Option<Symbol>,
}

impl Crossings {
    fn pass(&mut self, symbol: Symbol) {
        match symbol {
            Symbol::Vertical => self.inside = !self.inside,
            Symbol::NorthEast | Symbol::SouthEast => {
                self.inside = !self.inside;
                self.opened = Some(symbol);
            }
            Symbol::SouthWest => {
                if self.opened.take() == Some(Symbol::SouthEast) {
                    self.inside = !self.inside;
                }
            }
            Symbol::NorthWest => {
                if self.opened.take() == Some(Symbol::NorthEast) {
                    self.inside = !self.inside;
                }
            }
            Symbol::Horizontal | Symbol::Ground | Symbol::Start => {}
        }
    }

    fn visit(&mut self, cell: &Cell) {
        if cell.is_boundary() {
            self.pass(cell.symbol());
        }
    }
}

fn ensure_resolved(grid: &Grid) -> Result<(), MazeError> {
    if grid.start_cell().symbol() == Symbol::Start {
        return Err(MazeError::UnresolvedStart { at: grid.start() });
    }
    Ok(())
}

fn is_candidate(cell: &Cell) -> bool {
    !cell.is_boundary() && !cell.is_start()
}

/// Whether the cell at `position` is enclosed by the traced loop.
///
/// Scans the row from column 0 up to `position`. Boundary cells, the
/// origin and positions outside the grid are never interior.
pub fn is_interior(grid: &Grid, position: Position) -> Result<bool, MazeError> {
    ensure_resolved(grid)?;
    let Some(row) = grid.rows().nth(position.row) else {
        return Ok(false);
    };
    let Some(target) = row.get(position.col) else {
        return Ok(false);
    };
    if !is_candidate(target) {
        return Ok(false);
    }

    let mut crossings = Crossings::default();
    row[..=position.col]
        .iter()
        .for_each(|cell| crossings.visit(cell));
    Ok(crossings.inside)
}

/// Every interior cell, row by row, in one left-to-right sweep per row.
pub fn interior_cells(grid: &Grid) -> Result<Vec<Position>, MazeError> {
    ensure_resolved(grid)?;
    let mut interior = Vec::new();
    for row in grid.rows() {
        let mut crossings = Crossings::default();
        for cell in row {
            crossings.visit(cell);
            if crossings.inside && is_candidate(cell) {
                interior.push(cell.position());
            }
        }
    }
    Ok(interior)
}
