//! Pipe grid model: symbols, directions and the cell arena

use crate::error::GridParseError;
use std::fmt;
use std::str::FromStr;

/// One of the four orthogonal steps on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        };
        f.write_str(name)
    }
}

/// A cell's content.
///
/// Pipe pieces open towards exactly two directions, ground towards none.
/// The start marker opens everywhere until the resolver replaces it with
/// the pipe it actually stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `L`
    NorthEast,
    /// `J`
    NorthWest,
    /// `7`
    SouthWest,
    /// `F`
    SouthEast,
    /// `.`
    Ground,
    /// `S`
    Start,
}

impl Symbol {
    /// The six pipe pieces a start marker can resolve to
    pub const PIPES: [Symbol; 6] = [
        Symbol::Vertical,
        Symbol::Horizontal,
        Symbol::NorthEast,
        Symbol::NorthWest,
        Symbol::SouthWest,
        Symbol::SouthEast,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        let symbol = match c {
            '|' => Symbol::Vertical,
            '-' => Symbol::Horizontal,
            'L' => Symbol::NorthEast,
            'J' => Symbol::NorthWest,
            '7' => Symbol::SouthWest,
            'F' => Symbol::SouthEast,
            '.' => Symbol::Ground,
            'S' => Symbol::Start,
            _ => return None,
        };
        Some(symbol)
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::Vertical => '|',
            Symbol::Horizontal => '-',
            Symbol::NorthEast => 'L',
            Symbol::NorthWest => 'J',
            Symbol::SouthWest => '7',
            Symbol::SouthEast => 'F',
            Symbol::Ground => '.',
            Symbol::Start => 'S',
        }
    }

    /// Directions this symbol has an opening towards.
    pub fn openings(self) -> &'static [Direction] {
        use Direction::*;
        match self {
            Symbol::Vertical => &[North, South],
            Symbol::Horizontal => &[West, East],
            Symbol::NorthEast => &[North, East],
            Symbol::NorthWest => &[North, West],
            Symbol::SouthWest => &[South, West],
            Symbol::SouthEast => &[South, East],
            Symbol::Ground => &[],
            Symbol::Start => &Direction::ALL,
        }
    }

    pub fn opens(self, direction: Direction) -> bool {
        self.openings().contains(&direction)
    }

    /// The pipe piece opening towards exactly `a` and `b`, in either order.
    pub fn joining(a: Direction, b: Direction) -> Option<Self> {
        Self::PIPES
            .into_iter()
            .find(|pipe| a != b && pipe.opens(a) && pipe.opens(b))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position one step towards `direction`, if it doesn't underflow.
    /// The upper bound is the grid's to check.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let Position { row, col } = self;
        match direction {
            Direction::North => Some(Self::new(row.checked_sub(1)?, col)),
            Direction::South => Some(Self::new(row + 1, col)),
            Direction::West => Some(Self::new(row, col.checked_sub(1)?)),
            Direction::East => Some(Self::new(row, col + 1)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    symbol: Symbol,
    position: Position,
    distance: Option<u32>,
    origin: bool,
}

impl Cell {
    fn new(symbol: Symbol, position: Position) -> Self {
        Self {
            symbol,
            position,
            distance: None,
            origin: false,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Steps along the loop from the start, once traced.
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// Still the raw start marker, or the start after resolution.
    pub fn is_start(&self) -> bool {
        self.origin || self.symbol == Symbol::Start
    }

    /// Whether the start marker on this cell has been replaced by its pipe.
    pub fn is_origin(&self) -> bool {
        self.origin
    }

    pub fn is_ground(&self) -> bool {
        self.symbol == Symbol::Ground
    }

    /// Part of the traced loop.
    pub fn is_boundary(&self) -> bool {
        self.distance.is_some()
    }

    pub(crate) fn set_distance(&mut self, distance: u32) {
        self.distance = Some(distance);
    }

    pub(crate) fn clear_distance(&mut self) {
        self.distance = None;
    }

    pub(crate) fn resolve_origin(&mut self, symbol: Symbol) {
        self.symbol = symbol;
        self.origin = true;
    }
}

/// Rectangular arena of cells, row-major, addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn start_cell(&self) -> &Cell {
        &self.cells[self.index(self.start)]
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.contains(position)
            .then(|| &self.cells[self.index(position)])
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if self.contains(position) {
            let index = self.index(position);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    pub(crate) fn start_cell_mut(&mut self) -> &mut Cell {
        let index = self.index(self.start);
        &mut self.cells[index]
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    /// In-bounds neighbour of `position` towards `direction`.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        position
            .step(direction)
            .filter(|&next| self.contains(next))
    }

    /// The neighbour towards `direction` if both cells open towards each other.
    pub fn link(&self, position: Position, direction: Direction) -> Option<Position> {
        let here = self.get(position)?;
        let next = self.neighbor(position, direction)?;
        let there = self.get(next)?;
        (here.symbol.opens(direction) && there.symbol.opens(direction.opposite())).then_some(next)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub(crate) fn clear_distances(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_distance);
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.width + position.col
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut start = None;

        for (row, line) in input.trim().lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let found = line.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }

            for (col, c) in line.chars().enumerate() {
                let at = Position::new(row, col);
                let symbol =
                    Symbol::from_char(c).ok_or(GridParseError::UnknownSymbol { symbol: c, at })?;
                if symbol == Symbol::Start {
                    if let Some(first) = start {
                        return Err(GridParseError::MultipleStarts { first, second: at });
                    }
                    start = Some(at);
                }
                cells.push(Cell::new(symbol, at));
            }
        }

        let width = match width {
            Some(width) if width > 0 => width,
            _ => return Err(GridParseError::Empty),
        };
        let start = start.ok_or(GridParseError::MissingStart)?;

        Ok(Grid {
            width,
            height: cells.len() / width,
            cells,
            start,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol)?;
            }
        }
        Ok(())
    }
}
