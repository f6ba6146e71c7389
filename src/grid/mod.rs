use std::fmt;
use std::str::FromStr;

use crate::neighbors::{MooreNeighborhood, Neighborhood};
use crate::{Cost, GridConfig, ParseError, Point, TokenErrorKind};

mod parse;

/// One cell of a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// A passable cell. Entering it costs the contained amount, which is always > 0.
    Open(Cost),
    /// An impassable cell.
    Wall,
}

impl Cell {
    /// The cost of entering this cell, or `None` for a wall.
    pub fn cost(self) -> Option<Cost> {
        match self {
            Cell::Open(cost) => Some(cost),
            Cell::Wall => None,
        }
    }

    /// `true` for [`Cell::Wall`].
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// An immutable rectangle of [`Cell`]s, addressed by `(row, column)`.
///
/// A grid always has at least one cell, and every open cell has a positive cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
    neighborhood: MooreNeighborhood,
}

impl Grid {
    /// Builds a grid from rows of tokens, using the default [`GridConfig`].
    ///
    /// Each token is either the wall marker (`"Z"`) or a positive integer.
    ///
    /// ## Examples
    /// ```
    /// use uniform_cost::{Cell, Grid};
    ///
    /// let grid = Grid::load([["1", "Z"], ["3", "4"]]).unwrap();
    /// assert_eq!(grid.cell((0, 1)), Some(Cell::Wall));
    /// assert_eq!(grid.cost_at((1, 0)), Some(3));
    /// ```
    ///
    /// ## Errors
    /// A [`ParseError`] naming the first problem in reading order.
    pub fn load<R, T, S>(rows: R) -> Result<Grid, ParseError>
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Grid::load_with(rows, &GridConfig::default())
    }

    /// Like [`load`](Grid::load), with a custom wall marker.
    pub fn load_with<R, T, S>(rows: R, config: &GridConfig) -> Result<Grid, ParseError>
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (cells, rows, columns) = parse::parse_rows(rows, config)?;
        Ok(Grid::from_parts(cells, rows, columns))
    }

    /// Parses whitespace-separated text, one row per non-blank line.
    pub fn parse_with(text: &str, config: &GridConfig) -> Result<Grid, ParseError> {
        Grid::load_with(parse::text_rows(text), config)
    }

    /// Builds a grid from already-typed cells.
    ///
    /// ## Errors
    /// The same shape errors as [`load`](Grid::load), and
    /// [`TokenErrorKind::NonPositive`] for an `Open(0)` cell.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid, ParseError> {
        let row_count = rows.len();
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(ParseError::Empty);
        }

        let mut cells = Vec::with_capacity(row_count * columns);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != columns {
                return Err(ParseError::Ragged {
                    row,
                    expected: columns,
                    found: line.len(),
                });
            }
            for (column, cell) in line.into_iter().enumerate() {
                if cell == Cell::Open(0) {
                    return Err(ParseError::InvalidToken {
                        row,
                        column,
                        token: String::from("0"),
                        kind: TokenErrorKind::NonPositive,
                    });
                }
                cells.push(cell);
            }
        }

        Ok(Grid::from_parts(cells, row_count, columns))
    }

    fn from_parts(cells: Vec<Cell>, rows: usize, columns: usize) -> Grid {
        debug_assert_eq!(cells.len(), rows * columns);
        Grid {
            cells,
            rows,
            columns,
            neighborhood: MooreNeighborhood::new(rows, columns),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells, walls included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` if `point` lies inside the grid.
    pub fn in_bounds(&self, (row, column): Point) -> bool {
        row < self.rows && column < self.columns
    }

    /// The cell at `point`, or `None` if it is out of bounds.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        if self.in_bounds(point) {
            Some(self.cells[point.0 * self.columns + point.1])
        } else {
            None
        }
    }

    /// The cost of entering `point`, or `None` if it is out of bounds or a wall.
    pub fn cost_at(&self, point: Point) -> Option<Cost> {
        self.cell(point).and_then(Cell::cost)
    }

    /// `true` if `point` is a wall. Out-of-bounds points are not walls.
    pub fn is_wall(&self, point: Point) -> bool {
        self.cell(point).map_or(false, Cell::is_wall)
    }

    /// The in-bounds cells among the 8 around `point`, walls included.
    pub fn neighbors(&self, point: Point) -> Vec<Point> {
        let mut target = Vec::with_capacity(8);
        self.get_all_neighbors(point, &mut target);
        target
    }

    /// Appends the neighbors of `point` to `target`, for callers that reuse a buffer.
    pub(crate) fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        self.neighborhood.get_all_neighbors(point, target);
    }

    /// Writes the grid in the format [`parse_with`](Grid::parse_with) reads under `config`.
    ///
    /// ```
    /// use uniform_cost::{Grid, GridConfig};
    ///
    /// let config = GridConfig::with_wall_marker("#");
    /// let grid = Grid::parse_with("1 #\n# 2", &config).unwrap();
    /// assert_eq!(grid.display_with(&config).to_string(), "1 #\n# 2");
    /// ```
    pub fn display_with<'g>(&'g self, config: &'g GridConfig) -> GridDisplay<'g> {
        GridDisplay {
            grid: self,
            wall_marker: &config.wall_marker,
        }
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / columns, i % columns), cell))
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse_with(s, &GridConfig::default())
    }
}

/// Writes the grid in the format [`FromStr`] reads, with `Z` for walls.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display = GridDisplay {
            grid: self,
            wall_marker: "Z",
        };
        fmt::Display::fmt(&display, f)
    }
}

/// A [`Grid`] written with a chosen wall marker. Returned by [`Grid::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct GridDisplay<'g> {
    grid: &'g Grid,
    wall_marker: &'g str,
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.grid.cells.chunks(self.grid.columns).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (column, cell) in line.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Open(cost) => write!(f, "{cost}")?,
                    Cell::Wall => f.write_str(self.wall_marker)?,
                }
            }
        }
        Ok(())
    }
}
