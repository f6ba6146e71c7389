//! Options for grid loading and searching.

use crate::Point;

/// Options for turning text into a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// The token that marks an impassable cell.
    ///
    /// Default: `"Z"`
    #[cfg_attr(feature = "serde", serde(default = "default_wall_marker"))]
    pub wall_marker: String,
}

fn default_wall_marker() -> String {
    String::from("Z")
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            wall_marker: default_wall_marker(),
        }
    }
}

impl GridConfig {
    /// Uses `marker` as the wall token instead of `"Z"`.
    pub fn with_wall_marker(marker: impl Into<String>) -> Self {
        Self {
            wall_marker: marker.into(),
        }
    }
}

/// Options for a single search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Expected number of cells the search will touch, used to pre-size its maps.
    ///
    /// `0` uses the number of cells in the grid.
    ///
    /// Default: `0`
    #[cfg_attr(feature = "serde", serde(default))]
    pub size_hint: usize,

    /// Give up after this many expansions.
    ///
    /// A search that hits the limit fails with
    /// [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit). `None` runs until the
    /// goal is reached or the frontier is exhausted.
    ///
    /// Default: `None`
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Limits the search to `limit` expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Sets the capacity hint for the search's internal maps.
    pub fn with_size_hint(mut self, size_hint: usize) -> Self {
        self.size_hint = size_hint;
        self
    }
}

/// The axis order a caller's coordinates use.
///
/// The search always works in `(row, column)`. Input in another order is converted once,
/// before it reaches the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axes {
    /// `(row, column)`, i.e. `(y, x)`.
    #[default]
    RowColumn,
    /// `(column, row)`, i.e. `(x, y)`.
    ColumnRow,
}

impl Axes {
    /// Converts a point given in this order into `(row, column)`.
    pub fn to_canonical(self, point: Point) -> Point {
        match self {
            Axes::RowColumn => point,
            Axes::ColumnRow => (point.1, point.0),
        }
    }

    /// Converts a `(row, column)` point into this order.
    pub fn from_canonical(self, point: Point) -> Point {
        // swapping is its own inverse
        self.to_canonical(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(GridConfig::default().wall_marker, "Z");
        let config = SearchConfig::default();
        assert_eq!(config.size_hint, 0);
        assert_eq!(config.max_expansions, None);
    }

    #[test]
    fn builders() {
        let config = SearchConfig::default()
            .with_max_expansions(10)
            .with_size_hint(64);
        assert_eq!(config.max_expansions, Some(10));
        assert_eq!(config.size_hint, 64);
        assert_eq!(GridConfig::with_wall_marker("#").wall_marker, "#");
    }

    #[test]
    fn axes() {
        assert_eq!(Axes::RowColumn.to_canonical((6, 5)), (6, 5));
        assert_eq!(Axes::ColumnRow.to_canonical((6, 5)), (5, 6));
        assert_eq!(Axes::ColumnRow.from_canonical((5, 6)), (6, 5));
    }
}
