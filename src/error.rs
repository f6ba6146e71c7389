//! Error types for grid loading and searching.

use std::fmt;

use crate::Point;

/// Why a grid could not be loaded.
///
/// Rows and columns are zero-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input had no rows, or its rows had no cells.
    Empty,

    /// A row's length differs from the first row's.
    Ragged {
        /// The offending row.
        row: usize,
        /// Number of cells in the first row.
        expected: usize,
        /// Number of cells in the offending row.
        found: usize,
    },

    /// A token is neither the wall marker nor a positive integer.
    InvalidToken {
        /// Row of the token.
        row: usize,
        /// Column of the token.
        column: usize,
        /// The token as written.
        token: String,
        /// What is wrong with it.
        kind: TokenErrorKind,
    },
}

/// What is wrong with an [`InvalidToken`](ParseError::InvalidToken).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// An integer that is zero or negative.
    NonPositive,
    /// Not a plain decimal integer. A leading `+` is not accepted.
    NotInteger,
    /// A positive integer that does not fit in a [`Cost`](crate::Cost).
    TooLarge,
}

impl ParseError {
    /// Short code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "EMPTY_GRID",
            Self::Ragged { .. } => "RAGGED_GRID",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
        }
    }

    /// Where the problem is, as `(row, column)`. `None` for an empty grid.
    ///
    /// For a ragged row, the column is where that row stops matching the first row.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Empty => None,
            Self::Ragged {
                row,
                expected,
                found,
            } => Some((row, expected.min(found))),
            Self::InvalidToken { row, column, .. } => Some((row, column)),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} like the first row"
            ),
            Self::InvalidToken {
                row,
                column,
                token,
                kind,
            } => {
                let problem = match kind {
                    TokenErrorKind::NonPositive => "cost must be greater than 0",
                    TokenErrorKind::NotInteger => "not an integer or wall marker",
                    TokenErrorKind::TooLarge => "cost does not fit in usize",
                };
                write!(f, "invalid cell {token:?} at ({row}, {column}): {problem}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Which end of a query an [`InvalidEndpoint`](SearchError::InvalidEndpoint) refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The start point.
    Start,
    /// The goal point.
    Goal,
}

/// Why an endpoint was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointReason {
    /// The point lies outside the grid.
    OutOfBounds,
    /// The point is a wall.
    Wall,
}

/// Why a search produced no result.
///
/// Running out of frontier is not an error. It is reported as
/// [`SearchOutcome::NotFound`](crate::SearchOutcome::NotFound).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The start or goal cannot be stood on. The start is checked first.
    InvalidEndpoint {
        /// Start or goal.
        endpoint: Endpoint,
        /// The rejected point.
        point: Point,
        /// Out of bounds or a wall.
        reason: EndpointReason,
    },

    /// A predecessor was missing from the closed set during reconstruction.
    ///
    /// This means the closed set did not lead back to a source, which is a bug rather than a
    /// property of the input.
    BrokenChain {
        /// The predecessor that could not be found.
        missing: Point,
    },

    /// The search reached [`SearchConfig::max_expansions`](crate::SearchConfig::max_expansions)
    /// without a result.
    ExpansionLimit {
        /// The configured limit.
        limit: usize,
    },

    /// The accumulated cost of reaching a cell does not fit in a [`Cost`](crate::Cost).
    CostOverflow {
        /// The cell whose cost could not be added.
        at: Point,
    },
}

impl SearchError {
    /// Short code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint { .. } => "INVALID_ENDPOINT",
            Self::BrokenChain { .. } => "BROKEN_CHAIN",
            Self::ExpansionLimit { .. } => "EXPANSION_LIMIT",
            Self::CostOverflow { .. } => "COST_OVERFLOW",
        }
    }

    /// `true` if this error points at a bug in the crate, not at the caller's input.
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::BrokenChain { .. })
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint {
                endpoint,
                point,
                reason,
            } => {
                let endpoint = match endpoint {
                    Endpoint::Start => "start",
                    Endpoint::Goal => "goal",
                };
                let reason = match reason {
                    EndpointReason::OutOfBounds => "is out of bounds",
                    EndpointReason::Wall => "is a wall",
                };
                write!(f, "{endpoint} {point:?} {reason}")
            }
            Self::BrokenChain { missing } => {
                write!(f, "predecessor {missing:?} is missing from the closed set")
            }
            Self::ExpansionLimit { limit } => {
                write!(f, "search gave up after {limit} expansions")
            }
            Self::CostOverflow { at } => {
                write!(f, "cost of entering {at:?} overflows usize")
            }
        }
    }
}

impl std::error::Error for SearchError {}
