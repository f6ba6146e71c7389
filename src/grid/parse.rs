use super::Cell;
use crate::{GridConfig, ParseError, TokenErrorKind};

/// Splits text into rows of tokens. Blank lines are skipped.
pub(super) fn text_rows(text: &str) -> impl Iterator<Item = std::str::SplitWhitespace<'_>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::split_whitespace)
}

/// Returns the cells in row-major order, with the row and column counts.
pub(super) fn parse_rows<R, T, S>(
    rows: R,
    config: &GridConfig,
) -> Result<(Vec<Cell>, usize, usize), ParseError>
where
    R: IntoIterator<Item = T>,
    T: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cells = vec![];
    let mut columns = None;
    let mut row_count = 0;

    for (row, tokens) in rows.into_iter().enumerate() {
        let tokens: Vec<S> = tokens.into_iter().collect();
        let expected = *columns.get_or_insert(tokens.len());
        if expected == 0 {
            return Err(ParseError::Empty);
        }

        // tokens before the point where a ragged row diverges are still checked first
        for (column, token) in tokens.iter().take(expected).enumerate() {
            cells.push(parse_token(token.as_ref(), config).map_err(|kind| {
                ParseError::InvalidToken {
                    row,
                    column,
                    token: token.as_ref().to_owned(),
                    kind,
                }
            })?);
        }
        if tokens.len() != expected {
            return Err(ParseError::Ragged {
                row,
                expected,
                found: tokens.len(),
            });
        }
        row_count += 1;
    }

    match columns {
        Some(columns) => Ok((cells, row_count, columns)),
        None => Err(ParseError::Empty),
    }
}

fn parse_token(token: &str, config: &GridConfig) -> Result<Cell, TokenErrorKind> {
    if token == config.wall_marker {
        return Ok(Cell::Wall);
    }

    // plain decimal digits with an optional '-', no '+'
    let (negative, digits) = match token.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TokenErrorKind::NotInteger);
    }
    if negative {
        return Err(TokenErrorKind::NonPositive);
    }

    match digits.parse() {
        Ok(0) => Err(TokenErrorKind::NonPositive),
        Ok(cost) => Ok(Cell::Open(cost)),
        Err(_) => Err(TokenErrorKind::TooLarge),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    fn token_error(text: &str) -> (usize, usize, TokenErrorKind) {
        match text.parse::<Grid>() {
            Err(ParseError::InvalidToken {
                row, column, kind, ..
            }) => (row, column, kind),
            other => panic!("expected a token error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(token_error("1 1\n1 0"), (1, 1, TokenErrorKind::NonPositive));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(token_error("1 -5 1"), (0, 1, TokenErrorKind::NonPositive));
        assert_eq!(token_error("-0"), (0, 0, TokenErrorKind::NonPositive));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(token_error("1 x"), (0, 1, TokenErrorKind::NotInteger));
        assert_eq!(token_error("2.5"), (0, 0, TokenErrorKind::NotInteger));
        assert_eq!(token_error("1\n#"), (1, 0, TokenErrorKind::NotInteger));
        assert_eq!(token_error("1 -"), (0, 1, TokenErrorKind::NotInteger));
    }

    #[test]
    fn rejects_explicit_plus_sign() {
        assert_eq!(token_error("1 +5"), (0, 1, TokenErrorKind::NotInteger));
    }

    #[test]
    fn rejects_costs_beyond_usize() {
        assert_eq!(
            token_error("1 99999999999999999999999"),
            (0, 1, TokenErrorKind::TooLarge)
        );
        // negative stays non-positive however long it is
        assert_eq!(
            token_error("-99999999999999999999999"),
            (0, 0, TokenErrorKind::NonPositive)
        );
        let max = usize::MAX.to_string();
        assert_eq!(max.parse::<Grid>().unwrap().cost_at((0, 0)), Some(usize::MAX));
    }

    #[test]
    fn reports_the_token() {
        let err = "1 abc".parse::<Grid>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidToken { ref token, .. } if token == "abc"));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            "1 1 1\n1 1".parse::<Grid>(),
            Err(ParseError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "1 1\n1 1\n1 1 1".parse::<Grid>(),
            Err(ParseError::Ragged {
                row: 2,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn bad_token_before_divergence_wins() {
        assert_eq!(token_error("1 1 1\nq 1"), (1, 0, TokenErrorKind::NotInteger));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<Grid>(), Err(ParseError::Empty));
        assert_eq!("  \n\n ".parse::<Grid>(), Err(ParseError::Empty));
        let no_rows: [[&str; 0]; 0] = [];
        assert_eq!(Grid::load(no_rows), Err(ParseError::Empty));
        let empty_row: [[&str; 0]; 1] = [[]];
        assert_eq!(Grid::load(empty_row), Err(ParseError::Empty));
    }

    #[test]
    fn indented_text() {
        let grid: Grid = "
            8 9 Z
            6 9 Z
        "
        .parse()
        .unwrap();
        assert_eq!((grid.rows(), grid.columns()), (2, 3));
        assert!(grid.is_wall((1, 2)));
    }

    #[test]
    fn custom_wall_marker() {
        let config = GridConfig::with_wall_marker("#");
        let grid = Grid::parse_with("1 #\n# 2", &config).unwrap();
        assert!(grid.is_wall((0, 1)));
        assert_eq!(grid.cost_at((1, 1)), Some(2));
        assert!(Grid::parse_with("1 Z", &config).is_err());
    }

    #[test]
    fn load_owned_rows() {
        let rows = vec![vec![String::from("7"), String::from("Z")]];
        let grid = Grid::load(rows).unwrap();
        assert_eq!(grid.cost_at((0, 0)), Some(7));
    }
}
