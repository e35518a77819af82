use std::cmp::Ordering;
use std::fmt;

/// One value of a dataset row.
///
/// Stages never parse cell text: filtering and export use the `Display`
/// form, sorting uses [`compare_cells`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Sort rank of the cell kind; values only compare within one rank.
    fn rank(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Bool(_) => 1,
            Cell::Int(_) | Cell::Float(_) => 2,
            Cell::Text(_) => 3,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Bool(v) => write!(f, "{v}"),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// Natural ordering of two cells.
///
/// Kinds rank `Empty < Bool < number < Text`; within a kind, numbers compare
/// numerically (ints and floats together, exactly), bools compare
/// `false < true` and text compares lexicographically. A missing cell sorts
/// below every present cell. This is a total order, so it is safe to hand
/// to `sort_by` for any mix of kinds.
pub fn compare_cells(a: Option<&Cell>, b: Option<&Cell>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Cell::Empty, Cell::Empty) => Ordering::Equal,
            (Cell::Bool(x), Cell::Bool(y)) => x.cmp(y),
            (Cell::Int(x), Cell::Int(y)) => x.cmp(y),
            (Cell::Float(x), Cell::Float(y)) => compare_floats(*x, *y),
            (Cell::Int(x), Cell::Float(y)) => compare_int_float(*x, *y),
            (Cell::Float(x), Cell::Int(y)) => compare_int_float(*y, *x).reverse(),
            (Cell::Text(x), Cell::Text(y)) => x.cmp(y),
            _ => a.rank().cmp(&b.rank()),
        },
    }
}

/// Numeric order with `-0.0 == 0.0`; NaNs fall back to `total_cmp`, which
/// puts positive NaN above every number and negative NaN below.
fn compare_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
}

/// Exact comparison of an integer with a float, without rounding the
/// integer through `f64`.
fn compare_int_float(int: i64, float: f64) -> Ordering {
    // 2^63, the first float past i64::MAX.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if float >= UPPER {
        return Ordering::Less;
    }
    if float < -UPPER {
        return Ordering::Greater;
    }

    let whole = float.trunc();
    // In range, so the cast is exact.
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => {
            if float > whole {
                Ordering::Less
            } else if float < whole {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_display_without_trailing_zero() {
        assert_eq!(Cell::Float(30.0).to_string(), "30");
        assert_eq!(Cell::Float(2.5).to_string(), "2.5");
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn numbers_compare_numerically_across_kinds() {
        let nine = Cell::Int(9);
        let ten = Cell::Float(10.0);
        assert_eq!(compare_cells(Some(&nine), Some(&ten)), Ordering::Less);
        assert_eq!(
            compare_cells(Some(&Cell::Int(10)), Some(&ten)),
            Ordering::Equal
        );
    }

    #[test]
    fn text_compares_lexicographically() {
        let nine = Cell::text("9");
        let ten = Cell::text("10");
        assert_eq!(compare_cells(Some(&nine), Some(&ten)), Ordering::Greater);
    }

    #[test]
    fn kinds_rank_before_values() {
        let two = Cell::Int(2);
        let ten = Cell::Int(10);
        let fifteen = Cell::text("15");
        assert_eq!(compare_cells(Some(&two), Some(&ten)), Ordering::Less);
        assert_eq!(compare_cells(Some(&ten), Some(&fifteen)), Ordering::Less);
        assert_eq!(compare_cells(Some(&two), Some(&fifteen)), Ordering::Less);
        assert_eq!(
            compare_cells(Some(&Cell::Bool(true)), Some(&Cell::Int(-5))),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(Some(&Cell::Empty), Some(&Cell::Bool(false))),
            Ordering::Less
        );
    }

    #[test]
    fn large_ints_compare_exactly_against_floats() {
        let big = (1_i64 << 53) + 1;
        let float = Cell::Float((1_i64 << 53) as f64);
        assert_eq!(compare_cells(Some(&Cell::Int(big)), Some(&float)), Ordering::Greater);
        assert_eq!(compare_cells(Some(&float), Some(&Cell::Int(big))), Ordering::Less);
        assert_eq!(
            compare_cells(Some(&Cell::Int(i64::MAX)), Some(&Cell::Float(9.3e18))),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(Some(&Cell::Int(-3)), Some(&Cell::Float(-2.5))),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(Some(&Cell::Int(0)), Some(&Cell::Float(-0.0))),
            Ordering::Equal
        );
    }

    #[test]
    fn nan_sorts_consistently() {
        let nan = Cell::Float(f64::NAN);
        assert_eq!(compare_cells(Some(&Cell::Int(1)), Some(&nan)), Ordering::Less);
        assert_eq!(compare_cells(Some(&nan), Some(&Cell::Float(1.0))), Ordering::Greater);
        assert_eq!(compare_cells(Some(&nan), Some(&nan)), Ordering::Equal);
    }

    #[test]
    fn missing_cell_is_least() {
        let empty = Cell::Empty;
        assert_eq!(compare_cells(None, Some(&empty)), Ordering::Less);
        assert_eq!(compare_cells(Some(&empty), None), Ordering::Greater);
        assert_eq!(compare_cells(None, None), Ordering::Equal);
    }
}
