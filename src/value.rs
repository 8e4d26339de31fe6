//! Scalar values and their SQL literal representation.
use std::fmt::{self, Display, Formatter, Write};

/// A value of one of the `SQLite` storage classes.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Binary blob
    Blob(Vec<u8>),
    /// SQL NULL
    Null,
}

impl Value {
    /// Text of this value as a literal in a SQL statement
    ///
    /// Same as `to_string()`.
    pub fn to_sql_literal(&self) -> String {
        self.to_string()
    }
}

/// Renders the value as `SQLite` literal text.
///
/// * integers in decimal,
/// * reals with the shortest representation that parses back to the same
///   `f64`, always with a fractional part or an exponent so that `SQLite`
///   reads them as REAL. NaN is rendered as `NULL` and infinities as
///   `9e999` / `-9e999`,
/// * texts single-quoted with quotes doubled,
/// * blobs as `X'...'` with uppercase hexadecimal digits.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) if r.is_nan() => f.write_str("NULL"),
            Value::Real(r) if r.is_infinite() => {
                f.write_str(if r.is_sign_negative() { "-9e999" } else { "9e999" })
            }
            Value::Real(r) => write!(f, "{r:?}"),
            Value::Text(s) => {
                f.write_char('\'')?;
                for (i, part) in s.split('\'').enumerate() {
                    if i > 0 {
                        f.write_str("''")?;
                    }
                    f.write_str(part)?;
                }
                f.write_char('\'')
            }
            Value::Blob(b) => {
                f.write_str("X'")?;
                for byte in b {
                    write!(f, "{byte:02X}")?;
                }
                f.write_char('\'')
            }
            Value::Null => f.write_str("NULL"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Self::Blob(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn integer() {
        assert_eq!(Value::Integer(42).to_sql_literal(), "42");
        assert_eq!(Value::Integer(-100).to_sql_literal(), "-100");
        assert_eq!(Value::Integer(i64::MIN).to_sql_literal(), "-9223372036854775808");
        assert_eq!(Value::Integer(1_000_000).to_sql_literal(), "1000000");
    }

    #[test]
    fn real() {
        assert_eq!(Value::Real(1.0).to_sql_literal(), "1.0");
        assert_eq!(Value::Real(0.1).to_sql_literal(), "0.1");
        assert_eq!(Value::Real(-2.5).to_sql_literal(), "-2.5");
        assert_eq!(Value::Real(1e300).to_sql_literal(), "1e300");
    }

    #[test]
    fn real_round_trip() {
        for r in [0.1 + 0.2, 1.0 / 3.0, f64::MAX, f64::MIN_POSITIVE, -1.5e-7, 123_456_789.0] {
            let literal = Value::Real(r).to_sql_literal();
            assert_eq!(literal.parse::<f64>().unwrap(), r, "{literal}");
        }
    }

    #[test]
    fn real_non_finite() {
        assert_eq!(Value::Real(f64::NAN).to_sql_literal(), "NULL");
        assert_eq!(Value::Real(f64::INFINITY).to_sql_literal(), "9e999");
        assert_eq!(Value::Real(f64::NEG_INFINITY).to_sql_literal(), "-9e999");
    }

    #[test]
    fn text() {
        assert_eq!(Value::from("O'Reilly").to_sql_literal(), "'O''Reilly'");
        assert_eq!(Value::from("").to_sql_literal(), "''");
        assert_eq!(Value::from("'").to_sql_literal(), "''''");
        assert_eq!(Value::from("a;b -- c").to_sql_literal(), "'a;b -- c'");
    }

    #[test]
    fn blob() {
        assert_eq!(
            Value::Blob(vec![0xDE, 0xAD, 0xBE, 0xEF]).to_sql_literal(),
            "X'DEADBEEF'"
        );
        assert_eq!(Value::from(&[0x00_u8, 0xAB, 0xCD][..]).to_sql_literal(), "X'00ABCD'");
        assert_eq!(Value::Blob(vec![]).to_sql_literal(), "X''");
    }

    #[test]
    fn null() {
        assert_eq!(Value::Null.to_sql_literal(), "NULL");
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(7)), Value::Integer(7));
    }

    #[test]
    fn display_in_statement() {
        let sql = format!(
            "INSERT INTO t VALUES ({}, {}, {})",
            Value::from(1),
            Value::from("it's"),
            Value::Null
        );
        assert_eq!(sql, "INSERT INTO t VALUES (1, 'it''s', NULL)");
    }
}
