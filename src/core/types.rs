use strum::{Display, EnumString};

/// Column types understood by IMS DB.
///
/// Types are descriptive only: inserted values are never checked against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DataType {
    /// Whole numbers, declared as `INT` or `INTEGER`.
    #[strum(to_string = "INT", serialize = "INTEGER")]
    Int,

    /// Free text. A declared length (`VARCHAR(255)`) is accepted and ignored.
    Varchar,

    /// Decimal numbers.
    Float,
}

/// A value held in a row.
///
/// # Example
///
/// ```
/// use ims_db::Value;
///
/// assert_eq!(Value::Int64(1).to_string(), "1");
/// assert_eq!(Value::Float64(999.99).to_string(), "999.99");
/// assert_eq!(Value::Float64(1.0).to_string(), "1.0");
/// assert_eq!(Value::Null.to_string(), "NULL");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Int64(i64),

    /// A 64-bit floating point number.
    Float64(f64),

    /// A UTF-8 text string.
    Text(String),

    /// The null marker: the column was never given a value.
    Null,
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int64(i) => write!(f, "{i}"),
            // Integral floats keep their fractional part so `1.0` never reads as `1`
            Value::Float64(fl) if fl.is_finite() && fl.fract() == 0.0 && fl.abs() < 1e16 => {
                write!(f, "{fl:.1}")
            }
            Value::Float64(fl) if fl.is_finite() && fl.abs() >= 1e16 => write_exponent(f, *fl),
            Value::Float64(fl) => write!(f, "{fl}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => write!(f, "NULL"),
        }
    }
}

/// Writes `fl` as `<mantissa>e<sign><exponent>`, with at least two exponent digits.
fn write_exponent(f: &mut std::fmt::Formatter<'_>, fl: f64) -> std::fmt::Result {
    let scientific = format!("{fl:e}");

    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&scientific),
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}
