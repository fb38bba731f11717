use std::borrow::Cow;

use crate::core::types::Value;

/// A literal value in SQL
#[derive(Debug, Clone, PartialEq)]
pub enum Literal<'src> {
    Int64(i64),
    Float64(f64),
    Text(Cow<'src, str>),
    Null,
}

impl Literal<'_> {
    pub fn into_value(self) -> Value {
        match self {
            Literal::Int64(i) => Value::Int64(i),
            Literal::Float64(f) => Value::Float64(f),
            Literal::Text(s) => Value::Text(s.into_owned()),
            Literal::Null => Value::Null,
        }
    }
}
