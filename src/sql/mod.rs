pub(crate) mod executor;
pub(crate) mod filter;
pub(crate) mod formatter;
pub(crate) mod lexer;
pub(crate) mod parser;
pub(crate) mod result;
