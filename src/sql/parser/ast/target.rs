/// The column list of a `SELECT`.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// `*`: every column, in table declaration order.
    All,

    /// Explicit column names, in the order given.
    Columns(Vec<String>),
}
