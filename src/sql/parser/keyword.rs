use strum::{Display, EnumString};

/// SQL keywords recognized by the parser.
///
/// These keywords are case-insensitive and reserved for SQL syntax. Column
/// types are deliberately not keywords; they are read as identifiers and
/// resolved through [`DataType`](crate::DataType).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum Keyword {
    Create,
    Table,
    Drop,
    Alter,
    Index,

    Show,
    Tables,
    Describe,
    Desc,

    Select,
    Insert,
    Update,
    Delete,
    Where,
    From,
    Into,
    Values,
    Set,

    Join,
    On,

    Primary,
    Key,
    Null,
}
