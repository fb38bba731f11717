pub mod database;
pub mod shared;
pub mod table;
