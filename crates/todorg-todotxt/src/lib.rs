//! todo.txt parsing for the todorg converter
//!
//! This crate owns the todo.txt side of the conversion: it parses task
//! lines into structured [`TodoRecord`] entities that the converter core
//! consumes as-is. The converter never re-parses task syntax itself.

pub mod models;
pub mod parser;

pub use models::TodoRecord;
pub use parser::{from_file, parse_line, parse_str};
