//! SQLite3 script splitter
//!
//! Decomposes a SQL script into individually executable statements,
//! ignoring comments and the `;` found inside quoted literals:
//!
//! ```rust
//! use sqlite3_script::SqlScript;
//!
//! let script = SqlScript::new(
//!     "CREATE TABLE t (x TEXT); -- schema
//!      INSERT INTO t VALUES ('a;b'); /* data */",
//! );
//! assert_eq!(script.len(), 2);
//! assert_eq!(script[1], "INSERT INTO t VALUES ('a;b')");
//! ```
//!
//! Statements are not compiled nor validated: running them is left to the
//! caller's `SQLite` connection.
#![warn(missing_docs)]

pub mod dialect;
mod error;
pub mod lexer;
pub mod script;
pub mod value;

pub use error::{Error, Result};
pub use script::{Bundle, SqlScript, Statement};
pub use value::Value;
