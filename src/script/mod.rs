//! SQL scripts as ordered, immutable sequences of statements
use log::debug;
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::io::Read;
use std::ops::{Deref, Index};
use std::path::Path;
use std::slice;
use std::str::{self, FromStr};

use crate::dialect::{statement_kind, StatementFlags, StatementKind};
use crate::error::{Error, Result};
use crate::lexer::sql::{remove_blank_lines, strip_comments, Statements};

mod bundle;

pub use bundle::Bundle;

/// One SQL command of a script.
///
/// Never empty, never surrounded by whitespace and never contains a
/// top-level `;`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Statement(String);

impl Statement {
    /// SQL text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classification by leading keyword
    pub fn kind(&self) -> StatementKind {
        statement_kind(&self.0)
    }

    /// Properties derived from the leading keyword
    pub fn flags(&self) -> StatementFlags {
        self.kind().flags()
    }

    /// Like `sqlite3_stmt_readonly` but more limited
    pub fn readonly(&self) -> bool {
        self.flags().contains(StatementFlags::READONLY)
    }
}

impl Deref for Statement {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Statement {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Statement {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Statement> for String {
    fn from(stmt: Statement) -> String {
        stmt.0
    }
}

/// SQL script: statements in source order.
///
/// Comments are removed and the text is split on each `;` found outside of
/// quoted literals. Construction from text never fails: unterminated comments
/// and literals extend to the end of the script.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SqlScript {
    statements: Vec<Statement>,
}

impl SqlScript {
    /// Parse `sql`
    pub fn new(sql: &str) -> SqlScript {
        let text = remove_blank_lines(&strip_comments(sql));
        let statements: Vec<_> = Statements::new(&text)
            .map(|stmt| Statement(stmt.to_owned()))
            .collect();
        debug!(target: "script", "{} statement(s) in {} byte(s)", statements.len(), sql.len());
        SqlScript { statements }
    }

    /// Read and parse the script file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SqlScript> {
        let path = path.as_ref();
        debug!(target: "script", "reading {}", path.display());
        let bytes = fs::read(path).map_err(|err| Error::Unreadable(path.to_path_buf(), err))?;
        let sql = str::from_utf8(&bytes)
            .map_err(|err| Error::InvalidUtf8(Some(path.to_path_buf()), err))?;
        Ok(SqlScript::new(sql))
    }

    /// Read and parse a script from `reader` until EOF
    pub fn from_reader<R: Read>(mut reader: R) -> Result<SqlScript> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        SqlScript::from_bytes(&bytes)
    }

    /// Parse UTF-8 encoded `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Result<SqlScript> {
        let sql = str::from_utf8(bytes).map_err(|err| Error::InvalidUtf8(None, err))?;
        Ok(SqlScript::new(sql))
    }

    /// Read and parse the script named `name` in `bundle`
    /// (by default, the directory of the running executable).
    ///
    /// Return `Ok(None)` when there is no such resource.
    pub fn from_resource(
        name: &str,
        extension: Option<&str>,
        bundle: Option<&Bundle>,
    ) -> Result<Option<SqlScript>> {
        let main = if bundle.is_none() { Bundle::main() } else { None };
        let Some(bundle) = bundle.or(main.as_ref()) else {
            return Ok(None);
        };
        match bundle.path_for_resource(name, extension) {
            Some(path) => SqlScript::from_file(path).map(Some),
            None => Ok(None),
        }
    }

    /// Number of statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// `true` when the script has no statement
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statement at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    /// Statements from first to last
    pub fn iter(&self) -> slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// All statements
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl Index<usize> for SqlScript {
    type Output = Statement;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn index(&self, index: usize) -> &Statement {
        &self.statements[index]
    }
}

impl<'a> IntoIterator for &'a SqlScript {
    type Item = &'a Statement;
    type IntoIter = slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for SqlScript {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl From<&str> for SqlScript {
    fn from(sql: &str) -> Self {
        SqlScript::new(sql)
    }
}

impl From<String> for SqlScript {
    fn from(sql: String) -> Self {
        SqlScript::new(&sql)
    }
}

impl FromStr for SqlScript {
    type Err = Infallible;

    fn from_str(sql: &str) -> std::result::Result<Self, Infallible> {
        Ok(SqlScript::new(sql))
    }
}

#[cfg(test)]
mod tests {
    use super::SqlScript;
    use crate::dialect::StatementKind;

    #[test]
    fn parse() {
        let script = SqlScript::new("BEGIN; INSERT INTO t VALUES (1); COMMIT;");
        assert_eq!(script.len(), 3);
        assert_eq!(script[0], "BEGIN");
        assert_eq!(script.get(1).map(|s| s.as_str()), Some("INSERT INTO t VALUES (1)"));
        assert_eq!(script.get(3), None);
        assert_eq!(script[2].kind(), StatementKind::Commit);
    }

    #[test]
    fn statement_kinds() {
        let script: SqlScript = "select 1; PRAGMA user_version = 2; delete from t".parse().unwrap();
        let kinds: Vec<_> = script.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![StatementKind::Select, StatementKind::Pragma, StatementKind::Delete]
        );
        assert!(script[0].readonly());
        assert!(!script[1].readonly());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let script = SqlScript::new("SELECT 1");
        let _ = &script[1];
    }

    #[test]
    fn default_is_empty() {
        let script = SqlScript::default();
        assert!(script.is_empty());
        assert_eq!(script.iter().count(), 0);
    }

    #[test]
    fn iteration_restarts() {
        let script = SqlScript::from("SELECT 1; SELECT 2");
        let first: Vec<&str> = script.iter().map(|s| s.as_str()).collect();
        let second: Vec<&str> = (&script).into_iter().map(|s| s.as_str()).collect();
        assert_eq!(first, second);
        let owned: Vec<String> = script.into_iter().map(String::from).collect();
        assert_eq!(owned, vec!["SELECT 1", "SELECT 2"]);
    }
}
