//! SQLite dialect

use bitflags::bitflags;
use uncased::UncasedStr;

/// Statement classification by leading keyword
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// `ALTER TABLE`
    Alter,
    /// `ANALYZE`
    Analyze,
    /// `ATTACH`
    Attach,
    /// `BEGIN`
    Begin,
    /// `COMMIT` / `END`
    Commit,
    /// `CREATE ...`
    Create,
    /// `DELETE`
    Delete,
    /// `DETACH`
    Detach,
    /// `DROP ...`
    Drop,
    /// `EXPLAIN` / `EXPLAIN QUERY PLAN`
    Explain,
    /// `INSERT`
    Insert,
    /// `PRAGMA`
    Pragma,
    /// `REINDEX`
    Reindex,
    /// `RELEASE`
    Release,
    /// `REPLACE`
    Replace,
    /// `ROLLBACK`
    Rollback,
    /// `SAVEPOINT`
    Savepoint,
    /// `SELECT`
    Select,
    /// `UPDATE`
    Update,
    /// `VACUUM`
    Vacuum,
    /// `VALUES`
    Values,
    /// `WITH ...` (the body decides what the statement does)
    With,
    /// Unknown leading keyword
    Other,
}

include!(concat!(env!("OUT_DIR"), "/keywords.rs"));
pub(crate) const MAX_KEYWORD_LEN: usize = 9;

bitflags! {
    /// Statement properties
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StatementFlags: u8 {
        /// Like `sqlite3_stmt_readonly` (`PRAGMA` excluded: it may assign)
        const READONLY = 0x01;
        /// Transaction control
        const TRANSACTION = 0x02;
        /// Schema change
        const SCHEMA = 0x04;
    }
}

impl StatementKind {
    /// Properties of statements of this kind
    pub fn flags(self) -> StatementFlags {
        match self {
            StatementKind::Begin
            | StatementKind::Commit
            | StatementKind::Release
            | StatementKind::Rollback
            | StatementKind::Savepoint => StatementFlags::READONLY | StatementFlags::TRANSACTION,
            StatementKind::Attach
            | StatementKind::Detach
            | StatementKind::Explain
            | StatementKind::Reindex
            | StatementKind::Select
            | StatementKind::Values => StatementFlags::READONLY,
            StatementKind::Alter | StatementKind::Create | StatementKind::Drop => {
                StatementFlags::SCHEMA
            }
            _ => StatementFlags::empty(),
        }
    }
}

/// Check if `b` can continue an identifier
pub fn is_identifier_continue(b: u8) -> bool {
    b == b'$' || b.is_ascii_digit() || is_identifier_start(b)
}

/// Check if `b` can start an identifier
pub fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_uppercase() || b == b'_' || b.is_ascii_lowercase() || b > b'\x7F'
}

/// Check if `word` is a statement keyword
pub fn keyword_kind(word: &str) -> Option<StatementKind> {
    if word.len() > MAX_KEYWORD_LEN {
        return None;
    }
    KEYWORDS.get(UncasedStr::new(word)).copied()
}

/// Classify a statement by its leading keyword
pub fn statement_kind(sql: &str) -> StatementKind {
    let sql = sql.trim_start();
    let end = sql
        .bytes()
        .position(|b| !is_identifier_continue(b))
        .unwrap_or(sql.len());
    keyword_kind(&sql[..end]).unwrap_or(StatementKind::Other)
}
