//! Comment / literal aware tokenizer for SQL scripts and the passes built on it.
//!
//! Lexical rules follow the [`SQLite` tokenizer](http://www.sqlite.org/src/artifact?ci=trunk&filename=src/tokenize.c)
//! for comments and quoted literals only: everything else is opaque `Code`.
//! Unlike `SQLite`, an unterminated comment or literal is not an error, it is
//! implicitly closed at end of input.
use memchr::{memchr, memmem};
use std::iter::FusedIterator;

use crate::lexer::{Scanner, Splitter};


/// Scanner state in which the bytes of a token were consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Plain SQL text
    Code,
    /// `--` up to (excluding) the next line-feed
    LineComment,
    /// `/*` up to (including) the next `*/`
    BlockComment,
    /// `'...'` string literal, `''` escapes a quote
    SingleQuoted,
    /// `"..."` identifier, `""` escapes a quote
    DoubleQuoted,
    /// Top-level `;`
    Semi,
}

impl TokenType {
    /// `true` for line and block comments
    pub fn is_comment(self) -> bool {
        matches!(self, TokenType::LineComment | TokenType::BlockComment)
    }

    /// `true` for single and double quoted literals
    pub fn is_quoted(self) -> bool {
        matches!(self, TokenType::SingleQuoted | TokenType::DoubleQuoted)
    }
}

/// Token with its type
pub type Token<'input> = (&'input [u8], TokenType);

/// SQL script splitter.
///
/// Every token starts and ends in `Code` state so the tokenizer holds no
/// state between tokens.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer {
    comments: bool,
}

impl Tokenizer {
    /// Constructor
    pub fn new() -> Tokenizer {
        Tokenizer { comments: true }
    }

    /// `--` and `/*` are scanned as `Code`: only quotes and `;` are
    /// recognized.
    pub fn without_comments() -> Tokenizer {
        Tokenizer { comments: false }
    }
}

impl Default for Tokenizer {
    fn default() -> Tokenizer {
        Tokenizer::new()
    }
}

impl Splitter for Tokenizer {
    type TokenType = TokenType;

    fn split<'input>(&mut self, data: &'input [u8]) -> (Option<Token<'input>>, usize) {
        debug_assert!(!data.is_empty());
        let (token_type, len) = match data[0] {
            b'-' if self.comments && data.get(1) == Some(&b'-') => {
                (TokenType::LineComment, line_comment(data))
            }
            b'/' if self.comments && data.get(1) == Some(&b'*') => {
                (TokenType::BlockComment, block_comment(data))
            }
            b'\'' => (TokenType::SingleQuoted, literal(data, b'\'')),
            b'"' => (TokenType::DoubleQuoted, literal(data, b'"')),
            b';' => (TokenType::Semi, 1),
            _ => (TokenType::Code, code(data, self.comments)),
        };
        (Some((&data[..len], token_type)), len)
    }
}

fn line_comment(data: &[u8]) -> usize {
    debug_assert!(data.starts_with(b"--"));
    // the line-feed belongs to the code that follows
    match memchr(b'\n', &data[2..]) {
        Some(i) => i + 2,
        None => data.len(),
    }
}

fn block_comment(data: &[u8]) -> usize {
    debug_assert!(data.starts_with(b"/*"));
    // `/*/` does not close the comment, hence the search from 2
    match memmem::find(&data[2..], b"*/") {
        Some(i) => i + 4,
        None => data.len(),
    }
}

fn literal(data: &[u8], quote: u8) -> usize {
    debug_assert_eq!(data[0], quote);
    let mut i = 1;
    while let Some(j) = memchr(quote, &data[i..]) {
        let end = i + j + 1;
        if data.get(end) == Some(&quote) {
            // escaped quote
            i = end + 1;
            continue;
        }
        return end;
    }
    data.len()
}

fn code(data: &[u8], comments: bool) -> usize {
    let mut i = 1;
    while i < data.len() {
        match data[i] {
            b'\'' | b'"' | b';' => break,
            b'-' if comments && data.get(i + 1) == Some(&b'-') => break,
            b'/' if comments && data.get(i + 1) == Some(&b'*') => break,
            _ => i += 1,
        }
    }
    i
}

/// Iterator over the tokens of a SQL text.
///
/// Token boundaries are always ASCII bytes so each token is a `str` slice of
/// the input.
#[derive(Debug)]
pub struct Tokens<'input> {
    input: &'input str,
    scanner: Scanner<'input, Tokenizer>,
}

impl<'input> Tokens<'input> {
    /// Start tokenizing `input` in `Code` state
    pub fn new(input: &'input str) -> Tokens<'input> {
        Tokens::with_tokenizer(input, Tokenizer::new())
    }

    /// Tokenize `input` with `tokenizer`
    pub fn with_tokenizer(input: &'input str, tokenizer: Tokenizer) -> Tokens<'input> {
        Tokens {
            input,
            scanner: Scanner::new(input.as_bytes(), tokenizer),
        }
    }

    /// Byte offset of the next token
    pub fn offset(&self) -> usize {
        self.scanner.offset()
    }

    /// Line number of the next token
    pub fn line(&self) -> u64 {
        self.scanner.line()
    }
}

impl<'input> Iterator for Tokens<'input> {
    type Item = (&'input str, TokenType);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.scanner.offset();
        let (_, token_type) = self.scanner.scan()?;
        Some((&self.input[start..self.scanner.offset()], token_type))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Remove line and block comments.
///
/// Comments are replaced by nothing. The line-feed terminating a line comment
/// is kept. Quoted literals are copied verbatim, including any comment
/// markers they contain.
pub fn strip_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    for (text, _) in Tokens::new(sql).filter(|(_, token_type)| !token_type.is_comment()) {
        out.push_str(text);
    }
    out
}

/// Remove whitespace-only lines.
///
/// Remaining lines are kept unmodified, in order, joined by `\n`.
pub fn remove_blank_lines(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    for line in sql.split('\n').filter(|line| !line.trim().is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

/// Iterator over the statements of a comment-free SQL text.
///
/// Statements are cut at each `;` outside of quoted literals (and at end of
/// input), trimmed, and skipped when empty. `--` and `/*` left behind by
/// comment removal (`-/**/-`) are plain text here.
#[derive(Debug)]
pub struct Statements<'input> {
    input: &'input str,
    tokens: Tokens<'input>,
    /// start of the current segment
    start: usize,
}

impl<'input> Statements<'input> {
    /// Split `input`
    pub fn new(input: &'input str) -> Statements<'input> {
        Statements {
            input,
            tokens: Tokens::with_tokenizer(input, Tokenizer::without_comments()),
            start: 0,
        }
    }
}

impl<'input> Iterator for Statements<'input> {
    type Item = &'input str;

    fn next(&mut self) -> Option<&'input str> {
        loop {
            let segment = match self.tokens.next() {
                Some((_, TokenType::Semi)) => {
                    let end = self.tokens.offset() - 1;
                    let segment = &self.input[self.start..end];
                    self.start = self.tokens.offset();
                    segment
                }
                Some(_) => continue,
                None if self.start < self.input.len() => {
                    let segment = &self.input[self.start..];
                    self.start = self.input.len();
                    segment
                }
                None => return None,
            };
            let stmt = segment.trim();
            if !stmt.is_empty() {
                return Some(stmt);
            }
        }
    }
}

impl FusedIterator for Statements<'_> {}

/// Split a comment-free SQL text into trimmed, non-empty statements.
pub fn split_statements(sql: &str) -> Vec<&str> {
    Statements::new(sql).collect()
}
