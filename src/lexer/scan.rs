//! Adaptation/port of [Go scanner](http://tip.golang.org/pkg/bufio/#Scanner).

use log::debug;
use memchr::{memchr_iter, memrchr};

use std::fmt;

/// The `(&[u8], TokenType)` is the token.
/// And the `usize` is the amount of bytes to consume.
type SplitResult<'input, TokenType> = (Option<(&'input [u8], TokenType)>, usize);

/// Split function used to tokenize the input
pub trait Splitter: Sized {
    /// Token classification
    type TokenType;

    /// The arguments are an initial substring of the remaining unprocessed
    /// data.
    ///
    /// Returning `(None, amt)` with `amt > 0` skips `amt` bytes.
    /// Returning `(None, 0)` stops the scan.
    ///
    /// The function is never called with an empty data slice.
    fn split<'input>(&mut self, data: &'input [u8]) -> SplitResult<'input, Self::TokenType>;
}

/// Successive calls to the `scan` method will step through the 'tokens'
/// of an input, skipping the bytes between the tokens.
///
/// Scanning stops at the end of the input.
pub struct Scanner<'input, S: Splitter> {
    /// The remaining input.
    input: &'input [u8],
    /// The function to tokenize the input.
    splitter: S,
    /// current line number
    line: u64,
    /// current column number (byte offset, not char offset)
    column: usize,
    /// number of bytes consumed so far
    offset: usize,
}

impl<'input, S: Splitter> Scanner<'input, S> {
    /// Create a scanner positioned at the start of `input`
    pub fn new(input: &'input [u8], splitter: S) -> Scanner<'input, S> {
        Scanner {
            input,
            splitter,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Current line number
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Current column number (byte offset, not char offset)
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of bytes consumed since the start of the input
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Splitter accessor
    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    /// Advance the Scanner to next token.
    /// Return the token as a byte slice.
    /// Return `None` when the end of the input is reached.
    pub fn scan(&mut self) -> Option<(&'input [u8], S::TokenType)> {
        debug!(target: "scanner", "scan(line: {}, column: {})", self.line, self.column);
        // Loop until we have a token.
        while !self.input.is_empty() {
            let data = self.input;
            match self.splitter.split(data) {
                (None, 0) => break,
                (None, amt) => {
                    // Ignore/skip this data
                    self.consume(amt);
                }
                (tok, amt) => {
                    self.consume(amt);
                    return tok;
                }
            }
        }
        // We cannot generate a token with what we are holding.
        // we are done.
        None
    }

    /// Consume `amt` bytes of the buffer.
    fn consume(&mut self, amt: usize) {
        debug!(target: "scanner", "consume({})", amt);
        debug_assert!(amt <= self.input.len());
        let consumed = &self.input[..amt];
        if let Some(last) = memrchr(b'\n', consumed) {
            self.line += memchr_iter(b'\n', consumed).count() as u64;
            self.column = amt - last;
        } else {
            self.column += amt;
        }
        self.offset += amt;
        self.input = &self.input[amt..];
    }
}

impl<S: Splitter> fmt::Debug for Scanner<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("input", &self.input)
            .field("line", &self.line)
            .field("column", &self.column)
            .field("offset", &self.offset)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{Scanner, Splitter};

    /// One token per line, line-feed excluded.
    struct Lines;

    impl Splitter for Lines {
        type TokenType = ();

        fn split<'input>(&mut self, data: &'input [u8]) -> (Option<(&'input [u8], ())>, usize) {
            match memchr::memchr(b'\n', data) {
                Some(0) => (None, 1),
                Some(i) => (Some((&data[..i], ())), i),
                None => (Some((data, ())), data.len()),
            }
        }
    }

    #[test]
    fn positions() {
        let mut s = Scanner::new(b"ab\n\ncd\nef", Lines);
        assert_eq!((1, 1, 0), (s.line(), s.column(), s.offset()));
        assert_eq!(Some((&b"ab"[..], ())), s.scan());
        assert_eq!((1, 3, 2), (s.line(), s.column(), s.offset()));
        assert_eq!(Some((&b"cd"[..], ())), s.scan());
        assert_eq!((3, 3, 6), (s.line(), s.column(), s.offset()));
        assert_eq!(Some((&b"ef"[..], ())), s.scan());
        assert_eq!((4, 3, 9), (s.line(), s.column(), s.offset()));
        assert_eq!(None, s.scan());
    }

    #[test]
    fn empty_input() {
        let mut s = Scanner::new(b"", Lines);
        assert_eq!(None, s.scan());
        assert_eq!(0, s.offset());
    }
}
