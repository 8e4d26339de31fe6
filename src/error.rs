use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

/// Script source errors
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// I/O Error while reading a script from a stream
    Io(io::Error),
    /// Script file cannot be opened or read
    Unreadable(PathBuf, io::Error),
    /// Script content is not UTF-8 text
    InvalidUtf8(Option<PathBuf>, Utf8Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(ref err) => err.fmt(f),
            Self::Unreadable(path, err) => write!(f, "cannot read {}: {err}", path.display()),
            Self::InvalidUtf8(Some(path), err) => {
                write!(f, "{} is not valid UTF-8: {err}", path.display())
            }
            Self::InvalidUtf8(None, err) => write!(f, "script is not valid UTF-8: {err}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(err) | Self::Unreadable(_, err) => Some(err),
            Self::InvalidUtf8(_, err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result type for script construction
pub type Result<T> = std::result::Result<T, Error>;
