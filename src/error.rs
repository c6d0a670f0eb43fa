use std::error;
use std::fmt;
use std::io;
use std::result;

/// Errors raised while constructing or dumping a `SkipMap`.
#[derive(Debug)]
pub enum Error {
    /// The tuning parameters cannot produce a usable map.
    InvalidConfiguration(String),
    /// The dump target could not be opened or written.
    IOError(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidConfiguration(_) => None,
            Error::IOError(error) => Some(error),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(reason) => write!(f, "invalid configuration: {}", reason),
            Error::IOError(error) => write!(f, "{}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
