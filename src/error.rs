use std::{error::Error as StdError, fmt, io};

pub type Result<T> = ::std::result::Result<T, Error>;

pub enum Error {
    Canonicalization(String, io::Error),
    Config(String),
    Io(io::Error),
    Walk(walkdir::Error),
}

impl StdError for Error {}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Config(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Walk(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} error: {}",
            match self {
                Error::Canonicalization(_, _) => "Path",
                Error::Config(_) => "Config",
                Error::Io(_) => "I/O",
                Error::Walk(_) => "Walk",
            },
            match self {
                Error::Canonicalization(path, err) => {
                    format!("couldn't canonicalize '{}':\n{}", path, err)
                }
                Error::Config(err) => err.clone(),
                Error::Io(err) => format!("{}", err),
                Error::Walk(err) => format!("{}", err),
            }
        )
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
