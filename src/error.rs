use thiserror::Error;

/// Why a piece of text is not a decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The input was empty.
    Empty,
    /// The input was a lone `+` or `-`.
    SignOnly,
    /// `ch` at byte offset `index` is not a decimal digit.
    InvalidDigit { ch: char, index: usize },
}

impl std::fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatErrorKind::Empty => f.write_str("empty input"),
            FormatErrorKind::SignOnly => f.write_str("sign without digits"),
            FormatErrorKind::InvalidDigit { ch, index } => {
                write!(f, "invalid digit {:?} at index {}", ch, index)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid decimal integer: {0}")]
    Format(FormatErrorKind),
    #[error("I/O error while reading a token: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The format error kind, if this is a format error.
    pub fn format_kind(&self) -> Option<FormatErrorKind> {
        match self {
            Error::Format(kind) => Some(*kind),
            Error::Io(_) => None,
        }
    }
}

impl From<FormatErrorKind> for Error {
    fn from(kind: FormatErrorKind) -> Self {
        Error::Format(kind)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
