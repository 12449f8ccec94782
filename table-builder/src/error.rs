use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// An option handed to a builder has an unsupported value.
    InvalidArgument(String),
    /// A builder method was called without its render closure.
    MissingCallback,
    /// A date pattern is not a valid strftime-like format.
    InvalidDateFormat { pattern: String },
    /// The calendar grid could not be computed.
    Calendar(month_grid::Error),
}

impl From<month_grid::Error> for Error {
    fn from(err: month_grid::Error) -> Self {
        Self::Calendar(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(desc) => write!(f, "invalid argument: {desc}"),
            Self::MissingCallback => write!(f, "missing render closure"),
            Self::InvalidDateFormat { pattern } => write!(f, "invalid date format `{pattern}`"),
            Self::Calendar(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Calendar(err) => Some(err),
            _ => None,
        }
    }
}
