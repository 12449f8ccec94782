use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// The month number is not in `1..=12`.
    InvalidMonth { month: u32 },
    /// The padded grid for this month can't be represented by chrono.
    OutOfRange { year: i32, month: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth { month } => write!(f, "invalid month {month}: expected 1 to 12"),
            Self::OutOfRange { year, month } => {
                write!(f, "calendar grid for {year}-{month:02} is out of supported range")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidMonth { month: 13 }.to_string(),
            "invalid month 13: expected 1 to 12",
        );

        assert_eq!(
            Error::OutOfRange { year: 262143, month: 12 }.to_string(),
            "calendar grid for 262143-12 is out of supported range",
        );
    }
}
