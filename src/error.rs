use std::fmt;

/// Result type for strict argument lookups
pub type Result<T> = std::result::Result<T, Error>;

/// An error returned by the strict accessors of [`ArgTable`](crate::ArgTable)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required flag was not provided
    MissingRequired { name: String },

    /// A flag was given bare where a value was needed
    MissingValue { name: String },

    /// Failed to interpret a value
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingRequired { name } => {
                write!(f, "required argument '{}' was not provided", name)
            }
            Error::MissingValue { name } => {
                write!(f, "argument '{}' requires a value", name)
            }
            Error::InvalidValue {
                name,
                value,
                expected,
            } => {
                write!(
                    f,
                    "invalid value '{}' for '{}': expected {}",
                    value, name, expected
                )
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Name of the flag the error refers to
    pub fn name(&self) -> &str {
        match self {
            Error::MissingRequired { name }
            | Error::MissingValue { name }
            | Error::InvalidValue { name, .. } => name,
        }
    }

    /// Exit the program, printing the error to stderr with exit code 1.
    pub fn exit(&self) -> ! {
        eprintln!("error: {}", self);
        std::process::exit(1);
    }
}
