use crate::{consts::MAX_MONTH, prelude::*};

/// A (year, month, day) triple or an arithmetic result that is not a
/// representable calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RangeError {
    #[display(fmt = "Invalid year: {} (outside the representable range)", "_0")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[display(fmt = "Date arithmetic left the representable range")]
    Overflow,
}

impl std::error::Error for RangeError {}

/// Text that could not be read as a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Empty date string")]
    EmptyInput,

    /// The text does not match any date layout the culture accepts.
    #[error("String '{input}' was not recognized as a valid date for culture '{culture}'")]
    Unrecognized { input: String, culture: &'static str },

    /// The fields were read but do not form a calendar date.
    #[error("String '{input}' is not a valid calendar date")]
    InvalidDate {
        input: String,
        #[source]
        source: RangeError,
    },

    #[error("Unknown culture: {0}")]
    UnknownCulture(String),
}

/// Error type for every fallible `Date` operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// A dynamic comparison operand was neither a date nor a timestamp.
    #[error("Object must be a Date or a timestamp, found {0}")]
    TypeMismatch(&'static str),

    #[error("Required argument '{0}' was not supplied")]
    NullArgument(&'static str),

    #[error("Cannot convert {from} to {to}")]
    Unsupported { from: &'static str, to: &'static str },
}

/// Unwraps a required argument, naming it in the error when absent.
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T, DateError> {
    value.ok_or(DateError::NullArgument(name))
}
