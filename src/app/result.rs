//! This module provides result and error types for the main binary `yule_calc`.

use std::fmt;
use std::io;
use std::result;
use yule;

/// A result type for functions in the yule_calc app
pub type Result<T> = result::Result<T, Error>;

/// A wrapper to catch both conversion errors and I/O errors
pub enum Error {

    /// Error from the Yule parameter conversions
    ConversionError(yule::Error),

    /// I/O error
    IOError(io::Error),
}

/// AppError can be created from an I/O error
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IOError(e)
    }
}

/// AppError can be created from a Yule conversion error
impl From<yule::Error> for Error {
    fn from(e: yule::Error) -> Self {
        Error::ConversionError(e)
    }
}

/// Displaying an AppError shows what type of error it wraps and the message of the wrapped error
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (err_type, msg): (&str, &fmt::Display) = match self {
            Error::IOError(e)         => ("I/O error",        e),
            Error::ConversionError(e) => ("Conversion error", e),
        };
        write!(f, "{}: {}", err_type, msg)
    }
}
