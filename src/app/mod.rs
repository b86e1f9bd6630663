//! This module encapsulates all the wrapper code to bundle the Yule parameter conversions into a
//! complete binary.

mod config;
mod io;
mod logic;
mod result;

pub use self::config::Config;
pub use self::io::write_output;
pub use self::logic::derive_parameters;
pub use self::result::{Result, Error};
