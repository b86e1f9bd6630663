//! This module contains all the code for writing the result of the computation back to screen or
//! to a file.

use std::fs;
use std::io;
use std::io::Write;
use app;
use yule::YuleParameters;

/// Write the result to a file or stdout
pub fn write_output(
    file_name: Option<&str>,
    ntips: usize,
    params: &YuleParameters,
) -> app::Result<()> {
    let mut file: Box<io::Write> = match file_name {
        Some(file_name) => Box::new(fs::File::create(file_name)?),
        None            => Box::new(io::stdout()),
    };
    let output = format_output(ntips, params);
    write!(file, "{}", output)?;
    Ok(())
}

/// Format the derived parameters, one line per field
fn format_output(ntips: usize, params: &YuleParameters) -> String {
    format!(
        "ntips = {}\nrate = {}\nheight = {}\nlength = {}\n",
        ntips, params.rate, params.height, params.length)
}
