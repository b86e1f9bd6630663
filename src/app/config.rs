//! This module contains all the command line parsing code and provides a `Config` struct that
//! encapsulates all the parsed configuration options.

use clap::{App, Arg};
use yule::ParameterKind;

/// A structure to hold all the configuration parameters
pub struct Config {

    /// The parameter whose value is provided on the command line
    pub parameter: ParameterKind,

    /// The value of the provided parameter
    pub value: f64,

    /// The number of terminal taxa
    pub ntips: usize,

    /// The name of the output file
    pub output: Option<String>,
}

impl Config {

    /// Create a new config object from the command line arguments
    pub fn new() -> Self {
        // Define the acceptable arguments
        let args = [
            Arg::with_name("value")
                .required(true)
                .takes_value(true)
                .value_name("X")
                .validator(validate_parameter_value)
                .help("value of the provided parameter")
                .long_help("value of the provided parameter; a finite floating-point number"),
            Arg::with_name("ntips")
                .required(true)
                .takes_value(true)
                .value_name("N")
                .validator(validate_ntips)
                .help("number of terminal taxa")
                .long_help(
"number of terminal taxa; an integer of at least 2, since a tree with fewer than two tips has no \
branching events"),
            Arg::with_name("parameter")
                .required(false)
                .takes_value(true)
                .value_name("parameter")
                .short("k")
                .long("parameter")
                .default_value("rate")
                .validator(validate_parameter)
                .help("the parameter provided")
                .long_help(
"the parameter provided. Options include:\n\
`rate`: the per-branch Yule birth rate\n\
`height`: the expected root height of the tree\n\
`length`: the expected total length of the tree\n\
You provide one of these three parameters along with the number of terminals, and this program \
returns the other two accordingly."),
            Arg::with_name("output")
                .required(false)
                .takes_value(true)
                .value_name("output")
                .short("o")
                .long("output")
                .help("output file")
                .long_help("output file; receives the derived parameters (stdout if absent)"),
        ];

        // Parse the arguments
        let args = App::new(crate_name!())
            .version(crate_version!())
            .about("Compute the parameters of a Yule tree from the one parameter provided")
            .long_about(
"Compute the relationships among the parameters of a Yule (pure-birth) tree model. Given one of \
the per-branch birth rate, the expected root height, or the expected total tree length, along \
with the number of terminal taxa, derive the other two parameters.")
            .args(&args)
            .get_matches();

        let parameter: ParameterKind = args.value_of("parameter").unwrap().parse().unwrap();
        let value: f64               = args.value_of("value").unwrap().parse().unwrap();
        let ntips: usize             = args.value_of("ntips").unwrap().parse().unwrap();
        let output                   = args.value_of("output").map(|s| s.to_string());

        Self {
            parameter,
            value,
            ntips,
            output,
        }
    }
}

/// Check that the provided parameter kind is valid
fn validate_parameter(arg: String) -> Result<(), String> {
    match arg.parse::<ParameterKind>() {
        Ok(_) => Ok(()),
        Err(e) => Err(format!("{}", e)),
    }
}

/// Check that the provided parameter value is a finite number
fn validate_parameter_value(arg: String) -> Result<(), String> {
    match arg.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(()),
        _ => Err(String::from("The parameter value must be a finite number")),
    }
}

/// Check that the provided number of taxa is valid
fn validate_ntips(arg: String) -> Result<(), String> {
    match arg.parse::<usize>() {
        Ok(x) if x >= 2 => Ok(()),
        _ => Err(String::from(
            "The number of taxa must be an integer greater than or equal to 2",
        )),
    }
}
