//! This module implements the closed-form parameter conversions of the Yule (pure-birth) model.
//! Under the Yule process, lineages split at a constant per-branch birth rate and never go
//! extinct, so for a fixed number of terminal taxa the birth rate, the expected root height, and
//! the expected total tree length determine each other.  Any one of the three parameters can be
//! converted into the other two without simulating trees.
//!
//! The height conversions accumulate a harmonic sum and therefore round; the length conversions
//! are single divisions and do not.  Tests that invert a height should compare with a tolerance,
//! tests that invert a length can compare exactly.


use std::fmt;
use std::result;
use std::str::FromStr;


/// A result type for the Yule parameter conversions
pub type Result<T> = result::Result<T, Error>;


/// An error produced by the Yule parameter conversions
#[derive(Clone, Debug, PartialEq)]
pub enum Error {

    /// A parameter kind that is not one of `rate`, `height`, or `length`
    InvalidParameterKind(String),

    /// A conversion whose divisor is zero, so its result is undefined
    UndefinedResult(&'static str),
}

/// Displaying an Error shows which input made the conversion impossible
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidParameterKind(kind) =>
                write!(f, "parameter option {} is not valid", kind),
            Error::UndefinedResult(divisor) =>
                write!(f, "the result is undefined because {} is zero", divisor),
        }
    }
}


/// The Yule model parameter whose value is provided by the caller and from which the other two
/// parameters are derived
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParameterKind {

    /// The per-branch birth rate
    Rate,

    /// The expected root height of the tree
    Height,

    /// The expected total length of the tree
    Length,
}

/// A parameter kind can be parsed from its lowercase command line spelling.  Any other string
/// fails before any arithmetic is attempted.
impl FromStr for ParameterKind {

    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rate"   => Ok(ParameterKind::Rate),
            "height" => Ok(ParameterKind::Height),
            "length" => Ok(ParameterKind::Length),
            _        => Err(Error::InvalidParameterKind(s.to_string())),
        }
    }
}

/// Displaying a parameter kind yields its command line spelling
impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ParameterKind::Rate   => "rate",
            ParameterKind::Height => "height",
            ParameterKind::Length => "length",
        };
        write!(f, "{}", name)
    }
}


/// The three parameters of a Yule tree with a fixed number of terminal taxa.  A value is only
/// ever constructed whole by `from_known`, after every conversion has succeeded, so a partially
/// populated parameter set cannot exist.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YuleParameters {

    /// The per-branch birth rate
    pub rate: f64,

    /// The expected root height of the tree
    pub height: f64,

    /// The expected total length of the tree
    pub length: f64,
}

impl YuleParameters {

    /// Derive the full parameter set from the one known parameter.  The remaining two parameters
    /// are computed with the conversions below; if any conversion fails, the whole derivation
    /// fails and no partial result is surfaced.
    pub fn from_known(kind: ParameterKind, value: f64, ntips: usize) -> Result<YuleParameters> {
        match kind {

            ParameterKind::Rate => {
                let rate = value;
                Ok(YuleParameters {
                    rate,
                    height: expected_tree_height(ntips, rate)?,
                    length: expected_tree_length(ntips, rate)?,
                })
            },

            ParameterKind::Height => {
                let rate = birth_rate_from_expected_height(ntips, value)?;
                Ok(YuleParameters {
                    rate,
                    height: value,
                    length: expected_tree_length(ntips, rate)?,
                })
            },

            ParameterKind::Length => {
                let rate = birth_rate_from_expected_length(ntips, value)?;
                Ok(YuleParameters {
                    rate,
                    height: expected_tree_height(ntips, rate)?,
                    length: value,
                })
            },
        }
    }
}


/// Compute the expected root height of a Yule tree with `ntips` terminal taxa growing at the
/// given per-branch birth rate.  The height is the sum of the expected waiting times between
/// successive speciation events, 1/(i * birth_rate) for i in 2..=ntips.  With fewer than two taxa
/// the sum is empty and the height is zero.
pub fn expected_tree_height(ntips: usize, birth_rate: f64) -> Result<f64> {
    if birth_rate == 0.0 {
        return Err(Error::UndefinedResult("the birth rate"));
    }
    let mut height = 0.0;
    for i in 2..=ntips {
        height += 1.0 / (i as f64 * birth_rate);
    }
    Ok(height)
}


/// Recover the per-branch birth rate from the expected root height of a Yule tree with `ntips`
/// terminal taxa.  This inverts `expected_tree_height` up to rounding in the harmonic sum.  The
/// divisor is the product of the height and the taxon count, so both a zero height and a zero
/// taxon count leave the rate undefined.
pub fn birth_rate_from_expected_height(ntips: usize, expected_height: f64) -> Result<f64> {
    let denominator = expected_height * ntips as f64;
    if denominator == 0.0 {
        return Err(Error::UndefinedResult("the expected height times the number of taxa"));
    }
    let mut tip_sum = 0.0;
    for i in 2..=ntips {
        tip_sum += ntips as f64 / i as f64;
    }
    Ok(tip_sum / denominator)
}


/// Compute the expected total branch length of a Yule tree with `ntips` terminal taxa growing at
/// the given per-branch birth rate, (ntips - 1) / birth_rate.
pub fn expected_tree_length(ntips: usize, birth_rate: f64) -> Result<f64> {
    if birth_rate == 0.0 {
        return Err(Error::UndefinedResult("the birth rate"));
    }
    Ok((ntips as f64 - 1.0) / birth_rate)
}


/// Recover the per-branch birth rate from the expected total branch length of a Yule tree with
/// `ntips` terminal taxa.  This is the exact algebraic inverse of `expected_tree_length`.
pub fn birth_rate_from_expected_length(ntips: usize, expected_length: f64) -> Result<f64> {
    if expected_length == 0.0 {
        return Err(Error::UndefinedResult("the expected length"));
    }
    Ok((ntips as f64 - 1.0) / expected_length)
}
