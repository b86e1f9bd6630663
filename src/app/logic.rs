//! This module implements the application logic of `yule_calc`, that is, the code that feeds the
//! parameter provided on the command line into the Yule conversions in order to compute the
//! final result.

use app;
use yule::YuleParameters;

/// Derive the full Yule parameter set from the parameter provided on the command line
pub fn derive_parameters(cfg: &app::Config) -> app::Result<YuleParameters> {
    let params = YuleParameters::from_known(cfg.parameter, cfg.value, cfg.ntips)?;
    Ok(params)
}
