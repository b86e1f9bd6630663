extern crate yule_calc;

use yule_calc::app;

/// Main function
fn main() {
    let cfg = app::Config::new();

    let params = match app::derive_parameters(&cfg) {
        Ok(params) => params,
        Err(e)     => {
            eprintln!("{}", e);
            std::process::exit(1);
        },
    };

    if let Err(e) = app::write_output(cfg.output.as_ref().map(|s| &s[..]), cfg.ntips, &params) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
