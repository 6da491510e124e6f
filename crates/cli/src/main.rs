use std::process::ExitCode;

use bidmatch_cli::logging;
use bidmatch_core::config::{AppConfig, LoadOptions};

fn main() -> ExitCode {
    // Commands load and validate config themselves; logging falls back to
    // defaults when the config cannot be read this early.
    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    logging::init(&config);

    bidmatch_cli::run()
}
