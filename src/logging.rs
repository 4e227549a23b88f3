// src/logging.rs
// Diagnostic logging. Results and user-facing errors go to stdout/stderr
// directly; these logs only appear with --verbose (or RUST_LOG).

use log::LevelFilter;

pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    // Only show structured logs in verbose mode
    if verbose && !quiet {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    }
}

pub fn init_logger(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);

    // try_init: a second call (e.g. from tests) is not an error worth dying for
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    log::debug!("Logger initialized with level: {level:?}");
}
