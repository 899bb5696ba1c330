use env_logger::Builder;
use log::{LevelFilter, debug};

/// Sets up the process-wide logger. `verbose` forces debug output even in
/// release builds; `RUST_LOG` still applies on top.
pub fn init_logging(verbose: bool) {
    Builder::from_default_env()
        .filter_level(LevelFilter::Off)
        .filter_module("audio_engine", level_for(verbose))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    debug!("Logging system initialized");
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }
    #[cfg(debug_assertions)]
    let default_level = LevelFilter::Debug;
    #[cfg(not(debug_assertions))]
    let default_level = LevelFilter::Info;
    default_level
}
