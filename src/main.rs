use anyhow::Result;
use log::{debug, info};

use audio_engine::cli::parse_args;
use audio_engine::config::{Config, Mode};
use audio_engine::error::Error;
use audio_engine::logging::init_logging;

fn main() -> Result<()> {
    let config = match parse_args(std::env::args_os()) {
        Ok(config) => config,
        // Help and version go to stdout with status 0, usage errors to stderr.
        Err(Error::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    init_logging(config.verbose);
    debug!("Resolved configuration:\n{}", config.dump());

    run(&config);
    Ok(())
}

/// Hands the configuration to the subsystem selected on the command line.
fn run(config: &Config) {
    match config.mode() {
        Mode::ListDevices => info!("Listing input devices"),
        Mode::Interactive => {
            info!(
                "Starting interactive mode on device {} ({} ch, {} Hz, {} frames/buffer, {} bands)",
                config.device_id,
                config.channels,
                config.sample_rate,
                config.frames_per_buffer,
                config.fft_bands
            );
            if config.record_input_stream {
                info!("Recording input to {}", config.output_file.display());
            }
        }
    }
}
