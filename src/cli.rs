//! Command line resolution.
//!
//! Turns the process argument vector into a validated [`Config`]. The flag
//! schema lives in the clap derive types below; every flag is global so it
//! can appear before or after the `list` subcommand. Resolution never prints
//! or logs: failures, including help and version requests, come back as
//! [`Error::Cli`] for the entry point to present.

use chrono::{DateTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::build::BuildInfo;
use crate::config::{
    Command, Config, DEFAULT_CHANNELS, DEFAULT_DEVICE_ID, DEFAULT_FFT_BANDS,
    DEFAULT_FRAMES_PER_BUFFER, DEFAULT_LOW_LATENCY, DEFAULT_RECORD_INPUT_STREAM,
    DEFAULT_SAMPLE_RATE, DEFAULT_VERBOSITY,
};
use crate::error::Result;

const BUILD: BuildInfo = BuildInfo::current();

/// Source of the instant used to name default recordings.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

#[derive(Parser, Debug)]
#[command(
    name = BUILD.name,
    version = BUILD.version,
    about = "A simple CLI audio processing engine",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Subcommands>,

    #[command(flatten)]
    flags: Flags,
}

#[derive(Subcommand, Debug)]
enum Subcommands {
    /// List available audio devices and exit
    List,
}

#[derive(Args, Debug)]
struct Flags {
    /// Specify input device ID. Use 'list' command to see available devices.
    #[arg(
        short,
        long = "device",
        global = true,
        allow_negative_numbers = true,
        default_value_t = DEFAULT_DEVICE_ID
    )]
    device_id: i32,

    /// Number of channels to record (1=mono, 2=stereo)
    #[arg(short, long, global = true, default_value_t = DEFAULT_CHANNELS)]
    channels: u16,

    /// Sample rate, measured in Hertz (Hz)
    #[arg(short, long, global = true, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: f64,

    /// The number of frames per buffer (affects latency)
    #[arg(short = 'b', long, global = true, default_value_t = DEFAULT_FRAMES_PER_BUFFER)]
    frames_per_buffer: u32,

    /// Use low latency mode for real-time processing
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = DEFAULT_LOW_LATENCY
    )]
    low_latency: bool,

    /// Number of frequency bands for FFT visualization
    #[arg(short = 'f', long, global = true, default_value_t = DEFAULT_FFT_BANDS)]
    bands: u32,

    /// Record audio from the specified input device
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = DEFAULT_RECORD_INPUT_STREAM
    )]
    record: bool,

    /// Output file name. Default is recording-DD-MM-YYYY-HHMMSS.wav
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = DEFAULT_VERBOSITY
    )]
    verbose: bool,
}

impl Flags {
    /// Writes every bound flag onto its configuration field.
    fn apply(self, config: &mut Config) {
        config.device_id = self.device_id;
        config.channels = self.channels;
        config.sample_rate = self.sample_rate;
        config.frames_per_buffer = self.frames_per_buffer;
        config.low_latency = self.low_latency;
        config.fft_bands = self.bands;
        config.record_input_stream = self.record;
        if let Some(output) = self.output {
            config.output_file = output;
        }
        config.verbose = self.verbose;
    }
}

/// Resolves `args` (program name first, as [`std::env::args_os`] yields
/// them) into a configuration, naming default recordings after the current
/// UTC time.
pub fn parse_args<I, T>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    parse_args_with_clock(args, &SystemClock)
}

/// Same as [`parse_args`] but reads the time from `clock`.
pub fn parse_args_with_clock<I, T, C>(args: I, clock: &C) -> Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    C: Clock + ?Sized,
{
    let mut config = Config::new();
    let cli = Cli::try_parse_from(args)?;

    cli.flags.apply(&mut config);
    match cli.command {
        Some(Subcommands::List) => config.command = Command::List,
        None => config.tui_mode = true,
    }

    // An explicit --output always wins, even over a generated name.
    if config.output_file.as_os_str().is_empty() {
        config.output_file = Config::default_output_file(config.format, clock.now());
    }

    config.validate()?;
    Ok(config)
}
