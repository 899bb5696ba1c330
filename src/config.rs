//! Configuration model for the audio engine.
//!
//! Holds every tunable the capture, analysis and recording subsystems read,
//! together with the defaults they start from. The command line resolver in
//! [`crate::cli`] builds one of these and hands it to the rest of the program.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Device id meaning "use the system default input device".
pub const DEFAULT_DEVICE_ID: i32 = -1;
pub const DEFAULT_CHANNELS: u16 = 2;
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;
pub const DEFAULT_FRAMES_PER_BUFFER: u32 = 512;
pub const DEFAULT_LOW_LATENCY: bool = false;
pub const DEFAULT_FFT_BANDS: u32 = 12;
pub const DEFAULT_RECORD_INPUT_STREAM: bool = false;
/// Empty means "derive a timestamped name at resolution time".
pub const DEFAULT_OUTPUT_FILE: &str = "";
pub const DEFAULT_VERBOSITY: bool = false;
pub const DEFAULT_FORMAT: Format = Format::Wav;

/// Prefix of generated recording file names.
const RECORDING_PREFIX: &str = "recording-";
/// `DD-MM-YYYY-HHMMSS`
const RECORDING_TIMESTAMP_FORMAT: &str = "%d-%m-%Y-%H%M%S";

/// One-shot action selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// No one-shot action, run interactively
    #[default]
    None,
    /// List available audio devices and exit
    List,
}

/// Container format for recordings. Only WAV is known here; other formats
/// belong to the encoder that consumes the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Wav,
}

impl Format {
    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
        }
    }
}

/// How the program should run once configuration is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full-screen interactive terminal UI
    Interactive,
    /// Print the available input devices and exit
    ListDevices,
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input device id, [`DEFAULT_DEVICE_ID`] for the system default
    pub device_id: i32,
    /// Number of audio channels (1 for mono, 2 for stereo)
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Frames per buffer, trades latency against throughput
    pub frames_per_buffer: u32,
    /// Ask the backend for its lowest latency stream settings
    pub low_latency: bool,
    /// Number of frequency bands in the FFT visualization
    pub fft_bands: u32,
    /// Write the input stream to `output_file` while running
    pub record_input_stream: bool,
    /// Where recordings are written
    pub output_file: PathBuf,
    /// Container format of recordings; only drives the default file extension
    pub format: Format,
    /// Show verbose (debug level) output
    pub verbose: bool,
    /// One-shot action to run instead of interactive mode
    pub command: Command,
    /// Set when no subcommand was given
    pub tui_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_id: DEFAULT_DEVICE_ID,
            channels: DEFAULT_CHANNELS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            frames_per_buffer: DEFAULT_FRAMES_PER_BUFFER,
            low_latency: DEFAULT_LOW_LATENCY,
            fft_bands: DEFAULT_FFT_BANDS,
            record_input_stream: DEFAULT_RECORD_INPUT_STREAM,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: DEFAULT_FORMAT,
            verbose: DEFAULT_VERBOSITY,
            command: Command::None,
            tui_mode: false,
        }
    }
}

impl Config {
    /// Returns a configuration with every field at its default. Nothing is
    /// validated here.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the timestamped file name used when no output file was given,
    /// e.g. `recording-19-10-2026-142530.wav`.
    pub fn default_output_file(format: Format, instant: DateTime<Utc>) -> PathBuf {
        PathBuf::from(format!(
            "{RECORDING_PREFIX}{}.{}",
            instant.format(RECORDING_TIMESTAMP_FORMAT),
            format.extension()
        ))
    }

    /// Typed view of the `tui_mode` / `command` pair.
    pub fn mode(&self) -> Mode {
        match self.command {
            Command::List => Mode::ListDevices,
            Command::None => Mode::Interactive,
        }
    }

    /// Checks that numeric settings are usable by the audio backend.
    pub fn validate(&self) -> Result<()> {
        if self.device_id < DEFAULT_DEVICE_ID {
            return Err(Error::Config(format!(
                "device id must be {DEFAULT_DEVICE_ID} (system default) or a device index, got {}",
                self.device_id
            )));
        }
        if !(1..=2).contains(&self.channels) {
            return Err(Error::Config(format!(
                "channels must be 1 (mono) or 2 (stereo), got {}",
                self.channels
            )));
        }
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(Error::Config(format!(
                "sample rate must be a positive number of Hz, got {}",
                self.sample_rate
            )));
        }
        if self.frames_per_buffer == 0 {
            return Err(Error::Config(
                "frames per buffer must be greater than zero".to_string(),
            ));
        }
        if self.fft_bands == 0 {
            return Err(Error::Config(
                "number of FFT bands must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Human readable dump for debug logging. Falls back to the `Debug`
    /// rendering when TOML can't represent a field, e.g. a non UTF-8 path.
    pub fn dump(&self) -> String {
        self.to_toml().unwrap_or_else(|_| format!("{self:#?}"))
    }
}
