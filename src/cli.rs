//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_AMPLITUDE, DEFAULT_DURATION, DEFAULT_RAMP_TYPE, DEFAULT_SAMPLE_RATE};

/// ramp-signal: continuous playback test for audio output devices
#[derive(Parser, Debug)]
#[command(name = "ramp-signal")]
#[command(about = "Plays a ramp or sweep test signal through an audio output device")]
#[command(version)]
pub struct Cli {
    /// Audio device name or index (lists devices when omitted)
    #[arg(short, long)]
    pub device: Option<String>,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    pub sample_rate: u32,

    /// Output channel index (the signal is still sent to every channel)
    #[arg(short, long, default_value_t = 0)]
    pub output_channel: u16,

    /// Maximum signal amplitude (0-1)
    #[arg(short, long, default_value_t = DEFAULT_AMPLITUDE, allow_negative_numbers = true)]
    pub amplitude: f64,

    /// Signal duration in seconds
    #[arg(short = 't', long, default_value_t = DEFAULT_DURATION, allow_negative_numbers = true)]
    pub duration: f64,

    /// Ramp type: linear, triangle, exponential, logarithmic, sine_sweep
    #[arg(short, long, default_value = DEFAULT_RAMP_TYPE)]
    pub ramp_type: String,

    /// Plot the signal before playback
    #[arg(short, long)]
    pub plot: bool,

    /// Also write the signal to a 16-bit WAV file
    #[arg(long)]
    pub wav: Option<PathBuf>,

    /// List audio devices and exit
    #[arg(long)]
    pub list_devices: bool,

    /// Print device lists as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns true if the run only lists devices.
    pub fn is_list_mode(&self) -> bool {
        self.list_devices
    }

    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
