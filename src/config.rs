//! Run configuration.
//!
//! Gathers everything one test run needs, independent of how it was
//! supplied. The CLI is the only source; there are no environment variables
//! or config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;
use crate::types::{Shape, WaveformRequest};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;

/// Default peak amplitude.
pub const DEFAULT_AMPLITUDE: f64 = 0.9;

/// Default signal duration in seconds.
pub const DEFAULT_DURATION: f64 = 10.0;

/// Default ramp type.
pub const DEFAULT_RAMP_TYPE: &str = "linear";

/// Configuration for one test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampConfig {
    /// Device index or name fragment. None means "list devices".
    pub device: Option<String>,

    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Peak amplitude in [0, 1].
    pub amplitude: f64,

    /// Signal duration in seconds.
    pub duration: f64,

    /// Ramp type name as given. Unknown names play a linear ramp.
    pub ramp_type: String,

    /// Requested output channel.
    /// Recorded only: the signal is always broadcast to every channel.
    pub output_channel: u16,

    /// Whether to plot the waveform before playback.
    pub plot: bool,

    /// Where to write a WAV capture of the signal, if anywhere.
    pub wav_path: Option<PathBuf>,
}

impl RampConfig {
    /// Creates a RampConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape to synthesize, falling back to linear for unknown names.
    pub fn shape(&self) -> Shape {
        Shape::parse_lossy(&self.ramp_type)
    }

    /// Builds the validated waveform request for this run.
    pub fn waveform_request(&self) -> Result<WaveformRequest> {
        WaveformRequest::new(self.duration, self.sample_rate, self.amplitude, self.shape())
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Some(format!("duration must be > 0, got {}", self.duration));
        }

        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }

        if !(0.0..=1.0).contains(&self.amplitude) {
            return Some(format!(
                "amplitude must be between 0 and 1, got {}",
                self.amplitude
            ));
        }

        if let Some(ref device) = self.device {
            if device.trim().is_empty() {
                return Some("device must not be empty".to_string());
            }
        }

        None
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            device: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            amplitude: DEFAULT_AMPLITUDE,
            duration: DEFAULT_DURATION,
            ramp_type: DEFAULT_RAMP_TYPE.to_string(),
            output_channel: 0,
            plot: false,
            wav_path: None,
        }
    }
}

impl From<&Cli> for RampConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            device: cli.device.clone(),
            sample_rate: cli.sample_rate,
            amplitude: cli.amplitude,
            duration: cli.duration,
            ramp_type: cli.ramp_type.clone(),
            output_channel: cli.output_channel,
            plot: cli.plot,
            wav_path: cli.wav.clone(),
        }
    }
}
