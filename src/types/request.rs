//! WaveformRequest and Shape types.
//!
//! A WaveformRequest holds the validated parameters of one synthesis run.

use serde::{Deserialize, Serialize};

use crate::error::{RampError, Result};

/// Largest buffer a request may produce: a little over six hours at 48 kHz.
pub const MAX_SAMPLES: usize = 1 << 30;

/// Waveform shape produced by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Evenly spaced ramp from -amplitude to +amplitude.
    #[default]
    Linear,

    /// Rising ramp over the first half, falling ramp over the second.
    Triangle,

    /// Exponential curve over [0, 10] remapped to [-amplitude, +amplitude].
    Exponential,

    /// Base-10 logarithm over [1, 10] remapped to [-amplitude, +amplitude].
    Logarithmic,

    /// Sine with exponential frequency sweep from 20 Hz to 20 kHz.
    SineSweep,
}

impl Shape {
    /// All shapes in CLI listing order.
    pub const ALL: [Shape; 5] = [
        Shape::Linear,
        Shape::Triangle,
        Shape::Exponential,
        Shape::Logarithmic,
        Shape::SineSweep,
    ];

    /// Returns the canonical name of the shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Linear => "linear",
            Shape::Triangle => "triangle",
            Shape::Exponential => "exponential",
            Shape::Logarithmic => "logarithmic",
            Shape::SineSweep => "sine_sweep",
        }
    }

    /// Parses a shape from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "linear" => Some(Shape::Linear),
            "triangle" => Some(Shape::Triangle),
            "exponential" => Some(Shape::Exponential),
            "logarithmic" => Some(Shape::Logarithmic),
            "sine_sweep" | "sinesweep" | "sweep" => Some(Shape::SineSweep),
            _ => None,
        }
    }

    /// Parses a shape, falling back to [`Shape::Linear`] for unknown names.
    ///
    /// An unknown name is not an error, it only logs a warning.
    pub fn parse_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!("Unknown signal type: {}. Using linear ramp.", s);
            Shape::Linear
        })
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters for one synthesis run.
///
/// Fields are private so that every request in circulation has passed
/// [`WaveformRequest::new`]'s checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveformRequest {
    duration_seconds: f64,
    sample_rate_hz: u32,
    amplitude: f64,
    shape: Shape,
}

impl WaveformRequest {
    /// Creates a validated request.
    ///
    /// Fails with `INVALID_PARAMETER` when the duration is not a positive
    /// finite number, the sample rate is zero, the amplitude is outside
    /// `[0, 1]`, or the parameters would produce an empty buffer or one
    /// longer than [`MAX_SAMPLES`].
    pub fn new(
        duration_seconds: f64,
        sample_rate_hz: u32,
        amplitude: f64,
        shape: Shape,
    ) -> Result<Self> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(RampError::invalid_parameter(format!(
                "Invalid duration: {} seconds (must be > 0)",
                duration_seconds
            )));
        }

        if sample_rate_hz == 0 {
            return Err(RampError::invalid_parameter(
                "Invalid sample rate: 0 Hz (must be > 0)",
            ));
        }

        if !(0.0..=1.0).contains(&amplitude) {
            return Err(RampError::invalid_parameter(format!(
                "Invalid amplitude: {} (must be between 0 and 1)",
                amplitude
            )));
        }

        let sample_count = (sample_rate_hz as f64 * duration_seconds).floor();
        if sample_count > MAX_SAMPLES as f64 {
            return Err(RampError::invalid_parameter(format!(
                "Duration {} s at {} Hz yields {} samples (limit {})",
                duration_seconds, sample_rate_hz, sample_count, MAX_SAMPLES
            )));
        }

        let request = Self {
            duration_seconds,
            sample_rate_hz,
            amplitude,
            shape,
        };

        if request.num_samples() == 0 {
            return Err(RampError::invalid_parameter(format!(
                "Duration {} s at {} Hz yields no samples",
                duration_seconds, sample_rate_hz
            )));
        }

        Ok(request)
    }

    /// Signal duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Sample rate in Hz.
    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate_hz
    }

    /// Peak amplitude in `[0, 1]`.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Waveform shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of samples the request produces: `floor(rate * duration)`.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate_hz as f64 * self.duration_seconds) as usize
    }
}
