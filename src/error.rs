//! Error types for ramp-signal.
//!
//! Defines the error codes and the error type shared by the synthesizer,
//! the playback driver and the audio backends.

use std::fmt;

/// Error codes reported by the tool.
///
/// Every code is recoverable at the top level: `main` reports it and exits
/// with a non-zero status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A waveform parameter is out of range.
    /// Trigger: non-positive duration, zero sample rate, amplitude outside 0..1.
    InvalidParameter,

    /// No device identifier was given.
    /// Trigger: `--device` omitted.
    NoDeviceSelected,

    /// The device identifier did not match any device.
    /// Trigger: index out of range and no name containing the identifier.
    DeviceNotFound,

    /// The audio subsystem failed while playing the signal.
    /// Trigger: device busy, unsupported format, device disconnected.
    PlaybackFailure,

    /// The audio subsystem could not enumerate devices.
    /// Trigger: no audio host available, backend error.
    DeviceQueryFailed,

    /// The WAV capture could not be written.
    /// Trigger: unwritable path, disk full.
    WavWriteFailed,

    /// The waveform plot could not be rendered.
    /// Trigger: closed stdout.
    PlotFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::NoDeviceSelected => "NO_DEVICE_SELECTED",
            ErrorCode::DeviceNotFound => "DEVICE_NOT_FOUND",
            ErrorCode::PlaybackFailure => "PLAYBACK_FAILURE",
            ErrorCode::DeviceQueryFailed => "DEVICE_QUERY_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::PlotFailed => "PLOT_FAILED",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => {
                "Use a positive duration, a positive sample rate and an amplitude between 0 and 1"
            }
            ErrorCode::NoDeviceSelected => {
                "Pick a device from the list above and pass its index or name with --device"
            }
            ErrorCode::DeviceNotFound => {
                "Run with --list-devices and pass a valid index or part of a device name"
            }
            ErrorCode::PlaybackFailure => {
                "Check that the device is connected, not in exclusive use, \
                 and supports the requested sample rate and channel count"
            }
            ErrorCode::DeviceQueryFailed => {
                "Check that an audio server (ALSA, PulseAudio, CoreAudio, WASAPI) is available"
            }
            ErrorCode::WavWriteFailed => {
                "Check that the output directory exists and is writable"
            }
            ErrorCode::PlotFailed => "Run without --plot or redirect stdout to a file",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type.
#[derive(Debug)]
pub struct RampError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RampError {
    /// Creates a new RampError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new RampError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_PARAMETER error.
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, reason)
    }

    /// Creates a NO_DEVICE_SELECTED error.
    pub fn no_device_selected() -> Self {
        Self::new(ErrorCode::NoDeviceSelected, "No device selected")
    }

    /// Creates a DEVICE_NOT_FOUND error.
    pub fn device_not_found(identifier: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DeviceNotFound,
            format!("No device matches \"{}\"", identifier.into()),
        )
    }

    /// Creates a PLAYBACK_FAILURE error.
    pub fn playback_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::PlaybackFailure,
            format!("Playback failed: {}", reason.into()),
        )
    }

    /// Creates a DEVICE_QUERY_FAILED error.
    pub fn device_query_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DeviceQueryFailed,
            format!("Failed to query audio devices: {}", reason.into()),
        )
    }

    /// Creates a PLOT_FAILED error.
    pub fn plot_failed(source: std::io::Error) -> Self {
        Self::with_source(ErrorCode::PlotFailed, "Failed to draw plot", source)
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(reason: impl Into<String>, source: hound::Error) -> Self {
        Self::with_source(ErrorCode::WavWriteFailed, reason, source)
    }
}

impl fmt::Display for RampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for RampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using RampError.
pub type Result<T> = std::result::Result<T, RampError>;
