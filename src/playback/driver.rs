//! Playback driver.
//!
//! Broadcasts a mono buffer to every output channel of a device and plays it
//! with a single blocking call.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{ErrorCode, RampError, Result};
use crate::types::{DeviceHandle, SampleBuffer};

use super::service::AudioDeviceService;

/// Outcome of a successful playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackReport {
    /// Name of the device the signal was played on.
    pub device_name: String,

    /// Number of output channels the signal was broadcast to.
    pub channels: u16,

    /// Number of frames (samples per channel) played.
    pub frames: usize,

    /// Total bytes handed to the device (`frames * channels * 2`).
    pub bytes_played: usize,

    /// Signal duration at the requested sample rate, in seconds.
    pub expected_seconds: f64,

    /// Wall-clock time the blocking call took, in seconds.
    pub elapsed_seconds: f64,
}

impl PlaybackReport {
    /// Difference between wall-clock time and signal duration, in seconds.
    pub fn drift_seconds(&self) -> f64 {
        self.elapsed_seconds - self.expected_seconds
    }
}

/// Repeats every mono sample once per channel, producing interleaved frames.
pub fn interleave(samples: &[i16], channels: u16) -> Vec<i16> {
    let channels = channels as usize;
    let mut frames = Vec::with_capacity(samples.len() * channels);
    for &sample in samples {
        frames.extend(std::iter::repeat(sample).take(channels));
    }
    frames
}

/// Plays sample buffers through an [`AudioDeviceService`].
pub struct PlaybackDriver<'a, S: AudioDeviceService + ?Sized> {
    service: &'a S,
    output_channel: u16,
}

impl<'a, S: AudioDeviceService + ?Sized> PlaybackDriver<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            output_channel: 0,
        }
    }

    /// Records the requested output channel.
    ///
    /// The channel is not used to restrict output: playback always
    /// broadcasts to every channel of the device.
    pub fn with_output_channel(mut self, output_channel: u16) -> Self {
        self.output_channel = output_channel;
        self
    }

    /// Plays `buffer` on `device` at `sample_rate`, blocking until done.
    ///
    /// Any failure of the audio service is logged and returned as
    /// `PLAYBACK_FAILURE`. Nothing is retried.
    pub fn play(
        &self,
        buffer: &SampleBuffer,
        device: &DeviceHandle,
        sample_rate: u32,
    ) -> Result<PlaybackReport> {
        if sample_rate == 0 {
            return Err(RampError::invalid_parameter(
                "Invalid sample rate: 0 Hz (must be > 0)",
            ));
        }

        let info = self.service.device(device).map_err(|e| {
            log::error!("Failed to query device {}: {}", device.index, e);
            RampError::with_source(
                ErrorCode::PlaybackFailure,
                format!("Failed to query device \"{}\"", device.name),
                e,
            )
        })?;

        if !info.is_output() {
            return Err(RampError::playback_failed(format!(
                "Device \"{}\" has no output channels",
                info.name
            )));
        }

        let channels = info.max_output_channels;
        if self.output_channel != 0 {
            log::warn!(
                "Output channel {} requested, but the signal is broadcast to all {} channels",
                self.output_channel,
                channels
            );
        }

        let expected_seconds = buffer.len() as f64 / sample_rate as f64;
        log::info!("Device: {}", info.name);
        log::info!("Output channels: {}", channels);
        log::info!("Sample rate: {} Hz", sample_rate);
        log::info!("Duration: {:.2} seconds", expected_seconds);

        let frames = interleave(buffer.samples(), channels);

        let start_time = Instant::now();
        self.service
            .play_interleaved(device, &frames, channels, sample_rate)
            .map_err(|e| {
                log::error!("Playback error: {}", e);
                if e.code == ErrorCode::PlaybackFailure {
                    e
                } else {
                    RampError::with_source(ErrorCode::PlaybackFailure, "Audio service failed", e)
                }
            })?;
        let elapsed: Duration = start_time.elapsed();

        let report = PlaybackReport {
            device_name: info.name,
            channels,
            frames: buffer.len(),
            bytes_played: frames.len() * std::mem::size_of::<i16>(),
            expected_seconds,
            elapsed_seconds: elapsed.as_secs_f64(),
        };

        log::info!("Total bytes played: {}", report.bytes_played);
        log::info!(
            "Playback complete! Elapsed time: {:.3} seconds",
            report.elapsed_seconds
        );

        Ok(report)
    }
}
