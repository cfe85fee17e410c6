//! [`AudioDeviceService`] backed by cpal's default host.

use std::sync::mpsc;

use anyhow::{anyhow, bail, Context};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SampleRate, SizedSample, StreamConfig};

use crate::error::{RampError, Result};
use crate::playback::AudioDeviceService;
use crate::types::{DeviceHandle, DeviceInfo};

/// Sample formats the stream can be opened in, most preferred first.
const PREFERRED_FORMATS: [SampleFormat; 3] =
    [SampleFormat::I16, SampleFormat::F32, SampleFormat::U16];

/// Silent callbacks to wait for after the last frame was handed over, so
/// the buffers still queued in the device play out before the stream drops.
const DRAIN_CALLBACKS: usize = 2;

/// Messages from the audio callback thread to the blocked caller.
enum StreamEvent {
    Finished,
    Failed(String),
}

/// Audio devices of the platform's default cpal host.
pub struct CpalDeviceService {
    host: cpal::Host,
}

impl CpalDeviceService {
    pub fn new() -> Self {
        let host = cpal::default_host();
        log::debug!("Using audio host {}", host.id().name());
        Self { host }
    }

    fn list(&self) -> anyhow::Result<Vec<DeviceInfo>> {
        let devices = self.host.devices().context("enumerating devices")?;

        Ok(devices
            .enumerate()
            .map(|(index, device)| DeviceInfo {
                index,
                name: device.name().unwrap_or_else(|_| "<unknown>".to_string()),
                max_input_channels: max_input_channels(&device),
                max_output_channels: max_output_channels(&device),
            })
            .collect())
    }

    fn open(&self, handle: &DeviceHandle) -> anyhow::Result<cpal::Device> {
        let device = self
            .host
            .devices()
            .context("enumerating devices")?
            .nth(handle.index)
            .ok_or_else(|| anyhow!("device {} is no longer available", handle.index))?;

        if let Ok(name) = device.name() {
            if name != handle.name {
                log::warn!(
                    "Device {} is now \"{}\" (resolved as \"{}\")",
                    handle.index,
                    name,
                    handle.name
                );
            }
        }
        Ok(device)
    }

    fn play(
        &self,
        handle: &DeviceHandle,
        frames: &[i16],
        channels: u16,
        sample_rate: u32,
    ) -> anyhow::Result<()> {
        let device = self.open(handle)?;
        let format = output_format(&device, channels, sample_rate)?;
        let config = StreamConfig {
            channels,
            sample_rate: SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };
        log::debug!("Opening {} stream: {:?}", format, config);

        let frames = frames.to_vec();
        match format {
            SampleFormat::I16 => play_blocking::<i16>(&device, &config, frames),
            SampleFormat::F32 => play_blocking::<f32>(&device, &config, frames),
            SampleFormat::U16 => play_blocking::<u16>(&device, &config, frames),
            sample_format => bail!("unsupported sample format: {}", sample_format),
        }
    }
}

impl Default for CpalDeviceService {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDeviceService for CpalDeviceService {
    fn devices(&self) -> Result<Vec<DeviceInfo>> {
        self.list()
            .map_err(|e| RampError::device_query_failed(format!("{:#}", e)))
    }

    fn play_interleaved(
        &self,
        device: &DeviceHandle,
        frames: &[i16],
        channels: u16,
        sample_rate: u32,
    ) -> Result<()> {
        self.play(device, frames, channels, sample_rate)
            .map_err(|e| RampError::playback_failed(format!("{:#}", e)))
    }
}

fn max_input_channels(device: &cpal::Device) -> u16 {
    device
        .supported_input_configs()
        .map(|configs| configs.map(|c| c.channels()).max().unwrap_or(0))
        .unwrap_or(0)
}

fn max_output_channels(device: &cpal::Device) -> u16 {
    device
        .supported_output_configs()
        .map(|configs| configs.map(|c| c.channels()).max().unwrap_or(0))
        .unwrap_or(0)
}

/// Picks the sample format to open the stream in.
fn output_format(
    device: &cpal::Device,
    channels: u16,
    sample_rate: u32,
) -> anyhow::Result<SampleFormat> {
    let supported: Vec<SampleFormat> = device
        .supported_output_configs()
        .context("querying output configurations")?
        .filter(|c| {
            c.channels() == channels
                && c.min_sample_rate().0 <= sample_rate
                && c.max_sample_rate().0 >= sample_rate
        })
        .map(|c| c.sample_format())
        .collect();

    PREFERRED_FORMATS
        .into_iter()
        .find(|f| supported.contains(f))
        .ok_or_else(|| {
            anyhow!(
                "no supported output configuration with {} channels at {} Hz",
                channels,
                sample_rate
            )
        })
}

/// Position of the audio callback within the interleaved frames.
#[derive(Debug, Default)]
struct PlaybackCursor {
    position: usize,
    silent_callbacks: usize,
}

impl PlaybackCursor {
    /// Copies the next frames into `data` and pads the rest with silence.
    ///
    /// Returns true exactly once: on the [`DRAIN_CALLBACKS`]-th callback
    /// after the last frame, when it has left the device queue.
    fn fill<T>(&mut self, frames: &[i16], data: &mut [T]) -> bool
    where
        T: SizedSample + FromSample<i16>,
    {
        let n = (frames.len() - self.position).min(data.len());
        for (out, &sample) in data.iter_mut().zip(&frames[self.position..self.position + n]) {
            *out = T::from_sample(sample);
        }
        for out in data[n..].iter_mut() {
            *out = T::EQUILIBRIUM;
        }
        self.position += n;

        if n == 0 {
            self.silent_callbacks += 1;
            return self.silent_callbacks == DRAIN_CALLBACKS;
        }
        false
    }
}

/// Plays interleaved frames and blocks until the last one has drained from
/// the device.
fn play_blocking<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    frames: Vec<i16>,
) -> anyhow::Result<()>
where
    T: SizedSample + FromSample<i16>,
{
    let (tx, rx) = mpsc::channel();
    let error_tx = tx.clone();

    let mut cursor = PlaybackCursor::default();

    let stream = device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                if cursor.fill(&frames, data) {
                    let _ = tx.send(StreamEvent::Finished);
                }
            },
            move |err| {
                let _ = error_tx.send(StreamEvent::Failed(err.to_string()));
            },
            None,
        )
        .context("building output stream")?;

    stream.play().context("starting output stream")?;

    match rx.recv() {
        Ok(StreamEvent::Finished) => Ok(()),
        Ok(StreamEvent::Failed(message)) => Err(anyhow!("stream error: {}", message)),
        Err(_) => Err(anyhow!("output stream stopped unexpectedly")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_copies_then_pads_with_silence() {
        let frames = [1i16, 2, 3, 4, 5, 6];
        let mut cursor = PlaybackCursor::default();
        let mut data = [9i16; 4];

        assert!(!cursor.fill(&frames, &mut data));
        assert_eq!(data, [1, 2, 3, 4]);

        assert!(!cursor.fill(&frames, &mut data));
        assert_eq!(data, [5, 6, 0, 0]);
        assert_eq!(cursor.position, frames.len());
    }

    #[test]
    fn finishes_only_after_queued_buffers_drain() {
        let frames = [7i16; 6];
        let mut cursor = PlaybackCursor::default();
        let mut data = [0i16; 4];

        // last frames handed over, still queued in the device
        assert!(!cursor.fill(&frames, &mut data));
        assert!(!cursor.fill(&frames, &mut data));

        let events: Vec<bool> = (0..4).map(|_| cursor.fill(&frames, &mut data)).collect();
        assert_eq!(events, [false, true, false, false]);
        assert_eq!(data, [0; 4]);
    }

    #[test]
    fn exact_fit_still_waits_for_drain() {
        let frames = [1i16, 2, 3, 4];
        let mut cursor = PlaybackCursor::default();
        let mut data = [0i16; 4];

        assert!(!cursor.fill(&frames, &mut data));
        assert!(!cursor.fill(&frames, &mut data));
        assert!(cursor.fill(&frames, &mut data));
    }

    #[test]
    fn converts_to_native_format() {
        let frames = [i16::MIN, 0];
        let mut cursor = PlaybackCursor::default();

        let mut floats = [1.0f32; 4];
        cursor.fill(&frames, &mut floats);
        assert_eq!(floats, [-1.0, 0.0, 0.0, 0.0]);

        let mut cursor = PlaybackCursor::default();
        let mut unsigned = [1u16; 3];
        cursor.fill(&frames, &mut unsigned);
        assert_eq!(unsigned, [0, 32768, 32768]);
    }
}
