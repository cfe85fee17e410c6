//! WAV capture of synthesized signals.
//!
//! Writes the mono int16 buffer exactly as it is handed to the playback
//! driver, using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{RampError, Result};
use crate::types::SampleBuffer;

/// Number of channels in a capture (the mono signal before broadcasting).
pub const CHANNELS: u16 = 1;

/// Bits per sample in a capture.
pub const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes a sample buffer to a 16-bit PCM WAV file.
///
/// # Example
///
/// ```ignore
/// use ramp_signal::audio::write_wav;
///
/// write_wav(&buffer, Path::new("/tmp/ramp.wav"))?;
/// ```
pub fn write_wav(buffer: &SampleBuffer, path: &Path) -> Result<()> {
    let mut writer = WavWriter::create(path, wav_spec(buffer.sample_rate())).map_err(|e| {
        RampError::wav_write_failed(format!("Failed to create {}", path.display()), e)
    })?;

    for &sample in buffer.samples() {
        writer
            .write_sample(sample)
            .map_err(|e| RampError::wav_write_failed("Failed to write sample", e))?;
    }

    writer
        .finalize()
        .map_err(|e| RampError::wav_write_failed("Failed to finalize WAV file", e))?;

    log::info!("Saved signal to {}", path.display());
    Ok(())
}
