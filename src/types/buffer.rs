//! SampleBuffer type holding a quantized mono signal.

use sha2::{Digest, Sha256};

/// Quantized mono signal produced by the synthesizer.
///
/// Read-only once built; the playback driver and plotters only borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl SampleBuffer {
    /// Wraps already quantized samples.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// The samples in playback order.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample rate the buffer was synthesized at.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Smallest sample, or 0 for an empty buffer.
    pub fn min(&self) -> i16 {
        self.samples.iter().copied().min().unwrap_or(0)
    }

    /// Largest sample, or 0 for an empty buffer.
    pub fn max(&self) -> i16 {
        self.samples.iter().copied().max().unwrap_or(0)
    }

    /// Size of the mono signal in bytes.
    pub fn byte_len(&self) -> usize {
        self.samples.len() * std::mem::size_of::<i16>()
    }

    /// Computes a deterministic fingerprint of the quantized samples.
    ///
    /// The fingerprint is the first 16 hex characters of the SHA256 hash of
    /// the little-endian sample bytes, so two runs with identical parameters
    /// report identical fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for sample in &self.samples {
            hasher.update(sample.to_le_bytes());
        }
        let result = hasher.finalize();
        // Take first 8 bytes (16 hex chars)
        hex::encode(&result[..8])
    }
}
