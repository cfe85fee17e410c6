//! Waveform synthesis and int16 quantization.

use crate::error::Result;
use crate::types::{SampleBuffer, WaveformRequest};

use super::shapes;

/// Scale applied to a normalized sample before the cast to `i16`.
pub const I16_SCALE: f64 = 32767.0;

/// Converts a normalized sample to `i16` by scaling and truncating toward zero.
///
/// No rounding and no dithering: `-0.5` becomes `-16383`, not `-16384`.
/// Changing this to rounding alters the output byte for byte.
pub fn quantize(sample: f64) -> i16 {
    (sample * I16_SCALE) as i16
}

/// Synthesizes the waveform described by `request`.
///
/// Deterministic: identical requests give identical buffers. The only side
/// effect is logging the produced ranges.
///
/// # Example
///
/// ```ignore
/// use ramp_signal::generation::synthesize;
/// use ramp_signal::types::{Shape, WaveformRequest};
///
/// let request = WaveformRequest::new(1.0, 4, 1.0, Shape::Linear)?;
/// let buffer = synthesize(&request)?;
/// assert_eq!(buffer.samples(), &[-32767, -10922, 10922, 32767]);
/// ```
pub fn synthesize(request: &WaveformRequest) -> Result<SampleBuffer> {
    let num_samples = request.num_samples();
    let signal = shapes::render(
        request.shape(),
        num_samples,
        request.amplitude(),
        request.duration_seconds(),
    );

    let samples: Vec<i16> = signal.iter().copied().map(quantize).collect();
    let buffer = SampleBuffer::new(samples, request.sample_rate_hz());

    let (float_min, float_max) = signal
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });

    log::info!(
        "Created {} signal: {} samples, {:.2} seconds",
        request.shape(),
        num_samples,
        request.duration_seconds()
    );
    log::info!("Float range: {:.3} to {:.3}", float_min, float_max);
    log::info!("Int16 range: {} to {}", buffer.min(), buffer.max());
    log::debug!(
        "Signal: {} bytes, fingerprint {}",
        buffer.byte_len(),
        buffer.fingerprint()
    );

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    fn synth(duration: f64, rate: u32, amplitude: f64, shape: Shape) -> SampleBuffer {
        let request = WaveformRequest::new(duration, rate, amplitude, shape).unwrap();
        synthesize(&request).unwrap()
    }

    #[test]
    fn quantize_truncates_toward_zero() {
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32767);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(-0.5), -16383);
        assert_eq!(quantize(0.5), 16383);
        assert_eq!(quantize(0.99999), 32766);
        assert_eq!(quantize(-1.0 / 3.0), -10922);
    }

    #[test]
    fn four_sample_linear_example() {
        let buffer = synth(1.0, 4, 1.0, Shape::Linear);
        assert_eq!(buffer.samples(), &[-32767, -10922, 10922, 32767]);
        assert_eq!(buffer.sample_rate(), 4);
    }

    #[test]
    fn length_matches_duration_times_rate() {
        let cases = [(1.0, 48000), (0.5, 44100), (2.25, 8000), (0.1, 22050), (1.5, 3)];
        for shape in Shape::ALL {
            for (duration, rate) in cases {
                let buffer = synth(duration, rate, 0.9, shape);
                let expected = (rate as f64 * duration) as usize;
                assert_eq!(buffer.len(), expected, "{} {}s@{}", shape, duration, rate);
            }
        }
    }

    #[test]
    fn samples_stay_in_range() {
        for shape in Shape::ALL {
            let buffer = synth(0.5, 48000, 1.0, shape);
            assert!(buffer.min() >= -32767, "{} min {}", shape, buffer.min());
            assert!(buffer.max() <= 32767, "{} max {}", shape, buffer.max());
        }
    }

    #[test]
    fn linear_endpoints() {
        let amplitude = 0.9;
        let buffer = synth(1.0, 1000, amplitude, Shape::Linear);
        let peak = quantize(amplitude);
        assert_eq!(buffer.samples()[0], -peak);
        assert_eq!(buffer.samples()[999], peak);
        assert!(buffer.samples().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn triangle_peaks_at_midpoint() {
        let buffer = synth(1.0, 100, 1.0, Shape::Triangle);
        let samples = buffer.samples();
        assert_eq!(samples[50], 32767);
        assert_eq!(buffer.max(), samples[50]);
        assert_eq!(samples[0], -32767);
        assert_eq!(samples[99], -32767);
    }

    #[test]
    fn triangle_odd_length() {
        let buffer = synth(1.0, 101, 0.5, Shape::Triangle);
        let samples = buffer.samples();
        assert_eq!(samples.len(), 101);
        assert_eq!(samples[50], quantize(0.5));
        assert_eq!(samples[100], quantize(-0.5));
    }

    #[test]
    fn ramps_span_full_amplitude() {
        for shape in [Shape::Exponential, Shape::Logarithmic] {
            let buffer = synth(1.0, 8000, 0.9, shape);
            assert_eq!(buffer.samples()[0], quantize(-0.9), "{}", shape);
            assert_eq!(buffer.samples()[7999], quantize(0.9), "{}", shape);
        }
    }

    #[test]
    fn sine_sweep_respects_amplitude() {
        let buffer = synth(1.0, 48000, 0.25, Shape::SineSweep);
        let peak = quantize(0.25);
        assert_eq!(buffer.samples()[0], 0);
        assert!(buffer.max() <= peak);
        assert!(buffer.min() >= -peak);
        // a 20 Hz..20 kHz sweep at 48 kHz reaches close to its peak
        assert!(buffer.max() > peak - 100);
    }

    #[test]
    fn zero_amplitude_is_silent() {
        for shape in Shape::ALL {
            let buffer = synth(0.1, 8000, 0.0, shape);
            assert!(buffer.samples().iter().all(|&s| s == 0), "{}", shape);
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        let a = synth(0.2, 48000, 0.9, Shape::SineSweep);
        let b = synth(0.2, 48000, 0.9, Shape::SineSweep);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
