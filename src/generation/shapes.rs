//! Normalized waveform curves.
//!
//! Every function here returns `n` float samples in `[-amplitude, amplitude]`.
//! Quantization happens later in [`super::synth`].

use std::f64::consts::PI;

use crate::types::Shape;

/// Start frequency of the sine sweep in Hz.
pub const SWEEP_START_HZ: f64 = 20.0;

/// End frequency of the sine sweep in Hz.
pub const SWEEP_END_HZ: f64 = 20_000.0;

/// Upper bound of the exponential curve's parameter range.
const EXP_RANGE: f64 = 10.0;

/// `n` evenly spaced values from `start` to `stop`, both inclusive.
///
/// The last value is pinned to `stop` exactly; a single value is `start`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| i as f64 * step + start).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Dispatches to the curve for `shape`.
pub fn render(shape: Shape, n: usize, amplitude: f64, duration_seconds: f64) -> Vec<f64> {
    match shape {
        Shape::Linear => linear(n, amplitude),
        Shape::Triangle => triangle(n, amplitude),
        Shape::Exponential => exponential(n, amplitude),
        Shape::Logarithmic => logarithmic(n, amplitude),
        Shape::SineSweep => sine_sweep(n, amplitude, duration_seconds),
    }
}

pub fn linear(n: usize, amplitude: f64) -> Vec<f64> {
    linspace(-amplitude, amplitude, n)
}

/// Rising over the first `n / 2` samples, falling over the rest.
pub fn triangle(n: usize, amplitude: f64) -> Vec<f64> {
    let half = n / 2;
    let mut values = linspace(-amplitude, amplitude, half);
    values.extend(linspace(amplitude, -amplitude, n - half));
    values
}

pub fn exponential(n: usize, amplitude: f64) -> Vec<f64> {
    let denominator = EXP_RANGE.exp() - 1.0;
    linspace(0.0, EXP_RANGE, n)
        .into_iter()
        .map(|x| {
            let curve = (x.exp() - 1.0) / denominator;
            (2.0 * curve - 1.0) * amplitude
        })
        .collect()
}

pub fn logarithmic(n: usize, amplitude: f64) -> Vec<f64> {
    let denominator = 10f64.ln();
    linspace(1.0, 10.0, n)
        .into_iter()
        .map(|x| {
            let curve = x.ln() / denominator;
            (2.0 * curve - 1.0) * amplitude
        })
        .collect()
}

pub fn sine_sweep(n: usize, amplitude: f64, duration_seconds: f64) -> Vec<f64> {
    linspace(0.0, duration_seconds, n)
        .into_iter()
        .map(|t| amplitude * sweep_phase(t, duration_seconds).sin())
        .collect()
}

/// Phase of the exponential sweep at time `t`, in radians.
///
/// This is the integral of [`sweep_frequency`] from 0 to `t`.
pub fn sweep_phase(t: f64, duration_seconds: f64) -> f64 {
    let k = (SWEEP_END_HZ / SWEEP_START_HZ).ln();
    2.0 * PI * SWEEP_START_HZ * duration_seconds / k * ((t / duration_seconds * k).exp() - 1.0)
}

/// Instantaneous frequency of the sweep at time `t`, in Hz.
pub fn sweep_frequency(t: f64, duration_seconds: f64) -> f64 {
    let k = (SWEEP_END_HZ / SWEEP_START_HZ).ln();
    SWEEP_START_HZ * (t / duration_seconds * k).exp()
}
