//! Waveform plotting module.

pub mod terminal;

pub use terminal::TerminalPlotter;

use crate::error::Result;
use crate::types::SampleBuffer;

/// Renders a sample buffer against a time axis.
pub trait PlottingService {
    /// Draws `buffer`; `amplitude` is the requested peak, shown in the legend.
    fn plot(&self, buffer: &SampleBuffer, amplitude: f64) -> Result<()>;
}
