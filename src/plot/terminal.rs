//! Character-grid waveform plot for the terminal.

use std::io::Write;

use crate::error::{RampError, Result};
use crate::types::SampleBuffer;

use super::PlottingService;

/// Plot width used when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 72;

/// Plot height in rows.
pub const DEFAULT_HEIGHT: usize = 20;

const FULL_SCALE: f64 = i16::MAX as f64;

/// Width of the amplitude labels plus the `" |"` separator.
const LABEL_WIDTH: usize = 9;

/// Draws the waveform against a time axis on stdout.
#[derive(Debug, Clone)]
pub struct TerminalPlotter {
    width: Option<usize>,
    height: usize,
}

impl TerminalPlotter {
    /// Plotter sized to the current terminal.
    pub fn new() -> Self {
        Self {
            width: None,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Plotter with a fixed grid size.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width: Some(width.max(2)),
            height: height.max(3),
        }
    }

    fn plot_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(cols, _)| (cols as usize).saturating_sub(LABEL_WIDTH + 1).clamp(20, 200))
                .unwrap_or(DEFAULT_WIDTH)
        })
    }

    /// Renders the plot as text.
    pub fn render(&self, buffer: &SampleBuffer, amplitude: f64) -> String {
        let width = self.plot_width();
        let height = self.height;
        let duration = buffer.duration_seconds();

        let mut out = String::new();
        out.push_str("Signal for playback\n");
        out.push_str(&format!(
            "Sample rate: {} Hz | Duration: {:.2} seconds | Max amplitude: {:.2}\n",
            buffer.sample_rate(),
            duration,
            amplitude
        ));

        let zero_row = row_of(0, height);
        let mut grid = vec![vec![' '; width]; height];
        grid[zero_row].iter_mut().for_each(|c| *c = '.');

        let samples = buffer.samples();
        if !samples.is_empty() {
            for (column, cells) in column_ranges(samples.len(), width).enumerate() {
                let bucket = &samples[cells];
                let lo = bucket.iter().copied().min().unwrap_or(0);
                let hi = bucket.iter().copied().max().unwrap_or(0);
                for row in grid.iter_mut().take(row_of(lo, height) + 1).skip(row_of(hi, height)) {
                    row[column] = '*';
                }
            }
        }

        for (index, row) in grid.iter().enumerate() {
            let label = if index == 0 {
                "32767"
            } else if index == height - 1 {
                "-32767"
            } else if index == zero_row {
                "0"
            } else {
                ""
            };
            out.push_str(&format!("{:>7} |{}\n", label, row.iter().collect::<String>()));
        }

        out.push_str(&format!("{:>8}+{}\n", "", "-".repeat(width)));

        let left = "0.00 s";
        let right = format!("{:.2} s", duration);
        let gap = width.saturating_sub(left.len() + right.len());
        out.push_str(&format!(
            "{}{}{}{}\n",
            " ".repeat(LABEL_WIDTH),
            left,
            " ".repeat(gap),
            right
        ));

        out
    }
}

impl Default for TerminalPlotter {
    fn default() -> Self {
        Self::new()
    }
}

impl PlottingService for TerminalPlotter {
    fn plot(&self, buffer: &SampleBuffer, amplitude: f64) -> Result<()> {
        let text = self.render(buffer, amplitude);
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(RampError::plot_failed)
    }
}

/// Row of a sample value, 0 at full positive scale.
fn row_of(value: i16, height: usize) -> usize {
    let normalized = (FULL_SCALE - value as f64) / (2.0 * FULL_SCALE);
    ((normalized * (height - 1) as f64).round() as usize).min(height - 1)
}

/// Splits `len` samples into `width` consecutive, non-empty index ranges.
///
/// When there are fewer samples than columns, neighbouring columns share a
/// sample.
fn column_ranges(len: usize, width: usize) -> impl Iterator<Item = std::ops::Range<usize>> {
    (0..width).map(move |column| {
        let start = (column * len / width).min(len - 1);
        let end = ((column + 1) * len / width).clamp(start + 1, len);
        start..end
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot_rows(text: &str) -> Vec<&str> {
        text.lines().skip(2).take_while(|l| !l.trim_start().starts_with('+')).collect()
    }

    #[test]
    fn render_dimensions() {
        let buffer = SampleBuffer::new((0..1000).map(|i| (i * 30 - 15000) as i16).collect(), 1000);
        let text = TerminalPlotter::with_size(40, 10).render(&buffer, 0.9);

        let rows = plot_rows(&text);
        assert_eq!(rows.len(), 10);
        for row in &rows {
            assert_eq!(row.chars().count(), LABEL_WIDTH + 40);
        }
        assert!(text.ends_with("1.00 s\n"));
    }

    #[test]
    fn render_info_box() {
        let buffer = SampleBuffer::new(vec![0; 96000], 48000);
        let text = TerminalPlotter::with_size(30, 5).render(&buffer, 0.9);
        assert!(text.starts_with("Signal for playback"));
        assert!(text.contains("Sample rate: 48000 Hz"));
        assert!(text.contains("Duration: 2.00 seconds"));
        assert!(text.contains("Max amplitude: 0.90"));
    }

    #[test]
    fn linear_ramp_rises_left_to_right() {
        let buffer = SampleBuffer::new(vec![-32767, -10922, 10922, 32767], 4);
        let text = TerminalPlotter::with_size(4, 7).render(&buffer, 1.0);
        let rows = plot_rows(&text);

        let top: Vec<char> = rows[0].chars().skip(LABEL_WIDTH).collect();
        let bottom: Vec<char> = rows[6].chars().skip(LABEL_WIDTH).collect();
        assert_eq!(top, vec![' ', ' ', ' ', '*']);
        assert_eq!(bottom, vec!['*', ' ', ' ', ' ']);
        assert!(rows[0].trim_start().starts_with("32767"));
        assert!(rows[6].trim_start().starts_with("-32767"));
    }

    #[test]
    fn row_mapping() {
        assert_eq!(row_of(i16::MAX, 11), 0);
        assert_eq!(row_of(0, 11), 5);
        assert_eq!(row_of(-32767, 11), 10);
        assert_eq!(row_of(i16::MIN, 11), 10);
    }

    #[test]
    fn column_ranges_cover_all_samples() {
        let ranges: Vec<_> = column_ranges(10, 4).collect();
        assert_eq!(ranges, vec![0..2, 2..5, 5..7, 7..10]);

        let ranges: Vec<_> = column_ranges(2, 4).collect();
        assert!(ranges.iter().all(|r| !r.is_empty()));
        assert_eq!(ranges.first().unwrap().start, 0);
        assert_eq!(ranges.last().unwrap().end, 2);
    }

    #[test]
    fn empty_buffer_renders_axes() {
        let buffer = SampleBuffer::new(Vec::new(), 48000);
        let text = TerminalPlotter::with_size(10, 3).render(&buffer, 0.5);
        assert_eq!(plot_rows(&text).len(), 3);
        assert!(!text.contains('*'));
    }
}
