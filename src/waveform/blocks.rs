//! Block-character waveform rendering.
//!
//! One column per bin, drawn as a bar centered on the middle row whose half
//! height follows the bin's peak amplitude.

use super::binning::bin_peaks;
use super::canvas::Canvas;
use super::geometry::clamp_index;
use crate::constants::{BLOCK_GLYPH, SILENCE_GLYPH};
use std::ops::RangeInclusive;

/// Half height in rows of a bar for `peak` around row `mid`
pub fn bar_half_height(peak: f32, mid: usize) -> usize {
    (peak as f64 * mid as f64).round().max(0.0) as usize
}

/// Rows covered by a bar of half height `half` around `mid`, clamped to the grid
pub fn bar_rows(mid: usize, half: usize, rows: usize) -> RangeInclusive<usize> {
    let top = clamp_index(mid as i64 - half as i64, rows);
    let bottom = clamp_index(mid as i64 + half as i64, rows);
    top..=bottom
}

/// Draw `samples` as block bars `cols` wide and `char_rows` tall.
pub fn render(samples: &[f32], cols: usize, char_rows: usize) -> Canvas {
    let mut canvas = Canvas::new(char_rows, cols);
    if char_rows == 0 {
        return canvas;
    }

    let mid = char_rows / 2;
    let peaks = bin_peaks(samples, cols);

    for (col, &peak) in peaks.iter().enumerate() {
        let half = bar_half_height(peak, mid);
        if half == 0 {
            canvas.set(clamp_index(mid as i64, char_rows), col, SILENCE_GLYPH);
            continue;
        }
        for row in bar_rows(mid, half, char_rows) {
            canvas.set(row, col, BLOCK_GLYPH);
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(canvas: &Canvas, col: usize) -> String {
        (0..canvas.rows())
            .map(|row| canvas.get(row, col).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_bar_half_height() {
        assert_eq!(bar_half_height(0.0, 5), 0);
        assert_eq!(bar_half_height(0.09, 5), 0);
        assert_eq!(bar_half_height(0.1, 5), 1);
        assert_eq!(bar_half_height(0.5, 4), 2);
        assert_eq!(bar_half_height(1.0, 5), 5);
    }

    #[test]
    fn test_bar_rows_symmetric_inside_grid() {
        let rows = 11;
        let mid = rows / 2;
        for half in 0..=mid {
            let range = bar_rows(mid, half, rows);
            assert_eq!(mid - range.start(), range.end() - mid);
            assert_eq!(range.clone().count(), 2 * half + 1);
        }
    }

    #[test]
    fn test_bar_rows_clamped_on_even_height() {
        // With 4 rows mid is 2 and a full bar would reach row 4
        assert_eq!(bar_rows(2, 2, 4), 0..=3);
    }

    #[test]
    fn test_render_silence_marks_middle_row() {
        let canvas = render(&[0.0; 1000], 10, 4);
        let lines = canvas.lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "·".repeat(10));
        for row in [0, 1, 3] {
            assert_eq!(lines[row], " ".repeat(10));
        }
    }

    #[test]
    fn test_render_bar_heights() {
        // Column 0 quiet, column 1 half scale, column 2 full scale
        let samples = [0.0, 0.0, 0.5, -0.5, 1.0, -0.2];
        let canvas = render(&samples, 3, 9);
        assert_eq!(column(&canvas, 0), "    ·    ");
        assert_eq!(column(&canvas, 1), "  █████  ");
        assert_eq!(column(&canvas, 2), "█████████");
    }

    #[test]
    fn test_render_short_input_defaults_to_silence() {
        let canvas = render(&[1.0], 4, 3);
        assert_eq!(column(&canvas, 0), "███");
        for col in 1..4 {
            assert_eq!(column(&canvas, col), " · ");
        }
    }

    #[test]
    fn test_render_single_row() {
        let canvas = render(&[1.0, 0.0], 2, 1);
        assert_eq!(canvas.lines(), vec!["··"]);
    }
}
