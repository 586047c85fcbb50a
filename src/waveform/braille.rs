//! Braille waveform rendering.
//!
//! Each braille character is a 2x4 dot matrix, so a grid of `rows x cols`
//! characters gives `rows * 4` vertical by `cols * 2` horizontal sub-pixels.
//! Every sub-column carries one dot: the mean of its bin, placed so silence
//! sits on the middle sub-row and positive amplitude moves up.

use super::binning::bin_means;
use super::canvas::Canvas;
use super::geometry::clamp_index;
use crate::constants::{BLANK_GLYPH, BRAILLE_BASE};

/// Dot bit for each `[subrow][subcolumn]` of a braille cell.
///
/// ```text
/// dot1=0x01  dot4=0x08
/// dot2=0x02  dot5=0x10
/// dot3=0x04  dot6=0x20
/// dot7=0x40  dot8=0x80
/// ```
pub const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Glyph for a cell bitmask; an empty mask is a plain space.
pub fn mask_to_glyph(mask: u8) -> char {
    if mask == 0 {
        return BLANK_GLYPH;
    }
    char::from_u32(BRAILLE_BASE + mask as u32).unwrap_or(BLANK_GLYPH)
}

/// Sub-pixel row for a mean amplitude in `[-1, 1]`.
///
/// Row 0 is the top. Silence maps to `round((pixel_height - 1) / 2)`.
pub fn amplitude_to_row(avg: f32, pixel_height: usize) -> usize {
    let max_row = pixel_height.saturating_sub(1) as f64;
    let center = max_row / 2.0;
    let y = center - avg as f64 * (pixel_height as f64 / 2.0);
    y.clamp(0.0, max_row).round() as usize
}

/// Per-character dot bitmasks for a braille canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SubpixelGrid {
    rows: usize,
    cols: usize,
    masks: Vec<u8>,
}

impl SubpixelGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            masks: vec![0; rows * cols],
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.cols * 2
    }

    pub fn pixel_height(&self) -> usize {
        self.rows * 4
    }

    /// Turn on the sub-pixel at column `px`, row `py`.
    pub fn set(&mut self, px: usize, py: usize) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }
        let char_row = clamp_index((py / 4) as i64, self.rows);
        let char_col = clamp_index((px / 2) as i64, self.cols);
        let bit = DOT_BITS[py % 4][px % 2];
        self.masks[char_row * self.cols + char_col] |= bit;
    }

    pub fn mask(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows || col >= self.cols {
            return 0;
        }
        self.masks[row * self.cols + col]
    }

    pub fn to_canvas(&self) -> Canvas {
        let mut canvas = Canvas::new(self.rows, self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                canvas.set(row, col, mask_to_glyph(self.mask(row, col)));
            }
        }
        canvas
    }
}

/// Plot `samples` as a braille trace `cols` wide and `char_rows` tall.
pub fn render(samples: &[f32], cols: usize, char_rows: usize) -> Canvas {
    let mut grid = SubpixelGrid::new(char_rows, cols);
    let pixel_height = grid.pixel_height();
    let means = bin_means(samples, grid.pixel_width());

    for (px, &avg) in means.iter().enumerate() {
        grid.set(px, amplitude_to_row(avg, pixel_height));
    }

    grid.to_canvas()
}
