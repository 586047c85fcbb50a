//! Waveform rendering for the terminal.
//!
//! This module turns a normalized mono [`SampleBuffer`] into a grid of text
//! sized to the terminal, in one of two styles:
//!
//! 1. **Braille** - a continuous trace at 2x4 sub-pixel resolution, one dot
//!    per sub-column placed at the mean amplitude of its bin
//! 2. **Ascii** - a centered block bar per column sized by the peak amplitude
//!    of its bin
//!
//! Rendering is deterministic: the same samples and geometry always produce
//! byte-identical output.

pub mod binning;
pub mod blocks;
pub mod braille;
mod canvas;
mod error;
pub mod geometry;
mod samples;

pub use canvas::Canvas;
pub use error::RenderError;
pub use geometry::{TerminalSize, clamp_index};
pub use samples::{SampleBuffer, normalize, peak_abs};

use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Visual style of the rendered waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Braille,
    Ascii,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Braille => "braille",
            RenderMode::Ascii => "ascii",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "braille" => Ok(RenderMode::Braille),
            "ascii" => Ok(RenderMode::Ascii),
            other => Err(RenderError::UnknownMode(other.to_string())),
        }
    }
}

/// Settings for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Requested height in character rows; zero or less uses the available height
    pub height: i32,
}

impl RenderConfig {
    /// Build a config from a mode name, rejecting names we cannot render.
    pub fn new(mode: &str, height: i32) -> Result<Self, RenderError> {
        Ok(Self {
            mode: mode.parse()?,
            height,
        })
    }
}

/// Build the canvas for `samples` without writing it anywhere.
///
/// An empty buffer yields an empty canvas with no rows.
pub fn draw(samples: &SampleBuffer, config: &RenderConfig, size: TerminalSize) -> Canvas {
    if samples.is_empty() {
        return Canvas::new(0, size.cols as usize);
    }

    let cols = size.cols as usize;
    let char_rows = size.char_rows(config.height);
    log::debug!(
        "Rendering {} samples as {} into {}x{} cells",
        samples.len(),
        config.mode,
        cols,
        char_rows
    );

    match config.mode {
        RenderMode::Braille => braille::render(samples.samples(), cols, char_rows),
        RenderMode::Ascii => blocks::render(samples.samples(), cols, char_rows),
    }
}

/// Render `samples` and write one newline-terminated line per row to `out`.
///
/// The first failed write is returned as [`RenderError::Io`]; lines already
/// written stay in the sink.
pub fn render<W: Write>(
    samples: &SampleBuffer,
    config: &RenderConfig,
    size: TerminalSize,
    out: &mut W,
) -> Result<(), RenderError> {
    draw(samples, config, size).write_to(out)?;
    Ok(())
}
