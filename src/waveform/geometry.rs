//! Terminal geometry resolution and coordinate clamping.

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use std::io;

/// Character grid available for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl TerminalSize {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Query the controlling terminal, falling back to 80x24.
    pub fn detect() -> Self {
        Self::from_query(crossterm::terminal::size())
    }

    /// Turn the result of a terminal size query into a usable size.
    ///
    /// A failed query, or one reporting a zero dimension, yields the default
    /// size. The failure is logged and never surfaced to the caller.
    pub fn from_query(result: io::Result<(u16, u16)>) -> Self {
        match result {
            Ok((cols, rows)) if cols > 0 && rows > 0 => Self { cols, rows },
            Ok((cols, rows)) => {
                log::debug!("Terminal reported {cols}x{rows}, using default size");
                Self::default()
            }
            Err(e) => {
                log::debug!("Terminal size unavailable ({e}), using default size");
                Self::default()
            }
        }
    }

    /// Number of character rows to render for a requested height.
    ///
    /// A request of zero or less, or one that would not leave a spare row for
    /// the prompt, is clamped to `rows - 1`. Never returns less than 1.
    pub fn char_rows(&self, requested: i32) -> usize {
        let available = self.rows as i64 - 1;
        let requested = requested as i64;
        let rows = if requested <= 0 || requested > available {
            available
        } else {
            requested
        };
        rows.max(1) as usize
    }
}

/// Clamp a possibly out-of-range coordinate into `[0, len - 1]`.
///
/// `len` must be non-zero.
pub fn clamp_index(value: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    value.clamp(0, len as i64 - 1) as usize
}
