//! Fixed-size character grid written out one line per row.

use crate::constants::BLANK_GLYPH;
use std::io::{self, Write};

/// Row-major grid of glyphs, blank until set.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![BLANK_GLYPH; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Glyph at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    /// Set the glyph at `(row, col)`. Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, glyph: char) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = glyph;
        }
    }

    /// One string per row, each exactly `cols` characters long
    pub fn lines(&self) -> Vec<String> {
        if self.cols == 0 {
            return vec![String::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Write every row followed by a newline, stopping at the first error.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
