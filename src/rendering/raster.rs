//! 2D brightness grid and its text serialization

use crate::error::{Error, Result};
use crate::rendering::Palette;

/// Fixed-size grid of brightness values in [0, 1], origin at the top-left,
/// addressed row-major as (col = x, row = y).
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl RasterBuffer {
    /// Create an all-zero (black) buffer. Zero dimensions are rejected
    /// before any drawing can start.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0.0; width * height],
        })
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Write a brightness value at the cell nearest to (x, y).
    ///
    /// Out-of-bounds positions are silently discarded; a stray plot must
    /// never fail the render. Later plots at the same cell overwrite
    /// earlier ones.
    pub fn plot(&mut self, x: f64, y: f64, brightness: f64) {
        let col = x.round();
        let row = y.round();
        if col < 0.0 || row < 0.0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        self.cells[row * self.width + col] = brightness;
    }

    /// Brightness stored at an integer cell, if it is in bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Serialize the grid to text, top row first.
    ///
    /// Each cell's glyph is emitted twice to compensate for the roughly 2:1
    /// height:width aspect of terminal character cells, so every line is
    /// `2 * width` characters. Rows are joined with `\n`.
    pub fn serialize_with(&self, palette: &Palette) -> String {
        let mut out = String::with_capacity(self.height * (self.width * 2 + 1));
        for row in self.cells.chunks(self.width) {
            if !out.is_empty() {
                out.push('\n');
            }
            for &cell in row {
                let glyph = palette.char_for(cell);
                out.push(glyph);
                out.push(glyph);
            }
        }
        out
    }
}
