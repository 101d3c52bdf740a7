use alloc::vec::Vec;

/// A decoded bitmap. `1` is ink (black), `0` is paper (white).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    rows: Vec<Vec<u8>>,
}

impl PixelGrid {
    /// Builds a grid from already split rows.
    ///
    /// Rows are taken as they are; a short row simply has no pixels past its
    /// end, see [`PixelGrid::get`].
    pub fn from_rows(width: u32, height: u32, rows: Vec<Vec<u8>>) -> Self {
        Self { width, height, rows }
    }

    /// Reshapes a flat, row-major pixel sequence.
    /// Uses the first `width * height` entries, missing ones are paper.
    pub fn from_flat(width: u32, height: u32, pixels: &[u8]) -> Self {
        let w = width as usize;
        let rows = (0..height as usize)
            .map(|y| {
                let start = (y * w).min(pixels.len());
                let end = (start + w).min(pixels.len());
                let mut row = pixels[start..end].to_vec();
                row.resize(w, 0);
                row
            })
            .collect();
        Self { width, height, rows }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Pixel at `(x, y)`, `None` outside the stored data.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.rows.get(y as usize)?.get(x as usize).copied()
    }
}
