//! Two-dimensional grid of module bits.

/// Opaque black, ARGB.
pub const BLACK: u32 = 0xFF00_0000;
/// Opaque white, ARGB.
pub const WHITE: u32 = 0xFFFF_FFFF;

/// A `width` x `height` grid of boolean cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl BitMatrix {
    /// Creates an all-unset matrix.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at (x, y); out-of-range cells read as unset.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.bits[y * self.width + x]
    }

    /// Sets every cell of the rectangle clipped to the matrix bounds.
    pub fn set_region(&mut self, left: usize, top: usize, width: usize, height: usize) {
        let right = (left + width).min(self.width);
        let bottom = (top + height).min(self.height);
        for y in top..bottom {
            let row = y * self.width;
            self.bits[row + left.min(right)..row + right].fill(true);
        }
    }

    /// Maps set cells to [`BLACK`] and unset cells to [`WHITE`], row-major.
    #[must_use]
    pub fn to_argb(&self) -> Vec<u32> {
        self.bits
            .iter()
            .map(|&set| if set { BLACK } else { WHITE })
            .collect()
    }

    /// Renders each row as a string of `1` (set) and `0` (unset).
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.bits
            .chunks(self.width)
            .map(|row| row.iter().map(|&set| if set { '1' } else { '0' }).collect())
            .collect()
    }
}
