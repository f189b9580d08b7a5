//! BoolGrid - packed 1-bpp boolean plane
//!
//! `BoolGrid` is the fundamental mask type the generator is built from. It
//! packs one bit per pixel into `u32` words (MSB first, one row per 32-bit
//! boundary) and shares storage via `Arc` so that cloning a `Design` between
//! driver steps is cheap. Mutation goes through `BoolGridMut`, obtained via
//! [`BoolGrid::try_into_mut`] (in place, when uniquely owned) or
//! [`BoolGrid::to_mut`] (always copies).

use std::sync::Arc;

use crate::error::{Error, Result};

#[derive(Debug)]
struct GridData {
    width: u32,
    height: u32,
    wpl: u32,
    data: Vec<u32>,
}

/// An immutable, reference-counted packed boolean grid.
#[derive(Debug, Clone)]
pub struct BoolGrid {
    inner: Arc<GridData>,
}

/// A uniquely-owned, mutable packed boolean grid.
///
/// Convert back to [`BoolGrid`] with `.into()`.
#[derive(Debug)]
pub struct BoolGridMut {
    inner: GridData,
}

#[inline]
fn compute_wpl(width: u32) -> u32 {
    width.div_ceil(32)
}

#[inline]
fn get_data_bit(line: &[u32], x: u32) -> bool {
    let word = (x >> 5) as usize;
    let bit = 31 - (x & 31);
    (line[word] >> bit) & 1 != 0
}

#[inline]
fn set_data_bit(line: &mut [u32], x: u32, val: bool) {
    let word = (x >> 5) as usize;
    let bit = 31 - (x & 31);
    if val {
        line[word] |= 1 << bit;
    } else {
        line[word] &= !(1 << bit);
    }
}

impl BoolGrid {
    /// Create a new all-false grid.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = compute_wpl(width);
        let data = vec![0u32; (wpl as usize) * (height as usize)];
        Ok(BoolGrid {
            inner: Arc::new(GridData {
                width,
                height,
                wpl,
                data,
            }),
        })
    }

    /// Create a grid with every pixel set to `true`.
    pub fn new_filled(width: u32, height: u32) -> Result<Self> {
        let grid = Self::new(width, height)?;
        let mut m = grid.try_into_mut().unwrap();
        m.set_all();
        // trailing bits in the last word of each row belong to no column and
        // must stay clear, or they would corrupt later word-level AND/OR ops.
        m.clear_row_padding();
        Ok(m.into())
    }

    /// Build a grid from a row-major `bool` buffer.
    pub fn from_bools(width: u32, height: u32, values: &[bool]) -> Result<Self> {
        if (values.len() as u64) != (width as u64) * (height as u64) {
            return Err(Error::IncompatibleSizes(width, height, 0, 0));
        }
        let grid = Self::new(width, height)?;
        let mut m = grid.try_into_mut().unwrap();
        for y in 0..height {
            for x in 0..width {
                if values[(y * width + x) as usize] {
                    m.set_unchecked(x, y, true);
                }
            }
        }
        Ok(m.into())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y * self.inner.wpl) as usize;
        &self.inner.data[start..start + self.inner.wpl as usize]
    }

    /// Read a pixel. Out-of-bounds coordinates return `false`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width() || y >= self.height() {
            return false;
        }
        self.get_unchecked(x, y)
    }

    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> bool {
        get_data_bit(self.row_data(y), x)
    }

    /// `true` iff no pixel is set.
    pub fn is_empty(&self) -> bool {
        self.inner.data.iter().all(|&w| w == 0)
    }

    /// `true` iff every pixel is set.
    pub fn is_full(&self) -> bool {
        let width = self.width();
        let bits_used = width % 32;
        let full_words = (width / 32) as usize;
        let end_mask = if bits_used == 0 {
            0xFFFF_FFFFu32
        } else {
            !((1u32 << (32 - bits_used)) - 1)
        };
        for y in 0..self.height() {
            let line = self.row_data(y);
            if line[..full_words].iter().any(|&w| w != 0xFFFF_FFFF) {
                return false;
            }
            if bits_used != 0 && (line[full_words] & end_mask) != end_mask {
                return false;
            }
        }
        true
    }

    /// Count of set pixels.
    pub fn count_ones(&self) -> u64 {
        let width = self.width();
        let bits_used = width % 32;
        let full_words = (width / 32) as usize;
        let mut total = 0u64;
        for y in 0..self.height() {
            let line = self.row_data(y);
            for &w in &line[..full_words] {
                total += w.count_ones() as u64;
            }
            if bits_used != 0 {
                total += (line[full_words] >> (32 - bits_used)).count_ones() as u64;
            }
        }
        total
    }

    /// Exact equality: same dimensions and identical pixel values.
    pub fn equals(&self, other: &BoolGrid) -> bool {
        if self.width() != other.width() || self.height() != other.height() {
            return false;
        }
        let width = self.width();
        let bits_used = width % 32;
        let full_words = (width / 32) as usize;
        let end_mask = if bits_used == 0 {
            0xFFFF_FFFFu32
        } else {
            !((1u32 << (32 - bits_used)) - 1)
        };
        for y in 0..self.height() {
            let a = self.row_data(y);
            let b = other.row_data(y);
            if a[..full_words] != b[..full_words] {
                return false;
            }
            if bits_used != 0 && (a[full_words] & end_mask) != (b[full_words] & end_mask) {
                return false;
            }
        }
        true
    }

    fn check_same_size(&self, other: &BoolGrid) -> Result<()> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::IncompatibleSizes(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        Ok(())
    }

    /// Elementwise `self & other`.
    pub fn and(&self, other: &BoolGrid) -> Result<BoolGrid> {
        self.zip_words(other, |a, b| a & b)
    }

    /// Elementwise `self | other`.
    pub fn or(&self, other: &BoolGrid) -> Result<BoolGrid> {
        self.zip_words(other, |a, b| a | b)
    }

    /// Elementwise `self ^ other`.
    pub fn xor(&self, other: &BoolGrid) -> Result<BoolGrid> {
        self.zip_words(other, |a, b| a ^ b)
    }

    /// Elementwise `self & !other`.
    pub fn and_not(&self, other: &BoolGrid) -> Result<BoolGrid> {
        self.zip_words(other, |a, b| a & !b)
    }

    /// Elementwise complement.
    pub fn not(&self) -> BoolGrid {
        let mut m = self.to_mut();
        for word in m.inner.data.iter_mut() {
            *word = !*word;
        }
        m.clear_row_padding();
        m.into()
    }

    fn zip_words(&self, other: &BoolGrid, op: impl Fn(u32, u32) -> u32) -> Result<BoolGrid> {
        self.check_same_size(other)?;
        let mut out = BoolGrid::new(self.width(), self.height())?.try_into_mut().unwrap();
        for y in 0..self.height() {
            let a = self.row_data(y);
            let b = other.row_data(y);
            let o = out.row_data_mut(y);
            for i in 0..o.len() {
                o[i] = op(a[i], b[i]);
            }
        }
        Ok(out.into())
    }

    /// Try to get mutable access without copying; succeeds only if this is
    /// the sole owner of the underlying storage.
    pub fn try_into_mut(self) -> std::result::Result<BoolGridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(BoolGridMut { inner: data }),
            Err(arc) => Err(BoolGrid { inner: arc }),
        }
    }

    /// Always-copying mutable view.
    pub fn to_mut(&self) -> BoolGridMut {
        BoolGridMut {
            inner: GridData {
                width: self.inner.width,
                height: self.inner.height,
                wpl: self.inner.wpl,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl BoolGridMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let wpl = self.inner.wpl;
        let start = (y * wpl) as usize;
        &mut self.inner.data[start..start + wpl as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, val: bool) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        self.set_unchecked(x, y, val);
        Ok(())
    }

    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, val: bool) {
        let wpl = self.inner.wpl;
        let start = (y * wpl) as usize;
        let line = &mut self.inner.data[start..start + wpl as usize];
        set_data_bit(line, x, val);
    }

    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> bool {
        let wpl = self.inner.wpl;
        let start = (y * wpl) as usize;
        get_data_bit(&self.inner.data[start..start + wpl as usize], x)
    }

    fn set_all(&mut self) {
        self.inner.data.fill(0xFFFF_FFFF);
    }

    /// Clear padding bits past `width` in the last word of every row, so
    /// that word-level AND/OR/XOR never see garbage columns.
    fn clear_row_padding(&mut self) {
        let width = self.inner.width;
        let bits_used = width % 32;
        if bits_used == 0 {
            return;
        }
        let keep_mask = !((1u32 << (32 - bits_used)) - 1);
        let wpl = self.inner.wpl as usize;
        for y in 0..self.inner.height {
            let last = (y as usize + 1) * wpl - 1;
            self.inner.data[last] &= keep_mask;
        }
    }
}

impl From<BoolGridMut> for BoolGrid {
    fn from(m: BoolGridMut) -> Self {
        BoolGrid {
            inner: Arc::new(m.inner),
        }
    }
}
