//! Brush: the fixed structuring element a design is painted with.
//!
//! Unlike a general hit/miss SEL, a brush has no "miss" positions — it is a
//! plain boolean footprint, translation-invariant, with odd width/height and
//! a geometric center. `dilate`/`erode` only ever need the hit positions.

use crate::{MorphError, MorphResult};

/// A fixed painting stencil with odd dimensions and a geometric center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brush {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Brush {
    /// Build a brush from a row-major dense boolean footprint. Both
    /// dimensions must be odd so a geometric center exists.
    pub fn from_bools(width: u32, height: u32, data: Vec<bool>) -> MorphResult<Self> {
        if width == 0 || height == 0 || width % 2 == 0 || height % 2 == 0 {
            return Err(MorphError::InvalidSel(format!(
                "brush dimensions must be odd and nonzero, got {width}x{height}"
            )));
        }
        if data.len() != (width as usize) * (height as usize) {
            return Err(MorphError::InvalidSel(
                "brush data length does not match width*height".to_string(),
            ));
        }
        if !data.iter().any(|&b| b) {
            return Err(MorphError::InvalidSel(
                "brush must have at least one hit".to_string(),
            ));
        }
        Ok(Brush {
            width,
            height,
            data,
        })
    }

    /// Build a brush from a row-major dense `f32` footprint, thresholding
    /// each value `> 0` to a hit. The external-facing counterpart of
    /// [`Brush::from_bools`] for callers that carry brushes as float arrays.
    pub fn from_f32(width: u32, height: u32, data: &[f32]) -> MorphResult<Self> {
        Self::from_bools(width, height, data.iter().map(|&v| v > 0.0).collect())
    }

    /// A fully-solid square brush of odd `size`.
    pub fn square(size: u32) -> MorphResult<Self> {
        Self::from_bools(size, size, vec![true; (size * size) as usize])
    }

    /// A square brush with its four corners removed (a coarse "octagon"),
    /// used to break the square's diagonal-propagation artifacts. `notch`
    /// is the side length of the removed corner triangles' bounding square.
    pub fn notched_square(size: u32, notch: u32) -> MorphResult<Self> {
        if notch == 0 {
            return Self::square(size);
        }
        if 2 * notch >= size {
            return Err(MorphError::InvalidSel(format!(
                "notch {notch} too large for size {size}"
            )));
        }
        let mut data = vec![true; (size * size) as usize];
        for y in 0..notch {
            for x in 0..notch {
                if x + y < notch {
                    let corners = [
                        (x, y),
                        (size - 1 - x, y),
                        (x, size - 1 - y),
                        (size - 1 - x, size - 1 - y),
                    ];
                    for (cx, cy) in corners {
                        data[(cy * size + cx) as usize] = false;
                    }
                }
            }
        }
        Self::from_bools(size, size, data)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Geometric center column.
    #[inline]
    pub fn cx(&self) -> i32 {
        (self.width / 2) as i32
    }

    /// Geometric center row.
    #[inline]
    pub fn cy(&self) -> i32 {
        (self.height / 2) as i32
    }

    /// Total number of hit cells.
    pub fn sum(&self) -> u32 {
        self.data.iter().filter(|&&b| b).count() as u32
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data[(y * self.width + x) as usize]
    }

    /// Hit positions as `(dx, dy)` offsets relative to the center.
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx();
        let cy = self.cy();
        let width = self.width;
        self.data.iter().enumerate().filter_map(move |(idx, &hit)| {
            if hit {
                let x = (idx as u32 % width) as i32;
                let y = (idx as u32 / width) as i32;
                Some((x - cx, y - cy))
            } else {
                None
            }
        })
    }
}
