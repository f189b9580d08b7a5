//! Required-pixel analysis: which not-yet-committed pixels are forced.
//!
//! Expressed over `BoolGrid` word ops rather than per-pixel array scans.

use feasgen_core::BoolGrid;
use feasgen_morph::{Brush, MorphError, dilate};

/// Pixels not yet in `pixels` that cannot be covered by the opposite
/// material without overlapping `pixels`: `blocked = ¬P ∧ ¬dilate(P,B)`,
/// `required = ¬(dilate(blocked,B) ∨ P)`.
pub fn required_pixels(pixels: &BoolGrid, brush: &Brush) -> Result<BoolGrid, MorphError> {
    let dilated_pixels = dilate(pixels, brush)?;
    let blocked = pixels.not().and(&dilated_pixels.not())?;
    let dilated_blocked = dilate(&blocked, brush)?;
    Ok(dilated_blocked.or(pixels)?.not())
}
