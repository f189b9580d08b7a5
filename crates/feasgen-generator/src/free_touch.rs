//! Free-touch analysis: which unused centers would add nothing new.
//!
//! Production path uses the erosion form (O(m·n)). The naive per-center
//! form stays available as [`reference_free_touches`], an O(m·n·bm·bn)
//! cross-check [`crate::config::GeneratorConfig::cross_check_free_touch`]
//! can enable alongside it.

use feasgen_core::BoolGrid;
use feasgen_morph::{Brush, MorphError, batch_dilate, erode};

/// Centers not yet used (`¬touch_existing`) whose brush footprint is
/// already contained in `pixels_mask`: `erode(pixels_mask, B) ∧ ¬touch_existing`.
pub fn free_touches(
    touch_existing: &BoolGrid,
    pixels_mask: &BoolGrid,
    brush: &Brush,
) -> Result<BoolGrid, MorphError> {
    let covered = erode(pixels_mask, brush)?;
    Ok(covered.and(&touch_existing.not())?)
}

/// Naive per-center formulation: for every candidate center not already
/// used, dilate the singleton and test whether it is a subset of
/// `pixels_mask`. O(m·n·bm·bn); used only as a cross-check for
/// [`free_touches`], never on the hot path.
pub(crate) fn reference_free_touches(
    touch_existing: &BoolGrid,
    pixels_mask: &BoolGrid,
    brush: &Brush,
) -> BoolGrid {
    let width = touch_existing.width();
    let height = touch_existing.height();
    let candidates = touch_existing.not();
    let footprints = batch_dilate(&candidates, brush).unwrap();
    let mut out = BoolGrid::new(width, height).unwrap().try_into_mut().unwrap();
    for ((x, y), footprint) in footprints {
        let subset = (0..height)
            .all(|fy| (0..width).all(|fx| !footprint.get(fx, fy) || pixels_mask.get(fx, fy)));
        if subset {
            out.set_unchecked(x, y, true);
        }
    }
    out.into()
}
