//! Touch application: the ten-step mask update that commits one touch.

use feasgen_core::BoolGrid;
use feasgen_morph::{MorphError, dilate};

use crate::config::GeneratorConfig;
use crate::design::Design;
use crate::error::{GeneratorError, Result};
use crate::free_touch::{free_touches, reference_free_touches};
use crate::material::Material;
use crate::required::required_pixels;

/// Where to apply a touch: a single coordinate, or a mask for batch apply
/// (used by `TakeFreeVoid`/`TakeFreeSolid`).
pub enum TouchPos {
    Single(u32, u32),
    Mask(BoolGrid),
}

/// Apply one touch (or a batch of touches) of `material` to `design`,
/// returning the updated design. A no-op (returns an unchanged clone) if
/// every requested position is already in `touch_existing`.
pub fn add_touch(
    design: &Design,
    material: Material,
    pos: TouchPos,
    step: usize,
    config: &GeneratorConfig,
) -> Result<Design> {
    let width = design.width();
    let height = design.height();
    let brush = design.brush().clone();
    let opposite = material.opposite();

    let requested = match pos {
        TouchPos::Single(x, y) => {
            let mut m = BoolGrid::new(width, height)
                .map_err(MorphError::Core)?
                .try_into_mut()
                .unwrap();
            m.set_unchecked(x, y, true);
            let g: BoolGrid = m.into();
            g
        }
        TouchPos::Mask(mask) => mask,
    };

    let new_touches = requested
        .and(&design.touch_existing(material).not())
        .map_err(MorphError::Core)?;
    if new_touches.is_empty() {
        return Ok(design.clone());
    }

    let mut result = design.clone();

    // 1.
    let m_touch_existing = result
        .planes_for(material)
        .touch_existing
        .or(&new_touches)
        .map_err(MorphError::Core)?;

    // 2. only the newly-placed centers' footprint needs folding in; the
    // existing footprint is already present in pixel_existing.
    let new_pixels = dilate(&new_touches, &brush)?;
    let m_pixel_existing = result
        .planes_for(material)
        .pixel_existing
        .or(&new_pixels)
        .map_err(MorphError::Core)?;

    // 3.
    let o_touch_invalid = dilate(&m_pixel_existing, &brush)?;

    // 4.
    let m_pixel_required = required_pixels(&m_pixel_existing, &brush)?;

    // 5.
    let m_touch_valid = result
        .planes_for(material)
        .touch_valid
        .and(&result.planes_for(material).touch_invalid.not())
        .map_err(MorphError::Core)?
        .or(&result.planes_for(material).touch_resolving)
        .map_err(MorphError::Core)?
        .and(&m_touch_existing.not())
        .map_err(MorphError::Core)?;

    // 6.
    let pixels_mask = m_pixel_existing.or(&m_pixel_required).map_err(MorphError::Core)?;
    let m_touch_free = free_touches(&m_touch_existing, &pixels_mask, &brush)?;
    if config.cross_check_free_touch() {
        let naive = reference_free_touches(&m_touch_existing, &pixels_mask, &brush);
        if !m_touch_free.equals(&naive) {
            return Err(GeneratorError::InternalInvariantViolation(format!(
                "free-touch erosion form disagreed with the naive cross-check for {material:?} at step {step}"
            )));
        }
    }

    // 7.
    let m_touch_resolving = dilate(&m_pixel_required, &brush)?
        .and(&m_touch_valid)
        .map_err(MorphError::Core)?
        .and(&m_touch_free.not())
        .map_err(MorphError::Core)?;

    // 8.
    let o_touch_valid = result
        .planes_for(opposite)
        .touch_valid
        .and(&o_touch_invalid.not())
        .map_err(MorphError::Core)?;

    // 9.
    let o_pixel_impossible = result
        .planes_for(opposite)
        .pixel_impossible
        .or(&m_pixel_existing)
        .map_err(MorphError::Core)?
        .or(&m_pixel_required)
        .map_err(MorphError::Core)?;

    // 10. uses material m's own previous pixel_impossible, not the opposite's.
    let m_pixel_possible = result
        .planes_for(material)
        .pixel_possible
        .and(
            &m_pixel_existing
                .or(&result.planes_for(material).pixel_impossible)
                .map_err(MorphError::Core)?
                .not(),
        )
        .map_err(MorphError::Core)?;

    if m_touch_valid.is_empty() && !m_pixel_required.is_empty() {
        tracing::warn!(?material, step, "infeasible brush: required pixel with no valid touch");
        return Err(GeneratorError::InfeasibleBrush { material, step });
    }

    {
        let planes = result.planes_for_mut(material);
        planes.touch_existing = m_touch_existing;
        planes.pixel_existing = m_pixel_existing;
        planes.pixel_required = m_pixel_required;
        planes.touch_valid = m_touch_valid;
        planes.touch_free = m_touch_free;
        planes.touch_resolving = m_touch_resolving;
        planes.pixel_possible = m_pixel_possible;
    }
    {
        let opp = result.planes_for_mut(opposite);
        opp.touch_invalid = o_touch_invalid;
        opp.touch_valid = o_touch_valid;
        opp.pixel_impossible = o_pixel_impossible;
    }

    Ok(result)
}
