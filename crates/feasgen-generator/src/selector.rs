//! Step selector: the priority cascade deciding which touch to apply next.

use feasgen_morph::{argmax2d, argmin2d};

use crate::action::Action;
use crate::design::Design;
use crate::error::{GeneratorError, Result};
use crate::material::Material;

/// A latent-weighted argmin/argmax candidate, or "absent" (no candidates
/// in this mask) treated as selector value 0.
struct Candidate {
    pos: Option<(u32, u32)>,
    magnitude: f64,
}

fn weighted_sum(latent: &[f64], mask: &feasgen_core::BoolGrid) -> f64 {
    let width = mask.width();
    let mut total = 0.0;
    for y in 0..mask.height() {
        for x in 0..width {
            if mask.get_unchecked(x, y) {
                total += latent[(y * width + x) as usize];
            }
        }
    }
    total
}

fn argmin_candidate(latent: &[f64], mask: &feasgen_core::BoolGrid) -> Candidate {
    match argmin2d(latent, mask) {
        Some(pos) => {
            let width = mask.width();
            let v = latent[(pos.1 * width + pos.0) as usize];
            Candidate {
                pos: Some(pos),
                magnitude: v.abs(),
            }
        }
        None => Candidate {
            pos: None,
            magnitude: 0.0,
        },
    }
}

fn argmax_candidate(latent: &[f64], mask: &feasgen_core::BoolGrid) -> Candidate {
    match argmax2d(latent, mask) {
        Some(pos) => {
            let width = mask.width();
            let v = latent[(pos.1 * width + pos.0) as usize];
            Candidate {
                pos: Some(pos),
                magnitude: v.abs(),
            }
        }
        None => Candidate {
            pos: None,
            magnitude: 0.0,
        },
    }
}

/// Pick the next action given the current design state and latent field.
pub fn select_step(design: &Design, latent: &[f64]) -> Result<Action> {
    let void_free = design.touch_free(Material::Void);
    let solid_free = design.touch_free(Material::Solid);

    if !void_free.is_empty() || !solid_free.is_empty() {
        let s_v = if void_free.is_empty() { 0.0 } else { weighted_sum(latent, void_free) };
        let s_s = if solid_free.is_empty() { 0.0 } else { weighted_sum(latent, solid_free) };
        return Ok(if s_v.abs() > s_s.abs() {
            Action::TakeFreeVoid
        } else {
            Action::TakeFreeSolid
        });
    }

    let void_resolving = design.touch_resolving(Material::Void);
    let solid_resolving = design.touch_resolving(Material::Solid);
    let void_has_resolving = !void_resolving.is_empty();
    let solid_has_resolving = !solid_resolving.is_empty();

    if void_has_resolving || solid_has_resolving {
        if void_has_resolving && !solid_has_resolving {
            let c = argmin_candidate(latent, void_resolving);
            let (i, j) = c.pos.expect("non-empty resolving mask yields a candidate");
            return Ok(Action::ResolveVoid(i, j));
        }
        if solid_has_resolving && !void_has_resolving {
            let c = argmax_candidate(latent, solid_resolving);
            let (i, j) = c.pos.expect("non-empty resolving mask yields a candidate");
            return Ok(Action::ResolveSolid(i, j));
        }
        // both need resolving: kept per the original source despite being
        // flagged there as possibly redundant (see DESIGN.md).
        let void_c = argmin_candidate(latent, void_resolving);
        let solid_c = argmax_candidate(latent, solid_resolving);
        return Ok(if void_c.magnitude > solid_c.magnitude {
            let (i, j) = void_c.pos.unwrap();
            Action::ResolveVoid(i, j)
        } else {
            let (i, j) = solid_c.pos.unwrap();
            Action::ResolveSolid(i, j)
        });
    }

    let void_valid = design.touch_valid(Material::Void);
    let solid_valid = design.touch_valid(Material::Solid);
    let void_c = argmin_candidate(latent, void_valid);
    let solid_c = argmax_candidate(latent, solid_valid);

    match (void_c.pos, solid_c.pos) {
        (None, None) => Err(GeneratorError::InternalInvariantViolation(
            "no free, resolving, or valid touch exists while pixels remain unassigned".to_string(),
        )),
        (Some((i, j)), None) => Ok(Action::TouchVoid(i, j)),
        (None, Some((i, j))) => Ok(Action::TouchSolid(i, j)),
        (Some(_), Some(_)) => Ok(if void_c.magnitude > solid_c.magnitude {
            let (i, j) = void_c.pos.unwrap();
            Action::TouchVoid(i, j)
        } else {
            let (i, j) = solid_c.pos.unwrap();
            Action::TouchSolid(i, j)
        }),
    }
}
