//! Straight-through estimator: a coarse, differentiable-facing
//! wrapper around the discrete generator for use inside a gradient-based
//! optimization loop.
//!
//! The forward pass runs the real generator and reports its committed
//! pixels as a boolean mask. Because the generator's control flow is
//! discrete (sign and order of touches), no true gradient w.r.t. `latent`
//! exists; callers needing to backpropagate through this step should treat
//! it as the identity on `latent` and use [`jvp`] to propagate a
//! forward-mode tangent unchanged.

use feasgen_morph::Brush;

use crate::config::GeneratorConfig;
use crate::driver::generate_feasible_design;
use crate::error::Result;
use crate::material::Material;

/// The two committed-pixel masks a design reduces to once generation
/// finishes: `void` and `solid` are always disjoint and together cover the
/// whole grid.
#[derive(Debug, Clone)]
pub struct DesignMask {
    pub void: feasgen_core::BoolGrid,
    pub solid: feasgen_core::BoolGrid,
}

/// Run the generator to completion and reduce the result to its two
/// committed-pixel masks.
pub fn generate_feasible_design_mask(
    width: u32,
    height: u32,
    brush: Brush,
    latent: &[f64],
    config: &GeneratorConfig,
) -> Result<DesignMask> {
    let design = generate_feasible_design(width, height, brush, latent, config, false)?;
    Ok(DesignMask {
        void: design.pixel_existing(Material::Void).clone(),
        solid: design.pixel_existing(Material::Solid).clone(),
    })
}

/// `f32` counterpart of [`generate_feasible_design_mask`], converting the
/// latent field internally.
pub fn generate_feasible_design_mask_from_f32(
    width: u32,
    height: u32,
    brush: Brush,
    latent: &[f32],
    config: &GeneratorConfig,
) -> Result<DesignMask> {
    let latent64 = crate::latent::latent_from_f32(latent);
    generate_feasible_design_mask(width, height, brush, &latent64, config)
}

/// Forward-mode tangent propagation through [`generate_feasible_design_mask`]:
/// the identity function on the latent tangent. This is the straight-through
/// estimator's defining property, not an approximation derived from the
/// generator's (nonexistent) true derivative.
pub fn jvp(latent_tangent: &[f64]) -> Vec<f64> {
    latent_tangent.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_reduction_partitions_the_grid() {
        let brush = Brush::square(3).unwrap();
        let latent = vec![0.0f64; 100];
        let config = GeneratorConfig::default();
        let mask = generate_feasible_design_mask(10, 10, brush, &latent, &config).unwrap();
        let union = mask.void.or(&mask.solid).unwrap();
        let intersection = mask.void.and(&mask.solid).unwrap();
        assert!(union.is_full());
        assert!(intersection.is_empty());
    }

    #[test]
    fn jvp_is_the_identity() {
        let tangent = vec![0.1, -2.0, 3.5];
        assert_eq!(jvp(&tangent), tangent);
    }

    #[test]
    fn f32_entry_point_matches_f64_after_widening() {
        let brush = Brush::square(3).unwrap();
        let latent32 = vec![0.0f32; 100];
        let latent64 = vec![0.0f64; 100];
        let config = GeneratorConfig::default();
        let a = generate_feasible_design_mask_from_f32(10, 10, brush.clone(), &latent32, &config).unwrap();
        let b = generate_feasible_design_mask(10, 10, brush, &latent64, &config).unwrap();
        assert!(a.void.equals(&b.void));
        assert!(a.solid.equals(&b.solid));
    }
}
