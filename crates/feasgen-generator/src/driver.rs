//! Driver loop: iterate selector → touch application until no
//! pixel is unassigned.

use feasgen_morph::Brush;

use crate::action::Action;
use crate::config::GeneratorConfig;
use crate::design::Design;
use crate::error::{GeneratorError, Result};
use crate::material::Material;
use crate::selector::select_step;
use crate::touch::{TouchPos, add_touch};

fn apply_action(
    design: &Design,
    action: Action,
    step: usize,
    config: &GeneratorConfig,
) -> Result<Design> {
    match action {
        Action::TakeFreeVoid => add_touch(
            design,
            Material::Void,
            TouchPos::Mask(design.touch_free(Material::Void).clone()),
            step,
            config,
        ),
        Action::TakeFreeSolid => add_touch(
            design,
            Material::Solid,
            TouchPos::Mask(design.touch_free(Material::Solid).clone()),
            step,
            config,
        ),
        Action::ResolveVoid(i, j) | Action::TouchVoid(i, j) => {
            add_touch(design, Material::Void, TouchPos::Single(i, j), step, config)
        }
        Action::ResolveSolid(i, j) | Action::TouchSolid(i, j) => {
            add_touch(design, Material::Solid, TouchPos::Single(i, j), step, config)
        }
    }
}

/// Streams every intermediate `Design`, starting with the empty design and
/// yielding one more after each applied step. Exposed for diagnostics; most
/// callers want [`generate_feasible_design`] instead.
pub struct FeasibleDesignStream<'a> {
    design: Design,
    latent: &'a [f64],
    step: usize,
    max_steps: usize,
    config: GeneratorConfig,
    emitted_initial: bool,
    finished: bool,
    verbose: bool,
}

impl<'a> FeasibleDesignStream<'a> {
    pub fn new(
        width: u32,
        height: u32,
        brush: Brush,
        latent: &'a [f64],
        config: &GeneratorConfig,
        verbose: bool,
    ) -> Result<Self> {
        if latent.len() != (width as usize) * (height as usize) {
            return Err(GeneratorError::DimensionMismatch(format!(
                "latent field of length {} does not match grid {}x{}",
                latent.len(),
                width,
                height
            )));
        }
        let design = Design::empty(width, height, brush)?;
        let max_steps = config.max_steps_for(width, height);
        Ok(FeasibleDesignStream {
            design,
            latent,
            step: 0,
            max_steps,
            config: config.clone(),
            emitted_initial: false,
            finished: false,
            verbose,
        })
    }
}

impl<'a> Iterator for FeasibleDesignStream<'a> {
    type Item = Result<Design>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if !self.emitted_initial {
            self.emitted_initial = true;
            if self.verbose {
                tracing::debug!(step = self.step, "empty design");
            }
            return Some(Ok(self.design.clone()));
        }

        let has_unassigned = match self.design.has_unassigned() {
            Ok(v) => v,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };
        if !has_unassigned {
            self.finished = true;
            return None;
        }

        if self.step >= self.max_steps {
            self.finished = true;
            return Some(Err(GeneratorError::InternalInvariantViolation(format!(
                "exceeded step cap of {} without terminating",
                self.max_steps
            ))));
        }

        let action = match select_step(&self.design, self.latent) {
            Ok(a) => a,
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        };
        if self.verbose {
            tracing::debug!(step = self.step, ?action, "selected action");
        }

        match apply_action(&self.design, action, self.step, &self.config) {
            Ok(next_design) => {
                self.design = next_design;
                self.step += 1;
                Some(Ok(self.design.clone()))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

/// Drains the stream and returns the final, fully-assigned `Design`.
pub fn generate_feasible_design(
    width: u32,
    height: u32,
    brush: Brush,
    latent: &[f64],
    config: &GeneratorConfig,
    verbose: bool,
) -> Result<Design> {
    let stream = FeasibleDesignStream::new(width, height, brush, latent, config, verbose)?;
    let mut last = None;
    for design in stream {
        last = Some(design?);
    }
    last.ok_or_else(|| {
        GeneratorError::InternalInvariantViolation("driver produced no designs".to_string())
    })
}

/// `f32` counterpart of [`generate_feasible_design`], converting the
/// latent field internally. The reference implementation and golden
/// fixtures use `f32`; the generator itself always runs in `f64`.
pub fn generate_feasible_design_from_f32(
    width: u32,
    height: u32,
    brush: Brush,
    latent: &[f32],
    config: &GeneratorConfig,
    verbose: bool,
) -> Result<Design> {
    let latent64 = crate::latent::latent_from_f32(latent);
    generate_feasible_design(width, height, brush, &latent64, config, verbose)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_entry_point_matches_f64_after_widening() {
        let brush = Brush::square(3).unwrap();
        let latent32 = vec![0.0f32; 100];
        let latent64 = vec![0.0f64; 100];
        let config = GeneratorConfig::default();
        let a = generate_feasible_design_from_f32(10, 10, brush.clone(), &latent32, &config, false).unwrap();
        let b = generate_feasible_design(10, 10, brush, &latent64, &config, false).unwrap();
        assert!(a.pixel_existing(Material::Void).equals(b.pixel_existing(Material::Void)));
        assert!(a.pixel_existing(Material::Solid).equals(b.pixel_existing(Material::Solid)));
    }

    #[test]
    fn small_square_brush_terminates() {
        let brush = Brush::square(3).unwrap();
        let latent = vec![0.0f64; 100];
        let config = GeneratorConfig::default();
        let design = generate_feasible_design(10, 10, brush, &latent, &config, false).unwrap();
        assert!(!design.has_unassigned().unwrap());
    }

    #[test]
    fn constant_latent_fills_a_single_material() {
        // constant latent makes every round's void/solid candidate land on
        // the same cell with equal |latent|; the strict `>` tie-break in
        // the selector then always commits solid, independent of sign.
        let brush = Brush::square(3).unwrap();
        let config = GeneratorConfig::default();

        let latent = vec![1.0f64; 900];
        let design = generate_feasible_design(30, 30, brush.clone(), &latent, &config, false).unwrap();
        assert!(design.pixel_existing(Material::Solid).is_full());
        assert!(design.pixel_existing(Material::Void).is_empty());

        let latent = vec![-1.0f64; 900];
        let design = generate_feasible_design(30, 30, brush, &latent, &config, false).unwrap();
        assert!(design.pixel_existing(Material::Solid).is_full());
        assert!(design.pixel_existing(Material::Void).is_empty());
    }

    #[test]
    fn single_pixel_brush_matches_thresholded_sign() {
        // distinct, non-tied magnitudes so the valid-touch cascade resolves
        // each cell by sign rather than by lexicographic tie-break: at every
        // round the more extreme of (min remaining, max remaining) wins, and
        // with no ties that extremum always carries the "true" sign of its
        // own cell by the time it is finally chosen.
        let brush = Brush::square(1).unwrap();
        let latent = vec![0.9, -0.5, -0.7, 0.3];
        let config = GeneratorConfig::default();
        let design = generate_feasible_design(4, 1, brush, &latent, &config, false).unwrap();
        assert!(design.pixel_existing(Material::Solid).get(0, 0));
        assert!(design.pixel_existing(Material::Void).get(1, 0));
        assert!(design.pixel_existing(Material::Void).get(2, 0));
        assert!(design.pixel_existing(Material::Solid).get(3, 0));
    }

    #[test]
    fn latent_length_mismatch_is_dimension_mismatch() {
        let brush = Brush::square(3).unwrap();
        let latent = vec![0.0f64; 5];
        let config = GeneratorConfig::default();
        let err = generate_feasible_design(10, 10, brush, &latent, &config, false).unwrap_err();
        assert!(matches!(err, GeneratorError::DimensionMismatch(_)));
    }

    #[test]
    fn stream_yields_initial_design_then_monotone_progress() {
        let brush = Brush::square(3).unwrap();
        let latent = vec![0.0f64; 100];
        let config = GeneratorConfig::default();
        let stream = FeasibleDesignStream::new(10, 10, brush, &latent, &config, false).unwrap();
        let mut prev_committed = 0u64;
        let mut saw_initial_empty = false;
        for (i, design) in stream.enumerate() {
            let design = design.unwrap();
            let committed = design.pixel_existing(Material::Void).count_ones()
                + design.pixel_existing(Material::Solid).count_ones();
            if i == 0 {
                assert_eq!(committed, 0);
                saw_initial_empty = true;
            } else {
                assert!(committed >= prev_committed);
            }
            prev_committed = committed;
        }
        assert!(saw_initial_empty);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn terminal_design_is_a_feasible_partition(
            latent in prop::collection::vec(-3.0f64..3.0, 64),
        ) {
            let brush = Brush::square(3).unwrap();
            let config = GeneratorConfig::default();
            let design = generate_feasible_design(8, 8, brush, &latent, &config, false).unwrap();
            let void = design.pixel_existing(Material::Void);
            let solid = design.pixel_existing(Material::Solid);
            prop_assert!(void.and(solid).unwrap().is_empty());
            prop_assert!(void.or(solid).unwrap().is_full());
        }
    }
}
