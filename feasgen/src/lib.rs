//! feasgen - fabrication-feasible binary design generator
//!
//! Takes a real-valued latent field and a fixed brush (the fabrication
//! process's minimum feature), and synthesizes a two-material binary design
//! in which every region of either material can be reached by the brush
//! without crossing into the other — a design guaranteed fabricable under
//! that brush's minimum feature size.
//!
//! # Example
//!
//! ```
//! use feasgen::{generate_feasible_design, Brush, GeneratorConfig, Material};
//!
//! let brush = Brush::square(3).unwrap();
//! let latent = vec![0.0f64; 25];
//! let config = GeneratorConfig::default();
//! let design = generate_feasible_design(5, 5, brush, &latent, &config, false).unwrap();
//! assert!(!design.has_unassigned().unwrap());
//! let _ = design.label(0, 0); // PixelLabel::Void or ::Solid, never Unassigned
//! # let _ = Material::Void;
//! ```

pub use feasgen_core::{BoolGrid, BoolGridMut};
pub use feasgen_morph::{argmax2d, argmin2d, batch_dilate, dilate, dilate_point, erode, Brush};
pub use feasgen_generator::{
    generate_feasible_design, generate_feasible_design_from_f32, generate_feasible_design_mask,
    generate_feasible_design_mask_from_f32, jvp, latent_from_f32, transform, transform_f32,
    Action, Design, DesignMask, FeasibleDesignStream, GeneratorConfig, GeneratorError, Material,
    PixelLabel, Result,
};
