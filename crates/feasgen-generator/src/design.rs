//! The `Design` aggregate: eight boolean planes per material, tracking
//! pixel and touch state as the generator paints void and solid regions.

use feasgen_core::BoolGrid;
use feasgen_morph::Brush;

use crate::error::{GeneratorError, Result};
use crate::material::Material;

/// The eight boolean planes the generator maintains for one material, plus
/// the opposite-plane `touch_invalid` bookkeeping mask.
#[derive(Debug, Clone)]
pub(crate) struct MaterialPlanes {
    pub(crate) pixel_existing: BoolGrid,
    pub(crate) pixel_required: BoolGrid,
    pub(crate) pixel_possible: BoolGrid,
    pub(crate) pixel_impossible: BoolGrid,
    pub(crate) touch_existing: BoolGrid,
    pub(crate) touch_valid: BoolGrid,
    pub(crate) touch_free: BoolGrid,
    pub(crate) touch_resolving: BoolGrid,
    pub(crate) touch_invalid: BoolGrid,
}

/// A design in progress (or complete): the full state of the conditional
/// feasibility generator.
#[derive(Debug, Clone)]
pub struct Design {
    width: u32,
    height: u32,
    brush: Brush,
    void: MaterialPlanes,
    solid: MaterialPlanes,
}

/// A pixel has at most one committed material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLabel {
    Unassigned,
    Void,
    Solid,
}

fn brush_fits_at(brush: &Brush, x: u32, y: u32, width: u32, height: u32) -> bool {
    brush.hit_offsets().all(|(dx, dy)| {
        let sx = x as i32 + dx;
        let sy = y as i32 + dy;
        sx >= 0 && sx < width as i32 && sy >= 0 && sy < height as i32
    })
}

impl Design {
    /// A fresh design with no material committed. `touch_valid` is true
    /// everywhere the brush fits flush inside the grid, false elsewhere.
    pub fn empty(width: u32, height: u32, brush: Brush) -> Result<Self> {
        if width < brush.width() || height < brush.height() {
            return Err(GeneratorError::DimensionMismatch(format!(
                "brush {}x{} does not fit in grid {}x{}",
                brush.width(),
                brush.height(),
                width,
                height
            )));
        }

        let mut fits = BoolGrid::new(width, height)
            .map_err(feasgen_morph::MorphError::Core)?
            .try_into_mut()
            .unwrap();
        for y in 0..height {
            for x in 0..width {
                if brush_fits_at(&brush, x, y, width, height) {
                    fits.set_unchecked(x, y, true);
                }
            }
        }
        let touch_valid_init: BoolGrid = fits.into();

        let empty_grid = || BoolGrid::new(width, height).map_err(feasgen_morph::MorphError::Core);
        let full_grid = || BoolGrid::new_filled(width, height).map_err(feasgen_morph::MorphError::Core);

        let make_planes = |touch_valid: BoolGrid| -> Result<MaterialPlanes> {
            Ok(MaterialPlanes {
                pixel_existing: empty_grid()?,
                pixel_required: empty_grid()?,
                pixel_possible: full_grid()?,
                pixel_impossible: empty_grid()?,
                touch_existing: empty_grid()?,
                touch_valid,
                touch_free: empty_grid()?,
                touch_resolving: empty_grid()?,
                touch_invalid: empty_grid()?,
            })
        };

        Ok(Design {
            width,
            height,
            brush,
            void: make_planes(touch_valid_init.clone())?,
            solid: make_planes(touch_valid_init)?,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    fn planes(&self, material: Material) -> &MaterialPlanes {
        match material {
            Material::Void => &self.void,
            Material::Solid => &self.solid,
        }
    }

    fn planes_mut(&mut self, material: Material) -> &mut MaterialPlanes {
        match material {
            Material::Void => &mut self.void,
            Material::Solid => &mut self.solid,
        }
    }

    pub fn pixel_existing(&self, material: Material) -> &BoolGrid {
        &self.planes(material).pixel_existing
    }

    pub fn pixel_required(&self, material: Material) -> &BoolGrid {
        &self.planes(material).pixel_required
    }

    pub fn pixel_possible(&self, material: Material) -> &BoolGrid {
        &self.planes(material).pixel_possible
    }

    pub fn pixel_impossible(&self, material: Material) -> &BoolGrid {
        &self.planes(material).pixel_impossible
    }

    pub fn touch_existing(&self, material: Material) -> &BoolGrid {
        &self.planes(material).touch_existing
    }

    pub fn touch_valid(&self, material: Material) -> &BoolGrid {
        &self.planes(material).touch_valid
    }

    pub fn touch_free(&self, material: Material) -> &BoolGrid {
        &self.planes(material).touch_free
    }

    pub fn touch_resolving(&self, material: Material) -> &BoolGrid {
        &self.planes(material).touch_resolving
    }

    pub fn touch_invalid(&self, material: Material) -> &BoolGrid {
        &self.planes(material).touch_invalid
    }

    /// `true` iff some pixel has no committed material.
    pub fn has_unassigned(&self) -> Result<bool> {
        let committed = self
            .void
            .pixel_existing
            .or(&self.solid.pixel_existing)
            .map_err(feasgen_morph::MorphError::Core)?;
        Ok(!committed.is_full())
    }

    pub fn label(&self, x: u32, y: u32) -> PixelLabel {
        if self.void.pixel_existing.get(x, y) {
            PixelLabel::Void
        } else if self.solid.pixel_existing.get(x, y) {
            PixelLabel::Solid
        } else {
            PixelLabel::Unassigned
        }
    }

    pub(crate) fn planes_for(&self, material: Material) -> &MaterialPlanes {
        self.planes(material)
    }

    pub(crate) fn planes_for_mut(&mut self, material: Material) -> &mut MaterialPlanes {
        self.planes_mut(material)
    }
}
