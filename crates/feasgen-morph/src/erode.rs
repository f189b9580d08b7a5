//! Binary erosion by a [`Brush`].

use feasgen_core::BoolGrid;

use crate::{Brush, MorphResult};

/// Erode `grid` by `brush`: a pixel is set in the output iff every hit
/// offset of `brush`, centered on that pixel, lands on a set pixel of
/// `grid`. Positions whose brush footprint would fall outside the grid
/// are never set (zero padding means an out-of-bounds hit is unmet).
pub fn erode(grid: &BoolGrid, brush: &Brush) -> MorphResult<BoolGrid> {
    let w = grid.width();
    let h = grid.height();
    let offsets: Vec<_> = brush.hit_offsets().collect();

    let mut out = BoolGrid::new(w, h)?.try_into_mut().unwrap();
    for y in 0..h {
        for x in 0..w {
            let all_hit = offsets.iter().all(|&(dx, dy)| {
                let sx = x as i32 + dx;
                let sy = y as i32 + dy;
                sx >= 0 && sx < w as i32 && sy >= 0 && sy < h as i32 && grid.get_unchecked(sx as u32, sy as u32)
            });
            if all_hit {
                out.set_unchecked(x, y, true);
            }
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erode_shrinks_solid_block() {
        let mut g = BoolGrid::new(5, 5).unwrap().try_into_mut().unwrap();
        for y in 0..5 {
            for x in 0..5 {
                g.set_unchecked(x, y, true);
            }
        }
        let g: BoolGrid = g.into();
        let brush = Brush::square(3).unwrap();
        let e = erode(&g, &brush).unwrap();
        // only the interior 3x3 survives a 3x3 brush erosion on a 5x5 full block
        assert_eq!(e.count_ones(), 9);
        assert!(e.get(2, 2));
        assert!(!e.get(0, 0));
    }

    #[test]
    fn erode_of_empty_is_empty() {
        let g = BoolGrid::new(5, 5).unwrap();
        let brush = Brush::square(3).unwrap();
        let e = erode(&g, &brush).unwrap();
        assert!(e.is_empty());
    }

    #[test]
    fn single_point_brush_is_identity() {
        let mut g = BoolGrid::new(4, 4).unwrap().try_into_mut().unwrap();
        g.set_unchecked(1, 1, true);
        g.set_unchecked(2, 3, true);
        let g: BoolGrid = g.into();
        let brush = Brush::square(1).unwrap();
        let d = crate::dilate::dilate(&g, &brush).unwrap();
        let e = erode(&g, &brush).unwrap();
        assert!(d.equals(&g));
        assert!(e.equals(&g));
    }
}
