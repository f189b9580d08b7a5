//! Binary dilation by a [`Brush`].

use feasgen_core::BoolGrid;

use crate::{Brush, MorphResult};

/// Dilate `grid` by `brush`: a pixel is set in the output iff some hit
/// offset of `brush`, centered on that pixel, lands on a set pixel of
/// `grid`. Pixels outside the grid are treated as unset (zero padding).
pub fn dilate(grid: &BoolGrid, brush: &Brush) -> MorphResult<BoolGrid> {
    let w = grid.width();
    let h = grid.height();
    let offsets: Vec<_> = brush.hit_offsets().collect();

    let mut out = BoolGrid::new(w, h)?.try_into_mut().unwrap();
    for y in 0..h {
        for x in 0..w {
            let hit = offsets.iter().any(|&(dx, dy)| {
                let sx = x as i32 + dx;
                let sy = y as i32 + dy;
                sx >= 0 && sx < w as i32 && sy >= 0 && sy < h as i32 && grid.get_unchecked(sx as u32, sy as u32)
            });
            if hit {
                out.set_unchecked(x, y, true);
            }
        }
    }
    Ok(out.into())
}

/// Dilate the single-point mask `{center}` by `brush`, i.e. the brush
/// footprint stamped at `center`. Equivalent to, but far cheaper than,
/// building a one-pixel grid and calling [`dilate`].
pub fn dilate_point(center: (u32, u32), brush: &Brush, width: u32, height: u32) -> MorphResult<BoolGrid> {
    let mut out = BoolGrid::new(width, height)?.try_into_mut().unwrap();
    let (cx, cy) = center;
    for (dx, dy) in brush.hit_offsets() {
        let sx = cx as i32 + dx;
        let sy = cy as i32 + dy;
        if sx >= 0 && sx < width as i32 && sy >= 0 && sy < height as i32 {
            out.set_unchecked(sx as u32, sy as u32, true);
        }
    }
    Ok(out.into())
}

/// For every set pixel of `centers`, compute its individual brush footprint.
/// Used only by the naive O(m·n·bm·bn) free-touch cross-check — the
/// production path uses the erosion form instead (see `feasgen-generator`'s
/// `free_touch` module).
pub fn batch_dilate(centers: &BoolGrid, brush: &Brush) -> MorphResult<Vec<((u32, u32), BoolGrid)>> {
    let w = centers.width();
    let h = centers.height();
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if centers.get_unchecked(x, y) {
                out.push(((x, y), dilate_point((x, y), brush, w, h)?));
            }
        }
    }
    Ok(out)
}
