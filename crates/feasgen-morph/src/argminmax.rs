//! Deterministic row-major argmin/argmax over a masked region of an `f64`
//! field, used by the step selector to break ties lexicographically.

/// Index of the minimum value of `field` among positions where `mask` is
/// set, scanning row-major and keeping the first (lexicographically
/// smallest `(row, col)`) minimum encountered. `None` if `mask` is empty.
pub fn argmin2d(field: &[f64], mask: &feasgen_core::BoolGrid) -> Option<(u32, u32)> {
    extremum2d(field, mask, |best, candidate| candidate < best)
}

/// Index of the maximum value of `field` among positions where `mask` is
/// set, scanning row-major and keeping the first maximum encountered.
/// `None` if `mask` is empty.
pub fn argmax2d(field: &[f64], mask: &feasgen_core::BoolGrid) -> Option<(u32, u32)> {
    extremum2d(field, mask, |best, candidate| candidate > best)
}

fn extremum2d(
    field: &[f64],
    mask: &feasgen_core::BoolGrid,
    is_better: impl Fn(f64, f64) -> bool,
) -> Option<(u32, u32)> {
    let width = mask.width();
    let height = mask.height();
    let mut best: Option<(u32, u32, f64)> = None;
    for y in 0..height {
        for x in 0..width {
            if !mask.get_unchecked(x, y) {
                continue;
            }
            let v = field[(y * width + x) as usize];
            match best {
                Some((_, _, b)) if !is_better(b, v) => {}
                _ => best = Some((x, y, v)),
            }
        }
    }
    best.map(|(x, y, _)| (x, y))
}
