//! Latent smoothing: brush-weighted correlation through a
//! `tanh` squashing nonlinearity, used to turn a raw latent field into the
//! bounded signal the selector consumes.

use feasgen_morph::Brush;

use crate::error::{GeneratorError, Result};

/// `tanh(beta * correlate(latent, brush) / brush.sum())`.
///
/// `correlate` sums `latent` at every brush hit offset around each cell,
/// treating out-of-bounds samples as zero. `beta` controls how sharply the
/// result saturates toward +-1; larger `beta` approaches a hard threshold.
pub fn transform(latent: &[f64], width: u32, height: u32, brush: &Brush, beta: f64) -> Result<Vec<f64>> {
    if latent.len() != (width as usize) * (height as usize) {
        return Err(GeneratorError::DimensionMismatch(format!(
            "latent field of length {} does not match grid {}x{}",
            latent.len(),
            width,
            height
        )));
    }
    let norm = brush.sum() as f64;
    let hits: Vec<(i32, i32)> = brush.hit_offsets().collect();

    let mut out = vec![0.0f64; latent.len()];
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let mut acc = 0.0f64;
            for &(dx, dy) in &hits {
                let sx = x + dx;
                let sy = y + dy;
                if sx >= 0 && sx < width as i32 && sy >= 0 && sy < height as i32 {
                    acc += latent[(sy as u32 * width + sx as u32) as usize];
                }
            }
            let idx = (y as u32 * width + x as u32) as usize;
            out[idx] = (beta * acc / norm).tanh();
        }
    }
    Ok(out)
}

/// Widens an `f32` latent buffer to the `f64` representation every
/// internal operation works over. The external interface accepts either
/// precision; `f64` is the one real arithmetic is actually done in.
pub fn latent_from_f32(latent: &[f32]) -> Vec<f64> {
    latent.iter().map(|&v| v as f64).collect()
}

/// `f32` counterpart of [`transform`], converting internally.
pub fn transform_f32(latent: &[f32], width: u32, height: u32, brush: &Brush, beta: f32) -> Result<Vec<f64>> {
    transform(&latent_from_f32(latent), width, height, brush, beta as f64)
}
