//! Seeded fixture generation for property and golden-scenario tests.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A reproducible standard-normal latent field of `width*height` values,
/// deterministic for a given `seed` (same seed, same machine-independent
/// bit pattern, every run).
pub fn random_latent(width: u32, height: u32, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = (width as usize) * (height as usize);
    (0..n).map(|_| standard_normal(&mut rng)).collect()
}

/// Same as [`random_latent`] but with every sample shifted by `bias`,
/// mirroring `new_latent_design`'s `bias` parameter.
pub fn random_latent_biased(width: u32, height: u32, seed: u64, bias: f64) -> Vec<f64> {
    random_latent(width, height, seed)
        .into_iter()
        .map(|v| v + bias)
        .collect()
}

/// Box-Muller transform over `rand`'s uniform sampler; avoids taking a
/// dependency on a statistics crate for a single distribution.
fn standard_normal(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random_range(f64::EPSILON..1.0);
    let u2: f64 = rng.random_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}
