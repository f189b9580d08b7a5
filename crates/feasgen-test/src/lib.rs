//! feasgen-test - regression test framework for feasgen
//!
//! Supports three `REGTEST_MODE` modes (generate/compare/display), mirroring
//! the morphology kernel's own regression harness, plus seeded latent-field
//! fixture generation for property tests that need reproducible randomness.

mod error;
mod fixture;
mod params;

pub use error::{TestError, TestResult};
pub use fixture::{random_latent, random_latent_biased};
pub use params::{RegParams, RegTestMode};

fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    format!("{}/../..", manifest_dir)
}

/// Path to the golden files directory.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Path to the regression output directory.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
