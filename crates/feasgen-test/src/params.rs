//! Regression test parameters and operations

use std::fs;
use std::path::Path;

use feasgen_core::BoolGrid;

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test, including the test name, current
/// index, mode, and success status, mirroring the convention the morphology
/// kernel the generator is built on uses for its own image-comparison tests.
pub struct RegParams {
    pub test_name: String,
    index: usize,
    pub mode: RegTestMode,
    success: bool,
    failures: Vec<String>,
}

fn grid_bytes(grid: &BoolGrid) -> Vec<u8> {
    let mut out = Vec::with_capacity((grid.height() * grid.wpl() * 4) as usize);
    for y in 0..grid.height() {
        for word in grid.row_data(y) {
            out.extend_from_slice(&word.to_le_bytes());
        }
    }
    out
}

impl RegParams {
    /// Create new regression test parameters, configured from `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("//// {}_reg ////", test_name);
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare a `BoolGrid` against its golden file (by packed row bytes,
    /// ignoring trailing padding bits past `width`).
    pub fn compare_grid(&mut self, grid: &BoolGrid) -> TestResult<bool> {
        self.index += 1;
        let local_path = format!("{}/{}.{:02}.grid", regout_dir(), self.test_name, self.index);
        let golden_path = format!(
            "{}/{}_golden.{:02}.grid",
            golden_dir(),
            self.test_name,
            self.index
        );

        fs::write(&local_path, grid_bytes(grid))?;

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(&local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
                Ok(true)
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    let msg = format!("golden file not found: {}", golden_path);
                    eprintln!("{}", msg);
                    self.failures.push(msg);
                    self.success = false;
                    return Err(TestError::GoldenNotFound { path: golden_path });
                }
                let golden_data = fs::read(&golden_path)?;
                let local_data = fs::read(&local_path)?;
                if local_data != golden_data {
                    let msg = format!(
                        "grid mismatch at index {}: {} != {}",
                        self.index, local_path, golden_path
                    );
                    eprintln!("{}", msg);
                    self.failures.push(msg.clone());
                    self.success = false;
                    return Ok(false);
                }
                Ok(true)
            }
            RegTestMode::Display => Ok(true),
        }
    }

    /// Compare two `BoolGrid`s directly, without touching the filesystem.
    pub fn compare_grids_equal(&mut self, expected: &BoolGrid, actual: &BoolGrid) -> bool {
        self.index += 1;
        if !expected.equals(actual) {
            let msg = format!(
                "Failure in {}_reg: grid comparison for index {}",
                self.test_name, self.index
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            self.success = false;
            return false;
        }
        true
    }

    /// Clean up and report results.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();
        self.success
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
