//! Shared fixtures for the linsys integration tests.
//!
//! A [`Scenario`] describes a linear system, an optional solver config, an
//! optional time span, and the results expected from solving it. Scenarios
//! live as TOML or JSON files under `tests/fixtures`.

use linsys_core::{LinearSystem, ShapeError};
use linsys_solvers::{
    linear::{self, Conditioning},
    transient::{self, Problem},
};
use nalgebra::{DMatrix, DVector};
use serde::Deserialize;

/// A linear system with expected results, as stored in a fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Coefficient matrix, row by row.
    pub a: Vec<Vec<f64>>,
    pub b: Vec<f64>,
    #[serde(default)]
    pub config: Option<linear::Config<f64>>,
    #[serde(default)]
    pub span: Option<Span>,
    pub expect: Expect,
}

/// Time grid and initial state for a time-stepped run.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Span {
    pub start: f64,
    pub end: f64,
    pub dt: f64,
}

/// Results a scenario is expected to produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Expect {
    pub conditioning: Conditioning,
    #[serde(default)]
    pub x: Option<Vec<f64>>,
    #[serde(default)]
    pub columns: Option<usize>,
}

impl Scenario {
    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scenario.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Parses a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scenario.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Returns the config to solve with, falling back to the default.
    #[must_use]
    pub fn config(&self) -> linear::Config<f64> {
        self.config.unwrap_or_default()
    }

    /// Builds the validated linear system.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged or the shapes do not form a
    /// square system.
    pub fn system(&self) -> Result<LinearSystem<f64>, ShapeError> {
        let rows = self.a.len();
        let cols = self.a.first().map_or(0, Vec::len);

        if let Some(row) = self.a.iter().find(|row| row.len() != cols) {
            return Err(ShapeError::DimensionMismatch {
                expected: cols,
                found: row.len(),
            });
        }

        let a = DMatrix::from_row_iterator(rows, cols, self.a.iter().flatten().copied());
        let b = DVector::from_vec(self.b.clone());
        LinearSystem::new(a, b)
    }

    /// Builds the time-stepped problem, with a zero initial state.
    ///
    /// Returns `Ok(None)` if the scenario has no time span.
    ///
    /// # Errors
    ///
    /// Returns an error if the system or the time span is invalid.
    pub fn problem(&self) -> Result<Option<Problem<f64>>, transient::Error> {
        let Some(span) = self.span else {
            return Ok(None);
        };

        let system = self.system()?;
        let grid = transient::TimeGrid::new(span.start, span.end, span.dt)?;
        let x0 = DVector::zeros(system.dim());
        Problem::from_parts(system, grid, x0).map(Some)
    }
}
