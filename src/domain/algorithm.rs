//! Algorithm enum for selecting the smoothing pass implementation.
//!
//! Both variants produce the same grid; they only differ in how the
//! next generation buffer is filled.

/// Available smoothing pass implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell, single thread
    #[default]
    Serial,
    /// Cells evaluated in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for the panel
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "One cell at a time",
            Algorithm::Parallel => "Rayon across all cells",
        }
    }

    /// The following variant in `all()`, wrapping around; used by the panel toggle
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|&a| a == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}
