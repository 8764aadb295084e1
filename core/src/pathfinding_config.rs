use serde::Serialize;

use crate::error::ConfigError;
use crate::graph::RegionId;

/// Dimensions of the region grid nodes are placed on. Regions are numbered
/// row-major, so region `r` sits at `(r / cols, r % cols)`.
///
/// Both dimensions are non-zero and their product fits in a `RegionId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDims {
    rows: u32,
    cols: u32,
}

impl GridDims {
    pub fn new(rows: u32, cols: u32) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(ConfigError::GridTooLarge { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn region_count(&self) -> u32 {
        self.rows * self.cols
    }

    pub fn contains(&self, region: RegionId) -> bool {
        region < self.region_count()
    }

    pub fn position(&self, region: RegionId) -> (u32, u32) {
        (region / self.cols, region % self.cols)
    }
}

impl Default for GridDims {
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

/// Configuration shared by the graph loader and the search heuristics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathfindingConfig {
    /// Region grid graphs are loaded against
    grid: GridDims,
    /// Side length of one region, in map units
    region_size: f64,
    /// Multiplier turning map units into edge-weight units
    weight_scale: f64,
}

impl PathfindingConfig {
    pub fn new(grid: GridDims, region_size: f64, weight_scale: f64) -> Result<Self, ConfigError> {
        check_scale("region size", region_size)?;
        check_scale("weight scale", weight_scale)?;
        Ok(Self {
            grid,
            region_size,
            weight_scale,
        })
    }

    pub fn grid(&self) -> GridDims {
        self.grid
    }

    pub fn region_size(&self) -> f64 {
        self.region_size
    }

    pub fn weight_scale(&self) -> f64 {
        self.weight_scale
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            grid: GridDims::default(),
            region_size: 10.0,
            weight_scale: 100.0,
        }
    }
}

/// Scales feed straight into search priorities, so they must be finite and non-negative
fn check_scale(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidScale { name, value })
    }
}
