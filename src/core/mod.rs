pub mod dataset;
pub mod grid;
pub mod profile;

use tracing::debug;

use crate::core::dataset::Dataset;
use crate::core::grid::{GridShape, StepGrid};
use crate::core::profile::StepProfile;
use crate::error::Result;

/// Reshape every record into a `shape` grid and average each step row.
pub fn step_profile(dataset: &Dataset, shape: GridShape) -> Result<StepProfile> {
    let grid = StepGrid::fill(shape, dataset.records())?;
    let profile = StepProfile::from_grid(&grid);
    for (step, (&n, &mean)) in profile.counts().iter().zip(profile.means()).enumerate() {
        debug!("step {step}: {n} values, mean {mean:.6}");
    }
    Ok(profile)
}
