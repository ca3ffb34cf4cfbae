//! core/profile.rs — Per-step mean over the full slot axis.

use crate::core::grid::StepGrid;

/// One mean per step, plus how many values were actually recorded there.
///
/// The mean divides by the full slot count, so unused zero slots dilute it:
/// two values `a`, `b` at a step give `(a + b) / slots`, not `(a + b) / 2`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepProfile {
    means: Vec<f64>,
    counts: Vec<usize>,
}

impl StepProfile {
    pub fn from_grid(grid: &StepGrid) -> Self {
        let shape = grid.shape();
        let means = (0..shape.steps)
            .map(|step| {
                let sum: f64 = grid.row(step).iter().map(|&v| v as f64).sum();
                sum / shape.slots as f64
            })
            .collect();
        Self {
            means,
            counts: grid.cursors().to_vec(),
        }
    }

    #[inline]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.means.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// `(step, mean)` pairs in step order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.means
            .iter()
            .enumerate()
            .map(|(step, &mean)| (step as f64, mean))
    }

    /// Largest mean, or 0 for an all-zero profile.
    pub fn max_mean(&self) -> f64 {
        self.means.iter().copied().fold(0.0, f64::max)
    }
}
