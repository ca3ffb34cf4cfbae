//! core/grid.rs — Dense step × slot grid of recorded values.
//!
//! Row `s` collects every value recorded at step `s`, in input order.
//! Unused slots stay zero.

use crate::error::{ProfileError, Result};

/// Grid dimensions: `steps` rows of `slots` cells each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub steps: usize,
    pub slots: usize,
}

impl GridShape {
    pub const DEFAULT_STEPS: usize = 50;
    pub const DEFAULT_SLOTS: usize = 100_000;

    pub fn new(steps: usize, slots: usize) -> Result<Self> {
        if steps == 0 || slots == 0 {
            return Err(ProfileError::EmptyShape { steps, slots });
        }
        Ok(Self { steps, slots })
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.steps * self.slots
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self {
            steps: Self::DEFAULT_STEPS,
            slots: Self::DEFAULT_SLOTS,
        }
    }
}

/// Row-major `steps * slots` buffer plus one write cursor per step.
#[derive(Clone, Debug)]
pub struct StepGrid {
    shape: GridShape,
    cells: Vec<i64>,
    cursors: Vec<usize>,
}

impl StepGrid {
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![0; shape.cells()],
            cursors: vec![0; shape.steps],
        }
    }

    /// Build a grid and push every record in order.
    pub fn fill<R: AsRef<[i64]>>(shape: GridShape, records: &[R]) -> Result<Self> {
        let mut grid = Self::new(shape);
        for (idx, record) in records.iter().enumerate() {
            grid.push_record(idx, record.as_ref())?;
        }
        Ok(grid)
    }

    /// Append `record[s]` to row `s` for every step present in the record.
    ///
    /// `index` only labels errors. All bounds are checked before the first
    /// write, so a rejected record leaves the grid unchanged.
    pub fn push_record(&mut self, index: usize, record: &[i64]) -> Result<()> {
        if record.len() > self.shape.steps {
            return Err(ProfileError::StepOutOfRange {
                record: index,
                len: record.len(),
                steps: self.shape.steps,
            });
        }
        if let Some(step) = (0..record.len()).find(|&s| self.cursors[s] >= self.shape.slots) {
            return Err(ProfileError::RowFull {
                record: index,
                step,
                slots: self.shape.slots,
            });
        }

        for (step, &value) in record.iter().enumerate() {
            let slot = self.cursors[step];
            self.cells[step * self.shape.slots + slot] = value;
            self.cursors[step] += 1;
        }
        Ok(())
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// All `slots` cells of one step, written or not.
    ///
    /// # Panics
    ///
    /// Panics if `step >= shape().steps`; use [`StepGrid::get`] for a checked read.
    #[inline]
    pub fn row(&self, step: usize) -> &[i64] {
        let start = step * self.shape.slots;
        &self.cells[start..start + self.shape.slots]
    }

    #[inline]
    pub fn get(&self, step: usize, slot: usize) -> Option<i64> {
        if step >= self.shape.steps || slot >= self.shape.slots {
            return None;
        }
        Some(self.cells[step * self.shape.slots + slot])
    }

    /// Number of values written at `step` so far.
    ///
    /// # Panics
    ///
    /// Panics if `step >= shape().steps`.
    #[inline]
    pub fn cursor(&self, step: usize) -> usize {
        self.cursors[step]
    }

    #[inline]
    pub fn cursors(&self) -> &[usize] {
        &self.cursors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(steps: usize, slots: usize) -> GridShape {
        GridShape::new(steps, slots).unwrap()
    }

    #[test]
    fn default_shape_matches_recorded_game_limits() {
        let shape = GridShape::default();
        assert_eq!(shape.steps, 50);
        assert_eq!(shape.slots, 100_000);
    }

    #[test]
    fn empty_dimension_is_rejected() {
        assert!(matches!(
            GridShape::new(0, 10),
            Err(ProfileError::EmptyShape { steps: 0, slots: 10 })
        ));
        assert!(GridShape::new(3, 0).is_err());
    }

    #[test]
    fn values_land_in_input_order() {
        let grid = StepGrid::fill(small(3, 4), &[vec![1, 2], vec![3, 4, 5], vec![6]]).unwrap();
        assert_eq!(grid.row(0), &[1, 3, 6, 0]);
        assert_eq!(grid.row(1), &[2, 4, 0, 0]);
        assert_eq!(grid.row(2), &[5, 0, 0, 0]);
        assert_eq!(grid.cursors(), &[3, 2, 1]);
    }

    #[test]
    fn overlong_record_is_rejected_without_writes() {
        let mut grid = StepGrid::new(small(2, 4));
        let err = grid.push_record(7, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::StepOutOfRange {
                record: 7,
                len: 3,
                steps: 2
            }
        ));
        assert_eq!(grid.cursors(), &[0, 0]);
        assert_eq!(grid.row(0), &[0, 0, 0, 0]);
    }

    #[test]
    fn full_row_is_rejected_without_writes() {
        let mut grid = StepGrid::new(small(2, 1));
        grid.push_record(0, &[9]).unwrap();
        let err = grid.push_record(1, &[8, 7]).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::RowFull {
                record: 1,
                step: 0,
                slots: 1
            }
        ));
        // step 1 had room, but the record was rejected as a whole
        assert_eq!(grid.cursor(1), 0);
        assert_eq!(grid.get(1, 0), Some(0));
    }

    #[test]
    #[should_panic]
    fn row_past_last_step_panics() {
        let grid = StepGrid::new(small(2, 2));
        let _ = grid.row(2);
    }

    #[test]
    #[should_panic]
    fn cursor_past_last_step_panics() {
        let grid = StepGrid::new(small(2, 2));
        let _ = grid.cursor(2);
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = StepGrid::new(small(2, 2));
        assert_eq!(grid.get(1, 1), Some(0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }
}
