pub mod detector;
pub mod pairs;

pub use detector::*;
pub use pairs::*;

/// Outcome of one collision sweep.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SweepReport {
    /// number of body pairs handed to the detector
    pub pairs_tested: usize,
    /// overlapping pairs as `(i, j)` indices, `i < j`, in detection order
    pub collisions: Vec<(usize, usize)>,
}

impl SweepReport {
    pub fn collision_count(&self) -> usize {
        self.collisions.len()
    }
}
