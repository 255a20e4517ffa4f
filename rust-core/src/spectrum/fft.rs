//! FFT engine over packed complex pairs
//!
//! Plans and runs the in-place forward radix-2 transform used by the
//! spectrum analyzer.

use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Forward FFT for a fixed number of complex pairs
pub struct FftEngine {
    /// Planned forward transform
    fft: Arc<dyn Fft<f32>>,

    /// Number of complex values per transform
    pair_count: usize,
}

impl FftEngine {
    /// Plan a forward transform
    ///
    /// # Arguments
    /// * `pair_count` - Number of complex values per transform (window / 2)
    pub fn new(pair_count: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(pair_count);

        Self { fft, pair_count }
    }

    /// Run the forward transform in place
    ///
    /// # Panics
    /// Panics if `pairs.len()` differs from the planned length.
    pub fn process(&self, pairs: &mut [Complex<f32>]) {
        assert_eq!(pairs.len(), self.pair_count);
        self.fft.process(pairs);
    }

    /// Magnitude of each transformed value
    pub fn magnitudes(pairs: &[Complex<f32>]) -> Vec<f32> {
        pairs.iter().map(|c| c.norm()).collect()
    }

    /// Number of spectrum bins produced per transform
    pub fn num_bins(&self) -> usize {
        self.pair_count
    }
}
