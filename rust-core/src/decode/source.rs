//! Analysis run configuration
//!
//! An `AudioSource` names one input file plus the caller's optional
//! overrides, fixed for the duration of a single analysis run.

use std::path::{Path, PathBuf};

/// Reference to an audio file with per-run overrides
#[derive(Debug, Clone)]
pub struct AudioSource {
    /// Location of the audio file on disk
    pub location: PathBuf,

    /// Requested delivery sample rate in Hz (0 = use the file's native rate)
    pub sample_rate: u32,

    /// Requested FFT window length (0 = one second of samples at the resolved rate)
    pub window_size: usize,
}

impl AudioSource {
    /// Create a source using the native rate and the default window
    pub fn new<P: AsRef<Path>>(location: P) -> Self {
        Self {
            location: location.as_ref().to_path_buf(),
            sample_rate: 0,
            window_size: 0,
        }
    }

    /// Override the delivery sample rate
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Override the FFT window length
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }
}
