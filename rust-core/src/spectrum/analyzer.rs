//! Magnitude spectrum computation
//!
//! Validates the analysis window, packs the decoded samples into complex
//! pairs, runs the forward transform, and guards the result against
//! non-finite values before it reaches a caller.

use log::debug;
use thiserror::Error;

use crate::decode::DecodedAudioBuffer;

use super::fft::FftEngine;
use super::packing::pack_interleaved_pairs;
use super::window::{apply_window_inplace, WindowType};

/// Errors raised while computing a spectrum
#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error(
        "invalid FFT window size {requested} (must be a positive power of two \
         no larger than {available} available frames)"
    )]
    InvalidWindowSize { requested: usize, available: usize },

    #[error("spectrum contains a non-finite magnitude at bin {bin}")]
    CorruptSpectrum { bin: usize },
}

/// Magnitude spectrum of one analysis window
#[derive(Debug, Clone)]
pub struct SpectrumResult {
    /// Per-bin magnitudes, `window_size / 2` entries
    pub magnitudes: Vec<f32>,

    /// FFT window length used
    pub window_size: usize,

    /// Sample rate carried through from the decoded buffer
    pub sample_rate: u32,
}

impl SpectrumResult {
    /// Center frequency of `bin` in Hz
    pub fn bin_frequency(&self, bin: usize) -> f32 {
        bin as f32 * self.sample_rate as f32 / self.window_size as f32
    }

    /// Index of the strongest bin, if the spectrum is non-empty
    pub fn peak_bin(&self) -> Option<usize> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(bin, _)| bin)
    }
}

/// Spectrum analyzer over decoded buffers
///
/// Performs no I/O and keeps no per-run state; one instance may serve any
/// number of buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralAnalyzer {
    window_type: WindowType,
}

impl SpectralAnalyzer {
    /// Analyzer with the default rectangular window
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer applying `window_type` before the transform
    pub fn with_window(window_type: WindowType) -> Self {
        Self { window_type }
    }

    /// Compute the magnitude spectrum of the first `window_size` samples
    ///
    /// # Arguments
    /// * `buffer` - Decoded samples in the canonical format
    /// * `window_size` - FFT length; 0 defaults to one second of samples
    ///   at the buffer's rate
    ///
    /// # Returns
    /// A spectrum of `window_size / 2` magnitudes, every one finite and
    /// non-negative.
    pub fn analyze(
        &self,
        buffer: &DecodedAudioBuffer,
        window_size: usize,
    ) -> Result<SpectrumResult, SpectrumError> {
        let resolved = if window_size == 0 {
            buffer.sample_rate as usize
        } else {
            window_size
        };

        if resolved == 0 || !resolved.is_power_of_two() || resolved > buffer.frame_count {
            return Err(SpectrumError::InvalidWindowSize {
                requested: resolved,
                available: buffer.frame_count,
            });
        }

        let mut window = buffer.samples[..resolved].to_vec();
        apply_window_inplace(&mut window, self.window_type);

        let mut pairs = pack_interleaved_pairs(&window);
        if !pairs.is_empty() {
            let engine = FftEngine::new(pairs.len());
            engine.process(&mut pairs);
        }
        let magnitudes = FftEngine::magnitudes(&pairs);

        // A non-finite magnitude means the transform consumed ill-formed
        // input; it must never be returned as a normal result.
        for (bin, magnitude) in magnitudes.iter().enumerate() {
            if !magnitude.is_finite() {
                return Err(SpectrumError::CorruptSpectrum { bin });
            }
        }

        debug!(
            "computed {} spectrum bins over a {} frame window",
            magnitudes.len(),
            resolved
        );

        Ok(SpectrumResult {
            magnitudes,
            window_size: resolved,
            sample_rate: buffer.sample_rate,
        })
    }
}
