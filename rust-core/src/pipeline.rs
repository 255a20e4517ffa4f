//! One-shot decode-and-analyze pipeline
//!
//! Runs the strict sequence source → decoded buffer → spectrum. Decode
//! completes fully before the transform begins; each run owns its file
//! handle, buffer, and transform scratch space exclusively, and every
//! resource is released by scope exit on success and failure alike.

use log::info;
use thiserror::Error;

use crate::decode::{AudioDecoder, AudioSource, DecodeError, DecodedAudioBuffer};
use crate::spectrum::{SpectralAnalyzer, SpectrumError, SpectrumResult};

/// Errors from either stage of an analysis run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}

/// Decoded waveform and magnitude spectrum of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    /// The fully decoded waveform in the canonical format
    pub waveform: DecodedAudioBuffer,

    /// Magnitude spectrum of the first analysis window
    pub spectrum: SpectrumResult,
}

/// Decode `source` fully, then compute its magnitude spectrum
///
/// One source yields exactly one decoded buffer and one spectrum per run.
/// Any failure aborts the run immediately; there are no retries.
pub fn analyze_file(source: &AudioSource) -> Result<AnalysisOutput, PipelineError> {
    let decoder = AudioDecoder::open(source)?;
    let buffer = decoder.decode_all(source.sample_rate)?;
    let spectrum = SpectralAnalyzer::new().analyze(&buffer, source.window_size)?;

    info!(
        "analysis complete: {} frames at {} Hz, {} spectrum bins",
        buffer.frame_count,
        buffer.sample_rate,
        spectrum.magnitudes.len()
    );

    Ok(AnalysisOutput {
        waveform: buffer,
        spectrum,
    })
}
