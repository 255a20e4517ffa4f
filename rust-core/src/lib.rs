//! Batch audio decode and spectral analysis core
//!
//! Decodes an audio file into a canonical float PCM buffer, then computes
//! a forward FFT magnitude spectrum for visualization or analysis.

pub mod decode;
pub mod pipeline;
pub mod spectrum;

pub use decode::{AudioDecoder, AudioSource, DecodedAudioBuffer};
pub use pipeline::{analyze_file, AnalysisOutput, PipelineError};
pub use spectrum::{SpectralAnalyzer, SpectrumResult};
