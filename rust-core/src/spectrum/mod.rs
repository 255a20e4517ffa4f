//! Spectral analysis with FFT

pub mod analyzer;
pub mod fft;
pub mod packing;
pub mod window;

pub use analyzer::{SpectralAnalyzer, SpectrumError, SpectrumResult};
pub use fft::FftEngine;
pub use window::WindowType;
