//! Real-to-complex pair packing
//!
//! The transform input is built by an explicit conversion: even-indexed
//! samples become real parts, odd-indexed samples imaginary parts. This is
//! the one place the interleaved-sample-to-complex reinterpretation lives.

use num_complex::Complex;

/// Pack interleaved samples into complex pairs
///
/// # Arguments
/// * `samples` - Interleaved time-domain samples
///
/// # Returns
/// `samples.len() / 2` complex values. A trailing unpaired sample is
/// ignored; callers pass even-length windows.
pub fn pack_interleaved_pairs(samples: &[f32]) -> Vec<Complex<f32>> {
    samples
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect()
}
