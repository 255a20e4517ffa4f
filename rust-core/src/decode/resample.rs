//! Sample-rate conversion for the caller's rate override
//!
//! Converts decoded mono samples to the requested delivery rate in bounded
//! chunks, flushing the final partial chunk through the resampler.

use log::debug;
use rubato::{FftFixedInOut, Resampler};

use super::decoder::DecodeError;

/// Frames offered to the resampler per processing call
const RESAMPLE_CHUNK_FRAMES: usize = 4096;

/// Convert mono samples from one rate to another
///
/// # Arguments
/// * `samples` - Mono input samples
/// * `from_rate` - Source sample rate in Hz
/// * `to_rate` - Delivery sample rate in Hz
///
/// # Returns
/// Converted samples; the input is returned unchanged when the rates match.
pub fn resample_mono(
    samples: &[f32],
    from_rate: u32,
    to_rate: u32,
) -> Result<Vec<f32>, DecodeError> {
    if from_rate == to_rate || samples.is_empty() {
        return Ok(samples.to_vec());
    }

    let mut resampler = FftFixedInOut::<f32>::new(
        from_rate as usize,
        to_rate as usize,
        RESAMPLE_CHUNK_FRAMES,
        1,
    )
    .map_err(|e| DecodeError::FormatNegotiation(e.to_string()))?;

    let ratio = to_rate as f64 / from_rate as f64;
    let mut output = Vec::with_capacity((samples.len() as f64 * ratio).ceil() as usize);
    let mut position = 0;

    while samples.len() - position >= resampler.input_frames_next() {
        let take = resampler.input_frames_next();
        let frames = resampler
            .process(&[&samples[position..position + take]], None)
            .map_err(|e| DecodeError::FormatNegotiation(e.to_string()))?;
        output.extend_from_slice(&frames[0]);
        position += take;
    }

    if position < samples.len() {
        let frames = resampler
            .process_partial(Some(&[&samples[position..]]), None)
            .map_err(|e| DecodeError::FormatNegotiation(e.to_string()))?;
        output.extend_from_slice(&frames[0]);
    }

    debug!(
        "resampled {} frames at {} Hz to {} frames at {} Hz",
        samples.len(),
        from_rate,
        output.len(),
        to_rate
    );

    Ok(output)
}
