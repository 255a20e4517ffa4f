//! Debug WAV export
//!
//! Re-encodes a decoded buffer to a WAV file in the canonical float
//! format. Debugging helper only; not part of the analysis contract.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use super::buffer::DecodedAudioBuffer;

/// Write a decoded buffer to `path` as 32-bit float WAV
pub fn write_wav<P: AsRef<Path>>(buffer: &DecodedAudioBuffer, path: P) -> Result<(), hound::Error> {
    let spec = WavSpec {
        channels: buffer.channel_count as u16,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path.as_ref(), spec)?;
    for &sample in &buffer.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    debug!(
        "wrote {} frames to {}",
        buffer.frame_count,
        path.as_ref().display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("audio_spectrum_export_{}.wav", std::process::id()))
    }

    #[test]
    fn test_export_round_trip() {
        let samples: Vec<f32> = (0..256).map(|n| (n as f32 / 256.0) - 0.5).collect();
        let buffer = DecodedAudioBuffer::new(samples.clone(), 22050, 1);

        let path = temp_path();
        write_wav(&buffer, &path).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.sample_format, hound::SampleFormat::Float);

        let read: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);

        std::fs::remove_file(&path).ok();
    }
}
