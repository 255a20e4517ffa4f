//! Audio file decoding with symphonia
//!
//! Opens a source, negotiates the canonical client format (32-bit float,
//! linear PCM, mono, resolved sample rate), and drains every frame into
//! one contiguous buffer. All handles are owned values released by drop on
//! every exit path.

use std::fs::File;

use log::{debug, info};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;

use super::buffer::DecodedAudioBuffer;
use super::resample::resample_mono;
use super::source::AudioSource;

/// Errors raised while turning a source into a decoded buffer
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("could not resolve audio source '{path}'")]
    SourceUnresolvable {
        path: String,
        #[source]
        source: SymphoniaError,
    },

    #[error("source did not report a native format: {0}")]
    FormatQuery(String),

    #[error("could not negotiate float output: {0}")]
    FormatNegotiation(String),

    #[error("could not determine source frame count")]
    FrameCountQuery,

    #[error("error reading audio data")]
    Read(#[source] SymphoniaError),
}

/// Native format reported by the container before negotiation
#[derive(Debug, Clone)]
pub struct NativeFormat {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of channels in the source
    pub channel_count: usize,

    /// Bits per sample, when the codec reports one
    pub bits_per_sample: Option<u32>,
}

/// Decoder for one audio source
///
/// Owns the format reader and codec for a single analysis run; dropping
/// the decoder releases them on success and on every failure path alike.
pub struct AudioDecoder {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    native: NativeFormat,
    frame_count: Option<u64>,
}

impl std::fmt::Debug for AudioDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioDecoder")
            .field("track_id", &self.track_id)
            .field("native", &self.native)
            .field("frame_count", &self.frame_count)
            .finish_non_exhaustive()
    }
}

impl AudioDecoder {
    /// Open a source by path, probing the container format
    pub fn open(source: &AudioSource) -> Result<Self, DecodeError> {
        let path = &source.location;
        let label = path.display().to_string();

        let file = File::open(path).map_err(|e| DecodeError::SourceUnresolvable {
            path: label.clone(),
            source: SymphoniaError::IoError(e),
        })?;

        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        Self::from_media_source(mss, hint, &label)
    }

    /// Build a decoder from an already-opened media source
    ///
    /// # Arguments
    /// * `mss` - Media source stream positioned at the start of the container
    /// * `hint` - Container format hint (may be empty)
    /// * `label` - Name used for the source in errors and logs
    pub fn from_media_source(
        mss: MediaSourceStream,
        hint: Hint,
        label: &str,
    ) -> Result<Self, DecodeError> {
        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| DecodeError::SourceUnresolvable {
                path: label.to_string(),
                source: e,
            })?;

        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| DecodeError::FormatQuery("no audio track".to_string()))?;

        let params = &track.codec_params;
        let sample_rate = params
            .sample_rate
            .ok_or_else(|| DecodeError::FormatQuery("sample rate unknown".to_string()))?;
        let channel_count = params
            .channels
            .map(|c| c.count())
            .ok_or_else(|| DecodeError::FormatQuery("channel layout unknown".to_string()))?;

        let native = NativeFormat {
            sample_rate,
            channel_count,
            bits_per_sample: params.bits_per_sample,
        };

        let frame_count = params.n_frames;
        let track_id = track.id;

        // f32 delivery happens through `SampleBuffer`; a codec the registry
        // cannot service means the canonical format cannot be negotiated.
        let decoder = symphonia::default::get_codecs()
            .make(params, &DecoderOptions::default())
            .map_err(|e| DecodeError::FormatNegotiation(e.to_string()))?;

        debug!(
            "opened '{}': {} Hz, {} channel(s), {:?} frames",
            label, native.sample_rate, native.channel_count, frame_count
        );

        Ok(Self {
            format,
            decoder,
            track_id,
            native,
            frame_count,
        })
    }

    /// Native format of the selected track
    pub fn native_format(&self) -> &NativeFormat {
        &self.native
    }

    /// Total frames in the source
    ///
    /// The count sizes the destination buffer before any read happens.
    pub fn frame_count(&self) -> Result<u64, DecodeError> {
        self.frame_count.ok_or(DecodeError::FrameCountQuery)
    }

    /// Decode the entire source into one canonical-format buffer
    ///
    /// Reads packets until the expected frame count is satisfied or the
    /// source reports end of stream, whichever comes first. Any other read
    /// or decode status aborts the run; no partial buffer is returned.
    ///
    /// # Arguments
    /// * `target_rate` - Delivery sample rate in Hz; 0 keeps the native rate
    pub fn decode_all(mut self, target_rate: u32) -> Result<DecodedAudioBuffer, DecodeError> {
        let expected = self.frame_count()? as usize;
        let channels = self.native.channel_count;

        let mut samples: Vec<f32> = Vec::with_capacity(expected);
        let mut sample_buf: Option<SampleBuffer<f32>> = None;

        while samples.len() < expected {
            let packet = match self.format.next_packet() {
                Ok(packet) => packet,
                // Zero frames remaining: a short final chunk is valid and
                // simply shrinks the buffer.
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    debug!(
                        "end of stream after {} of {} frames",
                        samples.len(),
                        expected
                    );
                    break;
                }
                Err(e) => return Err(DecodeError::Read(e)),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = self.decoder.decode(&packet).map_err(DecodeError::Read)?;

            let spec = *decoded.spec();
            let capacity = decoded.capacity() as u64;
            let buf = sample_buf.get_or_insert_with(|| SampleBuffer::new(capacity, spec));
            buf.copy_interleaved_ref(decoded);

            // Mix interleaved frames down to the canonical single channel.
            for frame in buf.samples().chunks_exact(channels) {
                samples.push(frame.iter().sum::<f32>() / channels as f32);
            }
        }

        samples.truncate(expected);

        let native_rate = self.native.sample_rate;
        let resolved_rate = if target_rate == 0 {
            native_rate
        } else {
            target_rate
        };
        if resolved_rate != native_rate {
            samples = resample_mono(&samples, native_rate, resolved_rate)?;
        }

        info!(
            "decoded {} frames at {} Hz ({} channel(s) mixed to mono)",
            samples.len(),
            resolved_rate,
            channels
        );

        Ok(DecodedAudioBuffer::new(samples, resolved_rate, 1))
    }
}
