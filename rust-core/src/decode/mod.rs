//! Audio decoding into the canonical PCM float format

pub mod buffer;
pub mod decoder;
pub mod export;
pub mod resample;
pub mod source;

pub use buffer::DecodedAudioBuffer;
pub use decoder::{AudioDecoder, DecodeError, NativeFormat};
pub use source::AudioSource;
