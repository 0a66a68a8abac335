//! WAV decoding and encoding.

mod decode;
mod encode;

pub use decode::{DecodedAudio, decode_wav_file};
pub use encode::write_wav_file;
