//! WAV decoding into normalized mono samples.
//!
//! Every channel of the file is averaged into one mono stream, integer PCM is
//! scaled into [-1, 1] by its bit depth, and the result is normalized so the
//! loudest sample reaches full scale.

use crate::waveform::SampleBuffer;
use hound::{SampleFormat, WavReader};
use std::error::Error;
use std::io::Read;
use std::path::Path;

/// Format facts about a decoded WAV file
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
    /// Number of mono frames after channel mixing
    pub frames: usize,
    pub duration_seconds: f64,
}

/// A decoded file: its format plus the normalized mono samples
#[derive(Debug, Clone)]
pub struct DecodedWav {
    pub info: WavInfo,
    pub samples: SampleBuffer,
}

/// Decode the WAV file at `path` into normalized mono samples.
pub fn read_wav_mono(path: &Path) -> Result<DecodedWav, Box<dyn Error>> {
    let reader = WavReader::open(path)
        .map_err(|e| format!("Failed to read WAV {}: {e}", path.display()))?;
    decode(reader)
}

/// Decode WAV data from any reader, e.g. an in-memory buffer.
pub fn decode<R: Read>(mut reader: WavReader<R>) -> Result<DecodedWav, Box<dyn Error>> {
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Int => {
            let bits = if spec.bits_per_sample == 0 {
                16
            } else {
                spec.bits_per_sample
            };
            let max_value = (1i64 << (bits - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<_, _>>()?
        }
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
    };

    let mono = mix_to_mono(&interleaved, channels);
    let frames = mono.len();
    let duration_seconds = if spec.sample_rate > 0 {
        frames as f64 / spec.sample_rate as f64
    } else {
        0.0
    };

    log::info!(
        "Decoded {} frames at {} Hz ({} channels, {} bit {:?})",
        frames,
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    Ok(DecodedWav {
        info: WavInfo {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
            frames,
            duration_seconds,
        },
        samples: SampleBuffer::new(mono, spec.sample_rate),
    })
}

/// Average interleaved frames down to one channel.
///
/// A trailing partial frame is dropped.
pub fn mix_to_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}
