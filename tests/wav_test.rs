use chell::audio::read_wav_mono;
use chell::waveform::{self, RenderConfig, TerminalSize};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;
use tempfile::TempDir;

fn write_wav(path: &Path, channels: u16, frames: &[Vec<i16>]) {
    let spec = WavSpec {
        channels,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for frame in frames {
        for &sample in frame {
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();
}

#[test]
fn test_stereo_file_mixes_and_normalizes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("stereo.wav");
    write_wav(
        &path,
        2,
        &[vec![8192, 8192], vec![-4096, 0], vec![0, 0], vec![2048, -2048]],
    );

    let decoded = read_wav_mono(&path).unwrap();
    assert_eq!(decoded.info.channels, 2);
    assert_eq!(decoded.info.sample_rate, 44100);
    assert_eq!(decoded.info.frames, 4);
    assert_eq!(decoded.samples.samples(), &[1.0, -0.25, 0.0, 0.0]);
    assert_eq!(decoded.samples.source_peak(), 0.25);
}

#[test]
fn test_decoded_file_renders_full_grid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tone.wav");
    let frames: Vec<Vec<i16>> = (0..4410)
        .map(|i| {
            let phase = i as f32 / 4410.0 * 10.0 * std::f32::consts::TAU;
            vec![(phase.sin() * 12000.0) as i16]
        })
        .collect();
    write_wav(&path, 1, &frames);

    let decoded = read_wav_mono(&path).unwrap();
    assert!((decoded.info.duration_seconds - 0.1).abs() < 1e-9);

    for mode in ["braille", "ascii"] {
        let config = RenderConfig::new(mode, 8).unwrap();
        let mut out = Vec::new();
        waveform::render(&decoded.samples, &config, TerminalSize::new(50, 24), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.chars().count() == 50));
        assert!(lines.iter().any(|l| !l.trim().is_empty()));
    }
}

#[test]
fn test_empty_file_decodes_to_empty_buffer() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.wav");
    write_wav(&path, 1, &[]);

    let decoded = read_wav_mono(&path).unwrap();
    assert!(decoded.samples.is_empty());
    assert_eq!(decoded.info.frames, 0);
}

#[test]
fn test_invalid_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.wav");
    std::fs::write(&path, b"not a wav file").unwrap();

    assert!(read_wav_mono(&path).is_err());
}
