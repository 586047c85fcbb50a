use chell::audio;
use chell::utils::validation::validate_audio_file;
use hound::SampleFormat;
use owo_colors::OwoColorize;
use std::error::Error;
use std::path::Path;

pub fn handle_info(path: &str) -> Result<(), Box<dyn Error>> {
    let path = Path::new(path);
    validate_audio_file(path)?;

    let decoded = audio::read_wav_mono(path)?;
    let info = &decoded.info;

    let format = match info.sample_format {
        SampleFormat::Int => "integer PCM",
        SampleFormat::Float => "float",
    };

    println!("{}", path.display().to_string().bold());
    println!("  sample_rate: {} Hz", info.sample_rate);
    println!("  channels: {}", info.channels);
    println!("  bit_depth: {} ({format})", info.bits_per_sample);
    println!("  frames: {}", info.frames);
    println!("  duration: {:.3}s", info.duration_seconds);

    let peak = decoded.samples.source_peak();
    if peak > 0.0 {
        println!("  peak: {:.4} ({:.1} dBFS)", peak, 20.0 * peak.log10());
    } else {
        println!("  peak: {}", "silent".yellow());
    }

    Ok(())
}
