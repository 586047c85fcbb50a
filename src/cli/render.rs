use chell::audio;
use chell::config::Config;
use chell::utils::validation::validate_audio_file;
use chell::waveform::{self, TerminalSize};
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

pub fn handle_render(
    path: &str,
    mode: Option<&str>,
    height: Option<i32>,
) -> Result<(), Box<dyn Error>> {
    // Resolve the mode first so a bad name fails before any decoding
    let config = Config::load()?;
    let render_config = config.render_config(mode, height)?;

    let path = Path::new(path);
    validate_audio_file(path)?;

    let decoded = audio::read_wav_mono(path)?;
    if decoded.samples.is_empty() {
        log::warn!("No audio data found in {}", path.display());
        return Ok(());
    }

    let size = TerminalSize::detect();
    log::debug!("Terminal size {}x{}", size.cols, size.rows);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    waveform::render(&decoded.samples, &render_config, size, &mut out)?;
    out.flush()?;

    Ok(())
}
