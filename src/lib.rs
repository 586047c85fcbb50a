pub mod audio;
pub mod config;
pub mod constants;
pub mod utils;
pub mod waveform;
