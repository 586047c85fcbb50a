//! Normalized mono sample storage shared by both renderers.

/// Decoded mono audio, scaled so its loudest sample sits at ±1.0.
///
/// The buffer is normalized once on construction and exposes no mutable
/// access afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    /// Peak absolute amplitude before normalization
    source_peak: f32,
}

impl SampleBuffer {
    pub fn new(mut samples: Vec<f32>, sample_rate: u32) -> Self {
        let source_peak = normalize(&mut samples);
        Self {
            samples,
            sample_rate,
            source_peak,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn source_peak(&self) -> f32 {
        self.source_peak
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Length of the audio in seconds, or zero when the rate is unknown
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Largest absolute amplitude in `samples`, or 0.0 for an empty slice
pub fn peak_abs(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

/// Scale `samples` in place so the loudest one reaches ±1.0.
///
/// Empty or silent input is left untouched. Returns the peak that was
/// divided out.
pub fn normalize(samples: &mut [f32]) -> f32 {
    let peak = peak_abs(samples);
    if peak <= 0.0 {
        return peak;
    }
    for sample in samples.iter_mut() {
        *sample /= peak;
    }
    peak
}
