//! Downsampling of long sample sequences into a fixed number of bins.
//!
//! Bins are contiguous runs of `block = max(N / M, 1)` samples. When there are
//! fewer samples than bins the trailing bins have no source range and take a
//! neutral default; when `N` is not a multiple of `M` the remainder past
//! `M * block` is not read.

use std::ops::Range;

/// Samples per bin for `total` samples spread over `bins` bins
pub fn block_size(total: usize, bins: usize) -> usize {
    if bins == 0 {
        return 1;
    }
    (total / bins).max(1)
}

/// Source range for bin `index`, or `None` if it starts past the end
pub fn bin_range(index: usize, block: usize, total: usize) -> Option<Range<usize>> {
    let start = index * block;
    if start >= total {
        return None;
    }
    let end = (start + block).min(total);
    Some(start..end)
}

/// Reduce each bin with `reduce`, using `default` for bins with no samples.
fn bin_with<F>(samples: &[f32], bins: usize, default: f32, reduce: F) -> Vec<f32>
where
    F: Fn(&[f32]) -> f32,
{
    let total = samples.len();
    let block = block_size(total, bins);

    (0..bins)
        .map(|x| match bin_range(x, block, total) {
            Some(range) => reduce(&samples[range]),
            None => default,
        })
        .collect()
}

/// Mean amplitude per bin; empty bins read as silence (0.0).
pub fn bin_means(samples: &[f32], bins: usize) -> Vec<f32> {
    bin_with(samples, bins, 0.0, |chunk| {
        let sum: f64 = chunk.iter().map(|&s| s as f64).sum();
        (sum / chunk.len() as f64) as f32
    })
}

/// Peak absolute amplitude per bin; empty bins read as 0.0.
pub fn bin_peaks(samples: &[f32], bins: usize) -> Vec<f32> {
    bin_with(samples, bins, 0.0, |chunk| {
        chunk.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    })
}
