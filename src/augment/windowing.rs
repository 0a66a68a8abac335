//! Windowing segmentation with overlap support.

use crate::augment::Augmentation;
use crate::error::{Error, Result};

/// Window a signal into many segments of equal length.
///
/// If `hop_size` is less than `window_length` the windows overlap. The
/// segments *replace* the input: the original signal never survives a
/// windowing stage (`replaces = true`).
#[derive(Debug, Clone, Copy)]
pub struct Windowing {
    window_length: f32,
    hop_size: f32,
    drop_last: bool,
}

impl Windowing {
    /// Create a windowing augmentation.
    ///
    /// `window_length` is the length in seconds of a window, `hop_size` the
    /// distance in seconds between the start of each window. When the signal
    /// leaves a trailing remainder shorter than a window, `drop_last`
    /// discards it; otherwise it is zero-padded on the right to a full
    /// window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless both durations are
    /// positive and finite.
    pub fn new(window_length: f32, hop_size: f32, drop_last: bool) -> Result<Self> {
        if !window_length.is_finite() || window_length <= 0.0 {
            return Err(Error::InvalidParameter {
                augmentation: "window",
                message: format!("window length must be positive, got {window_length}"),
            });
        }
        if !hop_size.is_finite() || hop_size <= 0.0 {
            return Err(Error::InvalidParameter {
                augmentation: "window",
                message: format!("hop size must be positive, got {hop_size}"),
            });
        }
        Ok(Self {
            window_length,
            hop_size,
            drop_last,
        })
    }
}

impl Augmentation for Windowing {
    fn name(&self) -> &'static str {
        "window"
    }

    fn replaces(&self) -> bool {
        true
    }

    fn apply(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<Vec<f32>>> {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let window_samples = (self.window_length * sample_rate as f32).round() as usize;
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hop_samples = (self.hop_size * sample_rate as f32).round() as usize;

        if window_samples == 0 || hop_samples == 0 {
            return Err(Error::InvalidParameter {
                augmentation: "window",
                message: format!(
                    "window/hop shorter than one sample at {sample_rate} Hz"
                ),
            });
        }

        let total = samples.len();

        // A window covering the whole signal yields it back unsegmented
        if window_samples >= total {
            return Ok(vec![samples.to_vec()]);
        }

        let mut segments = Vec::new();
        let mut start = 0;
        while start + window_samples <= total {
            segments.push(samples[start..start + window_samples].to_vec());
            start += hop_samples;
        }

        // Trailing remainder: pad to a full window unless drop_last.
        // When the last full window ends exactly at the signal end there is
        // no remainder and nothing is appended.
        if start - hop_samples + window_samples < total && !self.drop_last {
            let mut last = samples[start..].to_vec();
            last.resize(window_samples, 0.0);
            segments.push(last);
        }

        Ok(segments)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[allow(clippy::cast_precision_loss)]
    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|i| i as f32).collect()
    }

    fn segment(windowing: &Windowing, len: usize) -> Vec<Vec<f32>> {
        // sample rate 1 makes seconds and samples coincide
        windowing.apply(&ramp(len), 1).unwrap()
    }

    #[test]
    fn test_rejects_nonpositive_durations() {
        assert!(Windowing::new(0.0, 2.0, false).is_err());
        assert!(Windowing::new(4.0, 0.0, false).is_err());
        assert!(Windowing::new(-4.0, 2.0, false).is_err());
        assert!(Windowing::new(4.0, 2.0, false).is_ok());
    }

    #[test]
    fn test_replaces_input() {
        let w = Windowing::new(4.0, 2.0, false).unwrap();
        assert!(w.replaces());
    }

    #[test]
    fn test_signal_shorter_than_window_is_single_segment() {
        let w = Windowing::new(4.0, 2.0, false).unwrap();
        for len in 1..=4 {
            let segments = segment(&w, len);
            assert_eq!(segments.len(), 1, "length {len}");
            // No padding in the whole-signal case
            assert_eq!(segments[0], ramp(len));
        }
    }

    #[test]
    fn test_full_windows_and_padded_tail() {
        let w = Windowing::new(4.0, 2.0, false).unwrap();
        let segments = segment(&w, 7);
        // Full windows at 0 and 2, padded tail from 4
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(segments[1], vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(segments[2], vec![4.0, 5.0, 6.0, 0.0]);
    }

    #[test]
    fn test_exact_multiple_boundary_has_no_padded_segment() {
        // Last full window ends exactly at the signal end
        let padded = Windowing::new(4.0, 2.0, false).unwrap();
        let dropped = Windowing::new(4.0, 2.0, true).unwrap();
        for len in [6, 8, 10, 20] {
            assert_eq!(segment(&padded, len).len(), (len - 4) / 2 + 1, "length {len}");
            assert_eq!(segment(&dropped, len).len(), (len - 4) / 2 + 1, "length {len}");
        }
    }

    #[test]
    fn test_drop_last_discards_remainder() {
        let padded = Windowing::new(4.0, 2.0, false).unwrap();
        let dropped = Windowing::new(4.0, 2.0, true).unwrap();

        // Length 9 leaves a one-sample remainder after the window at 4
        let with_pad = segment(&padded, 9);
        let without = segment(&dropped, 9);
        assert_eq!(with_pad.len(), without.len() + 1);

        let last = with_pad.last().unwrap();
        assert_eq!(last.len(), 4);
        assert_eq!(last[..], [6.0, 7.0, 8.0, 0.0]);
    }

    #[test]
    fn test_segment_count_formula_sweep() {
        // floor((L + (L-4) mod 2 - 4)/2 + 1) for L > 4, else 1
        let w = Windowing::new(4.0, 2.0, false).unwrap();
        for len in 1..100usize {
            let expected = if len <= 4 {
                1
            } else {
                (len + (len - 4) % 2 - 4) / 2 + 1
            };
            assert_eq!(segment(&w, len).len(), expected, "length {len}");
        }
    }

    #[test]
    fn test_all_segments_have_window_length() {
        let w = Windowing::new(4.0, 2.0, false).unwrap();
        for len in 5..40usize {
            for seg in segment(&w, len) {
                assert_eq!(seg.len(), 4, "length {len}");
            }
        }
    }

    #[test]
    fn test_uses_sample_rate_for_conversion() {
        // 0.5s windows at 8 samples/s are 4 samples wide
        let w = Windowing::new(0.5, 0.25, true).unwrap();
        let segments = w.apply(&ramp(8), 8).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(segments[2], vec![4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_subsample_durations_error() {
        let w = Windowing::new(0.5, 0.25, false).unwrap();
        // At 1 Hz both durations round to zero samples
        assert!(w.apply(&ramp(10), 1).is_err());
    }
}
