//! Windowing segment-count sweep over a range of signal lengths.
//!
//! Pins the boundary behavior at exact hop multiples, where historical
//! implementations of this kind of segmentation tend to disagree.

#![allow(clippy::unwrap_used)]

use wavaug::augment::{Augmentation, Windowing};

#[allow(clippy::cast_precision_loss)]
fn ramp(len: usize) -> Vec<f32> {
    (0..len).map(|i| i as f32).collect()
}

/// Expected count for window 4, hop 2 at sample rate 1:
/// `floor((L + (L-4) mod 2 - 4)/2 + 1)` for L > 4, else 1.
fn expected_count(len: usize) -> usize {
    if len <= 4 {
        1
    } else {
        (len + (len - 4) % 2 - 4) / 2 + 1
    }
}

#[test]
fn segment_count_matches_formula_for_all_lengths() {
    let windowing = Windowing::new(4.0, 2.0, false).unwrap();
    for len in 1..100usize {
        let segments = windowing.apply(&ramp(len), 1).unwrap();
        assert_eq!(segments.len(), expected_count(len), "length {len}");
    }
}

#[test]
fn short_signals_yield_exactly_one_segment() {
    let windowing = Windowing::new(4.0, 2.0, false).unwrap();
    for len in 1..=4usize {
        let segments = windowing.apply(&ramp(len), 1).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), len, "whole signal, no padding");
    }
}

#[test]
fn drop_last_yields_one_fewer_segment_on_remainders() {
    let padded = Windowing::new(4.0, 2.0, false).unwrap();
    let dropped = Windowing::new(4.0, 2.0, true).unwrap();

    for len in 5..100usize {
        let with_pad = padded.apply(&ramp(len), 1).unwrap();
        let without = dropped.apply(&ramp(len), 1).unwrap();

        if (len - 4) % 2 == 0 {
            // Exact multiple: no remainder, both behaviors agree
            assert_eq!(with_pad.len(), without.len(), "length {len}");
        } else {
            assert_eq!(with_pad.len(), without.len() + 1, "length {len}");
            let last = with_pad.last().unwrap();
            assert_eq!(last.len(), 4, "padded segment is window-sized");
            assert_eq!(*last.last().unwrap(), 0.0, "right-padded with zeros");
        }
    }
}

#[test]
fn overlapping_windows_share_samples() {
    let windowing = Windowing::new(4.0, 2.0, true).unwrap();
    let segments = windowing.apply(&ramp(10), 1).unwrap();

    for pair in segments.windows(2) {
        // Each window starts hop samples after the previous one
        assert_eq!(pair[0][2..], pair[1][..2]);
    }
}
