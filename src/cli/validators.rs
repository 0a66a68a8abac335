//! CLI argument validators.
//!
//! Shared parsing for the comma-separated augmentation flag values.

/// Parse an equalizer spec: `FREQ,Q,GAIN`.
pub fn parse_eq_spec(s: &str) -> Result<(f32, f32, f32), String> {
    let parts = split_floats(s)?;
    match parts[..] {
        [frequency, resonance, gain] => Ok((frequency, resonance, gain)),
        _ => Err(format!("expected FREQ,Q,GAIN, got '{s}'")),
    }
}

/// Parse a lowpass/highpass spec: `FREQ[,Q[,POLES]]`.
///
/// A bare frequency gives a 1-pole filter with the conventional 0.707 Q;
/// supplying a Q implies the 2-pole variant unless a pole count is given.
pub fn parse_pass_spec(s: &str) -> Result<(f32, f32, u8), String> {
    let parts = split_floats(s)?;
    match parts[..] {
        [frequency] => Ok((frequency, 0.707, 1)),
        [frequency, resonance] => Ok((frequency, resonance, 2)),
        [frequency, resonance, poles] => {
            if poles.fract() != 0.0 || !(0.0..=255.0).contains(&poles) {
                return Err(format!("poles must be an integer, got {poles}"));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Ok((frequency, resonance, poles as u8))
        }
        _ => Err(format!("expected FREQ[,Q[,POLES]], got '{s}'")),
    }
}

/// Parse a windowing spec: `LENGTH,HOP` in seconds.
pub fn parse_window_spec(s: &str) -> Result<(f32, f32), String> {
    let parts = split_floats(s)?;
    match parts[..] {
        [length, hop] => Ok((length, hop)),
        _ => Err(format!("expected LENGTH,HOP, got '{s}'")),
    }
}

/// Split a comma-separated list of floats.
fn split_floats(s: &str) -> Result<Vec<f32>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|_| format!("'{part}' is not a valid number"))
        })
        .collect()
}
