//! Heart-rate mapping helpers.
//!
//! Pure functions translating a bpm sample into the two display quantities:
//! the needle's logical stepper position and the number of lit LEDs. Both
//! clamp to the displayable bpm range, so any integer sample is valid input.

use crate::stepper::{MAX_STEPS, MIN_STEPS};

/// Lowest bpm the gauge can display. Samples below this pin the needle at
/// [`MIN_STEPS`] with the LED bar dark.
pub const MIN_BPM: i32 = 50;

/// Highest bpm the gauge can display. Samples above this pin the needle at
/// [`MAX_STEPS`] with the full bar lit.
pub const MAX_BPM: i32 = 150;

/// Position of a bpm value within the displayable range, as a ratio in 0.0-1.0.
fn bpm_ratio(bpm: i32) -> f32 {
    let bpm = bpm.clamp(MIN_BPM, MAX_BPM);
    (bpm - MIN_BPM) as f32 / (MAX_BPM - MIN_BPM) as f32
}

/// Maps a heart-rate sample to a logical stepper position.
///
/// The fractional position is truncated toward [`MIN_STEPS`], biasing the
/// needle slightly low. [`bpm_to_lit_count`] rounds to nearest instead; the
/// asymmetry is deliberate and matches the reference gauge behavior.
#[inline]
pub fn bpm_to_position(bpm: i32) -> u16 {
    MIN_STEPS + (bpm_ratio(bpm) * (MAX_STEPS - MIN_STEPS) as f32) as u16
}

/// Maps a heart-rate sample to the number of lit LEDs, in `0..=led_count`.
///
/// Rounds to the nearest whole LED (unlike [`bpm_to_position`]).
#[inline]
pub fn bpm_to_lit_count(bpm: i32, led_count: usize) -> usize {
    let count = libm::roundf(bpm_ratio(bpm) * led_count as f32) as i32;
    count.clamp(0, led_count as i32) as usize
}
