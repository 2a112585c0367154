//! Digital input debouncing.
//!
//! Converts a noisy raw logic level into clean stable-change events. Any
//! flip of the raw reading restarts the settling window, so contact bounce
//! faster than [`DEBOUNCE_WINDOW_MS`] never surfaces as an event.

use crate::time::TimeInstant;

/// How long a raw reading must sit unchanged before it is accepted as the
/// true logic level.
pub const DEBOUNCE_WINDOW_MS: u64 = 50;

/// A committed change of the stable logic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Stable level went low to high.
    Rising,
    /// Stable level went high to low. On an active-low button this is the
    /// press.
    Falling,
}

/// Debounce filter for a single digital input line.
///
/// Both the raw and stable levels start high, matching a pulled-up idle
/// line; a line that is already low at boot still has to sit low for one
/// full window before its level commits.
pub struct Debouncer<I: TimeInstant> {
    last_raw: bool,
    last_change_time: Option<I>,
    stable: bool,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer with both levels idle-high and the settling
    /// timer unarmed.
    pub fn new() -> Self {
        Self {
            last_raw: true,
            last_change_time: None,
            stable: true,
        }
    }

    /// Feeds one raw reading, returning the committed edge if the level
    /// just settled to a new value.
    ///
    /// Call once per control-loop pass. A reading that differs from the
    /// previous one restarts the settling window; once the reading has held
    /// for more than [`DEBOUNCE_WINDOW_MS`] and differs from the stable
    /// level, the stable level commits and the edge is reported exactly
    /// once.
    pub fn poll(&mut self, raw: bool, now: I) -> Option<Edge> {
        if raw != self.last_raw {
            self.last_change_time = Some(now);
            self.last_raw = raw;
        }

        let settled = match self.last_change_time {
            Some(changed) => now.millis_since(changed) > DEBOUNCE_WINDOW_MS,
            // The line has never flipped since boot.
            None => true,
        };

        if settled && raw != self.stable {
            self.stable = raw;
            return Some(if raw { Edge::Rising } else { Edge::Falling });
        }

        None
    }

    /// Returns the current committed logic level.
    pub fn stable_level(&self) -> bool {
        self.stable
    }
}

impl<I: TimeInstant> Default for Debouncer<I> {
    fn default() -> Self {
        Self::new()
    }
}
