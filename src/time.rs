//! Time abstraction traits for platform-agnostic timing.
//!
//! The gauge only ever compares elapsed milliseconds against fixed windows
//! (step interval, debounce window, reset guard), so instants report elapsed
//! time directly in `u64` milliseconds instead of going through a separate
//! duration abstraction.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for monotonic instant types.
pub trait TimeInstant: Copy {
    /// Returns the number of milliseconds elapsed since an earlier instant.
    ///
    /// `earlier` must not be later than `self`; instants come from a
    /// monotonic [`TimeSource`], so this holds for any instant observed
    /// before the current one.
    fn millis_since(&self, earlier: Self) -> u64;
}
