//! Gauge display orchestration.
//!
//! Provides [`GaugeDisplay`] which owns the stepper needle, the LED bar
//! strip, and the reset button, and wires them together behind the three
//! entry points of the display: [`on_heart_rate`](GaugeDisplay::on_heart_rate),
//! [`on_reset`](GaugeDisplay::on_reset) and [`tick`](GaugeDisplay::tick).
//! Also defines the [`ButtonInput`] trait for the button hardware.
//!
//! Everything is non-blocking: `tick` is meant to be called on every pass of
//! a cooperative loop and never sleeps or busy-waits. Needle speed comes
//! purely from elapsed-time checks against the injected [`TimeSource`].

use crate::debounce::{Debouncer, Edge};
use crate::led_bar::{Gradient, LedStrip, render};
use crate::mapping::{bpm_to_lit_count, bpm_to_position};
use crate::stepper::{CoilDriver, MIN_STEPS, StepperMotor};
use crate::time::{TimeInstant, TimeSource};

/// How long after an accepted reset press further presses are ignored.
/// Stops a held or chattering button from re-firing the reset.
pub const RESET_GUARD_MS: u64 = 300;

/// Trait for abstracting the reset button input line.
///
/// The line is expected to idle high (external pull-up) and read low while
/// the button is held - the active-low convention of the reference gauge.
pub trait ButtonInput {
    /// Reads the raw logic level of the button line. `true` is high.
    fn read_level(&mut self) -> bool;
}

/// Drives an analog-style heart-rate gauge: stepper needle plus LED bar.
///
/// Owns all mutable display state. An external sensor link calls
/// [`on_heart_rate`](Self::on_heart_rate) whenever a sample arrives; the
/// main loop calls [`tick`](Self::tick) on every pass to move the needle
/// and poll the reset button. Both run to completion without blocking, so
/// they can be interleaved freely on a single execution context.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `C` - Stepper coil driver implementation type
/// * `S` - LED strip implementation type
/// * `B` - Button input implementation type
/// * `T` - Time source implementation type
/// * `N` - Number of LEDs in the bar
pub struct GaugeDisplay<
    't,
    I: TimeInstant,
    C: CoilDriver,
    S: LedStrip,
    B: ButtonInput,
    T: TimeSource<I>,
    const N: usize,
> {
    stepper: StepperMotor<C, I>,
    strip: S,
    button: B,
    debouncer: Debouncer<I>,
    gradient: Gradient,
    time_source: &'t T,
    current_bpm: i32,
    last_reset_time: Option<I>,
}

impl<'t, I, C, S, B, T, const N: usize> GaugeDisplay<'t, I, C, S, B, T, N>
where
    I: TimeInstant,
    C: CoilDriver,
    S: LedStrip,
    B: ButtonInput,
    T: TimeSource<I>,
{
    /// Creates a gauge in the idle state: needle at rest with the phase-0
    /// coil pattern energized, LED bar dark, displayed bpm 0.
    pub fn new(coils: C, strip: S, button: B, time_source: &'t T) -> Self {
        let mut gauge = Self {
            stepper: StepperMotor::new(coils, time_source.now()),
            strip,
            button,
            debouncer: Debouncer::new(),
            gradient: Gradient::default(),
            time_source,
            current_bpm: 0,
            last_reset_time: None,
        };
        gauge.strip.push_frame(&render::<N>(0, &gauge.gradient));
        gauge
    }

    /// Replaces the stock gradient. Takes effect on the next render.
    pub fn set_gradient(&mut self, gradient: Gradient) {
        self.gradient = gradient;
    }

    /// Handles a new heart-rate sample.
    ///
    /// Stores the sample, retargets the needle, and immediately renders and
    /// pushes the matching LED frame. Out-of-range and negative samples are
    /// clamped by the mapping, never rejected. The needle itself only moves
    /// on subsequent [`tick`](Self::tick) calls.
    pub fn on_heart_rate(&mut self, bpm: i32) {
        self.current_bpm = bpm;
        self.stepper.set_target(bpm_to_position(bpm));
        self.strip
            .push_frame(&render::<N>(bpm_to_lit_count(bpm, N), &self.gradient));
    }

    /// Returns the display to its idle state.
    ///
    /// The LED bar clears immediately; the needle winds back to rest
    /// gradually over subsequent ticks, which avoids torque spikes on the
    /// motor.
    pub fn on_reset(&mut self) {
        self.current_bpm = 0;
        self.stepper.set_target(MIN_STEPS);
        self.strip.push_frame(&render::<N>(0, &self.gradient));
    }

    /// One pass of the control loop.
    ///
    /// Reads the clock once, advances the needle by at most one micro-step,
    /// and polls the reset button through the debouncer. A clean press
    /// (falling edge on the active-low line) triggers
    /// [`on_reset`](Self::on_reset); presses within [`RESET_GUARD_MS`] of
    /// the previous accepted one are ignored.
    pub fn tick(&mut self) {
        let now = self.time_source.now();

        self.stepper.advance(now);

        let raw = self.button.read_level();
        if let Some(Edge::Falling) = self.debouncer.poll(raw, now) {
            let guarded = match self.last_reset_time {
                Some(last) => now.millis_since(last) <= RESET_GUARD_MS,
                None => false,
            };
            if !guarded {
                self.last_reset_time = Some(now);
                self.on_reset();
            }
        }
    }

    /// Returns the last heart-rate sample displayed, 0 when idle.
    pub fn current_bpm(&self) -> i32 {
        self.current_bpm
    }

    /// Returns the needle's current logical position.
    pub fn needle_position(&self) -> u16 {
        self.stepper.position()
    }

    /// Returns the position the needle is converging toward.
    pub fn target_position(&self) -> u16 {
        self.stepper.target()
    }

    /// Returns true when the needle has reached its target.
    pub fn needle_settled(&self) -> bool {
        self.stepper.at_target()
    }

    /// Returns a reference to the LED strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a reference to the stepper's coil driver.
    pub fn coil_driver(&self) -> &C {
        self.stepper.driver()
    }
}
