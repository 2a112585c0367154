//! Stepper motor control for the gauge needle.
//!
//! Provides [`StepperMotor`] which chases a target position one micro-step at
//! a time, rate-limited against a monotonic clock so the needle moves at a
//! constant speed no matter how often the control loop runs. Also defines the
//! [`CoilDriver`] trait for hardware abstraction.

use crate::time::TimeInstant;

/// Lowest logical needle position (needle at rest).
pub const MIN_STEPS: u16 = 0;

/// Highest logical needle position (full scale for the X27 pointer).
pub const MAX_STEPS: u16 = 600;

/// Minimum time between micro-steps. Sets the needle speed.
pub const STEP_INTERVAL_MS: u64 = 5;

/// The four coil output lines of the motor, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoilLine {
    A,
    B,
    C,
    D,
}

/// All coil lines in the order the energization table lists them.
pub const COIL_LINES: [CoilLine; 4] = [CoilLine::A, CoilLine::B, CoilLine::C, CoilLine::D];

/// Four-phase coil energization sequence.
///
/// Each row gives the on/off level of lines A-D for one phase. Walking the
/// rows forward turns the rotor one way, backward the other. The table is
/// specific to the motor's winding layout; reordering rows makes the motor
/// jitter or stall.
pub const COIL_SEQUENCE: [[bool; 4]; 4] = [
    [true, false, true, false],
    [false, true, true, false],
    [false, true, false, true],
    [true, false, false, true],
];

/// Trait for abstracting the stepper's digital output lines.
///
/// Implement this for your GPIO hardware to let the motor energize its
/// coils. Handle any hardware errors internally - this method cannot fail;
/// the motor state machine must keep progressing regardless of pin faults.
pub trait CoilDriver {
    /// Drives a single coil line high (`true`) or low (`false`).
    fn write_line(&mut self, line: CoilLine, high: bool);
}

/// Drives a 4-wire stepper toward a target position, one micro-step per call.
///
/// Whether the motor is holding, stepping forward, or stepping backward falls
/// out of comparing the current and target positions; there is no separate
/// mode field to keep in sync.
pub struct StepperMotor<C: CoilDriver, I: TimeInstant> {
    driver: C,
    step_index: u8,
    current_position: u16,
    target_position: u16,
    last_step_time: I,
}

impl<C: CoilDriver, I: TimeInstant> StepperMotor<C, I> {
    /// Creates a motor at position 0 with the phase-0 pattern energized.
    ///
    /// `now` seeds the step timer, so the first micro-step cannot happen
    /// sooner than [`STEP_INTERVAL_MS`] after construction.
    pub fn new(mut driver: C, now: I) -> Self {
        apply_phase(&mut driver, 0);

        Self {
            driver,
            step_index: 0,
            current_position: MIN_STEPS,
            target_position: MIN_STEPS,
            last_step_time: now,
        }
    }

    /// Sets a new target position, clamped to `MIN_STEPS..=MAX_STEPS`.
    ///
    /// No motion happens here; the needle converges over subsequent
    /// [`advance`](Self::advance) calls, so a burst of updates can never jerk
    /// the needle faster than the step interval allows.
    pub fn set_target(&mut self, position: u16) {
        self.target_position = position.clamp(MIN_STEPS, MAX_STEPS);
    }

    /// Advances at most one micro-step toward the target.
    ///
    /// No-ops unless [`STEP_INTERVAL_MS`] has elapsed since the previous
    /// accepted call, so calling this every loop pass yields a constant
    /// needle speed. When a step is taken, the new coil pattern is written
    /// out before returning.
    pub fn advance(&mut self, now: I) {
        if now.millis_since(self.last_step_time) < STEP_INTERVAL_MS {
            return;
        }
        self.last_step_time = now;

        if self.current_position < self.target_position {
            self.step_index = (self.step_index + 1) % 4;
            self.current_position += 1;
        } else if self.current_position > self.target_position {
            self.step_index = (self.step_index + 3) % 4;
            self.current_position -= 1;
        } else {
            // Already at target; hold the current pattern.
            return;
        }

        self.current_position = self.current_position.clamp(MIN_STEPS, MAX_STEPS);
        apply_phase(&mut self.driver, self.step_index);
    }

    /// Returns the current logical needle position.
    pub fn position(&self) -> u16 {
        self.current_position
    }

    /// Returns the position the needle is converging toward.
    pub fn target(&self) -> u16 {
        self.target_position
    }

    /// Returns the current phase index into [`COIL_SEQUENCE`].
    pub fn phase(&self) -> u8 {
        self.step_index
    }

    /// Returns true when the needle has reached its target.
    pub fn at_target(&self) -> bool {
        self.current_position == self.target_position
    }

    /// Returns a reference to the underlying coil driver.
    pub fn driver(&self) -> &C {
        &self.driver
    }
}

/// Writes one row of the energization table to all four lines.
fn apply_phase<C: CoilDriver>(driver: &mut C, phase: u8) {
    let row = COIL_SEQUENCE[phase as usize];
    for (line, level) in COIL_LINES.iter().zip(row) {
        driver.write_line(*line, level);
    }
}
