#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`GaugeDisplay`**: Drives the whole display; exposes `on_heart_rate`, `on_reset` and `tick`
//! - **`StepperMotor`**: Chases a target needle position one micro-step per interval
//! - **`Debouncer`**: Filters the raw button line into clean stable edges
//! - **`Gradient`** / **`render`**: Compute the gradient-colored pixel frame for a lit-count
//! - **`CoilDriver`** / **`LedStrip`** / **`ButtonInput`**: Traits to implement for your hardware
//! - **`TimeSource`** / **`TimeInstant`**: Traits to implement for your timing system
//!
//! Pixel colors are `Srgb<u8>` (0-255 per channel), pushed whole-frame to the
//! strip so no partial bar is ever visible. `tick` never blocks; call it on
//! every pass of your main loop and the needle speed stays constant.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod debounce;
pub mod gauge;
pub mod led_bar;
pub mod mapping;
pub mod stepper;
pub mod time;

pub use debounce::{DEBOUNCE_WINDOW_MS, Debouncer, Edge};
pub use gauge::{ButtonInput, GaugeDisplay, RESET_GUARD_MS};
pub use led_bar::{Gradient, LedStrip, PixelFrame, render};
pub use mapping::{MAX_BPM, MIN_BPM, bpm_to_lit_count, bpm_to_position};
pub use stepper::{
    COIL_LINES, COIL_SEQUENCE, CoilDriver, CoilLine, MAX_STEPS, MIN_STEPS, STEP_INTERVAL_MS,
    StepperMotor,
};
pub use time::{TimeInstant, TimeSource};

/// Number of LEDs on the stock gauge bar.
pub const LED_COUNT: usize = 8;

/// An unlit pixel.
pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
