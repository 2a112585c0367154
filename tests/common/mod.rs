//! Shared test infrastructure for pulse-gauge integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use palette::Srgb;
use pulse_gauge::{ButtonInput, CoilDriver, CoilLine, LedStrip, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock instant type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    fn millis_since(&self, earlier: Self) -> u64 {
        self.0 - earlier.0
    }
}

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Hardware
// ============================================================================

/// Mock coil driver that records every complete 4-line pattern written
pub struct MockCoils {
    levels: [bool; 4],
    writes: usize,
    pattern_history: Vec<[bool; 4]>,
}

impl MockCoils {
    pub fn new() -> Self {
        Self {
            levels: [false; 4],
            writes: 0,
            pattern_history: Vec::new(),
        }
    }

    pub fn levels(&self) -> [bool; 4] {
        self.levels
    }

    pub fn pattern_history(&self) -> &[[bool; 4]] {
        &self.pattern_history
    }
}

impl CoilDriver for MockCoils {
    fn write_line(&mut self, line: CoilLine, high: bool) {
        let idx = match line {
            CoilLine::A => 0,
            CoilLine::B => 1,
            CoilLine::C => 2,
            CoilLine::D => 3,
        };
        self.levels[idx] = high;
        self.writes += 1;
        if self.writes % 4 == 0 {
            self.pattern_history.push(self.levels);
        }
    }
}

/// Mock LED strip that records every pushed frame
pub struct MockStrip {
    frames: Vec<Vec<Srgb<u8>>>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn frames(&self) -> &[Vec<Srgb<u8>>] {
        &self.frames
    }

    pub fn last_frame(&self) -> &[Srgb<u8>] {
        self.frames.last().expect("no frame pushed yet")
    }
}

impl LedStrip for MockStrip {
    fn push_frame(&mut self, frame: &[Srgb<u8>]) {
        self.frames.push(frame.to_vec());
    }
}

/// Mock button whose raw line level is shared with the test body
pub struct MockButton<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockButton<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl ButtonInput for MockButton<'_> {
    fn read_level(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Number of lit (non-black) pixels in a frame
pub fn lit_pixels(frame: &[Srgb<u8>]) -> usize {
    frame.iter().filter(|c| **c != pulse_gauge::COLOR_OFF).count()
}

/// True when every pixel in the frame is off
pub fn all_off(frame: &[Srgb<u8>]) -> bool {
    lit_pixels(frame) == 0
}
