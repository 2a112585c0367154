//! Gradient LED bar rendering.
//!
//! Stateless rendering of a lit-count into a gradient-colored pixel frame,
//! plus the [`LedStrip`] trait for pushing frames to the strip hardware.
//! Colors are 8-bit [`Srgb<u8>`] values; the gradient interpolation works in
//! the 0-255 integer domain with truncation, matching the reference gauge.

use heapless::Vec;
use palette::Srgb;

use crate::COLOR_OFF;

/// An ordered frame of pixel colors, one per LED.
pub type PixelFrame<const N: usize> = Vec<Srgb<u8>, N>;

/// Trait for abstracting the LED strip hardware.
///
/// Implement this for your strip driver (NeoPixel/WS2812 over RMT, SPI,
/// PIO, etc.). Handle any hardware errors internally - this method cannot
/// fail; a dropped frame must not stall the display.
pub trait LedStrip {
    /// Sends a complete frame to the strip as one atomic update.
    ///
    /// The whole frame is latched at once so a partially written bar is
    /// never visible.
    fn push_frame(&mut self, frame: &[Srgb<u8>]);
}

/// Two-color linear gradient across the bar, light end first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    /// Color of the leftmost pixel.
    pub left: Srgb<u8>,
    /// Color the bar fades toward at the rightmost pixel.
    pub right: Srgb<u8>,
}

impl Gradient {
    /// Creates a gradient between two endpoint colors.
    pub const fn new(left: Srgb<u8>, right: Srgb<u8>) -> Self {
        Self { left, right }
    }

    /// Color at position `t` in 0.0-1.0 along the gradient.
    ///
    /// Each channel is interpolated in the integer domain with the
    /// fractional part truncated toward zero.
    pub fn color_at(&self, t: f32) -> Srgb<u8> {
        Srgb::new(
            lerp_channel(self.left.red, self.right.red, t),
            lerp_channel(self.left.green, self.right.green, t),
            lerp_channel(self.left.blue, self.right.blue, t),
        )
    }
}

impl Default for Gradient {
    /// The gauge's stock gradient: light blue fading into deep magenta.
    fn default() -> Self {
        Self::new(Srgb::new(80, 120, 255), Srgb::new(180, 0, 200))
    }
}

/// Renders a frame with the first `lit_count` pixels colored along the
/// gradient and the rest off.
///
/// Pixel `i` samples the gradient at `i / (N - 1)`, so a fully lit bar shows
/// the left endpoint on pixel 0 and the right endpoint on pixel `N - 1`.
/// `lit_count` of 0 yields an all-off frame; counts above `N` light the
/// whole bar.
pub fn render<const N: usize>(lit_count: usize, gradient: &Gradient) -> PixelFrame<N> {
    let mut frame = PixelFrame::new();
    let max_index = N.saturating_sub(1);

    for i in 0..N {
        let color = if i < lit_count {
            let t = if max_index > 0 {
                i as f32 / max_index as f32
            } else {
                0.0
            };
            gradient.color_at(t)
        } else {
            COLOR_OFF
        };
        // Cannot overflow: exactly N pushes into a capacity-N vec.
        let _ = frame.push(color);
    }

    frame
}

/// Integer-domain channel interpolation with truncation toward zero.
fn lerp_channel(left: u8, right: u8, t: f32) -> u8 {
    let delta = right as i32 - left as i32;
    let value = left as i32 + (delta as f32 * t) as i32;
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_lit_count_is_all_off() {
        let frame = render::<8>(0, &Gradient::default());
        assert_eq!(frame.len(), 8);
        assert!(frame.iter().all(|c| *c == COLOR_OFF));
    }

    #[test]
    fn full_bar_spans_both_endpoints() {
        let gradient = Gradient::default();
        let frame = render::<8>(8, &gradient);

        assert_eq!(frame[0], Srgb::new(80, 120, 255));
        assert_eq!(frame[7], Srgb::new(180, 0, 200));
        assert!(frame.iter().all(|c| *c != COLOR_OFF));
    }

    #[test]
    fn full_bar_pixels_are_distinct() {
        let frame = render::<8>(8, &Gradient::default());
        for i in 1..8 {
            assert_ne!(frame[i], frame[i - 1], "pixels {} and {} collide", i, i - 1);
        }
    }

    #[test]
    fn partial_bar_keeps_gradient_positions() {
        let gradient = Gradient::default();
        let partial = render::<8>(3, &gradient);
        let full = render::<8>(8, &gradient);

        // Lit pixels sample the same gradient positions regardless of count.
        assert_eq!(partial[0], full[0]);
        assert_eq!(partial[1], full[1]);
        assert_eq!(partial[2], full[2]);
        assert!(partial[3..].iter().all(|c| *c == COLOR_OFF));
    }

    #[test]
    fn lit_count_above_capacity_lights_whole_bar() {
        let frame = render::<8>(20, &Gradient::default());
        assert!(frame.iter().all(|c| *c != COLOR_OFF));
    }

    #[test]
    fn single_pixel_bar_shows_left_endpoint() {
        let gradient = Gradient::default();
        let frame = render::<1>(1, &gradient);
        assert_eq!(frame[0], gradient.left);
    }

    #[test]
    fn channel_interpolation_truncates() {
        // Ascending channel: 0 -> 255 at t = 0.5 is 127.5, truncated to 127.
        assert_eq!(lerp_channel(0, 255, 0.5), 127);
        // Descending channel: 120 -> 0 at t = 0.5 is exactly 60.
        assert_eq!(lerp_channel(120, 0, 0.5), 60);
        // Endpoints are exact.
        assert_eq!(lerp_channel(80, 180, 0.0), 80);
        assert_eq!(lerp_channel(80, 180, 1.0), 180);
    }

    #[test]
    fn midpoint_of_stock_gradient() {
        let gradient = Gradient::default();
        // Pixel 4 of 8 samples t = 4/7.
        let t = 4.0 / 7.0;
        let color = gradient.color_at(t);
        assert_eq!(color, Srgb::new(137, 52, 224));
    }
}
