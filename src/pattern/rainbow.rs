//! Rainbow pattern
//!
//! Distributes the color wheel evenly across the strip and advances a
//! single global hue offset each frame.

use super::{FrameContext, Pattern};
use crate::color::{Rgb, hue_color};

const HUE_STEP: f32 = 2.0;

/// Evenly spaced hues with a rotating base offset.
#[derive(Debug, Clone, Default)]
pub struct RainbowPattern {
    /// Global hue offset, kept in [0, 256).
    hue: f32,
}

impl Pattern for RainbowPattern {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        // Integer spacing, 255 / strip length, zero on very long strips.
        let delta = (255 / len) as u32;
        let base = self.hue as u32;
        for (i, led) in leds.iter_mut().enumerate() {
            let hue = (base + i as u32 * delta) % 256;
            *led = hue_color(hue as u8);
        }

        self.hue += HUE_STEP * ctx.speed;
        if self.hue >= 256.0 {
            self.hue -= 256.0;
        }
    }
}
