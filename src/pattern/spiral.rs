//! Spiral pattern
//!
//! Spreads one full hue revolution across the strip and rotates it.

use super::{FrameContext, Pattern};
use crate::color::{Rgb, hue_color};

const PHASE_STEP: f32 = 2.0;

/// Rotating full-wheel hue spread.
#[derive(Debug, Clone, Default)]
pub struct SpiralPattern {
    /// Rotation offset, kept in [0, 256).
    phase: f32,
}

impl Pattern for SpiralPattern {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        let offset = self.phase as u32;
        for (i, led) in leds.iter_mut().enumerate() {
            let angle = (i * 256 / len) as u32 + offset;
            *led = hue_color((angle % 256) as u8);
        }

        self.phase += PHASE_STEP * ctx.speed;
        if self.phase >= 256.0 {
            self.phase -= 256.0;
        }
    }
}
