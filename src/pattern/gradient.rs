//! Gradient pattern
//!
//! A static linear hue ramp over the strip, shifted by an advancing
//! phase offset.

use super::{FrameContext, Pattern};
use crate::color::{Rgb, hue_color};

const PHASE_STEP: f32 = 2.0;

/// Linear hue ramp with a moving offset.
#[derive(Debug, Clone, Default)]
pub struct GradientPattern {
    /// Hue shift, kept in [0, 256).
    phase: f32,
}

impl Pattern for GradientPattern {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        let offset = self.phase as u32;
        for (i, led) in leds.iter_mut().enumerate() {
            // i over [0, len-1] mapped onto [0, 255].
            let base = if len > 1 { (i * 255 / (len - 1)) as u32 } else { 0 };
            *led = hue_color(((base + offset) % 256) as u8);
        }

        self.phase += PHASE_STEP * ctx.speed;
        if self.phase >= 256.0 {
            self.phase -= 256.0;
        }
    }
}
