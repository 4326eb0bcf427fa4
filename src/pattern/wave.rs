//! Vertical wave pattern
//!
//! A sine wave travels along the strip; each pixel's hue follows
//! `sin(i * 0.2 + phase)` mapped from [-1, 1] onto the [0, 255] hue
//! wheel, saturating at the ends.

use libm::sinf;

use super::{FrameContext, Pattern};
use crate::color::{Rgb, hue_color};

const SPATIAL_STEP: f32 = 0.2;
const PHASE_STEP: f32 = 0.1;

/// Traveling sine wave over the hue wheel.
#[derive(Debug, Clone, Default)]
pub struct WavePattern {
    /// Unbounded float accumulator; growth over the device lifetime
    /// stays well inside f32 range at 0.2/frame worst case.
    phase: f32,
}

impl Pattern for WavePattern {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            let wave = sinf(i as f32 * SPATIAL_STEP + self.phase);
            *led = hue_color((wave * 128.0 + 128.0) as u8);
        }
        self.phase += PHASE_STEP * ctx.speed;
    }
}
