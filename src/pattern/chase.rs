//! Chase pattern
//!
//! A three-pixel head runs along the strip leaving a fading trail: every
//! frame the whole strip decays toward black, then the head is painted
//! at full value.

use super::{FrameContext, Pattern};
use crate::color::{Rgb, fade_to_black, hue_color};

/// Per-frame decay amount, out of 256 (FastLED `fadeToBlackBy` scale).
const TRAIL_FADE: u8 = 20;
const HEAD_LEN: usize = 3;
const HEAD_HUE_STEP: usize = 5;

/// Running head with decaying trail.
#[derive(Debug, Clone, Default)]
pub struct ChasePattern {
    /// Head position, wrapped mod the current strip length at render.
    position: f32,
}

impl Pattern for ChasePattern {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        fade_to_black(leds, TRAIL_FADE);

        // A length change between frames can leave the head out of range.
        let len_f = len as f32;
        if self.position >= len_f {
            self.position %= len_f;
        }

        let head = (self.position as usize) % len;
        let hue = ((head * HEAD_HUE_STEP) % 256) as u8;
        for offset in 0..HEAD_LEN {
            leds[(head + offset) % len] = hue_color(hue);
        }

        self.position += ctx.speed;
    }
}
