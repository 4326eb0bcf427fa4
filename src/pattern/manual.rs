//! Manual pattern
//!
//! No animation: each masked pixel shows the configured draw color,
//! everything else is black.

use super::{FrameContext, Pattern};
use crate::color::{BLACK, Rgb};

#[derive(Debug, Clone, Default)]
pub struct ManualPattern;

impl Pattern for ManualPattern {
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        for (i, led) in leds.iter_mut().enumerate() {
            *led = if ctx.mask.get(i).copied().unwrap_or(false) {
                ctx.color
            } else {
                BLACK
            };
        }
    }
}
