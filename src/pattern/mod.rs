//! Procedural light patterns with compile-time known variants
//!
//! All pattern state lives in [`PatternBank`], one value per animated
//! pattern, dispatched through a single `match` on [`PatternId`]. A
//! pattern's phase accumulator advances only while that pattern is
//! active and is never reset by switching, so re-selecting a pattern
//! resumes where it left off.

mod chase;
mod gradient;
mod manual;
mod rainbow;
mod spiral;
mod wave;

pub use chase::ChasePattern;
pub use gradient::GradientPattern;
pub use manual::ManualPattern;
pub use rainbow::RainbowPattern;
pub use spiral::SpiralPattern;
pub use wave::WavePattern;

use crate::color::Rgb;

const PATTERN_NAME_VERTICAL_WAVE: &str = "VERTICAL_WAVE";
const PATTERN_NAME_SPIRAL: &str = "SPIRAL";
const PATTERN_NAME_RAINBOW: &str = "RAINBOW";
const PATTERN_NAME_GRADIENT: &str = "GRADIENT";
const PATTERN_NAME_CHASE: &str = "CHASE";
const PATTERN_NAME_MANUAL: &str = "MANUAL";

/// Per-frame inputs shared by all patterns.
///
/// `mask` is pre-sliced to the active strip length, so indices beyond it
/// are unreachable from any generator.
pub struct FrameContext<'a> {
    /// Speed multiplier applied to each phase step.
    pub speed: f32,
    /// Draw color for masked pixels.
    pub color: Rgb,
    /// Manual per-pixel overrides.
    pub mask: &'a [bool],
}

pub trait Pattern {
    /// Render a single frame and advance the pattern's own phase.
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]);
}

/// Known pattern ids that can be requested over the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternId {
    VerticalWave,
    Spiral,
    Rainbow,
    Gradient,
    Chase,
    Manual,
}

impl PatternId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerticalWave => PATTERN_NAME_VERTICAL_WAVE,
            Self::Spiral => PATTERN_NAME_SPIRAL,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
            Self::Gradient => PATTERN_NAME_GRADIENT,
            Self::Chase => PATTERN_NAME_CHASE,
            Self::Manual => PATTERN_NAME_MANUAL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_VERTICAL_WAVE => Some(Self::VerticalWave),
            PATTERN_NAME_SPIRAL => Some(Self::Spiral),
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            PATTERN_NAME_GRADIENT => Some(Self::Gradient),
            PATTERN_NAME_CHASE => Some(Self::Chase),
            PATTERN_NAME_MANUAL => Some(Self::Manual),
            _ => None,
        }
    }
}

/// One persistent state value per pattern.
#[derive(Default)]
pub struct PatternBank {
    wave: WavePattern,
    spiral: SpiralPattern,
    rainbow: RainbowPattern,
    gradient: GradientPattern,
    chase: ChasePattern,
    manual: ManualPattern,
}

impl PatternBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the selected pattern. Only its accumulator advances.
    pub fn render(&mut self, id: PatternId, ctx: &FrameContext, leds: &mut [Rgb]) {
        match id {
            PatternId::VerticalWave => self.wave.render(ctx, leds),
            PatternId::Spiral => self.spiral.render(ctx, leds),
            PatternId::Rainbow => self.rainbow.render(ctx, leds),
            PatternId::Gradient => self.gradient.render(ctx, leds),
            PatternId::Chase => self.chase.render(ctx, leds),
            PatternId::Manual => self.manual.render(ctx, leds),
        }
    }
}
