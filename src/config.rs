//! Shared configuration state for the strip.
//!
//! A single [`StripConfig`] instance is owned by the engine; command
//! handler contexts never touch it directly. The one value they need for
//! validation, the applied strip length, is published through
//! [`SharedStripLen`] as a single atomic word, so a reader can never
//! observe a torn value.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::SettingsStore;
use crate::color::Rgb;
use crate::pattern::PatternId;

/// Strip length used when the settings store has no stored value.
pub const DEFAULT_STRIP_LEN: usize = 50;

/// Settings store key for the persisted strip length.
pub const STRIP_LEN_KEY: &str = "num_leds";

/// Lowest accepted speed multiplier.
pub const MIN_SPEED: f32 = 0.1;

/// Highest accepted speed multiplier.
pub const MAX_SPEED: f32 = 2.0;

const DEFAULT_SPEED: f32 = 1.0;
const DEFAULT_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Mutable render parameters shared between command handling and the
/// render loop. `MAX_LEDS` is the compile-time strip capacity.
pub struct StripConfig<const MAX_LEDS: usize> {
    /// Number of physical LEDs, `1..=MAX_LEDS`.
    pub strip_len: usize,
    /// Animation speed multiplier, within `MIN_SPEED..=MAX_SPEED`.
    pub speed: f32,
    /// Currently selected pattern.
    pub active: PatternId,
    /// Draw color for the manual pattern.
    pub draw_color: Rgb,
    /// Per-pixel overrides, read only by the manual pattern and only
    /// within `0..strip_len`.
    pub manual_mask: [bool; MAX_LEDS],
}

impl<const MAX_LEDS: usize> StripConfig<MAX_LEDS> {
    pub fn new(strip_len: usize) -> Self {
        Self {
            strip_len: strip_len.clamp(1, MAX_LEDS),
            speed: DEFAULT_SPEED,
            active: PatternId::VerticalWave,
            draw_color: DEFAULT_COLOR,
            manual_mask: [false; MAX_LEDS],
        }
    }

    /// Restore the strip length from the settings store.
    pub fn load(store: &mut impl SettingsStore) -> Self {
        let stored = store.load_int(STRIP_LEN_KEY, DEFAULT_STRIP_LEN as i64);
        let strip_len = usize::try_from(stored).unwrap_or(DEFAULT_STRIP_LEN);
        Self::new(strip_len)
    }

    pub fn clear_mask(&mut self) {
        self.manual_mask = [false; MAX_LEDS];
    }
}

impl<const MAX_LEDS: usize> Default for StripConfig<MAX_LEDS> {
    fn default() -> Self {
        Self::new(DEFAULT_STRIP_LEN)
    }
}

/// Applied strip length, readable from any context.
///
/// Written by the engine when a length change is applied; read by
/// dispatchers validating `SetPixel` indices.
pub struct SharedStripLen(AtomicUsize);

impl SharedStripLen {
    pub const fn new(len: usize) -> Self {
        Self(AtomicUsize::new(len))
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn set(&self, len: usize) {
        self.0.store(len, Ordering::Relaxed);
    }
}
