//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform
//! specific timers. The caller is responsible for sleeping between
//! frames; missed ticks are never queued.

use embassy_time::{Duration, Instant};

use crate::engine::Engine;
use crate::{OutputDriver, SettingsStore};

/// Target frame rate (50 FPS, one frame every 20 ms).
pub const TARGET_FPS: u32 = 50;

/// Frame duration based on the target FPS.
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Drives the engine at a fixed cadence and hands frames to the output
/// driver.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Applies pending output driver rebinds after a length change
/// - Returns timing info so the caller can sleep appropriately
pub struct FrameScheduler<'a, O, S, const MAX_LEDS: usize, const QUEUE: usize>
where
    O: OutputDriver,
    S: SettingsStore,
{
    output: O,
    engine: Engine<'a, S, MAX_LEDS, QUEUE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O, S, const MAX_LEDS: usize, const QUEUE: usize>
    FrameScheduler<'a, O, S, MAX_LEDS, QUEUE>
where
    O: OutputDriver,
    S: SettingsStore,
{
    /// Create a new frame scheduler at the default 50 Hz cadence.
    pub fn new(engine: Engine<'a, S, MAX_LEDS, QUEUE>, driver: O) -> Self {
        Self::with_frame_duration(engine, driver, FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: Engine<'a, S, MAX_LEDS, QUEUE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame (draining pending commands)
    /// 3. Rebinds the output driver if the strip length changed
    /// 4. Writes to the output driver
    ///
    /// The caller is responsible for waiting until `next_deadline`
    /// before calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now.
        // There is no backlog of missed ticks to catch up on.
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.engine.render();

        if let Some(len) = self.engine.take_pending_rebind() {
            if let Err(err) = self.output.configure(len) {
                // Keep the previous binding; rendering continues.
                log::warn!("output driver rebind to {} LEDs failed: {:?}", len, err);
            }
        }

        self.output.write(self.engine.frame());

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &Engine<'a, S, MAX_LEDS, QUEUE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut Engine<'a, S, MAX_LEDS, QUEUE> {
        &mut self.engine
    }
}
