//! Animation engine - owner of all shared render state
//!
//! The engine holds the pixel buffer, the configuration record, and the
//! pattern bank. It is driven from a single context: every `render`
//! call first drains the command queue, applies each mutation, then
//! renders the active pattern into the bounded frame. Because commands
//! only mutate state here, the render step can never observe a torn
//! multi-field update.

use crate::SettingsStore;
use crate::color::Rgb;
use crate::command::Command;
use crate::config::{STRIP_LEN_KEY, SharedStripLen, StripConfig};
use crate::pattern::{FrameContext, PatternBank, PatternId};
use crate::queue::CommandQueue;

/// The animation/state engine.
///
/// `MAX_LEDS` is the fixed buffer capacity; `QUEUE` the command queue
/// depth shared with the dispatchers.
pub struct Engine<'a, S: SettingsStore, const MAX_LEDS: usize, const QUEUE: usize> {
    commands: &'a CommandQueue<QUEUE>,
    strip_len_cell: &'a SharedStripLen,
    store: S,

    config: StripConfig<MAX_LEDS>,
    patterns: PatternBank,
    frame: [Rgb; MAX_LEDS],

    /// Strip length awaiting an output driver rebind.
    pending_rebind: Option<usize>,
}

impl<'a, S: SettingsStore, const MAX_LEDS: usize, const QUEUE: usize>
    Engine<'a, S, MAX_LEDS, QUEUE>
{
    /// Create an engine, restoring the strip length from `store`.
    ///
    /// The initial length is reported as a pending rebind so the first
    /// tick binds the output driver before anything is shown.
    pub fn new(
        commands: &'a CommandQueue<QUEUE>,
        strip_len_cell: &'a SharedStripLen,
        mut store: S,
    ) -> Self {
        let config = StripConfig::load(&mut store);
        strip_len_cell.set(config.strip_len);
        let pending_rebind = Some(config.strip_len);
        Self {
            commands,
            strip_len_cell,
            store,
            config,
            patterns: PatternBank::new(),
            frame: [Rgb::default(); MAX_LEDS],
            pending_rebind,
        }
    }

    /// Process one frame: apply pending commands, then render the
    /// active pattern. Returns the frame bounded to the strip length.
    pub fn render(&mut self) -> &[Rgb] {
        self.apply_pending_commands();

        let len = self.config.strip_len;
        let ctx = FrameContext {
            speed: self.config.speed,
            color: self.config.draw_color,
            mask: &self.config.manual_mask[..len],
        };
        self.patterns.render(self.config.active, &ctx, &mut self.frame[..len]);

        &self.frame[..len]
    }

    /// The last rendered frame, bounded to the strip length.
    pub fn frame(&self) -> &[Rgb] {
        &self.frame[..self.config.strip_len]
    }

    /// Take the strip length awaiting an output driver rebind, if any.
    pub fn take_pending_rebind(&mut self) -> Option<usize> {
        self.pending_rebind.take()
    }

    pub fn strip_len(&self) -> usize {
        self.config.strip_len
    }

    pub fn speed(&self) -> f32 {
        self.config.speed
    }

    pub fn active_pattern(&self) -> PatternId {
        self.config.active
    }

    pub fn draw_color(&self) -> Rgb {
        self.config.draw_color
    }

    fn apply_pending_commands(&mut self) {
        while let Some(command) = self.commands.pop() {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::SetStripLength(n) => {
                // Dispatchers validate, but the queue is a trust
                // boundary: re-check before touching the buffer bound.
                let Ok(len) = usize::try_from(n) else {
                    return;
                };
                if len == 0 || len > MAX_LEDS {
                    return;
                }
                self.config.strip_len = len;
                self.strip_len_cell.set(len);
                self.store.save_int(STRIP_LEN_KEY, n);
                self.pending_rebind = Some(len);
            }
            Command::SetSpeed(v) => {
                self.config.speed = v;
            }
            Command::SetColor { r, g, b } => {
                let channel = |c: i64| u8::try_from(c).unwrap_or(0);
                self.config.draw_color = Rgb {
                    r: channel(r),
                    g: channel(g),
                    b: channel(b),
                };
            }
            Command::SetPixel { index, on } => {
                // The strip may have shrunk since validation; entries
                // beyond the strip length are never read, so a stale
                // index is harmless as long as it fits the mask.
                if let Ok(i) = usize::try_from(index) {
                    if i < MAX_LEDS {
                        self.config.manual_mask[i] = on;
                    }
                }
            }
            Command::SelectPattern(id) => {
                self.config.active = id;
                if id == PatternId::Manual {
                    self.config.clear_mask();
                }
            }
            Command::Reset => {
                // Handled at dispatch; never enqueued.
            }
        }
    }
}
