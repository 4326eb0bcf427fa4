#![no_std]

pub mod api;
pub mod color;
pub mod command;
pub mod config;
pub mod engine;
pub mod math8;
pub mod pattern;
pub mod queue;
pub mod scheduler;

pub use api::{ApiResponse, handle_request};
pub use command::{Ack, Command, CommandError, Dispatcher};
pub use config::{SharedStripLen, StripConfig};
pub use engine::Engine;
pub use pattern::{PatternBank, PatternId};
pub use queue::CommandQueue;
pub use scheduler::{FRAME_DURATION, FrameResult, FrameScheduler, TARGET_FPS};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait.
pub trait OutputDriver {
    /// Driver-specific binding error, logged when a rebind fails.
    type Error: core::fmt::Debug;

    /// Rebind the hardware channel to a new pixel count.
    ///
    /// Called once at startup and again after every accepted strip length
    /// change. On failure the previous binding stays in effect.
    fn configure(&mut self, led_count: usize) -> Result<(), Self::Error>;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

/// Persistent settings collaborator.
///
/// Backed by flash preferences on device, by a plain map in tests.
/// Only the strip length is persisted through this interface.
pub trait SettingsStore {
    /// Read a stored integer, falling back to `default` when absent.
    fn load_int(&mut self, key: &str, default: i64) -> i64;

    /// Store an integer under `key`.
    fn save_int(&mut self, key: &str, value: i64);
}
