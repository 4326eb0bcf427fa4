//! Bounded command queue for `no_std` environments.
//!
//! Commands are pushed from network and messaging handler contexts and
//! drained by the engine once per render tick. Built on
//! `critical-section` and `heapless::Deque`, so pushes are safe from
//! interrupt or callback contexts while the render loop consumes.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::command::Command;

/// Error returned when pushing to a full queue. The command is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFullError;

/// A bounded, thread-safe FIFO of pending commands.
///
/// `N` is the queue capacity. Multiple producers may push; the engine is
/// the sole consumer, which keeps command application serialized with
/// rendering.
pub struct CommandQueue<const N: usize> {
    inner: Mutex<RefCell<Deque<Command, N>>>,
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Try to enqueue a command.
    ///
    /// Returns `Err(QueueFullError)` if the queue is full.
    pub fn try_push(&self, command: Command) -> Result<(), QueueFullError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(|_| QueueFullError)
        })
    }

    /// Dequeue the oldest pending command, if any.
    pub fn pop(&self) -> Option<Command> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
