//! Type-ahead search with a debounced reset.
//!
//! Typed characters accumulate in a buffer until the control has been idle
//! for the debounce window. Time is passed in explicitly (milliseconds on the
//! host's clock), so the logic runs the same under a browser event loop and
//! in tests.

use crate::option::SelectOption;
use serde::{Deserialize, Serialize};

/// Identifies one scheduling of a [`Debounce`].
///
/// Hosts that run a real timer hand the handle back through
/// [`Debounce::fire`]; only the most recent handle is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DebounceHandle(pub u64);

/// A restartable one-shot deadline.
#[derive(Debug, Clone, Default)]
pub struct Debounce {
    window_ms: u32,
    deadline: Option<u64>,
    generation: u64,
}

impl Debounce {
    /// Create an idle debounce with the given window.
    #[must_use]
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            deadline: None,
            generation: 0,
        }
    }

    /// Get the window in milliseconds.
    #[must_use]
    pub const fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Cancel any pending deadline and schedule a new one.
    pub fn restart(&mut self, now_ms: u64) -> DebounceHandle {
        self.generation += 1;
        self.deadline = Some(now_ms.saturating_add(u64::from(self.window_ms)));
        DebounceHandle(self.generation)
    }

    /// Cancel the pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Check if a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Check if the pending deadline has passed.
    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.deadline.is_some_and(|d| now_ms >= d)
    }

    /// Consume a timer firing. Returns false for superseded handles.
    pub fn fire(&mut self, handle: DebounceHandle) -> bool {
        if self.deadline.is_some() && handle.0 == self.generation {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

/// Search buffer plus its debounce.
#[derive(Debug, Clone, Default)]
pub struct TypeAhead {
    buffer: String,
    debounce: Debounce,
}

impl TypeAhead {
    /// Create an empty buffer with the given reset window.
    #[must_use]
    pub const fn new(window_ms: u32) -> Self {
        Self {
            buffer: String::new(),
            debounce: Debounce::new(window_ms),
        }
    }

    /// Current (lowercased) search text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.buffer
    }

    /// Get the debounce.
    #[must_use]
    pub const fn debounce(&self) -> &Debounce {
        &self.debounce
    }

    /// Append a typed character and restart the reset timer.
    ///
    /// A buffer whose window already elapsed is cleared first, so hosts that
    /// never call [`tick`](Self::tick) still get the reset.
    pub fn push(&mut self, ch: char, now_ms: u64) -> DebounceHandle {
        self.tick(now_ms);
        self.buffer.extend(ch.to_lowercase());
        tracing::trace!(query = %self.buffer, "type-ahead buffer");
        self.debounce.restart(now_ms)
    }

    /// Clear the buffer if its window elapsed. Returns true if cleared.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.debounce.is_expired(now_ms) {
            self.reset();
            true
        } else {
            false
        }
    }

    /// Clear the buffer on a host timer firing. Returns true if cleared.
    pub fn expire(&mut self, handle: DebounceHandle) -> bool {
        if self.debounce.fire(handle) {
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    /// Clear the buffer and cancel the timer.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.debounce.cancel();
    }

    /// Index of the first option whose label starts with the buffer.
    #[must_use]
    pub fn find(&self, options: &[SelectOption]) -> Option<usize> {
        if self.buffer.is_empty() {
            return None;
        }
        options.iter().position(|o| o.label_starts_with(&self.buffer))
    }
}
