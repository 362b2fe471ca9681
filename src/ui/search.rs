// SPDX-License-Identifier: MPL-2.0
//! Search relay.
//!
//! The shell does not search anything itself. The relay keeps the echo that
//! backs the controlled search field and hands every keystroke, synchronously
//! and unconditionally, to whatever handler the embedding host registered.
//! No debounce, no filtering; with no handler registered the call is a safe
//! no-op beyond updating the echo.

use std::fmt;
use std::sync::Arc;

/// Handler receiving each search term as it is typed.
pub type SearchHandler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
pub struct Relay {
    term: String,
    handler: Option<SearchHandler>,
}

impl fmt::Debug for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Relay")
            .field("term", &self.term)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}

impl Relay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the external handler. Replaces any previous one.
    pub fn set_handler(&mut self, handler: SearchHandler) {
        self.handler = Some(handler);
    }

    /// Stores `value` as the local echo and forwards it to the handler.
    pub fn input(&mut self, value: String) {
        self.term = value;
        if let Some(handler) = &self.handler {
            handler(&self.term);
        }
        tracing::trace!(term = %self.term, "search input relayed");
    }

    /// The current echo backing the controlled input.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn input_updates_the_echo() {
        let mut relay = Relay::new();
        relay.input("wor".to_string());
        relay.input("work".to_string());
        assert_eq!(relay.term(), "work");
    }

    #[test]
    fn input_without_handler_is_a_noop_beyond_the_echo() {
        let mut relay = Relay::new();
        relay.input("anything".to_string());
        assert_eq!(relay.term(), "anything");
    }

    #[test]
    fn every_keystroke_is_forwarded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut relay = Relay::new();
        let calls_in_handler = Arc::clone(&calls);
        let seen_in_handler = Arc::clone(&seen);
        relay.set_handler(Arc::new(move |term| {
            calls_in_handler.fetch_add(1, Ordering::SeqCst);
            seen_in_handler.lock().unwrap().push(term.to_string());
        }));

        for term in ["d", "de", "dep", "depl"] {
            relay.input(term.to_string());
        }

        // Synchronous and unconditional: one call per keystroke, in order.
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            ["d", "de", "dep", "depl"]
        );
    }

    #[test]
    fn identical_consecutive_values_still_forward() {
        let calls = Arc::new(AtomicUsize::new(0));

        let mut relay = Relay::new();
        let calls_in_handler = Arc::clone(&calls);
        relay.set_handler(Arc::new(move |_| {
            calls_in_handler.fetch_add(1, Ordering::SeqCst);
        }));

        relay.input("same".to_string());
        relay.input("same".to_string());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
