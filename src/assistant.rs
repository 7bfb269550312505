//! Canned "AI assistant" panel. A submitted prompt waits out a fixed delay and
//! then shows one of a handful of stock suggestions.

use std::time::{Duration, Instant};

use rand::Rng;
use rand::seq::SliceRandom;

pub(crate) const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

pub(crate) const RESPONSES: [&str; 4] = [
    "Try using a more functional approach with map() instead of the for loop.",
    "Consider adding type annotations to improve code safety.",
    "You could refactor this into smaller, more focused functions.",
    "This algorithm could be optimized by using a Set instead of an Array for lookups.",
];

#[derive(Debug, Clone, Default)]
pub(crate) struct AssistantPanel {
    pub(crate) open: bool,
    pub(crate) prompt: String,
    pub(crate) response: Option<String>,
    ready_at: Option<Instant>,
}

impl AssistantPanel {
    pub(crate) fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.ready_at.is_some()
    }

    /// Starts a request. Returns false for a blank prompt or while one is pending.
    pub(crate) fn submit(&mut self, now: Instant) -> bool {
        if self.prompt.trim().is_empty() || self.is_loading() {
            return false;
        }
        tracing::info!(prompt_len = self.prompt.len(), "assistant request");
        self.ready_at = Some(now + RESPONSE_DELAY);
        true
    }

    /// Resolves a pending request once its delay has elapsed.
    pub(crate) fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> bool {
        match self.ready_at {
            Some(deadline) if now >= deadline => {
                self.ready_at = None;
                self.response = RESPONSES.choose(rng).map(|s| s.to_string());
                true
            }
            _ => false,
        }
    }
}
