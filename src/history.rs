//! Bounded conversation history
//!
//! Append-only FIFO of (question, answer) turns, owned exclusively by
//! the session loop. The buffer is for display only and is never sent
//! back to the API.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One question/answer exchange, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub question: String,
    pub answer: String,
}

impl ConversationTurn {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        ConversationTurn {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered turns, oldest first. Never grows past its capacity: when an
/// append would exceed it, the oldest turns are evicted.
#[derive(Debug, Clone)]
pub struct History {
    turns: VecDeque<ConversationTurn>,
    capacity: usize,
}

impl History {
    /// Create a buffer holding at most `capacity` turns.
    ///
    /// Capacity below 1 is clamped to 1 (configuration validation
    /// rejects such values before a session starts).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        History {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert at the tail, evicting from the head down to capacity.
    pub fn append(&mut self, turn: ConversationTurn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    /// Last `min(n, len)` turns in chronological order. Does not mutate.
    pub fn recent_window(&self, n: usize) -> Vec<&ConversationTurn> {
        let start = self.turns.len().saturating_sub(n);
        self.turns.iter().skip(start).collect()
    }

    /// Remove every turn immediately.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
