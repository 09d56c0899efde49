//! Bounded in-memory session history.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum entries kept (ten exchanges).
pub const HISTORY_CAPACITY: usize = 20;

/// Entries shown in the prompt.
const PROMPT_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => f.write_str("User"),
            Speaker::Assistant => f.write_str("Assistant"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker, self.text)
    }
}

/// Ring buffer of the most recent entries, oldest first.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            speaker,
            text: text.into(),
            at: Utc::now(),
        });
    }

    /// Record one user/assistant exchange.
    pub fn record_exchange(&mut self, input: &str, response: &str) {
        self.push(Speaker::User, input);
        self.push(Speaker::Assistant, response);
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The last few entries, as shown in prompts.
    pub fn recent(&self) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(PROMPT_WINDOW);
        self.entries.iter().skip(skip).map(|e| e.to_string()).collect()
    }

    /// Complete user/assistant pairs currently held.
    pub fn exchanges(&self) -> usize {
        self.entries.len() / 2
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
