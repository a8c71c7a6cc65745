use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Error;

/// Round-robin rotation over one or more API keys.
///
/// Rotation state lives on the ring and travels with the client that owns
/// it, never in module-level state: concurrent passes sharing one client
/// interleave keys without hidden coupling, and rotation order is testable
/// in isolation.
pub struct KeyRing {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl KeyRing {
    pub fn new(keys: Vec<String>) -> Result<Self, Error> {
        if keys.is_empty() {
            return Err(Error::NoKeysConfigured);
        }
        Ok(Self {
            keys,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Parse the comma-separated form used by `GEMINI_API_KEYS`.
    pub fn from_joined(joined: &str) -> Result<Self, Error> {
        let keys = joined
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();
        Self::new(keys)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Next key in rotation order.
    pub fn next_key(&self) -> &str {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        &self.keys[i]
    }
}
