//! In-memory registry center.

use crate::error::Result;
use crate::state::RegistryCenter;
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: String,
    ephemeral: bool,
}

/// DashMap-backed registry center with last-write-wins semantics.
///
/// Ephemeral keys are flagged rather than session-bound: there is no session
/// to expire in-process. `clear_ephemeral` simulates a session end for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistryCenter {
    entries: Arc<DashMap<String, Entry>>,
}

impl MemoryRegistryCenter {
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|e| e.value.clone())
    }

    pub fn is_ephemeral(&self, key: &str) -> bool {
        self.entries.get(key).map(|e| e.ephemeral).unwrap_or(false)
    }

    /// Drops every ephemeral key, as a registry would when the owning
    /// session ends.
    pub fn clear_ephemeral(&self) {
        self.entries.retain(|_, entry| !entry.ephemeral);
    }
}

impl RegistryCenter for MemoryRegistryCenter {
    fn persist(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ephemeral: false,
            },
        );
        Ok(())
    }

    fn persist_ephemeral(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                ephemeral: true,
            },
        );
        Ok(())
    }
}
