//! Rank priority overrides
//!
//! The surrounding application persists these; this module only defines the
//! shape and a tolerant load path. Ranks decide which pulse a member is
//! scheduled into, so overrides let a group re-order itself without touching
//! the roster.

use serde::{Deserialize, Serialize};

use crate::consts::PARTY_SIZE;

/// Optional group-relative priority per slot
///
/// A slot with a priority sorts before slots without one; lower values sort
/// earlier. Ties, and slots with no override, fall back to slot-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PriorityConfig {
    pub priority: [Option<u8>; PARTY_SIZE],
}

impl PriorityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort key for ordering a group's slots
    #[inline]
    pub fn sort_key(&self, slot: usize) -> (u8, usize) {
        (self.priority[slot].unwrap_or(u8::MAX), slot)
    }

    /// Parse overrides from JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed priority config: {err}");
                Self::default()
            }
        }
    }
}
