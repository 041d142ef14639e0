//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for an editor session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Delay in milliseconds between a controlling-field update and
    /// the persistence call it schedules.
    ///
    /// Every update schedules its own timer; timers are never
    /// cancelled or coalesced.
    pub persist_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            persist_delay_ms: 3000, // 3 seconds
        }
    }
}

impl EngineConfig {
    pub fn persist_delay(&self) -> Duration {
        Duration::from_millis(self.persist_delay_ms)
    }
}
