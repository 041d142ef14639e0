//! Debounced persistence.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use cfe_model::FieldValue;

use crate::store::ValueStore;

/// Schedules deferred writes to the host value store.
///
/// Each [`schedule`](PersistScheduler::schedule) call spawns an
/// independent timer that fires after the fixed delay with the value
/// captured at schedule time. Timers for the same field are never
/// cancelled or coalesced, so rapid successive updates each produce
/// their own write; redundant or out-of-order writes are possible and
/// accepted. Session teardown does not retract in-flight timers.
///
/// Must be used from within a tokio runtime.
#[derive(Clone)]
pub struct PersistScheduler {
    store: Arc<dyn ValueStore>,
    delay: Duration,
}

impl PersistScheduler {
    pub fn new(store: Arc<dyn ValueStore>, delay: Duration) -> Self {
        Self { store, delay }
    }

    /// Spawn a timer that persists `value` for `field_id` after the
    /// configured delay.
    ///
    /// Failures are logged and swallowed; the in-memory state remains
    /// the source of truth for the UI. The returned handle can be
    /// awaited but is normally dropped (the timer always fires).
    pub fn schedule(&self, field_id: &str, value: FieldValue) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let delay = self.delay;
        let field_id = field_id.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match store.set_value(&field_id, &value) {
                Ok(()) => debug!(field = %field_id, "persisted field value"),
                Err(error) => warn!(field = %field_id, %error, "failed to persist field value"),
            }
        })
    }
}
