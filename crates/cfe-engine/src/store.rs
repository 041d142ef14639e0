//! Host value store seam.

use thiserror::Error;

use cfe_model::FieldValue;

/// Write side of the host platform's value store.
///
/// The engine only ever writes through this trait; it never reads
/// values back (the host supplies current values through its own SDK).
/// Implementations are called from detached timer tasks, so they must
/// be `Send + Sync`.
pub trait ValueStore: Send + Sync {
    /// Persist a field value on the host platform.
    fn set_value(&self, field_id: &str, value: &FieldValue) -> Result<(), StoreError>;
}

/// A rejected write. Persistence failures are logged and swallowed by
/// the scheduler; in-memory state stays authoritative for the UI.
#[derive(Debug, Error)]
#[error("value store rejected write for '{field_id}': {message}")]
pub struct StoreError {
    pub field_id: String,
    pub message: String,
}

impl StoreError {
    pub fn new(field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            message: message.into(),
        }
    }
}
