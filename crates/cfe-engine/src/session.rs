//! The editing session: state, recomputation and persistence wiring.

use std::sync::Arc;

use tracing::debug;

use cfe_model::{ContentSchema, FieldDescriptor, FieldValue};
use cfe_rules::{RuleSet, StateSnapshot, resolve_visible};

use crate::config::EngineConfig;
use crate::scheduler::PersistScheduler;
use crate::state::ManagedState;
use crate::store::ValueStore;

/// One entry-editing session.
///
/// Owns the managed controlling-field state and the current visible
/// field set. Every state change triggers a full recomputation and a
/// wholesale replacement of the visible set; consumers never observe
/// a partially updated list.
///
/// [`update_field`](EditorSession::update_field) spawns persistence
/// timers and therefore must run inside a tokio runtime.
pub struct EditorSession {
    schema: ContentSchema,
    rules: RuleSet,
    state: ManagedState,
    visible: Vec<FieldDescriptor>,
    scheduler: PersistScheduler,
}

impl EditorSession {
    /// Start a session: derive the managing field set from the rules,
    /// seed state from schema defaults and resolve the initial
    /// visible set.
    pub fn new(
        schema: ContentSchema,
        rules: RuleSet,
        store: Arc<dyn ValueStore>,
        config: EngineConfig,
    ) -> Self {
        let managing_ids = rules.managing_field_ids();
        let state = ManagedState::initialize(&schema, &managing_ids);
        let visible = resolve_visible(&schema, &rules, state.snapshot());
        debug!(
            fields = schema.fields.len(),
            managed = managing_ids.len(),
            visible = visible.len(),
            "editor session started"
        );
        Self {
            schema,
            rules,
            state,
            visible,
            scheduler: PersistScheduler::new(store, config.persist_delay()),
        }
    }

    /// The ordered field list the host should render.
    pub fn visible_fields(&self) -> &[FieldDescriptor] {
        &self.visible
    }

    /// Current managed controlling-field values.
    pub fn state(&self) -> &StateSnapshot {
        self.state.snapshot()
    }

    /// Apply a user edit to a controlling field.
    ///
    /// Updates for fields outside the managed set are a no-op. A
    /// successful update recomputes the visible set and schedules a
    /// debounced persistence call carrying this value.
    pub fn update_field(&mut self, field_id: &str, value: FieldValue) {
        if !self.state.update(field_id, value.clone()) {
            return;
        }
        self.visible = resolve_visible(&self.schema, &self.rules, self.state.snapshot());
        self.scheduler.schedule(field_id, value);
    }

    /// Swap in a new schema and recompute the visible set.
    ///
    /// The managed key set stays fixed for the session; only the
    /// field list and defaults of future lookups change.
    pub fn replace_schema(&mut self, schema: ContentSchema) {
        self.schema = schema;
        self.visible = resolve_visible(&self.schema, &self.rules, self.state.snapshot());
    }
}
