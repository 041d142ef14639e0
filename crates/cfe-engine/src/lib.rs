pub mod config;
pub mod scheduler;
pub mod session;
pub mod state;
pub mod store;

pub use config::EngineConfig;
pub use scheduler::PersistScheduler;
pub use session::EditorSession;
pub use state::ManagedState;
pub use store::{StoreError, ValueStore};
