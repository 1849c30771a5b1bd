/*
    core_store - Persisted client state layer

    The single source of truth for session state. Handles:
    - Data models (users, entries, circles, saved posts)
    - Named mutation actions
    - Durable persistence of the projection and rehydration on startup
    - Draft validation before anything reaches the store
*/

pub mod model;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export commonly used types
pub use model::{Address, CircleId, EntryId, Mood, SoulCircle, SoulEntry, Timestamp, User};
pub use store::{SoulStore, StoreError, StoreResult};
