/*
    soulchain-core - Client state store with tiered access control

    The engine behind the SoulChain journaling app: a persisted
    single-source-of-truth store, a three-tier access resolver, auth
    collaborator seams, content wrappers, and an in-order deferred-task
    queue. The view layer consumes only the contracts exported here.
*/

pub mod config;
pub mod core_access;
pub mod core_auth;
pub mod core_content;
pub mod core_store;
pub mod core_tasks;
pub mod logging;

pub use config::Config;
pub use core_access::{resolve_tier, visible_entries, Tier};
pub use core_store::{SoulStore, StoreError, StoreResult};
pub use logging::{init_logging, LogLevel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Ensure the main exports are accessible
        let _ = Tier::Anonymous;
        let _ = LogLevel::Info;
    }
}
