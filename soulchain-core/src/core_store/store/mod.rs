/*
    core_store::store - Store actions, persistence and validation
*/

pub mod errors;
pub mod persistence;
pub mod soul_store;
pub mod validator;

pub use errors::{StoreError, StoreResult, ValidationError};
pub use persistence::{
    FileBackend, MemoryBackend, PersistedState, StorageBackend, STORE_NAMESPACE,
};
pub use soul_store::SoulStore;
pub use validator::{CircleDraft, EntryDraft};
