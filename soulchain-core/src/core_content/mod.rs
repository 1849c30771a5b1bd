/*
    core_content - Content addressing and entry encryption wrappers

    The core depends only on these request/response contracts, never on
    the wrapped services' internals.
*/

pub mod addressing;
pub mod crypto;
pub mod errors;

pub use addressing::{ContentRef, ContentStore, MemoryContentStore};
pub use crypto::EntryCipher;
pub use errors::{ContentError, ContentResult};
