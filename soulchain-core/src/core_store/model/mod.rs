/*
    core_store::model - Domain records

    Plain serde-backed records. All mutation happens through named
    SoulStore actions; nothing here is shared-mutable across components.
*/

pub mod circle;
pub mod entry;
pub mod types;
pub mod user;

pub use circle::{
    SoulCircle, MAX_CIRCLE_DESCRIPTION_LEN, MAX_CIRCLE_NAME_LEN, MAX_CIRCLE_RULES,
    MAX_CIRCLE_TAGS,
};
pub use entry::{SoulEntry, MAX_ENTRY_CONTENT_LEN};
pub use types::{Address, CircleId, EntryId, Mood, MoodStats, Timestamp};
pub use user::{User, WALLET_INITIAL_BALANCE};
