/*
    entry.rs - SoulEntry journal post

    Entries are append-only: created once by a wallet-tier user, never
    mutated in place, never deleted. Private entries must never have
    their content rendered to anyone but the author (enforced by
    core_access::redact_for on the read path).
*/

use super::types::{Address, CircleId, EntryId, Mood, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum content length in characters
pub const MAX_ENTRY_CONTENT_LEN: usize = 500;

/// A single journal post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoulEntry {
    /// Unique id, generated at creation
    pub id: EntryId,

    /// Entry text, at most MAX_ENTRY_CONTENT_LEN characters
    pub content: String,

    /// Mood tag
    pub mood: Mood,

    /// Emoji shown alongside the mood
    pub emoji: String,

    /// Creation time
    pub timestamp: Timestamp,

    /// Author address
    pub author: Address,

    /// Private entries are visible in full only to their author
    pub is_private: bool,

    /// Content-addressed reference, set when the entry was mirrored out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipfs_hash: Option<String>,

    /// Circle this entry was posted into, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle_id: Option<CircleId>,

    /// Card background color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,

    /// Ambient sound key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_music: Option<String>,
}

impl SoulEntry {
    /// Whether this entry was posted into the given circle
    pub fn is_in_circle(&self, circle_id: &CircleId) -> bool {
        self.circle_id.as_ref() == Some(circle_id)
    }

    /// Whether the given principal authored this entry
    pub fn authored_by(&self, address: &Address) -> bool {
        &self.author == address
    }
}
