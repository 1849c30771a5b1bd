/*
    circle.rs - SoulCircle community container

    Counter semantics: member_count is maintained transactionally by the
    store's join_circle action (the creator counts as the first member);
    entry counts are never stored on the circle, they are derived from
    the entry collection (SoulStore::entry_count).
*/

use super::types::{Address, CircleId, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum circle name length in characters
pub const MAX_CIRCLE_NAME_LEN: usize = 50;

/// Maximum circle description length in characters
pub const MAX_CIRCLE_DESCRIPTION_LEN: usize = 200;

/// Maximum number of tags on a circle
pub const MAX_CIRCLE_TAGS: usize = 5;

/// Maximum number of rules on a circle
pub const MAX_CIRCLE_RULES: usize = 5;

/// A named community that entries can be posted into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoulCircle {
    /// Unique id, generated at creation
    pub id: CircleId,

    /// Display name, at most MAX_CIRCLE_NAME_LEN characters
    pub name: String,

    /// Description, at most MAX_CIRCLE_DESCRIPTION_LEN characters
    pub description: String,

    /// Banner image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image: Option<String>,

    /// Number of members, maintained by the store's join_circle action
    pub member_count: u32,

    /// Community rules, 1 to MAX_CIRCLE_RULES entries
    pub rules: Vec<String>,

    /// Community reputation score
    pub soul_score: u32,

    /// Creation time
    pub created_at: Timestamp,

    /// Creator address
    pub creator: Address,

    /// Lowercased tags, 1 to MAX_CIRCLE_TAGS entries
    pub tags: Vec<String>,

    /// Private circles are join-gated
    pub is_private: bool,
}

impl SoulCircle {
    /// Record one member joining. Called only by the store action.
    pub(crate) fn record_join(&mut self) {
        self.member_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_join_increments() {
        let mut circle = SoulCircle {
            id: CircleId::generate(),
            name: "Night Owls".to_string(),
            description: "Thoughts past midnight".to_string(),
            banner_image: None,
            member_count: 1,
            rules: vec!["Be respectful and supportive".to_string()],
            soul_score: 0,
            created_at: Timestamp::now(),
            creator: Address::new("0xabc"),
            tags: vec!["night".to_string()],
            is_private: false,
        };

        circle.record_join();
        assert_eq!(circle.member_count, 2);
    }
}
