/*
    types.rs - Common types for core_store models

    Defines:
    - Timestamps
    - IDs for entries and circles
    - User addresses
    - The fixed mood tag set and per-user mood statistics
*/

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a timestamp representing the current time
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_millis() as u64)
    }

    /// Create a timestamp from milliseconds since epoch
    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    /// Get milliseconds since epoch
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Principal identifier: a wallet address or a federated subject id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub String);

impl Address {
    pub fn new(id: impl Into<String>) -> Self {
        Address(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a journal entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        EntryId(id.into())
    }

    pub fn generate() -> Self {
        use uuid::Uuid;
        EntryId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a circle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CircleId(pub String);

impl CircleId {
    pub fn new(id: impl Into<String>) -> Self {
        CircleId(id.into())
    }

    pub fn generate() -> Self {
        use uuid::Uuid;
        CircleId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CircleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of mood tags an entry can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Grateful,
    Peaceful,
    Excited,
    Hopeful,
    Reflective,
    Anxious,
    Sad,
    Angry,
    Confused,
    Lonely,
    Creative,
    Determined,
}

impl Mood {
    /// All mood tags, in display order
    pub const ALL: [Mood; 12] = [
        Mood::Grateful,
        Mood::Peaceful,
        Mood::Excited,
        Mood::Hopeful,
        Mood::Reflective,
        Mood::Anxious,
        Mood::Sad,
        Mood::Angry,
        Mood::Confused,
        Mood::Lonely,
        Mood::Creative,
        Mood::Determined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Grateful => "grateful",
            Mood::Peaceful => "peaceful",
            Mood::Excited => "excited",
            Mood::Hopeful => "hopeful",
            Mood::Reflective => "reflective",
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Confused => "confused",
            Mood::Lonely => "lonely",
            Mood::Creative => "creative",
            Mood::Determined => "determined",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-user count of entries posted under each mood
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodStats(HashMap<Mood, u32>);

impl MoodStats {
    pub fn new() -> Self {
        MoodStats(HashMap::new())
    }

    /// Record one entry posted under the given mood
    pub fn record(&mut self, mood: Mood) {
        *self.0.entry(mood).or_insert(0) += 1;
    }

    /// Number of entries recorded under the given mood
    pub fn count(&self, mood: Mood) -> u32 {
        self.0.get(&mood).copied().unwrap_or(0)
    }

    /// Total entries recorded across all moods
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// The mood with the highest count, if any entries were recorded
    pub fn dominant(&self) -> Option<Mood> {
        self.0
            .iter()
            .max_by_key(|(mood, count)| (**count, mood.as_str()))
            .map(|(mood, _)| *mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_creation() {
        let ts1 = Timestamp::now();
        let ts2 = Timestamp::now();
        assert!(ts2.as_millis() >= ts1.as_millis());
    }

    #[test]
    fn test_timestamp_from_millis() {
        let ts = Timestamp::from_millis(1234567890);
        assert_eq!(ts.as_millis(), 1234567890);
    }

    #[test]
    fn test_entry_id_generation() {
        let id1 = EntryId::generate();
        let id2 = EntryId::generate();
        assert_ne!(id1, id2);
        assert!(!id1.0.is_empty());
    }

    #[test]
    fn test_circle_id_generation() {
        let id1 = CircleId::generate();
        let id2 = CircleId::generate();
        assert_ne!(id1, id2);
        assert!(!id1.0.is_empty());
    }

    #[test]
    fn test_mood_tag_set_is_fixed() {
        assert_eq!(Mood::ALL.len(), 12);
        assert_eq!(Mood::Grateful.as_str(), "grateful");
        assert_eq!(Mood::Determined.as_str(), "determined");
    }

    #[test]
    fn test_mood_serializes_lowercase() {
        let json = serde_json::to_string(&Mood::Reflective).unwrap();
        assert_eq!(json, "\"reflective\"");
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mood::Reflective);
    }

    #[test]
    fn test_mood_stats_record_and_count() {
        let mut stats = MoodStats::new();
        stats.record(Mood::Grateful);
        stats.record(Mood::Grateful);
        stats.record(Mood::Sad);

        assert_eq!(stats.count(Mood::Grateful), 2);
        assert_eq!(stats.count(Mood::Sad), 1);
        assert_eq!(stats.count(Mood::Angry), 0);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.dominant(), Some(Mood::Grateful));
    }

    #[test]
    fn test_mood_stats_empty_has_no_dominant() {
        let stats = MoodStats::new();
        assert_eq!(stats.dominant(), None);
    }
}
