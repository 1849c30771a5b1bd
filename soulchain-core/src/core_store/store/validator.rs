/*
    validator.rs - Draft validation for new entries and circles

    Invalid input is refused before it reaches the store; the store
    itself never sees an unvalidated record.

    Rules:
    - entries: non-empty content up to 500 chars, mood required
    - circles: non-empty name (<=50) and description (<=200),
      1-5 deduplicated lowercase tags, 1-5 rules
*/

use crate::core_store::model::{
    Address, CircleId, EntryId, Mood, SoulCircle, SoulEntry, Timestamp,
    MAX_CIRCLE_DESCRIPTION_LEN, MAX_CIRCLE_NAME_LEN, MAX_CIRCLE_RULES, MAX_CIRCLE_TAGS,
    MAX_ENTRY_CONTENT_LEN,
};
use crate::core_store::store::errors::{StoreResult, ValidationError};

/// Input collected for a new journal entry
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub content: String,
    pub mood: Option<Mood>,
    pub emoji: String,
    pub is_private: bool,
    pub circle_id: Option<CircleId>,
    pub bg_color: Option<String>,
    pub bg_music: Option<String>,
}

impl EntryDraft {
    pub fn new(content: impl Into<String>, mood: Option<Mood>) -> Self {
        EntryDraft {
            content: content.into(),
            mood,
            emoji: String::new(),
            is_private: false,
            circle_id: None,
            bg_color: None,
            bg_music: None,
        }
    }

    /// Check the draft against the entry rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content.trim().is_empty() {
            return Err(ValidationError::MissingField("content".to_string()));
        }
        if self.content.chars().count() > MAX_ENTRY_CONTENT_LEN {
            return Err(ValidationError::InvalidField {
                field: "content".to_string(),
                reason: format!("longer than {} characters", MAX_ENTRY_CONTENT_LEN),
            });
        }
        if self.mood.is_none() {
            return Err(ValidationError::MissingField("mood".to_string()));
        }
        Ok(())
    }

    /// Validate and build the entry record for the given author
    pub fn build(self, author: Address) -> StoreResult<SoulEntry> {
        self.validate()?;
        let mood = self
            .mood
            .ok_or_else(|| ValidationError::MissingField("mood".to_string()))?;

        Ok(SoulEntry {
            id: EntryId::generate(),
            content: self.content.trim().to_string(),
            mood,
            emoji: self.emoji,
            timestamp: Timestamp::now(),
            author,
            is_private: self.is_private,
            ipfs_hash: None,
            circle_id: self.circle_id,
            bg_color: self.bg_color,
            bg_music: self.bg_music,
        })
    }
}

/// Input collected for a new circle
#[derive(Debug, Clone)]
pub struct CircleDraft {
    pub name: String,
    pub description: String,
    pub banner_image: Option<String>,
    pub tags: Vec<String>,
    pub rules: Vec<String>,
    pub is_private: bool,
}

impl CircleDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        CircleDraft {
            name: name.into(),
            description: description.into(),
            banner_image: None,
            tags: Vec::new(),
            rules: vec!["Be respectful and supportive".to_string()],
            is_private: false,
        }
    }

    /// Add a tag, lowercased; duplicates and overflow are ignored
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !self.tags.contains(&tag) && self.tags.len() < MAX_CIRCLE_TAGS {
            self.tags.push(tag);
        }
    }

    /// Add a rule; duplicates and overflow are ignored
    pub fn add_rule(&mut self, rule: &str) {
        let rule = rule.trim().to_string();
        if !rule.is_empty() && !self.rules.contains(&rule) && self.rules.len() < MAX_CIRCLE_RULES {
            self.rules.push(rule);
        }
    }

    /// Check the draft against the circle rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        if self.name.chars().count() > MAX_CIRCLE_NAME_LEN {
            return Err(ValidationError::InvalidField {
                field: "name".to_string(),
                reason: format!("longer than {} characters", MAX_CIRCLE_NAME_LEN),
            });
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()));
        }
        if self.description.chars().count() > MAX_CIRCLE_DESCRIPTION_LEN {
            return Err(ValidationError::InvalidField {
                field: "description".to_string(),
                reason: format!("longer than {} characters", MAX_CIRCLE_DESCRIPTION_LEN),
            });
        }
        if self.tags.is_empty() {
            return Err(ValidationError::MissingField("tags".to_string()));
        }
        if self.tags.len() > MAX_CIRCLE_TAGS {
            return Err(ValidationError::LimitExceeded {
                field: "tags".to_string(),
                max: MAX_CIRCLE_TAGS,
            });
        }
        if self.rules.is_empty() {
            return Err(ValidationError::MissingField("rules".to_string()));
        }
        if self.rules.len() > MAX_CIRCLE_RULES {
            return Err(ValidationError::LimitExceeded {
                field: "rules".to_string(),
                max: MAX_CIRCLE_RULES,
            });
        }
        Ok(())
    }

    /// Validate and build the circle record for the given creator.
    /// The creator counts as the first member.
    pub fn build(self, creator: Address) -> StoreResult<SoulCircle> {
        self.validate()?;

        Ok(SoulCircle {
            id: CircleId::generate(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            banner_image: self.banner_image,
            member_count: 1,
            rules: self.rules,
            soul_score: 0,
            created_at: Timestamp::now(),
            creator,
            tags: self.tags,
            is_private: self.is_private,
        })
    }
}
