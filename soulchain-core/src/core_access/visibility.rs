/*
    visibility.rs - Tier-based feed filtering and private-entry redaction

    visible_entries applies the tier table: anonymous and federated
    tiers see only non-private entries up to their cap, wallet tier is
    unrestricted. Input ordering is always preserved.

    redact_for is a separate pass: private entries authored by someone
    other than the viewer have their content blanked before they reach
    any consumer, so the plaintext never travels to the view layer.
*/

use super::tier::Tier;
use crate::core_store::model::{Address, SoulEntry};

/// An entry prepared for rendering. When redacted, the content has
/// been blanked and only the envelope (mood, timestamp, author) is
/// left for the lock placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub entry: SoulEntry,
    pub redacted: bool,
}

/// Filter and truncate a feed per the tier table, preserving order
pub fn visible_entries(tier: Tier, entries: &[SoulEntry]) -> Vec<SoulEntry> {
    match tier.feed_cap() {
        Some(cap) => entries
            .iter()
            .filter(|e| !e.is_private)
            .take(cap)
            .cloned()
            .collect(),
        None => entries.to_vec(),
    }
}

/// Blank the content of private entries not authored by the viewer.
/// Runs after visible_entries so wallet-tier feeds never carry other
/// users' private content past this point.
pub fn redact_for(viewer: Option<&Address>, entries: Vec<SoulEntry>) -> Vec<FeedEntry> {
    entries
        .into_iter()
        .map(|mut entry| {
            let own = viewer.map(|v| entry.authored_by(v)).unwrap_or(false);
            let redacted = entry.is_private && !own;
            if redacted {
                entry.content.clear();
                entry.ipfs_hash = None;
            }
            FeedEntry { entry, redacted }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_store::model::{EntryId, Mood, Timestamp};

    fn entry(n: u64, author: &str, is_private: bool) -> SoulEntry {
        SoulEntry {
            id: EntryId::new(format!("e{}", n)),
            content: format!("entry {}", n),
            mood: Mood::Reflective,
            emoji: String::new(),
            timestamp: Timestamp::from_millis(n),
            author: Address::new(author),
            is_private,
            ipfs_hash: None,
            circle_id: None,
            bg_color: None,
            bg_music: None,
        }
    }

    fn ids(entries: &[SoulEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.0.clone()).collect()
    }

    #[test]
    fn test_anonymous_sees_first_three_public_in_order() {
        let feed = vec![
            entry(1, "a", false),
            entry(2, "a", true),
            entry(3, "b", false),
            entry(4, "b", false),
            entry(5, "c", false),
        ];
        let visible = visible_entries(Tier::Anonymous, &feed);
        assert_eq!(ids(&visible), vec!["e1", "e3", "e4"]);
    }

    #[test]
    fn test_federated_sees_first_five_public() {
        let feed: Vec<SoulEntry> = (1..=8).map(|n| entry(n, "a", false)).collect();
        let visible = visible_entries(Tier::Federated, &feed);
        assert_eq!(ids(&visible), vec!["e1", "e2", "e3", "e4", "e5"]);
    }

    #[test]
    fn test_wallet_is_identity() {
        let feed = vec![entry(1, "a", false), entry(2, "b", true), entry(3, "c", false)];
        let visible = visible_entries(Tier::Wallet, &feed);
        assert_eq!(visible, feed);
    }

    #[test]
    fn test_anonymous_scenario_ten_entries_four_private() {
        let feed: Vec<SoulEntry> = (1..=10)
            .map(|n| entry(n, "a", matches!(n, 2 | 4 | 6 | 8)))
            .collect();
        let visible = visible_entries(Tier::Anonymous, &feed);
        assert_eq!(ids(&visible), vec!["e1", "e3", "e5"]);
    }

    #[test]
    fn test_redaction_blanks_foreign_private_content() {
        let viewer = Address::new("me");
        let feed = vec![
            entry(1, "me", true),
            entry(2, "them", true),
            entry(3, "them", false),
        ];

        let redacted = redact_for(Some(&viewer), feed);

        assert!(!redacted[0].redacted);
        assert_eq!(redacted[0].entry.content, "entry 1");

        assert!(redacted[1].redacted);
        assert!(redacted[1].entry.content.is_empty());

        assert!(!redacted[2].redacted);
        assert_eq!(redacted[2].entry.content, "entry 3");
    }

    #[test]
    fn test_redaction_with_no_viewer_blanks_all_private() {
        let feed = vec![entry(1, "them", true), entry(2, "them", false)];
        let redacted = redact_for(None, feed);
        assert!(redacted[0].redacted);
        assert!(!redacted[1].redacted);
    }
}
