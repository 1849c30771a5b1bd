/*
    End-to-end scenarios across store, resolver and auth session
*/

use crate::core_access::{redact_for, resolve_tier, visible_entries, Tier};
use crate::core_auth::AuthSession;
use crate::core_store::model::{Address, EntryId, Mood, SoulEntry, Timestamp};
use crate::core_store::store::{MemoryBackend, SoulStore};
use std::sync::Arc;

fn fresh_store() -> Arc<SoulStore> {
    let store = Arc::new(SoulStore::new(Arc::new(MemoryBackend::new())));
    store.rehydrate().unwrap();
    store
}

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

#[test]
fn test_anonymous_visitor_sees_three_of_six_public_entries() {
    let store = fresh_store();

    // Feed of 10 entries, 4 private
    let feed: Vec<SoulEntry> = (1..=10)
        .map(|n| entry(n, "author", matches!(n, 3 | 5 | 7 | 9)))
        .collect();
    store.set_entries(feed).unwrap();

    let tier = resolve_tier(store.user().unwrap().as_ref());
    assert_eq!(tier, Tier::Anonymous);

    let visible = visible_entries(tier, &store.entries().unwrap());
    let ids: Vec<&str> = visible.iter().map(|e| e.id.0.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e2", "e4"]);
    assert!(visible.iter().all(|e| !e.is_private));
}

#[test]
fn test_tier_upgrades_widen_the_feed() {
    let store = fresh_store();
    let session = AuthSession::new(store.clone());

    let feed: Vec<SoulEntry> = (1..=10).map(|n| entry(n, "author", false)).collect();
    store.set_entries(feed).unwrap();

    let visible_len = |store: &SoulStore| {
        let user = store.user().unwrap();
        visible_entries(resolve_tier(user.as_ref()), &store.entries().unwrap()).len()
    };

    assert_eq!(visible_len(&store), 3);

    session
        .handle_federated_signed_in(Address::new("uid-1"))
        .unwrap();
    assert_eq!(visible_len(&store), 5);

    session
        .handle_wallet_connected(Address::new("0xabc"))
        .unwrap();
    assert_eq!(visible_len(&store), 10);
}

#[test]
fn test_bookmark_does_not_survive_wallet_switch() {
    let store = fresh_store();
    let session = AuthSession::new(store.clone());

    session
        .handle_wallet_connected(Address::new("0xabc"))
        .unwrap();
    store.add_saved_post(entry(1, "0xabc", false)).unwrap();
    assert_eq!(store.saved_posts().unwrap().len(), 1);

    session.handle_wallet_disconnected().unwrap();
    session
        .handle_wallet_connected(Address::new("0xdef"))
        .unwrap();

    assert!(store.saved_posts().unwrap().is_empty());
}

#[test]
fn test_wallet_feed_redacts_foreign_private_content() {
    let store = fresh_store();
    let session = AuthSession::new(store.clone());
    session
        .handle_wallet_connected(Address::new("0xabc"))
        .unwrap();

    store
        .set_entries(vec![
            entry(1, "0xabc", true),
            entry(2, "0xdef", true),
            entry(3, "0xdef", false),
        ])
        .unwrap();

    let user = store.user().unwrap().unwrap();
    let tier = resolve_tier(Some(&user));
    let visible = visible_entries(tier, &store.entries().unwrap());
    // Wallet tier is unrestricted at the resolver
    assert_eq!(visible.len(), 3);

    // The redaction pass strips the foreign private content before it
    // reaches any consumer
    let feed = redact_for(Some(&user.address), visible);
    assert_eq!(feed[0].entry.content, "entry 1");
    assert!(feed[1].redacted);
    assert!(feed[1].entry.content.is_empty());
    assert_eq!(feed[2].entry.content, "entry 3");
}
