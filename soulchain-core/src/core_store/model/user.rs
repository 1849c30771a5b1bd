/*
    user.rs - User identity record

    A user exists only while an external auth collaborator reports a
    successful sign-in. Re-authentication replaces the record wholesale;
    it is never merged with the previous one.

    Tier rules (see core_access):
    - wallet-connected users are WALLET tier regardless of is_google_auth
    - federated-only users are FEDERATED tier
    - no user at all is ANONYMOUS
*/

use super::types::{Address, CircleId, Mood, MoodStats, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Initial soul balance granted on wallet connect
pub const WALLET_INITIAL_BALANCE: u64 = 100;

/// Identity record for the active principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Wallet address or federated subject id
    pub address: Address,

    /// True when the identity is backed by a connected wallet
    pub is_wallet_connected: bool,

    /// True when the identity came from the federated provider
    pub is_google_auth: bool,

    /// When this identity record was created
    pub joined_at: Timestamp,

    /// Soul token balance
    pub soul_balance: u64,

    /// Consecutive-day posting streak
    pub streak: u32,

    /// Total entries posted by this identity
    pub total_entries: u32,

    /// Circles this user has joined
    pub joined_circles: BTreeSet<CircleId>,

    /// Per-mood posting counts
    pub mood_stats: MoodStats,
}

impl User {
    /// Construct a fresh wallet-tier user, as done on wallet connect
    pub fn wallet_connected(address: Address) -> Self {
        User {
            address,
            is_wallet_connected: true,
            is_google_auth: false,
            joined_at: Timestamp::now(),
            soul_balance: WALLET_INITIAL_BALANCE,
            streak: 1,
            total_entries: 0,
            joined_circles: BTreeSet::new(),
            mood_stats: MoodStats::new(),
        }
    }

    /// Construct a fresh federated-tier user, as done on federated sign-in
    pub fn federated(subject_id: Address) -> Self {
        User {
            address: subject_id,
            is_wallet_connected: false,
            is_google_auth: true,
            joined_at: Timestamp::now(),
            soul_balance: 0,
            streak: 0,
            total_entries: 0,
            joined_circles: BTreeSet::new(),
            mood_stats: MoodStats::new(),
        }
    }

    /// Whether this user has joined the given circle
    pub fn has_joined(&self, circle_id: &CircleId) -> bool {
        self.joined_circles.contains(circle_id)
    }

    /// Record a posted entry against this user's stats
    pub fn record_entry(&mut self, mood: Mood) {
        self.total_entries += 1;
        self.mood_stats.record(mood);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_user_defaults() {
        let user = User::wallet_connected(Address::new("0xabc"));
        assert!(user.is_wallet_connected);
        assert!(!user.is_google_auth);
        assert_eq!(user.soul_balance, WALLET_INITIAL_BALANCE);
        assert_eq!(user.streak, 1);
        assert_eq!(user.total_entries, 0);
        assert!(user.joined_circles.is_empty());
    }

    #[test]
    fn test_federated_user_defaults() {
        let user = User::federated(Address::new("firebase-uid-1"));
        assert!(!user.is_wallet_connected);
        assert!(user.is_google_auth);
        assert_eq!(user.soul_balance, 0);
        assert_eq!(user.streak, 0);
    }

    #[test]
    fn test_record_entry_updates_stats() {
        let mut user = User::wallet_connected(Address::new("0xabc"));
        user.record_entry(Mood::Hopeful);
        user.record_entry(Mood::Hopeful);
        user.record_entry(Mood::Anxious);

        assert_eq!(user.total_entries, 3);
        assert_eq!(user.mood_stats.count(Mood::Hopeful), 2);
        assert_eq!(user.mood_stats.count(Mood::Anxious), 1);
    }

    #[test]
    fn test_structural_equality() {
        let a = User::wallet_connected(Address::new("0xabc"));
        let mut b = a.clone();
        assert_eq!(a, b);

        b.soul_balance += 1;
        assert_ne!(a, b);
    }
}
