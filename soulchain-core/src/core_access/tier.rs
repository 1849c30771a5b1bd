/*
    tier.rs - Access tier resolution

    Three tiers derived from the authentication state of the current
    user. Wallet-connected is strictly superior: it wins regardless of
    whether the same record also carries federated auth. Transitions
    happen only through SoulStore::set_user; this module owns none.
*/

use crate::core_store::model::User;
use serde::{Deserialize, Serialize};

/// Feed cap for anonymous visitors
pub const ANONYMOUS_FEED_CAP: usize = 3;

/// Feed cap for federated-only users
pub const FEDERATED_FEED_CAP: usize = 5;

/// Access level derived from the current user's authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// No user present
    Anonymous,
    /// Federated sign-in without a connected wallet
    Federated,
    /// Wallet-connected
    Wallet,
}

impl Tier {
    /// Entries visible on the feed; None means unrestricted
    pub fn feed_cap(&self) -> Option<usize> {
        match self {
            Tier::Anonymous => Some(ANONYMOUS_FEED_CAP),
            Tier::Federated => Some(FEDERATED_FEED_CAP),
            Tier::Wallet => None,
        }
    }

    /// Only wallet-tier users may post entries or create circles
    pub fn can_create_content(&self) -> bool {
        matches!(self, Tier::Wallet)
    }

    /// Only wallet-tier users may join circles
    pub fn can_join_circle(&self) -> bool {
        matches!(self, Tier::Wallet)
    }
}

/// Compute the tier for the given user record. Pure and total over the
/// Option<&User> domain.
pub fn resolve_tier(user: Option<&User>) -> Tier {
    match user {
        None => Tier::Anonymous,
        Some(u) if u.is_wallet_connected => Tier::Wallet,
        Some(u) if u.is_google_auth => Tier::Federated,
        // A user record exists but carries neither auth source; treat
        // it as federated-equivalent rather than anonymous since a
        // principal is present.
        Some(_) => Tier::Federated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_store::model::Address;

    #[test]
    fn test_no_user_is_anonymous() {
        assert_eq!(resolve_tier(None), Tier::Anonymous);
    }

    #[test]
    fn test_wallet_wins_regardless_of_federated_flag() {
        let mut user = User::wallet_connected(Address::new("0xabc"));
        assert_eq!(resolve_tier(Some(&user)), Tier::Wallet);

        user.is_google_auth = true;
        assert_eq!(resolve_tier(Some(&user)), Tier::Wallet);
    }

    #[test]
    fn test_federated_only_user() {
        let user = User::federated(Address::new("uid-1"));
        assert_eq!(resolve_tier(Some(&user)), Tier::Federated);
    }

    #[test]
    fn test_capabilities_per_tier() {
        assert!(!Tier::Anonymous.can_create_content());
        assert!(!Tier::Federated.can_create_content());
        assert!(Tier::Wallet.can_create_content());

        assert!(!Tier::Anonymous.can_join_circle());
        assert!(!Tier::Federated.can_join_circle());
        assert!(Tier::Wallet.can_join_circle());
    }

    #[test]
    fn test_feed_caps() {
        assert_eq!(Tier::Anonymous.feed_cap(), Some(3));
        assert_eq!(Tier::Federated.feed_cap(), Some(5));
        assert_eq!(Tier::Wallet.feed_cap(), None);
    }
}
