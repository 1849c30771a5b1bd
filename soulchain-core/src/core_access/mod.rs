/*
    core_access - Tiered access control

    The single gating authority. Every consumer asks this module which
    tier applies and what that tier may see or do; no view re-derives
    tier booleans locally.
*/

pub mod tier;
pub mod visibility;

pub use tier::{resolve_tier, Tier, ANONYMOUS_FEED_CAP, FEDERATED_FEED_CAP};
pub use visibility::{redact_for, visible_entries, FeedEntry};
