/*
    soul_store.rs - Single source of truth for session state

    One store instance owns all mutable application state. Every
    mutation goes through a named action; every action that touches the
    durable projection (user, entries, circles, saved posts) writes it
    through to the storage backend. Transient UI flags notify consumers
    but are never persisted.

    The store starts inert: until rehydrate() has run, consumers must
    not render from it. Persistence failures are logged and absorbed,
    never surfaced to the view layer.
*/

use crate::core_access::resolve_tier;
use crate::core_store::model::{CircleId, EntryId, SoulCircle, SoulEntry, User};
use crate::core_store::store::errors::{StoreError, StoreResult};
use crate::core_store::store::persistence::{PersistedState, StorageBackend, STORE_NAMESPACE};
use crate::core_store::store::validator::{CircleDraft, EntryDraft};
use metrics::counter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Helper to convert poison errors into StoreError
fn handle_poison<T>(_err: PoisonError<T>) -> StoreError {
    StoreError::Internal("Lock poisoned: a thread panicked while holding the lock".to_string())
}

/// Full session state, durable and transient
#[derive(Debug, Default)]
struct SessionState {
    // Auth area
    user: Option<User>,
    auth_loading: bool,
    auth_error: Option<String>,

    // Feed area
    entries: Vec<SoulEntry>,
    feed_loading: bool,
    has_more: bool,
    feed_error: Option<String>,

    // Circle area
    circles: Vec<SoulCircle>,
    current_circle: Option<SoulCircle>,
    circle_loading: bool,
    circle_error: Option<String>,

    // Per-device bookmarks, cleared when the identity changes
    saved_posts: Vec<SoulEntry>,

    // Transient UI flags, excluded from the persisted projection
    is_post_modal_open: bool,
    selected_circle_id: Option<CircleId>,
}

impl SessionState {
    fn initial() -> Self {
        SessionState {
            has_more: true,
            ..SessionState::default()
        }
    }

    fn projection(&self) -> PersistedState {
        PersistedState {
            user: self.user.clone(),
            entries: self.entries.clone(),
            circles: self.circles.clone(),
            saved_posts: self.saved_posts.clone(),
        }
    }

    fn apply_projection(&mut self, persisted: PersistedState) {
        self.user = persisted.user;
        self.entries = persisted.entries;
        self.circles = persisted.circles;
        self.saved_posts = persisted.saved_posts;
    }
}

/// The SoulChain client state store
pub struct SoulStore {
    backend: Arc<dyn StorageBackend>,
    state: RwLock<SessionState>,
    hydrated: AtomicBool,
    version: watch::Sender<u64>,
}

impl SoulStore {
    /// Create an inert store. Call rehydrate() before first render.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let (version, _) = watch::channel(0);
        SoulStore {
            backend,
            state: RwLock::new(SessionState::initial()),
            hydrated: AtomicBool::new(false),
            version,
        }
    }

    /// Load the persisted projection back into memory. Runs exactly
    /// once per process; corrupt or unavailable storage falls back to
    /// the empty initial state.
    pub fn rehydrate(&self) -> StoreResult<()> {
        if self.hydrated.swap(true, Ordering::SeqCst) {
            debug!("store already hydrated, skipping");
            return Ok(());
        }

        let persisted = match self.backend.get(STORE_NAMESPACE) {
            Ok(Some(bytes)) => match serde_json::from_slice::<PersistedState>(&bytes) {
                Ok(persisted) => persisted,
                Err(err) => {
                    warn!(error = %err, "persisted state corrupt, starting empty");
                    counter!("soulchain.store.rehydrate_failures").increment(1);
                    PersistedState::default()
                }
            },
            Ok(None) => PersistedState::default(),
            Err(err) => {
                warn!(error = %err, "storage unavailable, starting empty");
                counter!("soulchain.store.rehydrate_failures").increment(1);
                PersistedState::default()
            }
        };

        self.state
            .write()
            .map_err(handle_poison)?
            .apply_projection(persisted);
        counter!("soulchain.store.rehydrations").increment(1);
        self.notify();
        Ok(())
    }

    /// Whether rehydrate() has completed
    pub fn is_hydrated(&self) -> bool {
        self.hydrated.load(Ordering::SeqCst)
    }

    /// Subscribe to change notifications. The value is a monotonic
    /// version that advances on every effective mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Current change version
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    // ---- Auth actions ----

    /// Replace the current user. A structurally equal value is a no-op
    /// (no persistence write, no notification). Sign-out or an identity
    /// change clears the saved-post collection.
    pub fn set_user(&self, user: Option<User>) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;

        if state.user == user {
            return Ok(());
        }

        let identity_changed = match (&state.user, &user) {
            (Some(prev), Some(next)) => prev.address != next.address,
            (Some(_), None) => true,
            _ => false,
        };
        if identity_changed {
            state.saved_posts.clear();
        }

        state.user = user;
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    pub fn user(&self) -> StoreResult<Option<User>> {
        Ok(self.state.read().map_err(handle_poison)?.user.clone())
    }

    pub fn set_auth_loading(&self, loading: bool) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.auth_loading = loading;
        self.notify();
        Ok(())
    }

    pub fn auth_loading(&self) -> StoreResult<bool> {
        Ok(self.state.read().map_err(handle_poison)?.auth_loading)
    }

    pub fn set_auth_error(&self, error: Option<String>) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.auth_error = error;
        self.notify();
        Ok(())
    }

    pub fn auth_error(&self) -> StoreResult<Option<String>> {
        Ok(self.state.read().map_err(handle_poison)?.auth_error.clone())
    }

    // ---- Feed actions ----

    /// Replace the feed wholesale
    pub fn set_entries(&self, entries: Vec<SoulEntry>) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;
        state.entries = entries;
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    /// Prepend one entry (newest-first ordering)
    pub fn add_entry(&self, entry: SoulEntry) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;
        state.entries.insert(0, entry);
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    /// Validate a draft, gate on the wallet tier, append the entry and
    /// update the author's posting stats, all as one action.
    pub fn publish_entry(&self, draft: EntryDraft) -> StoreResult<SoulEntry> {
        let mut state = self.state.write().map_err(handle_poison)?;

        let author = match state.user.as_ref() {
            Some(user) if resolve_tier(Some(user)).can_create_content() => user.address.clone(),
            _ => {
                return Err(StoreError::PermissionDenied(
                    "posting requires a connected wallet".to_string(),
                ))
            }
        };

        let entry = draft.build(author)?;
        if let Some(user) = state.user.as_mut() {
            user.record_entry(entry.mood);
        }
        state.entries.insert(0, entry.clone());
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(entry)
    }

    pub fn entries(&self) -> StoreResult<Vec<SoulEntry>> {
        Ok(self.state.read().map_err(handle_poison)?.entries.clone())
    }

    pub fn set_feed_loading(&self, loading: bool) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.feed_loading = loading;
        self.notify();
        Ok(())
    }

    pub fn feed_loading(&self) -> StoreResult<bool> {
        Ok(self.state.read().map_err(handle_poison)?.feed_loading)
    }

    pub fn set_has_more(&self, has_more: bool) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.has_more = has_more;
        self.notify();
        Ok(())
    }

    pub fn has_more(&self) -> StoreResult<bool> {
        Ok(self.state.read().map_err(handle_poison)?.has_more)
    }

    pub fn set_feed_error(&self, error: Option<String>) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.feed_error = error;
        self.notify();
        Ok(())
    }

    pub fn feed_error(&self) -> StoreResult<Option<String>> {
        Ok(self.state.read().map_err(handle_poison)?.feed_error.clone())
    }

    // ---- Circle actions ----

    /// Replace all circles wholesale
    pub fn set_circles(&self, circles: Vec<SoulCircle>) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;
        state.circles = circles;
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    /// Append one circle
    pub fn add_circle(&self, circle: SoulCircle) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;
        state.circles.push(circle);
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    /// Validate a draft, gate on the wallet tier, and append the circle
    pub fn create_circle(&self, draft: CircleDraft) -> StoreResult<SoulCircle> {
        let mut state = self.state.write().map_err(handle_poison)?;

        let creator = match state.user.as_ref() {
            Some(user) if resolve_tier(Some(user)).can_create_content() => user.address.clone(),
            _ => {
                return Err(StoreError::PermissionDenied(
                    "creating a circle requires a connected wallet".to_string(),
                ))
            }
        };

        let circle = draft.build(creator)?;
        if let Some(user) = state.user.as_mut() {
            user.joined_circles.insert(circle.id.clone());
        }
        state.circles.push(circle.clone());
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(circle)
    }

    /// Join a circle: records membership on the user and increments the
    /// circle's member count, once. Idempotent per user and circle.
    pub fn join_circle(&self, circle_id: &CircleId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;

        let tier = resolve_tier(state.user.as_ref());
        if !tier.can_join_circle() {
            return Err(StoreError::PermissionDenied(
                "joining a circle requires a connected wallet".to_string(),
            ));
        }

        let already_joined = state
            .user
            .as_ref()
            .map(|u| u.has_joined(circle_id))
            .unwrap_or(false);
        if already_joined {
            return Ok(());
        }

        let circle = state
            .circles
            .iter_mut()
            .find(|c| &c.id == circle_id)
            .ok_or_else(|| StoreError::NotFound(format!("circle {}", circle_id)))?;
        circle.record_join();

        if let Some(user) = state.user.as_mut() {
            user.joined_circles.insert(circle_id.clone());
        }

        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    pub fn circles(&self) -> StoreResult<Vec<SoulCircle>> {
        Ok(self.state.read().map_err(handle_poison)?.circles.clone())
    }

    pub fn circle(&self, circle_id: &CircleId) -> StoreResult<Option<SoulCircle>> {
        Ok(self
            .state
            .read()
            .map_err(handle_poison)?
            .circles
            .iter()
            .find(|c| &c.id == circle_id)
            .cloned())
    }

    /// Entries posted into the given circle, newest first
    pub fn entries_in_circle(&self, circle_id: &CircleId) -> StoreResult<Vec<SoulEntry>> {
        Ok(self
            .state
            .read()
            .map_err(handle_poison)?
            .entries
            .iter()
            .filter(|e| e.is_in_circle(circle_id))
            .cloned()
            .collect())
    }

    /// Derived entry count for a circle, computed from the feed
    pub fn entry_count(&self, circle_id: &CircleId) -> StoreResult<usize> {
        Ok(self
            .state
            .read()
            .map_err(handle_poison)?
            .entries
            .iter()
            .filter(|e| e.is_in_circle(circle_id))
            .count())
    }

    pub fn set_current_circle(&self, circle: Option<SoulCircle>) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.current_circle = circle;
        self.notify();
        Ok(())
    }

    pub fn current_circle(&self) -> StoreResult<Option<SoulCircle>> {
        Ok(self
            .state
            .read()
            .map_err(handle_poison)?
            .current_circle
            .clone())
    }

    pub fn set_circle_loading(&self, loading: bool) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.circle_loading = loading;
        self.notify();
        Ok(())
    }

    pub fn circle_loading(&self) -> StoreResult<bool> {
        Ok(self.state.read().map_err(handle_poison)?.circle_loading)
    }

    pub fn set_circle_error(&self, error: Option<String>) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.circle_error = error;
        self.notify();
        Ok(())
    }

    pub fn circle_error(&self) -> StoreResult<Option<String>> {
        Ok(self
            .state
            .read()
            .map_err(handle_poison)?
            .circle_error
            .clone())
    }

    // ---- Saved posts ----

    /// Insert a bookmark at the head. Re-bookmarking an entry moves it
    /// to the front; the collection never holds duplicates.
    pub fn add_saved_post(&self, entry: SoulEntry) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;
        state.saved_posts.retain(|p| p.id != entry.id);
        state.saved_posts.insert(0, entry);
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    /// Remove a bookmark by entry id; no-op if absent
    pub fn remove_saved_post(&self, entry_id: &EntryId) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;
        let before = state.saved_posts.len();
        state.saved_posts.retain(|p| &p.id != entry_id);
        if state.saved_posts.len() == before {
            return Ok(());
        }
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    pub fn saved_posts(&self) -> StoreResult<Vec<SoulEntry>> {
        Ok(self
            .state
            .read()
            .map_err(handle_poison)?
            .saved_posts
            .clone())
    }

    // ---- Transient UI flags (never persisted) ----

    pub fn set_post_modal_open(&self, open: bool) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.is_post_modal_open = open;
        self.notify();
        Ok(())
    }

    pub fn is_post_modal_open(&self) -> StoreResult<bool> {
        Ok(self.state.read().map_err(handle_poison)?.is_post_modal_open)
    }

    pub fn set_selected_circle_id(&self, id: Option<CircleId>) -> StoreResult<()> {
        self.state.write().map_err(handle_poison)?.selected_circle_id = id;
        self.notify();
        Ok(())
    }

    pub fn selected_circle_id(&self) -> StoreResult<Option<CircleId>> {
        Ok(self
            .state
            .read()
            .map_err(handle_poison)?
            .selected_circle_id
            .clone())
    }

    // ---- Utils ----

    /// Restore all state to the initial empty configuration. Used on
    /// full sign-out and account deletion.
    pub fn reset(&self) -> StoreResult<()> {
        let mut state = self.state.write().map_err(handle_poison)?;
        *state = SessionState::initial();
        self.persist(&state);
        drop(state);
        self.notify();
        Ok(())
    }

    /// Write the durable projection through to the backend. Failures
    /// are logged and absorbed; local storage errors are not transient
    /// in a sense worth retrying.
    fn persist(&self, state: &SessionState) {
        let projection = state.projection();
        let bytes = match serde_json::to_vec(&projection) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, "failed to serialize store projection");
                counter!("soulchain.store.persist_failures").increment(1);
                return;
            }
        };

        if let Err(err) = self.backend.set(STORE_NAMESPACE, &bytes) {
            warn!(error = %err, "failed to persist store projection");
            counter!("soulchain.store.persist_failures").increment(1);
        }
    }

    fn notify(&self) {
        counter!("soulchain.store.mutations").increment(1);
        self.version.send_modify(|v| *v += 1);
    }
}
