//! Notifications slice: newest-first list, unread counter, and
//! request-lifecycle flags.
//!
//! The unread counter is *recomputed* from `is_read` flags after every
//! full fetch and after a single mark-read, so it can never drift from the
//! list. The one exception is [`NotificationsState::push`], where a
//! server-pushed event prepends and increments in the same reducer call;
//! the next full fetch self-corrects any divergence.

use std::sync::Arc;

use tokio::sync::RwLock;

use gigboard_api::MarketplaceBackend;
use gigboard_core::notification::Notification;

use crate::generation::{Generation, GenerationCounter};
use crate::status::OpStatus;

/// State owned by the notifications slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationsState {
    /// Newest-first.
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub status: OpStatus,
    list_gen: GenerationCounter,
}

impl NotificationsState {
    fn recompute_unread(&mut self) {
        self.unread_count = self.notifications.iter().filter(|n| !n.is_read).count();
    }

    pub fn begin_list_fetch(&mut self) -> Generation {
        self.status.begin_fresh();
        self.list_gen.begin()
    }

    /// Replace the list and recompute the unread counter from scratch —
    /// the canonical value whenever a full fetch lands.
    pub fn list_fulfilled(&mut self, generation: Generation, notifications: Vec<Notification>) {
        if !self.list_gen.is_current(generation) {
            tracing::debug!("Discarding stale notification list response");
            return;
        }
        self.status.settle();
        self.notifications = notifications;
        self.recompute_unread();
    }

    pub fn list_rejected(&mut self, generation: Generation, message: String) {
        if !self.list_gen.is_current(generation) {
            return;
        }
        self.status.fail(message);
    }

    /// A single notification was marked read server-side: replace the
    /// entry and recompute. Idempotent for already-read entries.
    pub fn mark_read_fulfilled(&mut self, updated: Notification) {
        self.status.succeed();
        if let Some(entry) = self.notifications.iter_mut().find(|n| n.id == updated.id) {
            *entry = updated;
        }
        self.recompute_unread();
    }

    /// The bulk mark-all succeeded: flip every entry locally and zero the
    /// counter, trusting the response instead of refetching.
    pub fn mark_all_fulfilled(&mut self) {
        self.status.succeed();
        for n in &mut self.notifications {
            n.is_read = true;
        }
        self.unread_count = 0;
    }

    /// Merge a server-pushed notification: prepend and increment by
    /// exactly one, atomically within this single reducer call.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
        self.unread_count += 1;
    }

    /// Clear status flags (the list survives; it is server-refreshed).
    pub fn reset(&mut self) {
        self.status.reset();
    }
}

/// Notifications resource slice.
pub struct NotificationsSlice {
    state: RwLock<NotificationsState>,
    backend: Arc<dyn MarketplaceBackend>,
}

impl NotificationsSlice {
    pub fn new(backend: Arc<dyn MarketplaceBackend>) -> Self {
        Self {
            state: RwLock::new(NotificationsState::default()),
            backend,
        }
    }

    pub async fn snapshot(&self) -> NotificationsState {
        self.state.read().await.clone()
    }

    pub async fn reset(&self) {
        self.state.write().await.reset();
    }

    /// `GET notifications` — full refetch, recomputing the unread counter.
    pub async fn fetch_all(&self) {
        let generation = self.state.write().await.begin_list_fetch();
        match self.backend.notifications().await {
            Ok(notifications) => self
                .state
                .write()
                .await
                .list_fulfilled(generation, notifications),
            Err(e) => self
                .state
                .write()
                .await
                .list_rejected(generation, e.user_message()),
        }
    }

    /// `PUT notifications/:id/read` — mark one notification read.
    pub async fn mark_read(&self, notification_id: &str) {
        self.state.write().await.status.begin();
        match self.backend.mark_read(notification_id).await {
            Ok(updated) => self.state.write().await.mark_read_fulfilled(updated),
            Err(e) => self.state.write().await.status.fail(e.user_message()),
        }
    }

    /// `PUT notifications/read-all` — mark everything read.
    pub async fn mark_all_read(&self) {
        self.state.write().await.status.begin();
        match self.backend.mark_all_read().await {
            Ok(()) => self.state.write().await.mark_all_fulfilled(),
            Err(e) => self.state.write().await.status.fail(e.user_message()),
        }
    }

    /// Merge a notification pushed over the real-time channel.
    pub async fn push(&self, notification: Notification) {
        tracing::debug!(notification_id = %notification.id, "Merging pushed notification");
        self.state.write().await.push(notification);
    }
}

// ---------------------------------------------------------------------------
// Tests (pure reducers; operation flows live in tests/slice_scenarios.rs)
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use gigboard_core::notification::NotificationKind;

    fn notification(id: &str, is_read: bool) -> Notification {
        Notification {
            id: id.into(),
            recipient_id: "u1".into(),
            sender: None,
            kind: NotificationKind::NewBid,
            message: format!("notification {id}"),
            related_id: "g1".into(),
            is_read,
            created_at: chrono::Utc::now(),
        }
    }

    fn unread_invariant_holds(state: &NotificationsState) -> bool {
        state.unread_count == state.notifications.iter().filter(|n| !n.is_read).count()
    }

    #[test]
    fn full_fetch_recomputes_unread() {
        let mut state = NotificationsState::default();
        let generation = state.begin_list_fetch();
        state.list_fulfilled(
            generation,
            vec![
                notification("n1", false),
                notification("n2", true),
                notification("n3", false),
            ],
        );
        assert_eq!(state.unread_count, 2);
        assert!(unread_invariant_holds(&state));
    }

    #[test]
    fn push_increments_exactly_once_per_event() {
        let mut state = NotificationsState::default();
        for i in 0..5 {
            state.push(notification(&format!("n{i}"), false));
        }
        assert_eq!(state.notifications.len(), 5);
        assert_eq!(state.unread_count, 5);
        // Newest first.
        assert_eq!(state.notifications[0].id, "n4");
        assert!(unread_invariant_holds(&state));
    }

    #[test]
    fn full_fetch_after_pushes_self_corrects() {
        let mut state = NotificationsState::default();
        state.push(notification("n1", false));
        state.push(notification("n2", false));
        // A refetch is canonical regardless of what was merged before.
        let generation = state.begin_list_fetch();
        state.list_fulfilled(generation, vec![notification("n2", true)]);
        assert_eq!(state.unread_count, 0);
        assert!(unread_invariant_holds(&state));
    }

    #[test]
    fn mark_read_replaces_entry_and_recomputes() {
        let mut state = NotificationsState::default();
        let generation = state.begin_list_fetch();
        state.list_fulfilled(
            generation,
            vec![notification("n1", false), notification("n2", false)],
        );
        state.mark_read_fulfilled(notification("n1", true));
        assert_eq!(state.unread_count, 1);
        assert!(state.notifications[0].is_read);
        assert!(unread_invariant_holds(&state));
    }

    #[test]
    fn marking_already_read_is_idempotent() {
        let mut state = NotificationsState::default();
        let generation = state.begin_list_fetch();
        state.list_fulfilled(generation, vec![notification("n1", true)]);
        let before = state.unread_count;
        state.mark_read_fulfilled(notification("n1", true));
        assert_eq!(state.unread_count, before);
        assert!(state.notifications[0].is_read);
    }

    #[test]
    fn mark_all_zeroes_counter_without_refetch() {
        let mut state = NotificationsState::default();
        let generation = state.begin_list_fetch();
        state.list_fulfilled(
            generation,
            vec![notification("n1", false), notification("n2", false)],
        );
        state.mark_all_fulfilled();
        assert_eq!(state.unread_count, 0);
        assert!(state.notifications.iter().all(|n| n.is_read));
        assert!(unread_invariant_holds(&state));
    }

    #[test]
    fn stale_fetch_does_not_clobber_newer_merge() {
        let mut state = NotificationsState::default();
        let first = state.begin_list_fetch();
        let second = state.begin_list_fetch();
        state.list_fulfilled(second, vec![notification("n2", false)]);
        state.list_fulfilled(first, vec![]);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.unread_count, 1);
    }

    #[test]
    fn reset_keeps_list_and_counter() {
        let mut state = NotificationsState::default();
        state.push(notification("n1", false));
        state.status.fail("boom");
        state.reset();
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.unread_count, 1);
        assert_eq!(state.status, OpStatus::default());
    }
}
