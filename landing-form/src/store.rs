/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Observable form store.
//!
//! One store lives per mounted form. The view subscribes on mount,
//! dispatches [`FormAction`]s from its event handlers, and re-renders from
//! the snapshot it is handed. Everything runs on the browser main thread,
//! so the store is `Rc<RefCell<_>>` and deliberately not `Send`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use landing_types::Callback;
use log::debug;

use crate::state::{FormAction, FormState};
use crate::submit::SubmitOutcome;

struct FormStoreInner {
    state: FormState,
    subscribers: Vec<(usize, Callback<FormState>)>,
    next_subscriber_id: usize,
}

/// Shared handle to a form's state. Cloning shares the same state.
#[derive(Clone)]
pub struct FormStore {
    inner: Rc<RefCell<FormStoreInner>>,
}

impl PartialEq for FormStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for FormStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FormStore")
            .field("state", &inner.state)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(FormStoreInner {
                state: FormState::new(),
                subscribers: Vec::new(),
                next_subscriber_id: 0,
            })),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> FormState {
        self.inner.borrow().state.clone()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.inner.borrow().state.is_submit_disabled()
    }

    /// Subscribe to state changes. Returns an id for [`FormStore::unsubscribe`].
    pub fn subscribe(&self, callback: Callback<FormState>) -> usize {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.push((id, callback));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(sub_id, _)| *sub_id != id);
    }

    /// Like [`FormStore::subscribe`], but the subscription ends when the
    /// returned guard is dropped.
    pub fn watch(&self, callback: Callback<FormState>) -> StoreSubscription {
        StoreSubscription {
            store: Rc::downgrade(&self.inner),
            id: self.subscribe(callback),
        }
    }

    /// Apply `action` and notify subscribers if anything changed.
    pub fn dispatch(&self, action: FormAction) {
        let (snapshot, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.state.clone();
            inner.state.apply(action);
            if inner.state == before {
                return;
            }
            (inner.state.clone(), inner.subscribers.clone())
        };

        // Subscribers may dispatch or unsubscribe, so the borrow is released first.
        for (_, callback) in subscribers {
            callback.emit(snapshot.clone());
        }
    }

    pub fn set_message(&self, text: impl Into<String>) {
        self.dispatch(FormAction::SetMessage(text.into()));
    }

    pub fn set_email(&self, text: impl Into<String>) {
        self.dispatch(FormAction::SetEmail(text.into()));
    }

    pub fn toggle_checked(&self) {
        self.dispatch(FormAction::ToggleChecked);
    }

    /// Handle a submit. Nothing leaves the page; the outcome is logged and
    /// returned so the caller can decide what to show.
    pub fn submit(&self) -> SubmitOutcome {
        let outcome = SubmitOutcome::from(&self.inner.borrow().state);
        debug!("contact form submit intercepted: {outcome:?}");
        outcome
    }
}

/// Live subscription to a [`FormStore`]. Dropping it unsubscribes.
///
/// Holds only a weak reference, so an outstanding guard does not keep the
/// store alive.
#[must_use = "dropping the guard unsubscribes immediately"]
pub struct StoreSubscription {
    store: Weak<RefCell<FormStoreInner>>,
    id: usize,
}

impl StoreSubscription {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(sub_id, _)| *sub_id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_subscriber(store: &FormStore) -> (usize, Rc<RefCell<Vec<FormState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = store.subscribe(Callback::from(move |s| sink.borrow_mut().push(s)));
        (id, seen)
    }

    #[test]
    fn dispatch_notifies_with_new_snapshot() {
        let store = FormStore::new();
        let (_, seen) = recording_subscriber(&store);

        store.set_email("x@y.com");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].email, "x@y.com");
        assert_eq!(seen[0].email_error, None);
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let store = FormStore::new();
        store.set_email("x@y.com");
        let (_, seen) = recording_subscriber(&store);

        store.set_email("x@y.com");
        store.set_message("");

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = FormStore::new();
        let (id, seen) = recording_subscriber(&store);

        store.toggle_checked();
        store.unsubscribe(id);
        store.toggle_checked();

        assert_eq!(seen.borrow().len(), 1);
        assert!(!store.state().is_checked);
    }

    #[test]
    fn dropping_watch_guard_unsubscribes() {
        let store = FormStore::new();
        let seen = Rc::new(RefCell::new(0));
        let sink = seen.clone();
        let guard = store.watch(Callback::from(move |_: FormState| {
            *sink.borrow_mut() += 1;
        }));

        store.set_message("first");
        drop(guard);
        store.set_message("second");

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(store.state().message, "second");
    }

    #[test]
    fn watch_guard_outliving_store_is_harmless() {
        let store = FormStore::new();
        let guard = store.watch(Callback::noop());
        let id = guard.id();
        drop(store);
        drop(guard);
        assert_eq!(id, 0);
    }

    #[test]
    fn clones_share_state() {
        let store = FormStore::new();
        let other = store.clone();
        other.set_message("hello");
        assert_eq!(store.state().message, "hello");
        assert_eq!(store, other);
        assert_ne!(store, FormStore::new());
    }

    #[test]
    fn subscriber_may_dispatch_reentrantly() {
        let store = FormStore::new();
        let handle = store.clone();
        store.subscribe(Callback::from(move |s: FormState| {
            if s.email == "a@b.co" && !s.is_checked {
                handle.toggle_checked();
            }
        }));

        store.set_email("a@b.co");

        assert!(store.state().is_checked);
        assert!(!store.is_submit_disabled());
    }

    #[test]
    fn submit_reports_gate_without_touching_state() {
        let store = FormStore::new();
        assert_eq!(store.submit(), SubmitOutcome::Blocked);

        store.set_email("x@y.com");
        store.toggle_checked();
        let before = store.state();
        assert_eq!(store.submit(), SubmitOutcome::Ready);
        assert_eq!(store.state(), before);
    }
}
