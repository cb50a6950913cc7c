//! Client-side session state.
//!
//! One [`SessionStore`] lives for the whole app. It owns the durable
//! token (local storage, key `auth-token`) and the signed-in nickname
//! (session storage, gone when the tab closes), and pushes every token
//! change to subscribers synchronously, so the in-memory flag and the
//! persisted token never disagree.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_storage::{LocalStorage, SessionStorage, Storage};

use crate::log;

const TOKEN_KEY: &str = "auth-token";
const NICKNAME_KEY: &str = "nickname";

/// Where session values persist between page loads.
///
/// The browser implementation is the only one used at runtime; tests
/// substitute an in-memory one so storage effects stay observable off
/// the browser.
pub trait ClientStorage {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn remove_token(&self);
    fn nickname(&self) -> Option<String>;
    fn set_nickname(&self, nickname: &str);
    fn remove_nickname(&self);
}

/// Local storage for the token, session storage for the nickname.
pub struct BrowserStorage;

impl ClientStorage for BrowserStorage {
    fn token(&self) -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY).ok()
    }

    fn set_token(&self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            log::error(&format!("failed to persist token: {err}"));
        }
    }

    fn remove_token(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }

    fn nickname(&self) -> Option<String> {
        SessionStorage::get::<String>(NICKNAME_KEY).ok()
    }

    fn set_nickname(&self, nickname: &str) {
        if let Err(err) = SessionStorage::set(NICKNAME_KEY, nickname) {
            log::error(&format!("failed to persist nickname: {err}"));
        }
    }

    fn remove_nickname(&self) {
        SessionStorage::delete(NICKNAME_KEY);
    }
}

/// Immutable view of the authentication state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub access_token: Option<String>,
    pub is_authenticated: bool,
}

impl Session {
    /// `is_authenticated` is derived, never set independently: only a
    /// present, non-empty token counts as signed in.
    fn from_token(access_token: Option<String>) -> Self {
        let is_authenticated = access_token.as_deref().is_some_and(|t| !t.is_empty());
        Self {
            access_token,
            is_authenticated,
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(usize);

struct Inner {
    session: Session,
    storage: Box<dyn ClientStorage>,
    subscribers: Vec<(usize, Rc<dyn Fn(&Session)>)>,
    next_subscriber: usize,
}

/// Shared, single-writer session state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionStore {
    /// Builds the store, rehydrating any token a previous visit left
    /// in storage.
    pub fn new(storage: impl ClientStorage + 'static) -> Self {
        let session = Session::from_token(storage.token());
        Self {
            inner: Rc::new(RefCell::new(Inner {
                session,
                storage: Box::new(storage),
                subscribers: Vec::new(),
                next_subscriber: 0,
            })),
        }
    }

    /// Read-only view for collaborators that must not mutate state.
    pub fn reader(&self) -> SessionReader {
        SessionReader {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.borrow().session.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().session.access_token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().session.is_authenticated
    }

    /// Persists (or removes) the token and recomputes the derived flag
    /// in one step, then notifies subscribers.
    pub fn set_token(&self, token: Option<String>) {
        {
            let mut inner = self.inner.borrow_mut();
            match token.as_deref() {
                Some(value) => inner.storage.set_token(value),
                None => inner.storage.remove_token(),
            }
            inner.session = Session::from_token(token);
        }
        self.notify();
    }

    pub fn clear(&self) {
        self.set_token(None);
    }

    pub fn nickname(&self) -> Option<String> {
        self.inner.borrow().storage.nickname()
    }

    pub fn set_nickname(&self, nickname: &str) {
        self.inner.borrow().storage.set_nickname(nickname);
    }

    pub fn clear_nickname(&self) {
        self.inner.borrow().storage.remove_nickname();
    }

    /// Drops both halves of the session. Used on logout, where the
    /// nickname must not outlive the token.
    pub fn clear_all(&self) {
        self.clear_nickname();
        self.clear();
    }

    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> SubscriberId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber;
        inner.next_subscriber += 1;
        inner.subscribers.push((id, Rc::new(listener)));
        SubscriberId(id)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(subscriber, _)| *subscriber != id.0);
    }

    // Snapshot and listener list are taken under one borrow, then the
    // borrow is released so listeners may read the store re-entrantly.
    fn notify(&self) {
        let (session, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<_> = inner
                .subscribers
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.session.clone(), subscribers)
        };
        for subscriber in &subscribers {
            subscriber(&session);
        }
    }
}

/// Token access without mutation rights.
#[derive(Clone)]
pub struct SessionReader {
    inner: Rc<RefCell<Inner>>,
}

impl SessionReader {
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().session.access_token.clone()
    }
}
