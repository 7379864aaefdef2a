//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only writer of `AuthState`. It is constructed once in
//! the root component and shared through context; views receive a read-only
//! `ReadSignal<AuthState>` fed by the store's observer, and route guards use
//! that signal to coordinate role redirects.
//!
//! DESIGN
//! ======
//! Remote auth, durable storage and navigation are injected through the
//! `AuthBackend`, `SessionStorage` and `Navigator` traits so the store can be
//! driven without a browser. Concurrent `login` calls are rejected while one
//! is in flight; the first call wins.
//!
//! TRADE-OFFS
//! ==========
//! With `AuthConfig::demo_fallback` enabled (the default) a failed remote
//! login still signs the user in with a synthesized demo session. The outcome
//! is reported as `LoginOutcome::DemoFallback` and logged as a warning.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::net::api::{AuthBackend, AuthError, HttpAuthBackend};
use crate::net::types::{LoginPayload, LoginReply, PersistedSession, User};
use crate::state::roles::{HOME_ROUTE, route_for_role};
use crate::util::navigation::{BrowserNavigator, Navigator};
use crate::util::storage::{BrowserStorage, SessionStorage};

pub const DEMO_USER_ID: &str = "demo-1";
pub const DEMO_USER_NAME: &str = "Demo User";
pub const DEMO_TOKEN: &str = "demo-token";

/// Authentication state tracking the current user, token and login progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True only while a login attempt is in flight.
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// Raw role string of the signed-in user.
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }
}

/// How a successful `login` call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The auth endpoint issued a session.
    Authenticated,
    /// The auth endpoint only returned a route; no session was established.
    Redirected,
    /// The auth endpoint failed and a local demo session was synthesized.
    DemoFallback,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Another login attempt has not settled yet.
    #[error("A sign-in is already in progress.")]
    InFlight,

    /// The auth endpoint failed and the demo fallback is disabled.
    #[error("{0}")]
    Rejected(#[from] AuthError),
}

type Observer = Box<dyn Fn(&AuthState)>;

/// Single authority for the browser session.
pub struct SessionStore<B, S, N> {
    state: RefCell<AuthState>,
    config: AuthConfig,
    backend: B,
    storage: S,
    navigator: N,
    observer: Option<Observer>,
}

/// Store wired to `fetch`, `localStorage` and `window.location`.
pub type BrowserSessionStore = SessionStore<HttpAuthBackend, BrowserStorage, BrowserNavigator>;

impl<B, S, N> SessionStore<B, S, N> {
    pub fn new(config: AuthConfig, backend: B, storage: S, navigator: N) -> Self {
        Self {
            state: RefCell::new(AuthState::default()),
            config,
            backend,
            storage,
            navigator,
            observer: None,
        }
    }

    /// Register the single observer notified with a snapshot after every mutation.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(&AuthState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    fn mutate(&self, f: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
    }
}

impl<B, S, N> SessionStore<B, S, N>
where
    B: AuthBackend,
    S: SessionStorage,
    N: Navigator,
{
    /// Construct the store and immediately rehydrate it from storage.
    pub fn open(config: AuthConfig, backend: B, storage: S, navigator: N) -> Self {
        let store = Self::new(config, backend, storage, navigator);
        store.rehydrate();
        store
    }

    /// Adopt the persisted session, if any.
    ///
    /// A corrupt entry is deleted and the session stays empty. Returns whether
    /// a session was restored.
    pub fn rehydrate(&self) -> bool {
        let key = self.config.storage_key.as_str();
        let raw = match self.storage.load(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                leptos::logging::warn!("session storage unreadable, starting signed out: {e}");
                return false;
            }
        };

        match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(PersistedSession { token, user }) => {
                self.mutate(|s| {
                    s.token = Some(token);
                    s.user = Some(user);
                });
                true
            }
            Err(e) => {
                leptos::logging::warn!("discarding corrupt persisted session: {e}");
                if let Err(e) = self.storage.remove(key) {
                    leptos::logging::warn!("failed to remove corrupt session: {e}");
                }
                false
            }
        }
    }

    /// Sign in with `payload` and navigate to the resulting role's dashboard.
    ///
    /// `loading` is true for the duration of the call and is reset on every
    /// exit path, including when the returned future is dropped.
    ///
    /// # Errors
    ///
    /// - [`LoginError::InFlight`] if another login has not settled; state is untouched.
    /// - [`LoginError::Rejected`] if the endpoint failed and the demo fallback is
    ///   disabled; the session is unchanged.
    pub async fn login(&self, payload: LoginPayload) -> Result<LoginOutcome, LoginError> {
        if self.state.borrow().loading {
            leptos::logging::warn!("login ignored: another attempt is in flight");
            return Err(LoginError::InFlight);
        }
        self.mutate(|s| s.loading = true);
        let _loading = LoadingGuard { store: self };

        match self.backend.login(&payload).await {
            Ok(LoginReply::Session { token, user }) => {
                let route = route_for_role(&user.role);
                self.persist(token, user);
                self.navigator.navigate(route);
                Ok(LoginOutcome::Authenticated)
            }
            Ok(LoginReply::Route { route }) => {
                self.navigator.navigate(&route);
                Ok(LoginOutcome::Redirected)
            }
            Err(e) if self.config.demo_fallback => {
                leptos::logging::warn!("auth API failed, using demo fallback: {e}");
                self.persist(DEMO_TOKEN.to_owned(), demo_user(&payload));
                self.navigator.navigate(payload.role.route());
                Ok(LoginOutcome::DemoFallback)
            }
            Err(e) => {
                leptos::logging::warn!("login rejected: {e}");
                Err(LoginError::Rejected(e))
            }
        }
    }

    /// Clear the session, delete the persisted entry and go home. Idempotent.
    pub fn logout(&self) {
        self.mutate(|s| {
            s.user = None;
            s.token = None;
        });
        if let Err(e) = self.storage.remove(&self.config.storage_key) {
            leptos::logging::warn!("failed to remove persisted session: {e}");
        }
        self.navigator.navigate(HOME_ROUTE);
    }

    fn persist(&self, token: String, user: User) {
        let record = PersistedSession { token, user };
        match serde_json::to_string(&record) {
            Ok(raw) => {
                if let Err(e) = self.storage.save(&self.config.storage_key, &raw) {
                    leptos::logging::warn!("session not persisted: {e}");
                }
            }
            Err(e) => leptos::logging::warn!("session not serializable: {e}"),
        }
        self.mutate(|s| {
            s.token = Some(record.token);
            s.user = Some(record.user);
        });
    }
}

/// Resets `loading` when dropped.
struct LoadingGuard<'a, B, S, N> {
    store: &'a SessionStore<B, S, N>,
}

impl<B, S, N> Drop for LoadingGuard<'_, B, S, N> {
    fn drop(&mut self) {
        self.store.mutate(|s| s.loading = false);
    }
}

fn demo_user(payload: &LoginPayload) -> User {
    User {
        id: DEMO_USER_ID.to_owned(),
        email: payload.email.clone(),
        role: payload.role.as_str().to_owned(),
        name: Some(DEMO_USER_NAME.to_owned()),
    }
}

/// Context handle for the shared browser store.
pub type SessionContext = StoredValue<Rc<BrowserSessionStore>, LocalStorage>;

/// Build the browser store, publish its state into a signal and provide both
/// through context. Returns the read-only state signal.
pub fn provide_session(config: AuthConfig) -> ReadSignal<AuthState> {
    let (auth, set_auth) = signal(AuthState::default());
    let backend = HttpAuthBackend::from_config(&config);
    let store = SessionStore::new(config, backend, BrowserStorage, BrowserNavigator)
        .with_observer(move |state| set_auth.set(state.clone()));

    provide_context::<SessionContext>(StoredValue::new_local(Rc::new(store)));
    provide_context(auth);
    auth
}

/// Shared session store from context.
pub fn use_session() -> Rc<BrowserSessionStore> {
    expect_context::<SessionContext>().get_value()
}

/// Read-only session state from context.
pub fn use_auth() -> ReadSignal<AuthState> {
    expect_context::<ReadSignal<AuthState>>()
}
