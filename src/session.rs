//! Session context: the single owner of "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`Session`] is created per application and injected into whatever
//! renders views (Leptos context in the browser, the command runner in the
//! CLI). Route guards read [`SessionState`]; pages use [`Session::api`].
//!
//! DESIGN
//! ======
//! State is a tagged union rather than `loading`/`user` flags, so
//! "authenticated while loading" cannot be represented. Where the state
//! lives is abstracted by [`SessionCell`]: a plain `RefCell` here, a reactive
//! signal in the browser.
//!
//! ORDERING
//! ========
//! `login` calls the backend first and writes storage only after success, so
//! a rejected login leaves storage and state untouched. In-memory state is
//! updated last, after persistence.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::auth::AuthClient;
use crate::error::ApiError;
use crate::storage::KeyValueStore;
use crate::store::SessionStore;
use crate::transport::HttpTransport;
use crate::types::{Credentials, NewUser, TokenBundle, User};

/// Observable session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Storage has not been read yet.
    #[default]
    Initializing,
    Unauthenticated,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Initializing | Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initializing)
    }
}

/// Holder for the in-memory [`SessionState`].
pub trait SessionCell {
    fn get(&self) -> SessionState;
    fn set(&self, state: SessionState);
}

/// Non-reactive cell shared between clones.
#[derive(Clone, Debug, Default)]
pub struct LocalCell(Rc<RefCell<SessionState>>);

impl SessionCell for LocalCell {
    fn get(&self) -> SessionState {
        self.0.borrow().clone()
    }

    fn set(&self, state: SessionState) {
        *self.0.borrow_mut() = state;
    }
}

#[derive(Clone, Debug)]
pub struct Session<T, S, C = LocalCell> {
    auth: AuthClient<T, S>,
    cell: C,
}

impl<T, S> Session<T, S, LocalCell>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    /// Session backed by a [`LocalCell`], starting in `Initializing`.
    pub fn new(transport: T, base_url: impl Into<String>, storage: S) -> Self {
        Self::with_cell(transport, base_url, storage, LocalCell::default())
    }
}

impl<T, S, C> Session<T, S, C>
where
    T: HttpTransport,
    S: KeyValueStore,
    C: SessionCell,
{
    /// Session whose state lives in `cell`. The cell is reset to `Initializing`.
    pub fn with_cell(transport: T, base_url: impl Into<String>, storage: S, cell: C) -> Self {
        let api = ApiClient::new(transport, base_url, SessionStore::new(storage));
        cell.set(SessionState::Initializing);
        Self { auth: AuthClient::new(api), cell }
    }

    pub fn state(&self) -> SessionState {
        self.cell.get()
    }

    pub fn user(&self) -> Option<User> {
        self.cell.get().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.get().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.cell.get().is_loading()
    }

    pub fn cell(&self) -> &C {
        &self.cell
    }

    pub fn auth(&self) -> &AuthClient<T, S> {
        &self.auth
    }

    /// Shared API client for resource calls; attaches the stored token.
    pub fn api(&self) -> &ApiClient<T, S> {
        self.auth.api()
    }

    pub fn store(&self) -> &SessionStore<S> {
        self.auth.api().store()
    }

    /// Derive the state from storage. Runs once when the app mounts.
    ///
    /// A stored user counts only when a token is also stored; the token
    /// itself is not checked.
    pub fn initialize(&self) {
        let store = self.store();
        let next = match store.user() {
            Some(user) if store.is_authenticated() => SessionState::Authenticated(user),
            _ => SessionState::Unauthenticated,
        };
        tracing::debug!(authenticated = next.is_authenticated(), "session initialized");
        self.cell.set(next);
    }

    /// Log in and persist the issued session.
    ///
    /// # Errors
    ///
    /// Returns the Auth Client error unchanged when the backend rejects the
    /// call; storage and state are not touched in that case. Returns
    /// [`ApiError::Storage`] if the session could not be persisted, after
    /// clearing any partial write.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let credentials = Credentials::new(username, password);
        let bundle = match self.auth.login(&credentials).await {
            Ok(bundle) => bundle,
            Err(e) => {
                tracing::warn!(username, error = %e, "login failed");
                return Err(e);
            }
        };

        self.establish(bundle)
    }

    /// End the session locally. Always succeeds; no network call.
    pub fn logout(&self) {
        if let Err(e) = self.store().logout() {
            tracing::warn!(error = %e, "failed to clear session storage");
        }
        self.cell.set(SessionState::Unauthenticated);
        tracing::info!("logged out");
    }

    /// Re-fetch the profile of the logged-in user and replace it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without a network call when no
    /// session is active, or the Auth Client error when the fetch fails.
    /// State and storage are unchanged on error.
    pub async fn refresh_profile(&self) -> Result<User, ApiError> {
        if !self.is_authenticated() {
            return Err(ApiError::Unauthorized { detail: None });
        }
        let user = self.auth.current_user().await?;
        if !self.is_authenticated() {
            // Logged out while the request was in flight.
            return Err(ApiError::Unauthorized { detail: None });
        }
        self.store().set_user(&user)?;
        self.cell.set(SessionState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Exchange the stored refresh token for a new session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when no session or no refresh token
    /// is stored, or the Auth Client error when the refresh is rejected.
    /// State and storage are unchanged on error.
    pub async fn refresh_tokens(&self) -> Result<User, ApiError> {
        let refresh_token = match self.store().refresh_token() {
            Some(token) if self.is_authenticated() => token,
            _ => return Err(ApiError::Unauthorized { detail: None }),
        };
        let bundle = self.auth.refresh(&refresh_token).await?;
        if !self.is_authenticated() {
            return Err(ApiError::Unauthorized { detail: None });
        }
        self.establish(bundle)
    }

    /// Create an account. Does not log the new user in.
    ///
    /// # Errors
    ///
    /// Returns the Auth Client error unchanged.
    pub async fn register(&self, new_user: &NewUser) -> Result<User, ApiError> {
        let user = self.auth.register(new_user).await?;
        tracing::info!(username = %user.username, "user registered");
        Ok(user)
    }

    fn establish(&self, bundle: TokenBundle) -> Result<User, ApiError> {
        if let Err(e) = self.store().persist(&bundle) {
            tracing::warn!(error = %e, "failed to persist session");
            if let Err(clear) = self.store().logout() {
                tracing::warn!(error = %clear, "failed to clear partial session");
            }
            self.cell.set(SessionState::Unauthenticated);
            return Err(e.into());
        }

        let user = bundle.user;
        tracing::info!(username = %user.username, role = user.role.label(), "session established");
        self.cell.set(SessionState::Authenticated(user.clone()));
        Ok(user)
    }
}
