//! Reactive session for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The core `Session` writes its state through a `SessionCell`. Backing that
//! cell with an `RwSignal` makes every transition (initialize, login,
//! logout) visible to the route guard and the layout without extra wiring.
//! One [`AppSession`] is created in `App` and provided as context.

use leptos::prelude::*;
use ptas::Session;
use ptas::session::{SessionCell, SessionState};

use crate::net::transport::GlooTransport;
use crate::util::storage::LocalStorage;

/// `SessionCell` over a Leptos signal.
///
/// `get` is untracked so core code never subscribes by accident; views that
/// should react read [`SignalCell::signal`] instead.
#[derive(Clone, Copy, Debug)]
pub struct SignalCell(RwSignal<SessionState>);

impl SignalCell {
    pub fn new() -> Self {
        Self(RwSignal::new(SessionState::Initializing))
    }

    pub fn signal(self) -> RwSignal<SessionState> {
        self.0
    }
}

impl Default for SignalCell {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell for SignalCell {
    fn get(&self) -> SessionState {
        self.0.get_untracked()
    }

    fn set(&self, state: SessionState) {
        self.0.set(state);
    }
}

pub type AppSession = Session<GlooTransport, LocalStorage, SignalCell>;

/// Build the application session against `base_url`, in `Initializing`.
pub fn new_app_session(base_url: &str) -> AppSession {
    Session::with_cell(GlooTransport, base_url, LocalStorage, SignalCell::new())
}
