//! Reactive application state.

pub mod resources;
pub mod session;
