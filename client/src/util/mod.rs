//! Browser adapters and shared view helpers.

pub mod auth;
pub mod format;
pub mod storage;
