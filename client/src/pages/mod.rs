//! Route-level page components.

pub mod alerts;
pub mod dashboard;
pub mod equipment;
pub mod login;
pub mod measurements;
