//! Network adapters for the browser.

pub mod transport;
