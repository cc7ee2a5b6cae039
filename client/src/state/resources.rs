//! Page-local fetch state for the resource pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page fetches once on mount and owns one of these in an `RwSignal`.
//! A failed fetch is logged and rendered as empty; it never touches the
//! session.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use ptas::ApiError;
use ptas::types::{Alert, DashboardSummary};

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl<T> ListState<T> {
    /// Store a fetch result; failures degrade to an empty list.
    pub fn finish(&mut self, result: Result<Vec<T>, ApiError>, what: &str) {
        match result {
            Ok(items) => self.items = items,
            Err(e) => {
                log::error!("error fetching {what}: {e}");
                self.items.clear();
            }
        }
        self.loading = false;
    }
}

impl ListState<Alert> {
    /// Apply a successful resolve to the matching alert. Returns whether one matched.
    pub fn mark_resolved(&mut self, alert_id: i64, notes: Option<&str>) -> bool {
        match self.items.iter_mut().find(|a| a.id == alert_id) {
            Some(alert) => {
                alert.mark_resolved(notes);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
}

impl Default for SummaryState {
    fn default() -> Self {
        Self { summary: None, loading: true }
    }
}

impl SummaryState {
    pub fn finish(&mut self, result: Result<DashboardSummary, ApiError>) {
        match result {
            Ok(summary) => self.summary = Some(summary),
            Err(e) => {
                log::error!("error fetching summary: {e}");
                self.summary = None;
            }
        }
        self.loading = false;
    }
}
