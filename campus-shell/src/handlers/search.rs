//! Search filter handler

use campus_common::validators::validate_search_query;

use crate::DashboardShell;
use crate::types::Effect;

impl DashboardShell {
    /// The search input changed
    ///
    /// The stored query is the validated, trimmed form. Input that fails
    /// validation (too long, control characters) is ignored and the
    /// previous query stays in effect.
    pub(crate) fn handle_search_changed(&mut self, query: &str) -> Vec<Effect> {
        match validate_search_query(query) {
            Ok(Some(trimmed)) => self.search = trimmed.to_string(),
            Ok(None) => self.search.clear(),
            Err(err) => eprintln!("Rejecting search input: {err}"),
        }
        Vec::new()
    }
}
