//! State for the plain records list on `/records`.
//!
//! DESIGN
//! ======
//! The view makes exactly one request per mount, so state is a single phase
//! value. Every failure mode collapses into one display string.

#[cfg(test)]
#[path = "records_list_test.rs"]
mod records_list_test;

use records::Record;

/// Shown for records whose `Name` field is missing.
pub const NO_NAME_LABEL: &str = "(no name)";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready(Vec<Record>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordsListState {
    pub phase: ListPhase,
}

impl RecordsListState {
    /// Apply the outcome of the mount-time fetch.
    pub fn resolve(&mut self, result: Result<Vec<Record>, String>) {
        self.phase = match result {
            Ok(records) => ListPhase::Ready(records),
            Err(message) => ListPhase::Failed(message),
        };
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Records to render; empty unless the fetch succeeded.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match &self.phase {
            ListPhase::Ready(records) => records,
            _ => &[],
        }
    }
}

/// Display label for one list row.
#[must_use]
pub fn display_name(record: &Record) -> &str {
    record.fields.name.as_deref().unwrap_or(NO_NAME_LABEL)
}
