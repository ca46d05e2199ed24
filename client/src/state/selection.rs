//! Selected job reference passed from list views to the detail view.
//!
//! DESIGN
//! ======
//! The detail route reads the job id from here rather than from the URL.
//! Selection is last-write-wins with no history; logout clears it.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Job id chosen by the most recent "View Details" click, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobSelection {
    selected: Option<String>,
}

impl JobSelection {
    /// Overwrite the current selection. The id is not validated.
    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn current(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
