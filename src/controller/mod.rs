//! View-state controller: selection state, transitions, derived content

mod content;
mod page;
mod state;

pub use content::{derive_content, ContentDescriptor, TabPanel};
pub use page::{Page, WeekTab};
pub use state::SelectionState;

use crate::catalog::Catalog;
use crate::core::{SelectionKind, ViewError};

/// Owns the selection state and the injected catalog.
///
/// Every transition is a single synchronous step; failed transitions leave
/// the state untouched.
#[derive(Debug, Clone)]
pub struct ViewController {
    state: SelectionState,
    catalog: Catalog,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl ViewController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: SelectionState::initial(&catalog),
            catalog,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn content(&self) -> ContentDescriptor<'_> {
        derive_content(&self.state, &self.catalog)
    }

    /// State plus derived content, as printed by `--dump`
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "state": self.state(),
            "content": self.content(),
        })
    }

    pub fn select_page(&mut self, page: Page) {
        tracing::debug!(from = %self.state.current_page, to = %page, "select page");
        self.state.current_page = page;
    }

    pub fn select_page_id(&mut self, id: &str) -> Result<(), ViewError> {
        let page = id.parse::<Page>()?;
        self.select_page(page);
        Ok(())
    }

    pub fn next_page(&mut self) {
        self.select_page(self.state.current_page.next());
    }

    pub fn prev_page(&mut self) {
        self.select_page(self.state.current_page.prev());
    }

    /// Select a course by name and close the course dropdown.
    pub fn select_course(&mut self, name: &str) -> Result<(), ViewError> {
        let index = self
            .catalog
            .course_index(name)
            .ok_or_else(|| ViewError::invalid(SelectionKind::Course, name))?;
        self.select_course_index(index)
    }

    pub fn select_course_index(&mut self, index: usize) -> Result<(), ViewError> {
        let course = self
            .catalog
            .course_at(index)
            .ok_or_else(|| {
                ViewError::invalid(SelectionKind::Course, index.saturating_add(1).to_string())
            })?
            .to_string();
        tracing::debug!(course = %course, "select course");
        self.state.current_course = course;
        self.state.course_dropdown_open = false;
        Ok(())
    }

    pub fn toggle_course_dropdown(&mut self) {
        self.state.course_dropdown_open = !self.state.course_dropdown_open;
    }

    pub fn toggle_profile_dropdown(&mut self) {
        self.state.profile_dropdown_open = !self.state.profile_dropdown_open;
    }

    pub fn close_dropdowns(&mut self) {
        self.state.course_dropdown_open = false;
        self.state.profile_dropdown_open = false;
    }

    pub fn select_week_tab(&mut self, tab: WeekTab) {
        tracing::debug!(tab = %tab, page = %self.state.current_page, "select week tab");
        self.state.active_week_tab = tab;
    }

    pub fn select_week_tab_id(&mut self, id: &str) -> Result<(), ViewError> {
        let tab = id.parse::<WeekTab>()?;
        self.select_week_tab(tab);
        Ok(())
    }

    /// Index of the current course in the catalog
    pub fn current_course_index(&self) -> usize {
        self.catalog
            .course_index(&self.state.current_course)
            .unwrap_or(0)
    }
}
