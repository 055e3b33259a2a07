use serde::Serialize;

use crate::catalog::Catalog;

use super::{Page, WeekTab};

/// What the user has selected. Mutated only through [`super::ViewController`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub(crate) current_page: Page,
    pub(crate) current_course: String,
    pub(crate) course_dropdown_open: bool,
    pub(crate) profile_dropdown_open: bool,
    pub(crate) active_week_tab: WeekTab,
}

impl SelectionState {
    /// Start-of-session state: home page, first course, menus closed.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            current_page: Page::Home,
            current_course: catalog.default_course().to_string(),
            course_dropdown_open: false,
            profile_dropdown_open: false,
            active_week_tab: WeekTab::Modules,
        }
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn current_course(&self) -> &str {
        &self.current_course
    }

    pub fn course_dropdown_open(&self) -> bool {
        self.course_dropdown_open
    }

    pub fn profile_dropdown_open(&self) -> bool {
        self.profile_dropdown_open
    }

    pub fn active_week_tab(&self) -> WeekTab {
        self.active_week_tab
    }
}
