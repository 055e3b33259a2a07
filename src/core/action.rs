//! Actions produced by key handling and the command line

use crate::controller::{Page, WeekTab};

/// A single requested change, applied by the app in one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    SelectPage(Page),
    NextPage,
    PrevPage,

    /// Select a course by catalog position
    SelectCourseIndex(usize),
    /// Select a course by name
    SelectCourse(String),

    ToggleCourseDropdown,
    ToggleProfileDropdown,
    CloseDropdowns,

    SelectWeekTab(WeekTab),
    /// Flip between modules and assignments
    CycleWeekTab,

    /// Move the cursor of the focused dropdown
    MoveCursor(isize),
    /// Activate the entry under the dropdown cursor
    Confirm,

    OpenCommand,
    OpenHelp,

    /// Show notification in status line
    Notify(String, NotifyLevel),

    Quit,
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
