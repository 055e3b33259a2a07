//! Error types for selection and catalog validation

use std::fmt;

use thiserror::Error;

/// Which closed set a rejected value was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Page,
    Course,
    WeekTab,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionKind::Page => "page",
            SelectionKind::Course => "course",
            SelectionKind::WeekTab => "week tab",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("invalid {kind}: {value:?}")]
    InvalidSelection { kind: SelectionKind, value: String },
}

impl ViewError {
    pub fn invalid(kind: SelectionKind, value: impl Into<String>) -> Self {
        ViewError::InvalidSelection {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("course catalog must contain at least one course")]
    EmptyCourseCatalog,
    #[error("duplicate course in catalog: {0}")]
    DuplicateCourse(String),
}
