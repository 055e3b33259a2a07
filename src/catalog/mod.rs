//! Read-only reference data the dashboard renders.
//!
//! Everything here is injected into the controller at construction. The
//! built-in defaults live in [`defaults`]; a config file may replace any
//! section.

mod defaults;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentStatusCounts {
    pub completed: u32,
    pub pending: u32,
    pub overdue: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSnapshot {
    pub average: f64,
    pub last_assignment: String,
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub urgent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHours {
    pub next: String,
    pub location: String,
    pub professor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub assignment_status: AssignmentStatusCounts,
    pub grades: GradeSnapshot,
    pub announcements: Vec<Announcement>,
    pub office_hours: OfficeHours,
}

impl DashboardSummary {
    pub fn urgent_count(&self) -> usize {
        self.announcements.iter().filter(|a| a.urgent).count()
    }
}

/// Kind of material attached to a module card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialKind {
    Video,
    Reading,
    Interactive,
}

impl MaterialKind {
    pub fn label(&self) -> &'static str {
        match self {
            MaterialKind::Video => "Video",
            MaterialKind::Reading => "Reading",
            MaterialKind::Interactive => "Interactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleCard {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub materials: Vec<MaterialKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    Pending,
    Completed,
    Overdue,
}

impl AssignmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Completed => "Completed",
            AssignmentStatus::Overdue => "Overdue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentCard {
    pub title: String,
    pub description: String,
    /// Display string, e.g. "March 20, 2025"
    pub due: String,
    pub status: AssignmentStatus,
}

/// Bespoke content for the tabbed week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabbedWeek {
    pub modules: Vec<ModuleCard>,
    pub assignments: Vec<AssignmentCard>,
}

/// Lists shown for every week without bespoke content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderContent {
    pub objectives: Vec<String>,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub initials: String,
    pub menu: Vec<String>,
}

/// All reference data, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courses: Vec<String>,
    pub dashboard: DashboardSummary,
    pub week10: TabbedWeek,
    pub placeholder: PlaceholderContent,
    pub profile: Profile,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            courses: defaults::courses(),
            dashboard: defaults::dashboard(),
            week10: defaults::week10(),
            placeholder: defaults::placeholder(),
            profile: defaults::profile(),
        }
    }
}

impl Catalog {
    /// Replace the course list. Must be non-empty with unique names.
    pub fn set_courses(&mut self, courses: Vec<String>) -> Result<(), CatalogError> {
        if courses.is_empty() {
            return Err(CatalogError::EmptyCourseCatalog);
        }
        for (idx, name) in courses.iter().enumerate() {
            if courses[..idx].contains(name) {
                return Err(CatalogError::DuplicateCourse(name.clone()));
            }
        }
        self.courses = courses;
        Ok(())
    }

    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// First course; the catalog is never empty.
    pub fn default_course(&self) -> &str {
        &self.courses[0]
    }

    pub fn course_index(&self, name: &str) -> Option<usize> {
        self.courses.iter().position(|c| c == name)
    }

    pub fn course_at(&self, index: usize) -> Option<&str> {
        self.courses.get(index).map(String::as_str)
    }
}
