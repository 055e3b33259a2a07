use chrono::NaiveDate;

use super::{
    Announcement, AssignmentCard, AssignmentStatus, AssignmentStatusCounts, DashboardSummary,
    GradeSnapshot, MaterialKind, ModuleCard, OfficeHours, PlaceholderContent, Profile, TabbedWeek,
};

pub(super) fn courses() -> Vec<String> {
    [
        "Introduction to Computer Science",
        "Data Structures and Algorithms",
        "Web Development Fundamentals",
        "Database Systems",
        "Software Engineering",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub(super) fn dashboard() -> DashboardSummary {
    DashboardSummary {
        assignment_status: AssignmentStatusCounts {
            completed: 8,
            pending: 3,
            overdue: 1,
        },
        grades: GradeSnapshot {
            average: 87.5,
            last_assignment: "A-".to_string(),
            trend: "+2.3%".to_string(),
        },
        announcements: vec![
            announcement(1, "Midterm Exam Schedule", (2025, 3, 15), true),
            announcement(2, "Project Guidelines Updated", (2025, 3, 12), false),
            announcement(3, "Office Hours Change", (2025, 3, 10), false),
        ],
        office_hours: OfficeHours {
            next: "Thursday 2:00 PM - 4:00 PM".to_string(),
            location: "Room 204".to_string(),
            professor: "Dr. Smith".to_string(),
        },
    }
}

fn announcement(id: u32, title: &str, (y, m, d): (i32, u32, u32), urgent: bool) -> Announcement {
    Announcement {
        id,
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        urgent,
    }
}

pub(super) fn week10() -> TabbedWeek {
    TabbedWeek {
        modules: vec![
            ModuleCard {
                title: "Module 10.1: Advanced Topics".to_string(),
                description: "Introduction to advanced concepts and methodologies".to_string(),
                materials: vec![MaterialKind::Video, MaterialKind::Reading],
            },
            ModuleCard {
                title: "Module 10.2: Case Studies".to_string(),
                description: "Real-world applications and examples".to_string(),
                materials: vec![MaterialKind::Video, MaterialKind::Interactive],
            },
        ],
        assignments: vec![
            AssignmentCard {
                title: "Final Project Proposal".to_string(),
                description: "Submit your final project proposal with detailed specifications"
                    .to_string(),
                due: "March 20, 2025".to_string(),
                status: AssignmentStatus::Pending,
            },
            AssignmentCard {
                title: "Weekly Quiz".to_string(),
                description: "Quiz covering Week 10 modules".to_string(),
                due: "March 18, 2025".to_string(),
                status: AssignmentStatus::Completed,
            },
        ],
    }
}

pub(super) fn placeholder() -> PlaceholderContent {
    PlaceholderContent {
        objectives: vec![
            "Understand key concepts".to_string(),
            "Apply theoretical knowledge".to_string(),
            "Complete practical exercises".to_string(),
        ],
        resources: vec![
            "Lecture slides".to_string(),
            "Reading materials".to_string(),
            "Practice problems".to_string(),
        ],
    }
}

pub(super) fn profile() -> Profile {
    Profile {
        display_name: "John Student".to_string(),
        initials: "JS".to_string(),
        menu: vec![
            "Profile Settings".to_string(),
            "Preferences".to_string(),
            "Logout".to_string(),
        ],
    }
}
