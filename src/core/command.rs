//! Command parser for the : command line

use crate::controller::{Page, WeekTab};

use super::{SelectionKind, ViewError};

/// How a course is addressed on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseRef {
    /// Zero-based catalog position (typed 1-based)
    Index(usize),
    Name(String),
}

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Page(Page),
    Course(CourseRef),
    Tab(WeekTab),

    // Header menus
    Courses,
    Profile,

    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :).
///
/// Known commands whose argument falls outside its closed set are rejected
/// with [`ViewError::InvalidSelection`].
pub fn parse_command(input: &str) -> Result<Command, ViewError> {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let args = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let command = match cmd.as_str() {
        "home" => Command::Page(Page::Home),
        "week" | "wk" => match args {
            Some(n) => Command::Page(week_page(&n)?),
            None => Command::Unknown(input.to_string()),
        },
        "page" | "go" => match args {
            Some(id) => Command::Page(id.to_lowercase().parse()?),
            None => Command::Unknown(input.to_string()),
        },
        "course" => match args {
            Some(arg) => Command::Course(course_ref(arg)?),
            None => Command::Unknown(input.to_string()),
        },
        "tab" => match args {
            Some(tab) => Command::Tab(tab.to_lowercase().parse()?),
            None => Command::Unknown(input.to_string()),
        },
        "modules" | "mod" => Command::Tab(WeekTab::Modules),
        "assignments" | "asg" => Command::Tab(WeekTab::Assignments),
        "courses" => Command::Courses,
        "profile" | "me" => Command::Profile,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => {
            // Shorthand forms: week5, w5
            if let Some(n) = other
                .strip_prefix("week")
                .or_else(|| other.strip_prefix('w'))
                .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            {
                Command::Page(week_page(n)?)
            } else {
                Command::Unknown(input.to_string())
            }
        }
    };
    Ok(command)
}

fn week_page(number: &str) -> Result<Page, ViewError> {
    number
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Page::week)
        .ok_or_else(|| ViewError::invalid(SelectionKind::Page, format!("week{}", number.trim())))
}

fn course_ref(arg: String) -> Result<CourseRef, ViewError> {
    if arg.chars().all(|c| c.is_ascii_digit()) {
        return match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(CourseRef::Index(n - 1)),
            _ => Err(ViewError::invalid(SelectionKind::Course, arg)),
        };
    }
    Ok(CourseRef::Name(arg))
}
