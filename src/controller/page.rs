use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{SelectionKind, ViewError};

/// Pages reachable from the week navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Week1,
    Week2,
    Week3,
    Week4,
    Week5,
    Week6,
    Week7,
    Week8,
    Week9,
    Week10,
}

impl Page {
    pub const ALL: [Page; 11] = [
        Page::Home,
        Page::Week1,
        Page::Week2,
        Page::Week3,
        Page::Week4,
        Page::Week5,
        Page::Week6,
        Page::Week7,
        Page::Week8,
        Page::Week9,
        Page::Week10,
    ];

    /// Page for a week number in 1..=10
    pub fn week(number: u8) -> Option<Page> {
        match number {
            1..=10 => Some(Self::ALL[number as usize]),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Week1 => "week1",
            Page::Week2 => "week2",
            Page::Week3 => "week3",
            Page::Week4 => "week4",
            Page::Week5 => "week5",
            Page::Week6 => "week6",
            Page::Week7 => "week7",
            Page::Week8 => "week8",
            Page::Week9 => "week9",
            Page::Week10 => "week10",
        }
    }

    /// Week number, or `None` for home
    pub fn week_number(&self) -> Option<u8> {
        self.id().strip_prefix("week").and_then(|n| n.parse().ok())
    }

    pub fn title(&self) -> String {
        match self.week_number() {
            Some(n) => format!("Week {n}"),
            None => "Home".to_string(),
        }
    }

    /// Heading shown above the content panel
    pub fn heading(&self) -> String {
        match self.week_number() {
            Some(n) => format!("Week {n}"),
            None => "Course Dashboard".to_string(),
        }
    }

    /// Key that jumps straight to this page
    pub fn shortcut(&self) -> char {
        match self.week_number() {
            None => '0',
            Some(10) => 'w',
            Some(n) => char::from(b'0' + n),
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| ViewError::invalid(SelectionKind::Page, s))
    }
}

/// Tabs of the week 10 view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekTab {
    #[default]
    Modules,
    Assignments,
}

impl WeekTab {
    pub const ALL: [WeekTab; 2] = [WeekTab::Modules, WeekTab::Assignments];

    pub fn id(&self) -> &'static str {
        match self {
            WeekTab::Modules => "modules",
            WeekTab::Assignments => "assignments",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WeekTab::Modules => "Modules",
            WeekTab::Assignments => "Assignments",
        }
    }

    pub fn toggled(&self) -> WeekTab {
        match self {
            WeekTab::Modules => WeekTab::Assignments,
            WeekTab::Assignments => WeekTab::Modules,
        }
    }
}

impl fmt::Display for WeekTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WeekTab {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| ViewError::invalid(SelectionKind::WeekTab, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>(), Ok(page));
        }
        assert!("week11".parse::<Page>().is_err());
        assert!("Home".parse::<Page>().is_err());
        assert!("".parse::<Page>().is_err());
    }

    #[test]
    fn week_numbers_and_titles() {
        assert_eq!(Page::Home.week_number(), None);
        assert_eq!(Page::Week3.week_number(), Some(3));
        assert_eq!(Page::Week10.week_number(), Some(10));
        assert_eq!(Page::Home.title(), "Home");
        assert_eq!(Page::Home.heading(), "Course Dashboard");
        assert_eq!(Page::Week7.title(), "Week 7");
        assert_eq!(Page::week(0), None);
        assert_eq!(Page::week(10), Some(Page::Week10));
        assert_eq!(Page::week(11), None);
    }

    #[test]
    fn shortcuts_are_unique() {
        let mut keys: Vec<char> = Page::ALL.iter().map(Page::shortcut).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Page::ALL.len());
        assert_eq!(Page::Week4.shortcut(), '4');
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Page::Home.next(), Page::Week1);
        assert_eq!(Page::Week10.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Week10);
    }

    #[test]
    fn week_tab_parse_and_toggle() {
        assert_eq!("modules".parse::<WeekTab>(), Ok(WeekTab::Modules));
        assert_eq!("assignments".parse::<WeekTab>(), Ok(WeekTab::Assignments));
        assert!("grades".parse::<WeekTab>().is_err());
        assert_eq!(WeekTab::Modules.toggled(), WeekTab::Assignments);
        assert_eq!(WeekTab::default(), WeekTab::Modules);
    }
}
