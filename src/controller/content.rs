use serde::Serialize;

use crate::catalog::{AssignmentCard, Catalog, DashboardSummary, ModuleCard};

use super::{Page, SelectionState, WeekTab};

/// Which content block to present, borrowed from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ContentDescriptor<'a> {
    Dashboard(&'a DashboardSummary),
    Week10Tabbed {
        tab: WeekTab,
        panel: TabPanel<'a>,
    },
    GenericWeek {
        week: u8,
        objectives: &'a [String],
        resources: &'a [String],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TabPanel<'a> {
    Modules(&'a [ModuleCard]),
    Assignments(&'a [AssignmentCard]),
}

impl ContentDescriptor<'_> {
    /// Week label for placeholder pages ("3" for week3)
    pub fn week_label(&self) -> Option<String> {
        match self {
            ContentDescriptor::GenericWeek { week, .. } => Some(week.to_string()),
            _ => None,
        }
    }
}

/// Map a selection to the content it shows. The tab only matters on week 10.
pub fn derive_content<'a>(state: &SelectionState, catalog: &'a Catalog) -> ContentDescriptor<'a> {
    match state.current_page {
        Page::Home => ContentDescriptor::Dashboard(&catalog.dashboard),
        Page::Week10 => {
            let tab = state.active_week_tab;
            let panel = match tab {
                WeekTab::Modules => TabPanel::Modules(&catalog.week10.modules),
                WeekTab::Assignments => TabPanel::Assignments(&catalog.week10.assignments),
            };
            ContentDescriptor::Week10Tabbed { tab, panel }
        }
        page => ContentDescriptor::GenericWeek {
            week: page.week_number().unwrap_or_default(),
            objectives: &catalog.placeholder.objectives,
            resources: &catalog.placeholder.resources,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_on(page: Page, tab: WeekTab) -> SelectionState {
        let mut state = SelectionState::initial(&Catalog::default());
        state.current_page = page;
        state.active_week_tab = tab;
        state
    }

    #[test]
    fn home_ignores_tab() {
        let catalog = Catalog::default();
        let a = derive_content(&state_on(Page::Home, WeekTab::Modules), &catalog);
        let b = derive_content(&state_on(Page::Home, WeekTab::Assignments), &catalog);
        assert_eq!(a, b);
        assert!(matches!(a, ContentDescriptor::Dashboard(_)));
    }

    #[test]
    fn week10_panel_follows_tab() {
        let catalog = Catalog::default();
        match derive_content(&state_on(Page::Week10, WeekTab::Modules), &catalog) {
            ContentDescriptor::Week10Tabbed {
                tab: WeekTab::Modules,
                panel: TabPanel::Modules(modules),
            } => assert_eq!(modules.len(), 2),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn placeholder_weeks_carry_label() {
        let catalog = Catalog::default();
        let content = derive_content(&state_on(Page::Week3, WeekTab::Assignments), &catalog);
        assert_eq!(content.week_label().as_deref(), Some("3"));
    }

    #[test]
    fn serializes_with_view_tag() {
        let catalog = Catalog::default();
        let content = derive_content(&state_on(Page::Week2, WeekTab::Modules), &catalog);
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["view"], "generic_week");
        assert_eq!(json["week"], 2);
        assert_eq!(json["resources"][0], "Lecture slides");
    }
}
