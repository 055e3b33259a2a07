//! View-state controller behavior through the public API

use coursedash::catalog::{AssignmentStatus, AssignmentStatusCounts, Catalog};
use coursedash::controller::{ContentDescriptor, Page, TabPanel, ViewController, WeekTab};
use coursedash::core::{SelectionKind, ViewError};

#[test]
fn every_page_maps_to_its_content() {
    let mut controller = ViewController::default();
    for page in Page::ALL {
        controller.select_page(page);
        let content = controller.content();
        match page {
            Page::Home => assert!(matches!(content, ContentDescriptor::Dashboard(_))),
            Page::Week10 => assert!(matches!(content, ContentDescriptor::Week10Tabbed { .. })),
            other => {
                let expected = other.id().trim_start_matches("week").to_string();
                assert_eq!(content.week_label(), Some(expected));
            }
        }
    }
}

#[test]
fn page_ids_select_pages() {
    let mut controller = ViewController::default();
    for page in Page::ALL {
        controller.select_page_id(page.id()).unwrap();
        assert_eq!(controller.state().current_page(), page);
    }
    assert_eq!(
        controller.select_page_id("week11"),
        Err(ViewError::InvalidSelection {
            kind: SelectionKind::Page,
            value: "week11".to_string()
        })
    );
    assert_eq!(controller.state().current_page(), Page::Week10);
}

#[test]
fn select_course_closes_dropdown_regardless_of_prior_state() {
    let mut controller = ViewController::default();
    let courses: Vec<String> = controller.catalog().courses().to_vec();
    for (idx, course) in courses.iter().enumerate() {
        if idx % 2 == 0 {
            controller.toggle_course_dropdown();
        }
        controller.select_course(course).unwrap();
        assert_eq!(controller.state().current_course(), course);
        assert!(!controller.state().course_dropdown_open());
    }
}

#[test]
fn toggles_are_involutions_and_independent() {
    let mut controller = ViewController::default();
    controller.toggle_course_dropdown();
    assert!(controller.state().course_dropdown_open());
    assert!(!controller.state().profile_dropdown_open());

    controller.toggle_profile_dropdown();
    assert!(controller.state().course_dropdown_open());
    assert!(controller.state().profile_dropdown_open());

    controller.toggle_course_dropdown();
    controller.toggle_profile_dropdown();
    assert!(!controller.state().course_dropdown_open());
    assert!(!controller.state().profile_dropdown_open());
}

#[test]
fn week_tab_only_matters_on_week10() {
    let mut controller = ViewController::default();
    for page in Page::ALL.into_iter().filter(|p| *p != Page::Week10) {
        controller.select_page(page);
        controller.select_week_tab(WeekTab::Modules);
        let with_modules = format!("{:?}", controller.content());
        controller.select_week_tab(WeekTab::Assignments);
        assert_eq!(format!("{:?}", controller.content()), with_modules);
    }

    controller.select_page(Page::Week10);
    controller.select_week_tab(WeekTab::Modules);
    let modules = format!("{:?}", controller.content());
    controller.select_week_tab(WeekTab::Assignments);
    assert_ne!(format!("{:?}", controller.content()), modules);
}

#[test]
fn initial_content_is_dashboard_summary() {
    let controller = ViewController::default();
    let ContentDescriptor::Dashboard(summary) = controller.content() else {
        panic!("initial content should be the dashboard");
    };
    assert_eq!(
        summary.assignment_status,
        AssignmentStatusCounts {
            completed: 8,
            pending: 3,
            overdue: 1
        }
    );
    assert_eq!(summary.grades.average, 87.5);
}

#[test]
fn week10_assignments_scenario() {
    let mut controller = ViewController::default();
    controller.select_page_id("week10").unwrap();
    controller.select_week_tab_id("assignments").unwrap();

    let ContentDescriptor::Week10Tabbed {
        tab: WeekTab::Assignments,
        panel: TabPanel::Assignments(assignments),
    } = controller.content()
    else {
        panic!("expected the week 10 assignments panel");
    };
    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].title, "Final Project Proposal");
    assert_eq!(assignments[0].due, "March 20, 2025");
    assert_eq!(assignments[0].status, AssignmentStatus::Pending);
    assert_eq!(assignments[1].title, "Weekly Quiz");
    assert_eq!(assignments[1].due, "March 18, 2025");
    assert_eq!(assignments[1].status, AssignmentStatus::Completed);
}

#[test]
fn placeholder_weeks_share_lists() {
    let mut controller = ViewController::default();
    controller.select_page_id("week5").unwrap();
    assert_eq!(controller.content().week_label().as_deref(), Some("5"));
    let ContentDescriptor::GenericWeek {
        week: 5,
        objectives: objectives5,
        resources: resources5,
    } = controller.content()
    else {
        panic!("expected week 5 placeholder");
    };

    let mut other = ViewController::default();
    other.select_page(Page::Week7);
    let ContentDescriptor::GenericWeek {
        week: 7,
        objectives: objectives7,
        resources: resources7,
    } = other.content()
    else {
        panic!("expected week 7 placeholder");
    };
    assert_eq!(objectives5, objectives7);
    assert_eq!(resources5, resources7);
    assert_eq!(objectives5.len(), 3);
}

#[test]
fn injected_catalog_drives_initial_course() {
    let mut catalog = Catalog::default();
    catalog
        .set_courses(vec!["Compilers".to_string(), "Networks".to_string()])
        .unwrap();
    let mut controller = ViewController::new(catalog);
    assert_eq!(controller.state().current_course(), "Compilers");
    assert!(controller.select_course("Database Systems").is_err());
    controller.select_course("Networks").unwrap();
    assert_eq!(controller.current_course_index(), 1);
}

#[test]
fn state_serializes_for_rendering_layers() {
    let mut controller = ViewController::default();
    controller.select_page(Page::Week10);
    controller.toggle_profile_dropdown();
    let json = serde_json::to_value(controller.state()).unwrap();
    assert_eq!(json["current_page"], "week10");
    assert_eq!(json["active_week_tab"], "modules");
    assert_eq!(json["profile_dropdown_open"], true);
    assert_eq!(json["course_dropdown_open"], false);

    let content = serde_json::to_value(controller.content()).unwrap();
    assert_eq!(content["view"], "week10_tabbed");
    assert_eq!(content["panel"]["modules"][0]["title"], "Module 10.1: Advanced Topics");
}
