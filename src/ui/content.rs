//! Content panel: one renderer per content descriptor variant

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::catalog::{AssignmentCard, AssignmentStatus, DashboardSummary, MaterialKind, ModuleCard};
use crate::controller::{ContentDescriptor, TabPanel, WeekTab};

pub(super) fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    let page = app.controller.state().current_page();
    let block = Block::default()
        .title(Span::styled(
            page.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.controller.content() {
        ContentDescriptor::Dashboard(summary) => draw_dashboard(f, inner, summary),
        ContentDescriptor::Week10Tabbed { tab, panel } => draw_tabbed_week(f, inner, tab, panel),
        ContentDescriptor::GenericWeek {
            week,
            objectives,
            resources,
        } => draw_generic_week(f, inner, week, objectives, resources),
    }
}

fn card(title: &str) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn draw_dashboard(f: &mut Frame, area: Rect, summary: &DashboardSummary) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let status = &summary.assignment_status;
    let status_lines = vec![
        count_line("Completed", status.completed, Color::Green),
        count_line("Pending", status.pending, Color::Yellow),
        count_line("Overdue", status.overdue, Color::Red),
    ];
    f.render_widget(
        Paragraph::new(status_lines).block(card("Assignment Status")),
        top[0],
    );

    let grades = &summary.grades;
    let grade_lines = vec![
        Line::from(vec![
            label("Average          "),
            Span::styled(
                format!("{}%", grades.average),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Last Assignment  "),
            Span::styled(grades.last_assignment.clone(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            label("Trend            "),
            Span::styled(grades.trend.clone(), Style::default().fg(Color::Green)),
        ]),
    ];
    f.render_widget(Paragraph::new(grade_lines).block(card("Grades")), top[1]);

    let mut announcement_lines = Vec::new();
    for announcement in &summary.announcements {
        let mut spans = vec![
            Span::styled("│ ", Style::default().fg(Color::Blue)),
            Span::raw(announcement.title.clone()),
        ];
        if announcement.urgent {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                "Urgent",
                Style::default().fg(Color::White).bg(Color::Red),
            ));
        }
        announcement_lines.push(Line::from(spans));
        announcement_lines.push(Line::from(vec![
            Span::styled("│ ", Style::default().fg(Color::Blue)),
            label(&announcement.date.format("%Y-%m-%d").to_string()),
        ]));
    }
    f.render_widget(
        Paragraph::new(announcement_lines)
            .block(card(&format!(
                "Announcements ({} urgent)",
                summary.urgent_count()
            )))
            .wrap(Wrap { trim: false }),
        bottom[0],
    );

    let hours = &summary.office_hours;
    let hours_lines = vec![
        Line::from(label("Next Available:")),
        Line::from(hours.next.clone()),
        Line::from(label("Location:")),
        Line::from(hours.location.clone()),
        Line::from(label("Professor:")),
        Line::from(hours.professor.clone()),
    ];
    f.render_widget(
        Paragraph::new(hours_lines)
            .block(card("Office Hours"))
            .wrap(Wrap { trim: false }),
        bottom[1],
    );
}

fn count_line(name: &'static str, count: u32, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<12}"), Style::default().fg(color)),
        Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn draw_tabbed_week(f: &mut Frame, area: Rect, tab: WeekTab, panel: TabPanel<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let selected = WeekTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
    let tabs = Tabs::new(WeekTab::ALL.iter().map(|t| t.title()).collect::<Vec<_>>())
        .select(selected)
        .block(Block::default().borders(Borders::BOTTOM))
        .highlight_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, chunks[0]);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Week 10 - {}", tab.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match panel {
        TabPanel::Modules(modules) => {
            for module in modules {
                lines.extend(module_lines(module));
            }
        }
        TabPanel::Assignments(assignments) => {
            for assignment in assignments {
                lines.extend(assignment_lines(assignment));
            }
        }
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[1]);
}

fn module_lines(module: &ModuleCard) -> Vec<Line<'static>> {
    let mut badges = vec![Span::raw("  ")];
    for material in &module.materials {
        let color = match material {
            MaterialKind::Video => Color::Blue,
            MaterialKind::Reading => Color::Green,
            MaterialKind::Interactive => Color::Magenta,
        };
        badges.push(Span::styled(
            format!(" {} ", material.label()),
            Style::default().fg(Color::White).bg(color),
        ));
        badges.push(Span::raw(" "));
    }
    vec![
        Line::from(Span::styled(
            module.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![Span::raw("  "), label(&module.description)]),
        Line::from(badges),
        Line::from(""),
    ]
}

fn assignment_lines(assignment: &AssignmentCard) -> Vec<Line<'static>> {
    let color = match assignment.status {
        AssignmentStatus::Pending => Color::Yellow,
        AssignmentStatus::Completed => Color::Green,
        AssignmentStatus::Overdue => Color::Red,
    };
    vec![
        Line::from(vec![
            Span::styled(
                assignment.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", assignment.status.label()),
                Style::default().fg(Color::Black).bg(color),
            ),
        ]),
        Line::from(vec![Span::raw("  "), label(&assignment.description)]),
        Line::from(vec![Span::raw("  "), label(&format!("Due: {}", assignment.due))]),
        Line::from(""),
    ]
}

fn draw_generic_week(
    f: &mut Frame,
    area: Rect,
    week: u8,
    objectives: &[String],
    resources: &[String],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    f.render_widget(
        Paragraph::new(Line::from(label(&format!(
            "Content for Week {week} will be displayed here."
        )))),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    f.render_widget(
        Paragraph::new(bullets(objectives)).block(card("Learning Objectives")),
        columns[0],
    );
    f.render_widget(
        Paragraph::new(bullets(resources)).block(card("Resources")),
        columns[1],
    );
}

fn bullets(items: &[String]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| Line::from(format!("• {item}")))
        .collect()
}
