use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

mod content;
pub mod layout;

use crate::app::{App, Dropdown, InputMode};
use crate::controller::Page;
use crate::core::NotifyLevel;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.course_selector, areas.profile, app);
    draw_nav(f, areas.nav, app);
    content::draw_content(f, areas.content, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    let state = app.controller.state();
    if state.course_dropdown_open() {
        draw_course_dropdown(f, areas.course_selector, areas.size, app);
    }
    if state.profile_dropdown_open() {
        draw_profile_dropdown(f, areas.profile, areas.size, app);
    }
    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn draw_header(f: &mut Frame, course_area: Rect, profile_area: Rect, app: &App) {
    let state = app.controller.state();
    let arrow = if state.course_dropdown_open() { "▴" } else { "▾" };
    let course = Line::from(vec![
        Span::styled(
            state.current_course(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(arrow, Style::default().fg(Color::DarkGray)),
        Span::styled("  c", Style::default().fg(Color::DarkGray)),
    ]);
    let left = Paragraph::new(course)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let profile = &app.controller.catalog().profile;
    let arrow = if state.profile_dropdown_open() { "▴" } else { "▾" };
    let right = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", profile.initials),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(arrow, Style::default().fg(Color::DarkGray)),
        Span::styled("  p", Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Right);

    f.render_widget(left, course_area);
    f.render_widget(right, profile_area);
}

fn draw_nav(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .map(|page| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", page.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(page.title()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.controller.state().current_page().index())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}

fn draw_course_dropdown(f: &mut Frame, anchor: Rect, bounds: Rect, app: &App) {
    let catalog = app.controller.catalog();
    let current = app.controller.state().current_course();
    let width = catalog
        .courses()
        .iter()
        .map(|c| clamp_u16(c.chars().count()).saturating_add(6))
        .max()
        .unwrap_or(20);
    let rows = clamp_u16(catalog.courses().len());
    let area = layout::dropdown_rect(anchor, width, rows, bounds, false);

    let items: Vec<ListItem> = catalog
        .courses()
        .iter()
        .map(|course| {
            let style = if course == current {
                Style::default().fg(Color::LightCyan)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(course.clone(), style)))
        })
        .collect();

    draw_dropdown(
        f,
        area,
        "Courses",
        items,
        app.course_cursor,
        app.dropdown_focus == Some(Dropdown::Course),
    );
}

fn draw_profile_dropdown(f: &mut Frame, anchor: Rect, bounds: Rect, app: &App) {
    let profile = &app.controller.catalog().profile;
    let rows = clamp_u16(profile.menu.len());
    let area = layout::dropdown_rect(anchor, 24, rows, bounds, true);
    let items: Vec<ListItem> = profile
        .menu
        .iter()
        .map(|entry| ListItem::new(entry.clone()))
        .collect();

    draw_dropdown(
        f,
        area,
        &profile.display_name,
        items,
        app.profile_cursor,
        app.dropdown_focus == Some(Dropdown::Profile),
    );
}

fn clamp_u16(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}

fn draw_dropdown(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    cursor: usize,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");
    let mut state = ListState::default();
    if focused {
        state.select(Some(cursor));
    }
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let state = app.controller.state();
    let mut spans = vec![
        Span::styled("Page ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", state.current_page().title())),
        Span::styled("Course ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "{}/{}",
            app.controller.current_course_index() + 1,
            app.controller.catalog().courses().len()
        )),
    ];
    if state.current_page() == Page::Week10 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("Tab ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(state.active_week_tab().title()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("home", "Go to the course dashboard"),
        ("week", "Go to week N (1-10)"),
        ("page", "Go to page by id (home, week1..week10)"),
        ("course", "Select course by name or number"),
        ("courses", "Toggle course menu"),
        ("tab", "Week 10 tab: modules | assignments"),
        ("modules", "Week 10 modules tab"),
        ("assignments", "Week 10 assignments tab"),
        ("profile", "Toggle profile menu"),
        ("help", "Show key bindings"),
        ("quit", "Quit"),
    ];

    for (cmd, desc) in commands {
        if cmd.starts_with(&input) || input.starts_with(&format!("{cmd} ")) {
            return Some(desc);
        }
    }
    None
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint = command_hint(&app.command.input).unwrap_or("home | week N | course NAME | tab TAB");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.as_str()),
                Span::styled(format!("  {hint}"), Style::default().fg(Color::DarkGray)),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    NotifyLevel::Info => Color::LightGreen,
                    NotifyLevel::Warn => Color::LightYellow,
                    NotifyLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let key = Style::default().fg(Color::Yellow);
    let text = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled("←/→", key),
        Span::styled(" week  ", text),
        Span::styled("c", key),
        Span::styled(" course  ", text),
        Span::styled("p", key),
        Span::styled(" profile  ", text),
        Span::styled("Tab", key),
        Span::styled(" modules/assignments  ", text),
        Span::styled(":", key),
        Span::styled(" command  ", text),
        Span::styled("?", key),
        Span::styled(" help  ", text),
        Span::styled("q", key),
        Span::styled(" quit", text),
    ])
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = layout::centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  ← / → / h / l  Previous / next page"),
        Line::from("  0              Home"),
        Line::from("  1-9            Week 1-9"),
        Line::from("  w              Week 10"),
        Line::from(""),
        Line::from("Menus"),
        Line::from("  c              Course menu"),
        Line::from("  p              Profile menu"),
        Line::from("  ↑ / ↓ / j / k  Move in menu"),
        Line::from("  Enter          Choose entry"),
        Line::from("  Esc            Close menus"),
        Line::from(""),
        Line::from("Week 10"),
        Line::from("  Tab            Toggle modules / assignments"),
        Line::from("  m / a          Modules / assignments"),
        Line::from(""),
        Line::from("  :              Command line (home, week 5, course 2, tab assignments)"),
        Line::from("  ?              Toggle help"),
        Line::from("  q              Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_hints_match_prefix_and_full_command() {
        assert_eq!(command_hint("cour"), Some("Select course by name or number"));
        assert_eq!(command_hint("week 3"), Some("Go to week N (1-10)"));
        assert_eq!(command_hint("xyz"), None);
        assert_eq!(command_hint("  "), None);
    }

    #[test]
    fn lengths_clamp_to_u16() {
        assert_eq!(clamp_u16(12), 12);
        assert_eq!(clamp_u16(usize::MAX), u16::MAX);
    }
}
