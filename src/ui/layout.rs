use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub course_selector: Rect,
    pub profile: Rect,
    pub nav: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(vertical[0]);

    UiAreas {
        size,
        header: vertical[0],
        course_selector: header_chunks[0],
        profile: header_chunks[1],
        nav: vertical[1],
        content: vertical[2],
        status_line: vertical[3],
        command_line: vertical[4],
    }
}

/// Popup rectangle hanging below `anchor`, clamped to `bounds`
pub fn dropdown_rect(anchor: Rect, width: u16, rows: u16, bounds: Rect, align_right: bool) -> Rect {
    let width = width.min(bounds.width);
    let below = bounds
        .height
        .saturating_sub(anchor.bottom().saturating_sub(bounds.y));
    let height = rows.saturating_add(2).min(below);
    let x = if align_right {
        anchor.right().saturating_sub(width).max(bounds.x)
    } else {
        anchor.x
    };
    let x = x.min(bounds.right().saturating_sub(width));
    Rect {
        x,
        y: anchor.bottom(),
        width,
        height,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
