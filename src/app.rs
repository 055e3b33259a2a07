use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::{Page, ViewController, WeekTab};
use crate::core::command::CourseRef;
use crate::core::{parse_command, Action, Command, NotifyLevel, ViewError};

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

/// Header menu that receives cursor keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Course,
    Profile,
}

#[derive(Debug, Clone, Default)]
pub struct CommandState {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    level: NotifyLevel,
    since: Instant,
}

/// TUI session state layered over the view controller
pub struct App {
    pub controller: ViewController,
    pub input_mode: InputMode,
    pub command: CommandState,
    pub help_open: bool,
    /// Most recently opened dropdown that is still open
    pub dropdown_focus: Option<Dropdown>,
    pub course_cursor: usize,
    pub profile_cursor: usize,
    pub should_quit: bool,
    status: Option<StatusMessage>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ViewController::default())
    }
}

impl App {
    pub fn new(controller: ViewController) -> Self {
        Self {
            course_cursor: controller.current_course_index(),
            controller,
            input_mode: InputMode::Normal,
            command: CommandState::default(),
            help_open: false,
            dropdown_focus: None,
            profile_cursor: 0,
            should_quit: false,
            status: None,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Expire the status message if it is older than its TTL at `now`
    pub fn on_tick_at(&mut self, now: Instant) {
        if let Some(status) = self.status.as_ref() {
            if now.saturating_duration_since(status.since) > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.help_open = false;
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => {
                let action = self.key_action(key);
                self.apply_action(action);
            }
            InputMode::Command => self.handle_command_key(key),
        }
    }

    /// Map a key in normal mode to an action
    pub fn key_action(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::OpenHelp,
            KeyCode::Char(':') => Action::OpenCommand,
            KeyCode::Left | KeyCode::Char('h') => Action::PrevPage,
            KeyCode::Right | KeyCode::Char('l') => Action::NextPage,
            KeyCode::Char('c') => Action::ToggleCourseDropdown,
            KeyCode::Char('p') => Action::ToggleProfileDropdown,
            KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(-1),
            KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(1),
            KeyCode::Enter => Action::Confirm,
            KeyCode::Tab => Action::CycleWeekTab,
            KeyCode::Char('m') => Action::SelectWeekTab(WeekTab::Modules),
            KeyCode::Char('a') => Action::SelectWeekTab(WeekTab::Assignments),
            KeyCode::Esc => Action::CloseDropdowns,
            KeyCode::Char(ch) => Page::ALL
                .into_iter()
                .find(|page| page.shortcut() == ch)
                .map_or(Action::None, Action::SelectPage),
            _ => Action::None,
        }
    }

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SelectPage(page) => self.controller.select_page(page),
            Action::NextPage => self.controller.next_page(),
            Action::PrevPage => self.controller.prev_page(),
            Action::SelectCourseIndex(index) => {
                let result = self.controller.select_course_index(index);
                self.after_course_selection(result);
            }
            Action::SelectCourse(name) => {
                let resolved = self
                    .controller
                    .catalog()
                    .courses()
                    .iter()
                    .find(|course| course.eq_ignore_ascii_case(&name))
                    .cloned()
                    .unwrap_or(name);
                let result = self.controller.select_course(&resolved);
                self.after_course_selection(result);
            }
            Action::ToggleCourseDropdown => {
                self.controller.toggle_course_dropdown();
                if self.controller.state().course_dropdown_open() {
                    self.course_cursor = self.controller.current_course_index();
                }
                self.refocus(Dropdown::Course);
            }
            Action::ToggleProfileDropdown => {
                self.controller.toggle_profile_dropdown();
                if self.controller.state().profile_dropdown_open() {
                    self.profile_cursor = 0;
                }
                self.refocus(Dropdown::Profile);
            }
            Action::CloseDropdowns => {
                self.controller.close_dropdowns();
                self.dropdown_focus = None;
            }
            Action::SelectWeekTab(tab) => self.select_week_tab(tab),
            Action::CycleWeekTab => {
                let tab = self.controller.state().active_week_tab().toggled();
                self.select_week_tab(tab);
            }
            Action::MoveCursor(delta) => self.move_cursor(delta),
            Action::Confirm => self.confirm(),
            Action::OpenCommand => self.enter_command(),
            Action::OpenHelp => self.help_open = true,
            Action::Notify(text, level) => self.set_status(text, level),
            Action::Quit => self.should_quit = true,
        }
    }

    fn after_course_selection(&mut self, result: Result<(), ViewError>) {
        match result {
            Ok(()) => {
                self.course_cursor = self.controller.current_course_index();
                self.sync_focus();
                let course = self.controller.state().current_course().to_string();
                self.set_status(format!("Course: {course}"), NotifyLevel::Info);
            }
            Err(err) => self.reject(err),
        }
    }

    fn select_week_tab(&mut self, tab: WeekTab) {
        self.controller.select_week_tab(tab);
        if self.controller.state().current_page() != Page::Week10 {
            self.set_status(
                format!("{} tab applies to Week 10", tab.title()),
                NotifyLevel::Info,
            );
        }
    }

    fn reject(&mut self, err: ViewError) {
        tracing::warn!(error = %err, "rejected selection");
        self.set_status(err.to_string(), NotifyLevel::Error);
    }

    /// After toggling `toggled`, focus it if it opened, otherwise fall back
    /// to whichever dropdown is still open.
    fn refocus(&mut self, toggled: Dropdown) {
        if self.is_open(toggled) {
            self.dropdown_focus = Some(toggled);
        } else {
            self.sync_focus();
        }
    }

    fn sync_focus(&mut self) {
        if let Some(focus) = self.dropdown_focus {
            if self.is_open(focus) {
                return;
            }
        }
        self.dropdown_focus = [Dropdown::Course, Dropdown::Profile]
            .into_iter()
            .find(|dropdown| self.is_open(*dropdown));
    }

    fn is_open(&self, dropdown: Dropdown) -> bool {
        let state = self.controller.state();
        match dropdown {
            Dropdown::Course => state.course_dropdown_open(),
            Dropdown::Profile => state.profile_dropdown_open(),
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.dropdown_focus {
            Some(Dropdown::Course) => (
                &mut self.course_cursor,
                self.controller.catalog().courses().len(),
            ),
            Some(Dropdown::Profile) => (
                &mut self.profile_cursor,
                self.controller.catalog().profile.menu.len(),
            ),
            None => return,
        };
        if len == 0 {
            return;
        }
        let len = len as isize;
        *cursor = (*cursor as isize + delta).rem_euclid(len) as usize;
    }

    fn confirm(&mut self) {
        match self.dropdown_focus {
            Some(Dropdown::Course) => {
                self.apply_action(Action::SelectCourseIndex(self.course_cursor));
            }
            Some(Dropdown::Profile) => {
                let Some(entry) = self
                    .controller
                    .catalog()
                    .profile
                    .menu
                    .get(self.profile_cursor)
                    .cloned()
                else {
                    return;
                };
                if entry.eq_ignore_ascii_case("logout") {
                    tracing::info!("logout selected");
                    self.should_quit = true;
                } else {
                    self.set_status(format!("{entry} is not available"), NotifyLevel::Warn);
                }
            }
            None => {}
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.exit_command(),
            KeyCode::Enter => self.apply_command(),
            KeyCode::Backspace => {
                self.command.input.pop();
            }
            KeyCode::Char(ch) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                self.command.input.push(ch);
            }
            _ => {}
        }
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }

        match parse_command(&input) {
            Ok(cmd) => {
                let known = !matches!(cmd, Command::Unknown(_));
                let action = execute_command(cmd);
                self.apply_action(action);
                if known {
                    self.command.last = Some(input);
                }
            }
            Err(err) => self.reject(err),
        }
        // a command may have switched modes itself (e.g. quit)
        if self.input_mode == InputMode::Command {
            self.exit_command();
        }
    }
}

fn execute_command(cmd: Command) -> Action {
    match cmd {
        Command::Page(page) => Action::SelectPage(page),
        Command::Course(CourseRef::Index(index)) => Action::SelectCourseIndex(index),
        Command::Course(CourseRef::Name(name)) => Action::SelectCourse(name),
        Command::Tab(tab) => Action::SelectWeekTab(tab),
        Command::Courses => Action::ToggleCourseDropdown,
        Command::Profile => Action::ToggleProfileDropdown,
        Command::Help => Action::OpenHelp,
        Command::Quit => Action::Quit,
        Command::Unknown(raw) => Action::Notify(format!("Unknown command: {raw}"), NotifyLevel::Error),
    }
}
