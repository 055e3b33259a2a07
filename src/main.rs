use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use coursedash::app::App;
use coursedash::config;
use coursedash::controller::ViewController;
use coursedash::ui;

#[derive(Debug, Parser)]
#[command(
    name = "coursedash",
    version,
    about = "coursedash: a terminal course dashboard"
)]
struct Args {
    /// Config file (defaults to $COURSEDASH_CONFIG or ~/.config/coursedash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start page: home, week1 .. week10
    #[arg(long)]
    page: Option<String>,

    /// Start course (must be in the catalog)
    #[arg(long)]
    course: Option<String>,

    /// Week 10 tab: modules or assignments
    #[arg(long)]
    tab: Option<String>,

    /// Print the selection state and derived content as JSON and exit
    #[arg(long)]
    dump: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging();

    let controller = build_controller(&args)?;

    if args.dump {
        println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
        return Ok(());
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(
        course = controller.state().current_course(),
        page = %controller.state().current_page(),
        "session started"
    );
    let res = run_app(&mut terminal, App::new(controller));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("{err:?}");
    }
    tracing::info!("session ended");

    res
}

fn build_controller(args: &Args) -> Result<ViewController> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    let catalog = config.into_catalog().context("invalid course catalog")?;
    let mut controller = ViewController::new(catalog);

    if let Some(page) = args.page.as_deref() {
        controller.select_page_id(page)?;
    }
    if let Some(course) = args.course.as_deref() {
        controller.select_course(course)?;
    }
    if let Some(tab) = args.tab.as_deref() {
        controller.select_week_tab_id(tab)?;
    }
    Ok(controller)
}

/// Log to a file in the data dir; stdout belongs to the terminal UI.
fn init_logging() -> Option<WorkerGuard> {
    let dir = config::data_dir()?;
    fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(dir, "coursedash.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_env("COURSEDASH_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
