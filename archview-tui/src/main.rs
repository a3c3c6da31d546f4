//! archview: terminal viewer for LMS architecture notes.
//!
//! Loads the catalog (built-in or `--catalog`), then runs a
//! draw → poll → dispatch loop until the user quits.

use std::fs::File;
use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::LevelFilter;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::{Config, WriteLogger};

use archview_core::ViewerState;
use archview_tui::app::AppState;
use archview_tui::cli::{self, Args};
use archview_tui::{input, mouse, ui};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = cli::resolve_config(&args, &cli::default_config_path())?;
    let catalog = cli::load_catalog(&config)?;

    if args.check {
        print!("{}", cli::summary(&catalog));
        return Ok(());
    }

    init_logging(&config.log_file, config.level_filter()?);
    log::info!(
        "archview starting: {} views, mouse {}",
        catalog.view_count(),
        if config.mouse { "on" } else { "off" }
    );

    let viewer = ViewerState::with_initial_view(catalog, config.default_view.as_ref())?;
    let mut app = AppState::new(viewer, config.mouse, config.help_on_start);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if app.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("archview exiting");
    result
}

/// Log to a file; the terminal belongs to the UI. Skipped when the file
/// cannot be created.
fn init_logging(path: &Path, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(err) => eprintln!("archview: not logging to {}: {err}", path.display()),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render (also reports dropdown regions to their monitors)
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(m) if app.mouse => mouse::handle_mouse(app, m),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
