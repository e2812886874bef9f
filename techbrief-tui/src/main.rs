//! TechBrief reader: one newsletter issue in the terminal.
//!
//! Loads an article (argument, last opened article, or the built-in issue),
//! restores preferences, and runs the draw/tick/poll loop until quit.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use techbrief_core::sample::sample_article;
use techbrief_core::{load_article, Article, SystemClipboard, SystemClock};
use techbrief_tui::app::AppState;
use techbrief_tui::{input, logging, persistence, ui};

#[derive(Parser)]
#[command(name = "techbrief-tui", about = "Read a TechInsights issue in the terminal")]
struct Args {
    /// Article file (TOML). Defaults to the last opened article, then the
    /// built-in issue.
    article: Option<PathBuf>,

    /// Page URL used when building share links
    #[arg(long)]
    page_url: Option<String>,

    /// Log file (default: <data dir>/techbrief/techbrief.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Preferences file (default: <config dir>/techbrief/state.json)
    #[arg(long)]
    state_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args.log_file.unwrap_or_else(logging::default_log_path);
    logging::init_file_logging(&log_path)?;

    let state_path = args.state_file.unwrap_or_else(persistence::default_path);
    let persisted = persistence::load(&state_path);

    let (article, article_path) = resolve_article(args.article, persisted.last_article.clone())?;

    let mut app = AppState::new(
        article,
        article_path,
        Box::new(SystemClipboard::new()),
        Box::new(SystemClock),
    );
    persistence::apply(&mut app, persisted);
    if let Some(url) = args.page_url {
        app.page_url = url;
    }

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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save preferences before exit
    let persisted = persistence::extract(&app);
    if let Err(err) = persistence::save(&state_path, &persisted) {
        tracing::warn!(%err, "could not save preferences");
    }
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

/// An explicit path must load; a remembered path that no longer loads falls
/// back to the built-in issue.
fn resolve_article(
    explicit: Option<PathBuf>,
    remembered: Option<PathBuf>,
) -> Result<(Article, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let article =
            load_article(&path).with_context(|| format!("loading {}", path.display()))?;
        return Ok((article, Some(path)));
    }
    if let Some(path) = remembered {
        match load_article(&path) {
            Ok(article) => return Ok((article, Some(path))),
            Err(err) => tracing::warn!(%err, "last article unavailable, using built-in issue"),
        }
    }
    Ok((sample_article(), None))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render, remembering click geometry
        let mut hits = ui::HitMap::default();
        terminal.draw(|f| hits = ui::draw(f, app))?;
        app.scroll = hits.scroll;

        // 2. Fire due copy-feedback timers
        app.tick();

        // 3. Poll for input events (up to 50ms, sooner if feedback expires)
        if event::poll(app.poll_timeout(Duration::from_millis(50)))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, &hits, mouse),
                _ => {}
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
