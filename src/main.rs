use std::io;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use tickerdeck::DashboardApp;
use tickerdeck::event_loop::{ControlFlow, EventLoop};
use tickerdeck::input::{ConsoleDriver, InputDriver};
use tickerdeck::tracing_sub;

#[derive(Parser, Debug)]
#[command(
    name = "tickerdeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating-window terminal dashboard for simulated stock screening"
)]
struct Cli {
    /// Seed for the simulated tape; defaults to the wall clock so each
    /// launch gets a fresh market.
    #[arg(long)]
    seed: Option<u64>,

    /// Event poll interval in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Write tracing output to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = DashboardApp::new(size.width, size.height, seed);
    tracing::debug!(width = size.width, height = size.height, seed, "dashboard started");

    let mut event_loop = EventLoop::new(
        ConsoleDriver::new(),
        Duration::from_millis(cli.tick_ms.max(1)),
    );
    let result = event_loop.run(|driver, event| {
        if let Some(event) = event {
            app.handle_event(&event);
        }
        if let Some(enabled) = app.take_mouse_capture_change() {
            driver.set_mouse_capture(enabled)?;
        }
        if app.should_quit() {
            return Ok(ControlFlow::Quit);
        }
        terminal.draw(|frame| app.render(frame))?;
        Ok(ControlFlow::Continue)
    });

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}
