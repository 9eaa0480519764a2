mod app;
mod config;
mod content;
mod release;
mod state;
mod theme;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Popup};
use release::Profile;

#[derive(Parser, Debug)]
#[command(name = "sportdeck")]
#[command(version = "0.1.0")]
#[command(about = "A terminal pitch deck for the SportPass gym QR check-in platform")]
struct Args {
    /// Output the partner club catalog as JSON
    #[arg(long)]
    clubs: bool,

    /// Output a single club by slug as JSON
    #[arg(long)]
    club: Option<String>,

    /// Output the hero screen catalog as JSON
    #[arg(long)]
    screens: bool,

    /// Disable auto-rotation and reveal animations
    #[arg(long)]
    no_motion: bool,

    /// Write a bundle manifest and exit
    #[arg(long)]
    export_bundle: bool,

    /// Bundle profile for --export-bundle
    #[arg(long, value_enum, default_value_t = Profile::Debug)]
    profile: Profile,

    /// Output directory for --export-bundle
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Allow signing a RELEASE bundle with a debug identity.
    /// Local testing only; never distribute such a bundle.
    #[arg(long)]
    allow_debug_signing: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.clubs {
        return print_clubs();
    }

    if let Some(ref slug) = args.club {
        return print_club(slug);
    }

    if args.screens {
        return print_screens();
    }

    if args.export_bundle {
        return export_bundle(&args);
    }

    // Run TUI
    run_tui(&args).await
}

fn print_clubs() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&content::clubs())?);
    Ok(())
}

fn print_club(slug: &str) -> Result<()> {
    match content::find_club_by_slug(slug) {
        Some(club) => {
            println!("{}", serde_json::to_string_pretty(&club)?);
            Ok(())
        }
        None => anyhow::bail!("unknown club slug: {}", slug),
    }
}

fn print_screens() -> Result<()> {
    let screens: Vec<serde_json::Value> = content::hero_screens()
        .iter()
        .map(|s| {
            serde_json::json!({
                "id": s.id,
                "label": s.label,
                "image": s.image_ref,
                "caption": s.caption,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&screens)?);
    Ok(())
}

fn export_bundle(args: &Args) -> Result<()> {
    let config = config::AppConfig::load().unwrap_or_default();
    let path = release::export_bundle(&config, args.profile, args.allow_debug_signing, &args.out)?;
    println!("{}", path.display());
    Ok(())
}

async fn run_tui(args: &Args) -> Result<()> {
    let config = config::AppConfig::load().unwrap_or_default();
    let motion = !config.reduce_motion && !args.no_motion;

    // Create app state before touching the terminal, so a broken
    // catalog fails loudly instead of leaving raw mode behind.
    let mut app = App::new(&config, motion)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Teardown: the rotator must be inert before the view goes away.
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Feed the current page viewport to the app before drawing, so
        // scroll clamping and the reveal watcher see the real size.
        let size = terminal.size()?;
        app.set_viewport_height(size.height.saturating_sub(ui::CHROME_ROWS));

        if app.take_dirty() {
            terminal.draw(|f| ui::draw(f, app))?;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') if app.popup == Popup::None => return Ok(()),
                    KeyCode::Char('c')
                        if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                    {
                        return Ok(())
                    }
                    _ => {
                        // Handle key and catch any errors to prevent crashes
                        if let Err(e) = app.handle_key(key) {
                            app.set_status(format!("Error: {}", e));
                        }
                    }
                },
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        // Periodic refresh (rotator timer, status expiry)
        app.tick();
    }
}
