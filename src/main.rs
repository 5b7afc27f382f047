mod app;
mod config;
mod names;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Popup};
use config::AppConfig;
use names::{Gender, NameInfo, NameTable};

#[derive(Parser, Debug)]
#[command(name = "namegen")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "English name generator for Chinese families")]
struct Args {
    /// Generate once for this family name and print the result (skips the TUI)
    #[arg(short = 'n', long)]
    family_name: Option<String>,

    /// Gender to pick names for (male or female)
    #[arg(short, long)]
    gender: Option<Gender>,

    /// Print suggestions as JSON (with --family-name)
    #[arg(short, long)]
    json: bool,

    /// Custom name table (TOML with [[male]] and [[female]] entries)
    #[arg(long, value_name = "FILE")]
    names: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays clean for --json)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut config = AppConfig::load().unwrap_or_default();
    if let Some(gender) = args.gender {
        config.default_gender = gender;
    }
    let table = load_table(args.names.as_deref(), &config)?;

    // Handle CLI-only generation
    if let Some(family_name) = args.family_name {
        return print_names(&table, config.default_gender, &family_name, args.json);
    }

    // Run TUI
    run_tui(&config, table)
}

/// Pick the name table: explicit `--names` must load, a configured file falls back
fn load_table(cli_path: Option<&std::path::Path>, config: &AppConfig) -> Result<NameTable> {
    if let Some(path) = cli_path {
        return NameTable::load(path);
    }

    if let Some(path) = &config.names_file {
        match NameTable::load(path) {
            Ok(table) => return Ok(table),
            Err(e) => tracing::warn!("Using bundled names: {:#}", e),
        }
    }

    Ok(NameTable::builtin().clone())
}

fn print_names(table: &NameTable, gender: Gender, family_name: &str, json: bool) -> Result<()> {
    let names = match names::selector::generate(table, gender, family_name, &mut rand::thread_rng())
    {
        Ok(names) => names,
        Err(e) => {
            eprintln!("{}", e.description());
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        print!("{}", format_plain(family_name, &names));
    }
    Ok(())
}

fn format_plain(family_name: &str, names: &[NameInfo]) -> String {
    let mut out = String::new();
    for info in names {
        out.push_str(&format!("{} {}\n", info.name, family_name));
        out.push_str(&format!("  [{}]\n", info.meaning));
        out.push_str(&format!("  {}\n\n", info.cultural_notes));
    }
    out
}

fn run_tui(config: &AppConfig, table: NameTable) -> Result<()> {
    tracing::info!("Starting namegen TUI");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, table);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if app.popup == Popup::None && !app.accepts_text() => {
                            return Ok(())
                        }
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => app.handle_key(key),
                    }
                }
            }
        }

        // Expire the warning toast
        app.tick();
    }
}

pub(crate) fn notify(summary: &str, body: &str) -> Result<()> {
    notify_rust::Notification::new()
        .summary(summary)
        .body(body)
        .appname("namegen")
        .show()?;
    Ok(())
}
