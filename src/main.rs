use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use drop_four::config::{AppConfig, LoggingConfig};
use drop_four::game::{GameEngine, Phase};
use drop_four::ui::{App, PlayerNames};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Drop Four in the terminal.
#[derive(Parser)]
#[command(name = "drop-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "drop-four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Read 1-based column numbers from stdin instead of running the TUI
    #[arg(long)]
    headless: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load_optional(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_missing = loaded.is_none();
    let mut config = loaded.unwrap_or_default();

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    config.validate().context("invalid command line override")?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    init_logging(&config.logging, cli.headless)?;
    if config_missing {
        log::warn!(
            "config file '{}' not found, using defaults",
            cli.config.display()
        );
    }

    let engine = GameEngine::new(config.board.rows, config.board.cols)?;
    let names = PlayerNames::from(config.players);

    if cli.headless {
        run_headless(engine, &names, io::stdin().lock(), io::stdout().lock())
    } else {
        run_tui(App::new(engine, names)).context("terminal UI failed")
    }
}

/// The TUI owns the terminal, so without a log file logging stays disabled.
fn init_logging(config: &LoggingConfig, headless: bool) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);
    match &config.file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if headless => {}
        None => return Ok(()),
    }
    builder.try_init()?;
    Ok(())
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    res
}

/// Line-oriented play: a column number per line, `reset` or `quit`.
fn run_headless(
    mut engine: GameEngine,
    names: &PlayerNames,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "{}\n", engine.board())?;
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let command = line.trim();
        match command {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => {
                engine.reset();
                writeln!(out, "New game started!\n{}\n", engine.board())?;
                continue;
            }
            _ => {}
        }

        let col = match command.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                writeln!(out, "not a column: {command}")?;
                continue;
            }
        };
        let player = engine.current_player();
        if let Err(err) = engine.play_turn(col) {
            writeln!(out, "{}: {err}", names.name(player))?;
            continue;
        }
        writeln!(out, "{}\n", engine.board())?;

        match engine.phase() {
            Phase::Won(winner) => writeln!(out, "{} wins!", names.name(winner))?,
            Phase::Drawn => writeln!(out, "It's a draw!")?,
            Phase::Playing => {}
        }
    }
    out.flush()?;
    Ok(())
}
