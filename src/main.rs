use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::ai::RandomAgent;
use connect_four::config::{AppConfig, ConfigSource, ModeChoice};
use connect_four::logging;
use connect_four::ui::{App, Settings};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Game mode; `ask` shows the mode menu
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before the bot moves, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Print a config file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(seed) = cli.seed {
        config.bot.seed = Some(seed);
    }
    if let Some(delay) = cli.bot_delay_ms {
        config.bot.delay_ms = delay;
    }
    config.validate().context("validating config")?;

    let _guard = logging::init_file(&config.logging).context("setting up logging")?;
    if source == ConfigSource::Defaults {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    tracing::info!(path = %cli.config.display(), ?source, ?config, "starting");

    let settings = Settings {
        fixed_mode: config.game.mode.mode(),
        bot_delay: Duration::from_millis(config.bot.delay_ms),
    };
    let bot = match config.bot.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::from_os_rng(),
    };

    run(App::with_bot(settings, bot)).context("running terminal UI")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(err) = &res {
        tracing::error!(%err, "terminal UI failed");
    }
    res
}
