use anyhow::{bail, Context, Result};
use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use tracing::info;

use vspong::config::{self, DisplayConfig};
use vspong::{audio, debug, game_modes};

// Height of the playing area when not running fullscreen
const INLINE_ROWS: u16 = 24;

#[derive(Debug, Default, PartialEq)]
struct Options {
    debug: bool,
    difficulty: Option<u32>,
    config_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("vspong");
    let options = match parse_args(args.get(1..).unwrap_or_default())? {
        Some(options) => options,
        None => {
            print_usage(program);
            return Ok(());
        }
    };

    debug::init(options.debug, Path::new(debug::DEFAULT_LOG_PATH))
        .context("failed to open debug log")?;
    info!(?options, "session started");

    let mut config = match &options.config_path {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .context("failed to load configuration")?;
    if let Some(difficulty) = options.difficulty {
        config.ai.difficulty = difficulty;
    }
    config.validate()?;

    let mut audio = audio::create_sink(config.display.sound);
    let mut rng = rand::thread_rng();

    let (mut terminal, releases_reported) =
        setup_terminal(&config.display).context("failed to set up terminal")?;

    let result = game_modes::run_game_vs_ai(
        &mut terminal,
        &config,
        audio.as_mut(),
        &mut rng,
        releases_reported,
    );

    // Restore the terminal before reporting any game error
    restore_terminal(&mut terminal, &config.display, releases_reported)
        .context("failed to restore terminal")?;
    info!("session ended");

    result.context("game loop failed")
}

/// Parse command line arguments (program name excluded).
/// Returns `None` when usage was requested.
fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut options = Options::default();
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--difficulty" => {
                let value = args.next().context("--difficulty requires a value")?;
                let difficulty = value
                    .parse()
                    .with_context(|| format!("invalid difficulty: {}", value))?;
                options.difficulty = Some(difficulty);
            }
            "--config" | "-c" => {
                let path = args.next().context("--config requires a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Ok(None),
            other => bail!("unknown argument: {} (try --help)", other),
        }
    }

    Ok(Some(options))
}

fn print_usage(program: &str) {
    println!("vspong - Terminal Pong against the computer");
    println!();
    println!("Usage:");
    println!("  {} [options]", program);
    println!();
    println!("Options:");
    println!("  --difficulty <n>   AI difficulty (0 or more, higher aims better)");
    println!("  --config <path>    Use this config file instead of the default");
    println!("  --debug            Write a debug log to {}", debug::DEFAULT_LOG_PATH);
    println!("  --help             Show this message");
    println!();
    println!("Config file: {}", config::get_config_path().display());
    println!("Controls: Up/Down move your paddle (left), Q or Esc quits.");
}

/// Enter raw mode and build the terminal. Also reports whether key releases
/// will be delivered.
fn setup_terminal(display: &DisplayConfig) -> io::Result<(Terminal<CrosstermBackend<Stdout>>, bool)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    if display.fullscreen {
        execute!(stdout, EnterAlternateScreen)?;
    }
    execute!(stdout, SetTitle(&display.title))?;

    let releases_reported = supports_keyboard_enhancement().unwrap_or(false);
    if releases_reported {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = if display.fullscreen {
        Terminal::new(backend)?
    } else {
        Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(INLINE_ROWS),
            },
        )?
    };

    Ok((terminal, releases_reported))
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    display: &DisplayConfig,
    releases_reported: bool,
) -> io::Result<()> {
    if releases_reported {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    if display.fullscreen {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;
    Ok(())
}
