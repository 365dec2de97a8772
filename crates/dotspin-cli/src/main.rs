//! dotspin - Rotating dots loading indicator demo
//!
//! Usage:
//!   dotspin              Run TUI mode (default)
//!   dotspin --gui        Run GUI mode (requires 'gui' feature)
//!   dotspin --cli <cmd>  Run CLI mode (headless)
//!   dotspin --help       Show help

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use dotspin_core::{Config, LoadingIndicator};
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod event;
mod gui;
mod screens;
pub mod theme;
mod tui;
mod widgets;

use app::App;
use event::InputEvent;

/// Environment variable holding the log filter directive
const LOG_ENV: &str = "DOTSPIN_LOG";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Check for --help
    if args.iter().any(|a| a == "--help" || a == "-h") && !args.iter().any(|a| a == "--cli") {
        print_help();
        return Ok(());
    }

    // Check for --cli flag
    if let Some(cli_pos) = args.iter().position(|a| a == "--cli") {
        let cli_args: Vec<String> = args.iter().skip(cli_pos + 1).cloned().collect();

        if cli_args.is_empty() || cli_args.iter().any(|a| a == "--help" || a == "-h") {
            cli::print_help();
            return Ok(());
        }

        init_stderr_logging();
        match cli::parse_args(&cli_args) {
            Ok((command, options)) => {
                return cli::run(command, options);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!();
                cli::print_help();
                std::process::exit(1);
            }
        }
    }

    // Check for --gui flag
    if args.iter().any(|a| a == "--gui") {
        init_stderr_logging();
        #[cfg(feature = "gui")]
        {
            gui::run().map_err(|e| anyhow::anyhow!("GUI error: {}", e))?;
            return Ok(());
        }
        #[cfg(not(feature = "gui"))]
        {
            return gui::run();
        }
    }

    // Default: TUI mode
    tui::install_panic_hook();
    init_logging();
    let result = run();
    tui::restore()?;
    result
}

fn print_help() {
    println!("dotspin v{}", env!("CARGO_PKG_VERSION"));
    println!("Eight dots rotating around a ring, the classic loading indicator");
    println!();
    println!("USAGE:");
    println!("    dotspin [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --gui           Run in GUI mode (requires 'gui' feature)");
    println!("    --cli <cmd>     Run in CLI mode (headless, for scripting)");
    println!("    --help          Show this help message");
    println!();
    println!("By default, dotspin runs in TUI (terminal) mode.");
    println!("Set {}=debug to log lifecycle events to dotspin.log.", LOG_ENV);
    println!();
    println!("For CLI mode help: dotspin --cli --help");
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_logging() {
    // For TUI apps, log to a file to avoid corrupting the terminal display
    if let Ok(log_file) = File::create("dotspin.log") {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(log_file))
            .try_init();
    }
    // If file creation fails, logging is simply disabled (no subscriber set)
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> anyhow::Result<()> {
    // Load config and set theme
    let config = Config::load();
    theme::set_theme(config.theme);

    let indicator = match config.indicator_config() {
        Ok(indicator_config) => LoadingIndicator::new(indicator_config),
        Err(e) => {
            tracing::warn!("Invalid indicator config, using defaults: {}", e);
            LoadingIndicator::default()
        }
    };
    let frame_interval = Duration::from_millis(config.frame_interval_ms.max(1));

    let mut terminal = tui::init()?;
    let mut app = App::new(indicator);
    app.start();

    let mut dirty = true;
    loop {
        app.on_tick(Instant::now());

        // Redraw only when the indicator or the screen changed
        if app.take_redraw_request() || dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        match event::poll(frame_interval)? {
            Some(InputEvent::Key(key)) => {
                app.handle_key(key);
                dirty = true;
            }
            Some(InputEvent::Resize) => dirty = true,
            None => {}
        }

        if app.should_quit {
            break;
        }
    }

    app.shutdown();
    Ok(())
}
