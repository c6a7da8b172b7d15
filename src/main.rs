mod app;
mod carousel;
mod config;
mod content;
mod countup;
mod error;
mod events;
mod log;
mod tui;

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, EventStream,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Instant;

use app::App;
use config::Config;
use content::SiteContent;
use events::EventHandler;
use tui::interaction::InteractionRegistry;

const USAGE: &str = "\
fgarage - terminal showcase for F Garage

Usage: fgarage [OPTIONS]

Options:
  -c, --config <PATH>   Read settings from PATH instead of the default config file
      --content <PATH>  Load site content from a .toml or .json file
      --no-autoplay     Start with every carousel paused
      --dump-content    Print the active content as JSON and exit
  -h, --help            Show this help";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct Cli {
    config: Option<PathBuf>,
    content: Option<PathBuf>,
    no_autoplay: bool,
    dump_content: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Cli {
    let mut cli = Cli::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" | "--content" => {
                if i + 1 < args.len() {
                    let path = PathBuf::from(&args[i + 1]);
                    if args[i] == "--content" {
                        cli.content = Some(path);
                    } else {
                        cli.config = Some(path);
                    }
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: {} requires a path argument", args[i]);
                }
            }
            "--no-autoplay" => cli.no_autoplay = true,
            "--dump-content" => cli.dump_content = true,
            "--help" | "-h" => cli.help = true,
            arg => {
                eprintln!("Warning: ignoring unknown argument '{}'", arg);
            }
        }
        i += 1;
    }
    cli
}

/// Resolve settings and content. Config precedence: CLI > env var > config file > defaults.
fn load_site(cli: &Cli) -> error::Result<(Config, SiteContent)> {
    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::load(),
    }
    .with_overrides(cli.content.clone(), cli.no_autoplay);

    let content = match config.content_path() {
        Some(path) => SiteContent::load(&path)?,
        None => SiteContent::builtin(),
    };
    Ok((config, content))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let (config, content) = load_site(&cli)?;
    if cli.dump_content {
        println!("{}", content.to_json()?);
        return Ok(());
    }

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let mut app = App::new(content, &config, Instant::now())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;
    app.unmount();
    log::log("Shutting down");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        let now = Instant::now();
        let mut interactions = InteractionRegistry::new();
        terminal.draw(|frame| tui::ui::render(frame, app, &mut interactions, now))?;
        app.after_render(interactions, now);

        let wake = tokio::time::Instant::from_std(app.next_wake(now));

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action, Instant::now());
                    }
                    Some(Err(e)) => {
                        log::log_warning(&format!("terminal event error: {}", e));
                    }
                    None => break,
                }
            }
            _ = tokio::time::sleep_until(wake) => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("fgarage")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(parse_args(&args(&[])), Cli::default());
    }

    #[test]
    fn test_parse_args_paths_and_flags() {
        let cli = parse_args(&args(&[
            "--config",
            "site.toml",
            "--content",
            "conteudo.json",
            "--no-autoplay",
            "--dump-content",
        ]));
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert_eq!(cli.content, Some(PathBuf::from("conteudo.json")));
        assert!(cli.no_autoplay);
        assert!(cli.dump_content);
        assert!(!cli.help);
    }

    #[test]
    fn test_parse_args_missing_path_is_ignored() {
        let cli = parse_args(&args(&["-c"]));
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse_args(&args(&["-h"])).help);
    }
}
