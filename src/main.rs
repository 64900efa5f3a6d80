//! securevendor - A terminal dashboard for vendor security
//!
//! This is the main entry point for the securevendor application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::ui::Theme;
use crate::model::{DataSource, DomainState};
use crate::tui::Tui;
use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::fs::{self, File};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// Vendor security dashboard for the terminal
#[derive(Debug, Parser)]
#[command(name = "securevendor", version, about)]
struct Cli {
    /// Vendor file to load (.json, .yaml, .yml or .csv)
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Rows per vendor table page
    #[arg(short, long, value_name = "N")]
    page_size: Option<NonZeroUsize>,

    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Skip the splash screen
    #[arg(long)]
    no_splash: bool,

    /// Log file (default: ~/.securevendor/securevendor.log)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log debug events such as sort and page changes
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let config = apply_overrides(Config::load().unwrap_or_default(), &cli);
    let (domain, load_error) = load_domain(&config);
    log::info!(
        "Starting with {} vendors from {}",
        domain.vendors.len(),
        domain.source.describe()
    );

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    let mut app = App::new(config, domain, load_error);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        log::error!("Exited with error: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("Shut down cleanly");
    Ok(())
}

/// File logger; the terminal belongs to the UI
fn init_logging(cli: &Cli) {
    let Some(path) = cli.log_file.clone().or_else(Config::log_path) else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(level, simplelog::Config::default(), log_file);
    }
}

/// CLI flags win over the config file
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(data) = &cli.data {
        config.data_file = Some(data.to_string_lossy().to_string());
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if cli.light {
        config.theme = Theme::Light;
    }
    if cli.no_splash {
        config.show_splash = false;
    }
    config
}

/// Vendors from the configured file, or the demo data with the reason it
/// could not be used
fn load_domain(config: &Config) -> (DomainState, Option<String>) {
    let Some(path) = &config.data_file else {
        return (DomainState::new(), None);
    };

    match services::load_vendors(path) {
        Ok(vendors) => (
            DomainState::with_vendors(vendors, DataSource::File(path.clone())),
            None,
        ),
        Err(e) => {
            log::error!("Could not load {}: {}", path, e);
            (DomainState::new(), Some(e.to_string()))
        }
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            let mut current_action = Some(Action::Tick);
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "securevendor",
            "--data",
            "vendors.yaml",
            "--page-size",
            "5",
            "--light",
            "--no-splash",
        ]);
        let config = apply_overrides(Config::default(), &cli);

        assert_eq!(config.data_file.as_deref(), Some("vendors.yaml"));
        assert_eq!(config.page_size.get(), 5);
        assert_eq!(config.theme, Theme::Light);
        assert!(!config.show_splash);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Cli::try_parse_from(["securevendor", "--page-size", "0"]).is_err());
    }

    #[test]
    fn test_bad_data_file_falls_back_to_demo() {
        let config = Config {
            data_file: Some("does-not-exist.json".to_string()),
            ..Config::default()
        };
        let (domain, error) = load_domain(&config);
        assert_eq!(domain.source, DataSource::BuiltIn);
        assert_eq!(domain.vendors.len(), 12);
        assert!(error.is_some());
    }
}
