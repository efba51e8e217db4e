// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

mod history;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use history::{ChatHistory, Role};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use voyage_core::router::HELP_MESSAGE;
use voyage_core::settings::Settings;
use voyage_core::{Assistant, SearchSession, TripPlanner};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing flights.json, hotels.json and places.json
    #[arg(short, long, env = "VOYAGE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(short, long, env = "VOYAGE_CONFIG")]
    config: Option<PathBuf>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    weather_key: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat (default)
    Chat {
        /// Conversation id; each id keeps its own search results
        #[arg(long, default_value = "local")]
        conversation: String,
    },
    /// Send a single message and print the reply
    Ask { message: String },
    /// Search flights, hotels, places and weather for a route
    Plan {
        from: String,
        to: String,
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Write the effective settings to the settings file
    Init,
}

const CHAT_COMMANDS: &str = "/help, /history, /reset, /quit";

/// Flag and env values win over the settings file.
fn apply_overrides(
    settings: &mut Settings,
    data_dir: Option<&Path>,
    weather_key: Option<&str>,
) {
    if let Some(dir) = data_dir {
        settings.data_dir = dir.to_path_buf();
    }
    if let Some(key) = weather_key {
        settings.weather.api_key = Some(key.to_string());
    }
}

fn load_settings(cli: &Cli, path: &Path) -> Result<Settings> {
    let mut settings = Settings::load(path)?;
    apply_overrides(
        &mut settings,
        cli.data_dir.as_deref(),
        cli.weather_key.as_deref(),
    );

    info!(
        "Settings loaded — path={} data_dir={} weather_key={}",
        path.display(),
        settings.data_dir.display(),
        settings.weather.api_key.is_some()
    );
    Ok(settings)
}

fn run_chat(settings: &Settings, conversation: &str) -> Result<()> {
    let mut assistant = Assistant::from_settings(settings);
    let mut history = ChatHistory::default();

    println!("🌍 Voyage travel planner. Commands: {}", CHAT_COMMANDS);
    println!("{}\n", HELP_MESSAGE);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("you> ");
        stdout.flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{}\nCommands: {}\n", HELP_MESSAGE, CHAT_COMMANDS);
                continue;
            }
            "/history" => {
                println!("{}", history.render());
                continue;
            }
            "/reset" => {
                assistant.reset(conversation);
                history.clear();
                println!("Search results cleared.\n");
                continue;
            }
            _ => {}
        }

        history.push(Role::User, input);
        let reply = assistant.reply(conversation, input);
        println!("voyage> {}\n", reply);
        history.push(Role::Assistant, reply);
    }

    assistant.close(conversation);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logging")?;

    let settings_path = cli.config.clone().unwrap_or_else(Settings::default_path);
    let settings = load_settings(&cli, &settings_path)?;

    match &cli.command {
        None => run_chat(&settings, "local")?,
        Some(Commands::Chat { conversation }) => run_chat(&settings, conversation)?,
        Some(Commands::Ask { message }) => {
            let mut assistant = Assistant::from_settings(&settings);
            println!("{}", assistant.reply("cli", message));
        }
        Some(Commands::Plan { from, to, days }) => {
            let planner = TripPlanner::from_settings(&settings);
            let mut session = SearchSession::default();
            let days = days.unwrap_or(settings.default_days);
            let summary = planner
                .plan_trip(&mut session, from, to, days)
                .map_err(|e| anyhow::anyhow!(e.user_message()))
                .with_context(|| format!("Failed to plan trip from {} to {}", from, to))?;
            println!("{}", summary);
        }
        Some(Commands::Init) => {
            settings.save(&settings_path)?;
            println!("Settings written to {}", settings_path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_overrides_win_over_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"data_dir": "/srv/travel", "display_limit": 8, "weather": {"api_key": "from-file"}}"#,
        )
        .unwrap();

        let mut settings = Settings::load(&path).unwrap();
        apply_overrides(&mut settings, Some(Path::new("/tmp/trips")), Some("from-flag"));

        assert_eq!(settings.data_dir, PathBuf::from("/tmp/trips"));
        assert_eq!(settings.weather.api_key.as_deref(), Some("from-flag"));
        // Untouched fields keep their file values
        assert_eq!(settings.display_limit, 8);
    }

    #[test]
    fn test_file_values_kept_without_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"data_dir": "/srv/travel", "weather": {"api_key": "from-file"}}"#)
            .unwrap();

        let mut settings = Settings::load(&path).unwrap();
        apply_overrides(&mut settings, None, None);

        assert_eq!(settings.data_dir, PathBuf::from("/srv/travel"));
        assert_eq!(settings.weather.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_flags_and_env_reach_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"data_dir": "/srv/travel"}"#).unwrap();

        let cli = Cli::try_parse_from([
            "voyage",
            "--data-dir",
            "/tmp/flag-data",
            "--weather-key",
            "flag-key",
            "ask",
            "hello",
        ])
        .unwrap();
        let settings = load_settings(&cli, &path).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/flag-data"));
        assert_eq!(settings.weather.api_key.as_deref(), Some("flag-key"));

        std::env::set_var("VOYAGE_DATA_DIR", "/tmp/env-data");
        std::env::set_var("OPENWEATHER_API_KEY", "env-key");
        let cli = Cli::try_parse_from(["voyage", "ask", "hello"]).unwrap();
        std::env::remove_var("VOYAGE_DATA_DIR");
        std::env::remove_var("OPENWEATHER_API_KEY");

        let settings = load_settings(&cli, &path).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/env-data"));
        assert_eq!(settings.weather.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_init_writes_loadable_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        apply_overrides(&mut settings, Some(Path::new("/tmp/trips")), None);
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
