use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Confirm, InquireError, Text};

use dashboard_core::{Config, OpenWeatherClient, WeatherQuery, WeatherSource};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Terminal weather dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Fetch and render current weather for one city, then exit.
    Show {
        /// City name.
        city: String,

        /// Also render the secondary readings panel.
        #[arg(long)]
        details: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city, details }) => show_once(&city, details).await,
            None => dashboard_loop().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show_once(city: &str, details: bool) -> Result<()> {
    let config = Config::load()?;
    let client = OpenWeatherClient::new(config.require_api_key()?.to_string());
    let query = WeatherQuery::new(city)?;

    match client.current_weather(&query).await {
        Ok(reading) => {
            print!("{}", render::render_dashboard(&query.city, &reading, Local::now()));
            if details {
                print!("{}", render::render_details(&reading));
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

/// Prompt, fetch, render, repeat. Esc or Ctrl-C leaves the loop; every fetch
/// failure is reported and returns to the prompt.
async fn dashboard_loop() -> Result<()> {
    let config = Config::load()?;

    loop {
        let city = match Text::new("City:").with_default("London").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        let query = match WeatherQuery::new(city) {
            Ok(query) => query,
            // A plain empty submit takes the "London" default, so only
            // whitespace-only input lands here; treat it as quitting.
            Err(_) => break,
        };

        let api_key = match config.require_api_key() {
            Ok(key) => key.to_string(),
            Err(err) => {
                eprintln!("Error: {err}");
                break;
            }
        };

        let client = OpenWeatherClient::new(api_key);
        match client.current_weather(&query).await {
            Ok(reading) => {
                print!("{}", render::render_dashboard(&query.city, &reading, Local::now()));
                if wants_details()? {
                    print!("{}", render::render_details(&reading));
                }
            }
            Err(err) => eprintln!("Error: {err}"),
        }
        println!();
    }

    Ok(())
}

fn wants_details() -> Result<bool> {
    match Confirm::new("See more details?").with_default(false).prompt() {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(err) => Err(err).context("Failed to read confirmation"),
    }
}
