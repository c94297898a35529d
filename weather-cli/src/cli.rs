use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use inquire::Password;
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, info};
use weather_core::{Config, OpenWeatherProvider, Units, WeatherProvider, WeatherRequest};

use crate::style;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Gets weather and temperature info for a city.")]
pub struct Cli {
    /// City name; multiple words are joined with spaces.
    #[arg(required_unless_present = "configure")]
    pub city: Vec<String>,

    /// Display the temperature in imperial units.
    #[arg(short, long)]
    pub imperial: bool,

    /// Path to the config file holding the API key.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt for an OpenWeather API key and save it to the config file.
    #[arg(long, conflicts_with_all = ["city", "imperial"])]
    pub configure: bool,

    /// Log requests and responses to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn units(&self) -> Units {
        Units::from_imperial_flag(self.imperial)
    }

    pub async fn run(self) -> Result<()> {
        let path = Config::resolve_path(self.config.clone())?;
        debug!(path = %path.display(), "using config file");

        if self.configure {
            return configure(&path);
        }

        let config = Config::load(&path)?;
        let provider = OpenWeatherProvider::from_config(&config);
        let units = self.units();
        let request = WeatherRequest::new(&self.city, units);

        if request.city.is_empty() {
            bail!("City name must not be empty.");
        }

        let reading = provider.get_weather(&request).await?;
        info!(city = %reading.city, condition = reading.condition_id, "weather received");

        let color = if io::stdout().is_terminal() { ColorChoice::Auto } else { ColorChoice::Never };
        let mut stdout = StandardStream::stdout(color);
        style::write_reading(&mut stdout, &reading, units).context("Failed to write output")?;

        Ok(())
    }
}

fn configure(path: &Path) -> Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty.");
    }

    Config::with_api_key(api_key).save(path)?;
    println!("Saved API key to {}", path.display());

    Ok(())
}
