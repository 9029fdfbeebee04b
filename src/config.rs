//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use std::env;
use std::path::PathBuf;

use dotenv::dotenv;
use ratatui::style::Color;

use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Path to the song book CSV file
    pub songbook_file: PathBuf,
    /// Color used to highlight chords in the viewer
    pub chord_color: Color,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            songbook_file: PathBuf::from("cancionero.csv"),
            chord_color: Color::Yellow,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Song book path: env var override, or default resolution
        config.songbook_file = env::var("CANCIONERO_FILE").map_or_else(
            |_| default_songbook_path(),
            |path| PathBuf::from(shellexpand::tilde(&path).to_string()),
        );

        // Chord highlight color
        if let Ok(name) = env::var("CHORD_COLOR") {
            config.chord_color = parse_color(&name).ok_or_else(|| {
                Error::config(
                    format!("unrecognized CHORD_COLOR {name:?}"),
                    "Use a named color like yellow, cyan, green, red, magenta, blue or white",
                )
            })?;
        }

        Ok(config)
    }
}

/// Default song book location: `cancionero.csv` in the working directory,
/// falling back to `~/Documents/cancionero.csv` when the local file does not
/// exist but the Documents copy does.
fn default_songbook_path() -> PathBuf {
    let local = PathBuf::from("cancionero.csv");
    if local.exists() {
        return local;
    }
    dirs::home_dir()
        .map(|home| home.join("Documents/cancionero.csv"))
        .filter(|p| p.exists())
        .unwrap_or(local)
}

/// Parse a named terminal color, case-insensitively.
fn parse_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        _ => None,
    }
}
