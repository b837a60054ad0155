use std::env;
use std::fs;
use iced::Theme;
use log::warn;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.json";
pub const SERVER_ENV: &str = "HOMEWORK_ADMIN_URL";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5009";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme_name: String,
    pub server_url: String,
    pub username: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: theme_to_str(&Theme::Light).to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            username: None,
        }
    }
}

impl Config {
    pub fn theme(&self) -> Theme {
        theme_from_str(&self.theme_name).unwrap_or(Theme::Light)
    }
}

/// Reads `config.json`, then lets `HOMEWORK_ADMIN_URL` override the server.
pub fn load_config() -> Config {
    let mut config = match fs::read_to_string(CONFIG_FILE) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            warn!("ignoring malformed {}: {}", CONFIG_FILE, err);
            Config::default()
        }),
        Err(_) => Config::default(),
    };
    if let Ok(url) = env::var(SERVER_ENV) {
        if !url.trim().is_empty() {
            config.server_url = url;
        }
    }
    config
}

pub fn save_config(config: &Config) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(CONFIG_FILE, json)?;
    Ok(())
}

pub fn theme_from_str(name: &str) -> Option<Theme> {
    Theme::ALL
        .iter()
        .find(|t| theme_to_str(t).eq_ignore_ascii_case(name))
        .cloned()
}

pub fn theme_to_str(theme: &Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
        Theme::Dracula => "Dracula",
        Theme::Nord => "Nord",
        Theme::SolarizedLight => "SolarizedLight",
        Theme::SolarizedDark => "SolarizedDark",
        Theme::GruvboxLight => "GruvboxLight",
        Theme::GruvboxDark => "GruvboxDark",
        Theme::CatppuccinLatte => "CatppuccinLatte",
        Theme::CatppuccinFrappe => "CatppuccinFrappe",
        Theme::CatppuccinMacchiato => "CatppuccinMacchiato",
        Theme::CatppuccinMocha => "CatppuccinMocha",
        Theme::TokyoNight => "TokyoNight",
        Theme::TokyoNightStorm => "TokyoNightStorm",
        Theme::TokyoNightLight => "TokyoNightLight",
        Theme::KanagawaWave => "KanagawaWave",
        Theme::KanagawaDragon => "KanagawaDragon",
        Theme::KanagawaLotus => "KanagawaLotus",
        Theme::Moonfly => "Moonfly",
        Theme::Nightfly => "Nightfly",
        Theme::Oxocarbon => "Oxocarbon",
        Theme::Ferra => "Ferra",
        _ => "Unknown",
    }
}
