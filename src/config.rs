use crate::cmds::Cmd;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use unsegen::input::Key;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "DAYBOOK_CONFIG_FILE";

fn configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("daybook").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".daybook.toml"));
    }

    locations
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    tick_rate_ms: u64,
    #[serde(skip, default = "default_key_map")]
    pub key_map: KeyMap,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: 500,
            key_map: default_key_map(),
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_key_map() -> KeyMap {
    let mut key_map = HashMap::new();

    key_map.insert(Key::Char('l'), Cmd::NextDay);
    key_map.insert(Key::Char('h'), Cmd::PrevDay);
    key_map.insert(Key::Char('j'), Cmd::NextWeek);
    key_map.insert(Key::Char('k'), Cmd::PrevWeek);
    key_map.insert(Key::Char('n'), Cmd::NextMonth);
    key_map.insert(Key::Char('p'), Cmd::PrevMonth);
    key_map.insert(Key::Char('t'), Cmd::Today);
    key_map.insert(Key::Char(']'), Cmd::NextNote);
    key_map.insert(Key::Char('['), Cmd::PrevNote);
    key_map.insert(Key::Char('x'), Cmd::RemoveNote);
    key_map.insert(Key::Char('i'), Cmd::EnterInsert);
    key_map.insert(Key::Char('q'), Cmd::Exit);

    key_map
}

/// Loads the first readable config file from the usual locations, or the
/// defaults when there is none. An explicitly given path must exist.
pub fn load_suitable_config(
    path: Option<&Path>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let config = if let Some(path) = path {
        parse_config(path)?
    } else if let Some(path) = configfile_locations().iter().find(|path| path.is_file()) {
        parse_config(path)?
    } else {
        log::info!("No config file found, using defaults");
        Config::default()
    };

    Ok(config)
}

fn parse_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    log::info!("Loading config from '{}'", path.display());
    let config = toml::from_str(&fs::read_to_string(path)?)?;
    Ok(config)
}
