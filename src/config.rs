//! Process-wide settings from the environment and the per-game configuration.
use std::env;
use std::path::PathBuf;

/// Settings read once at startup.
///
/// Environment variables:
/// - `FAKE_DRAWER_LOG` - tracing filter directives (default: `warn`)
/// - `FAKE_DRAWER_LOG_FILE` - write logs to this file instead of stderr
/// - `FAKE_DRAWER_MENU_MIN_PLAYERS` - smallest player count the menu accepts (default: 3)
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub menu_min_players: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_file: None,
            menu_min_players: 3,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(filter) = read_env::<String>("FAKE_DRAWER_LOG") {
            config.log_filter = filter;
        }
        config.log_file = read_env::<PathBuf>("FAKE_DRAWER_LOG_FILE");
        if let Some(min) = read_env::<i64>("FAKE_DRAWER_MENU_MIN_PLAYERS") {
            config.menu_min_players = min.max(1);
        }

        config
    }
}

/// How reveals are paced on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Plain prompts, one Enter per step
    #[default]
    Terminal,
    /// Full-screen ratatui view
    Tui,
}

/// Everything one game run needs, passed explicitly into [`crate::app::play`]
#[derive(Clone, Debug)]
pub struct PlayConfig {
    pub player_count: i64,
    pub words_path: PathBuf,
    pub presentation: Presentation,
    /// Drop the played entry from the word file once every player has seen their role
    pub retire_word: bool,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
