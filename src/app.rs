//! Game and word-file flows that sit between the command line and the engine
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use thiserror::Error;
use tokio::io::BufReader;
use tracing::info;

use crate::config::{AppConfig, PlayConfig, Presentation};
use crate::core::engine::run_reveal;
use crate::core::words::{WordEntry, WordSet};
use crate::ui::menu::{MainMenu, MenuChoice};
use crate::ui::{reveal, terminal, word_form, RevealOutcome};

/// Rejected player count typed into the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter a valid integer")]
    NotANumber,
    #[error("player count cannot be less than {min}, please try again")]
    TooFewPlayers { min: i64 },
}

pub fn parse_player_count(input: &str, min: i64) -> Result<i64, InputError> {
    let count: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if count < min {
        return Err(InputError::TooFewPlayers { min });
    }
    Ok(count)
}

/// Loads the word file, runs one reveal session and optionally retires the played word
pub async fn play(config: &PlayConfig) -> Result<RevealOutcome> {
    let mut words = WordSet::load(&config.words_path)?;
    let stream = run_reveal(&words, config.player_count);

    let outcome = match config.presentation {
        Presentation::Terminal => {
            terminal::pace(stream, BufReader::new(tokio::io::stdin()), io::stdout()).await?
        }
        Presentation::Tui => {
            // A negative count never gets past the engine, so 0 is only a placeholder.
            let player_count = usize::try_from(config.player_count).unwrap_or(0);
            reveal::run(stream, player_count).await?
        }
    };

    if config.retire_word && outcome.completed {
        if let Some(word) = &outcome.word {
            if words.retire(word, &outcome.category) {
                words
                    .save(&config.words_path)
                    .context("failed to retire the played word")?;
                info!(word = %word, category = %outcome.category, "retired played word");
            }
        }
    }
    Ok(outcome)
}

/// Appends user-entered words to the file. Returns how many were added.
pub fn add_words(path: &Path, presentation: Presentation) -> Result<usize> {
    let mut words = WordSet::load(path)?;

    let added = match presentation {
        Presentation::Terminal => prompt_words(&words.categories())?,
        Presentation::Tui => match word_form::run(&words.categories())? {
            Some(added) => added,
            None => {
                info!("adding words cancelled, file left untouched");
                return Ok(0);
            }
        },
    };

    let count = added.len();
    for entry in added {
        words.push(entry);
    }
    words.save(path)?;
    println!("Successfully saved words to JSON file!");
    Ok(count)
}

fn prompt_words(categories: &[&str]) -> Result<Vec<WordEntry>> {
    println!("Categories in word file: {}", categories.join(", "));

    let theme = ColorfulTheme::default();
    let mut added = Vec::new();
    loop {
        let word: String = Input::with_theme(&theme)
            .with_prompt("Enter word to add")
            .validate_with(non_blank)
            .interact_text()?;
        let category: String = Input::with_theme(&theme)
            .with_prompt("Enter category of word to add")
            .validate_with(non_blank)
            .interact_text()?;
        added.push(WordEntry::from_input(&word, &category)?);

        let again = Confirm::with_theme(&theme)
            .with_prompt("Do you want to add another word?")
            .default(true)
            .interact()?;
        if !again {
            return Ok(added);
        }
    }
}

fn non_blank(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("entry boxes cannot be empty")
    } else {
        Ok(())
    }
}

/// Start screen shown when no subcommand is given
pub async fn run_menu(config: &AppConfig) -> Result<()> {
    let mut terminal = ratatui::init();
    let choice = MainMenu::new().run(&mut terminal);
    ratatui::restore();

    match choice? {
        MenuChoice::Play => {
            let words_path = prompt_word_file("Path to word JSON file")?;
            let min = config.menu_min_players;
            let player_count = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("Player count")
                .validate_with(|input: &String| parse_player_count(input, min).map(|_| ()))
                .interact_text()?;
            let player_count = parse_player_count(&player_count, min)?;

            let play_config = PlayConfig {
                player_count,
                words_path,
                presentation: Presentation::Tui,
                retire_word: false,
            };
            play(&play_config).await?;
        }
        MenuChoice::AddWords => {
            let path = prompt_word_file("Please select JSON file to edit")?;
            add_words(&path, Presentation::Tui)?;
        }
        MenuChoice::Quit => println!("Goodbye!"),
    }
    Ok(())
}

fn prompt_word_file(prompt: &str) -> Result<PathBuf> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if Path::new(input.trim()).is_file() {
                Ok(())
            } else {
                Err("file does not exist")
            }
        })
        .interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_player_count_needs_a_number() {
        assert_eq!(parse_player_count("three", 3), Err(InputError::NotANumber));
        assert_eq!(parse_player_count("", 3), Err(InputError::NotANumber));
    }

    #[test]
    fn menu_player_count_has_a_minimum() {
        assert_eq!(parse_player_count(" 4 ", 3), Ok(4));
        assert_eq!(
            parse_player_count("2", 3),
            Err(InputError::TooFewPlayers { min: 3 })
        );
        assert_eq!(
            InputError::TooFewPlayers { min: 3 }.to_string(),
            "player count cannot be less than 3, please try again"
        );
    }

    #[tokio::test]
    async fn missing_word_file_is_not_an_engine_error() {
        let config = PlayConfig {
            player_count: 3,
            words_path: PathBuf::from("definitely/not/here.json"),
            presentation: Presentation::Terminal,
            retire_word: false,
        };
        let err = play(&config).await.unwrap_err();
        assert!(err.downcast_ref::<crate::core::words::WordStoreError>().is_some());
        assert!(err.downcast_ref::<crate::core::engine::RevealError>().is_none());
    }
}
