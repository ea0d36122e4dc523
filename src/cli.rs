use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app;
use crate::config::{AppConfig, PlayConfig, Presentation};
use crate::ui::GAME_RULES;

#[derive(Parser)]
#[command(name = "fake-drawer")]
#[command(about = "A game of lies and deceit... but with art!")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a fake drawer in Brno
    Play {
        /// Amount of players. Must be greater than 0
        #[arg(allow_negative_numbers = true)]
        player_count: i64,

        /// Path to JSON file to be used for words
        words: PathBuf,

        /// Reveal roles in a full-screen view
        #[arg(long)]
        gui: bool,

        /// Remove the played word from the file once everyone has seen their role
        #[arg(long)]
        retire: bool,
    },
    /// Add words to JSON file to be used in runs of the game
    Add {
        /// Path to JSON file to have words added
        words: PathBuf,

        /// Use a full-screen form
        #[arg(long)]
        gui: bool,
    },
    /// Print the rules of the game
    Rules,
}

fn presentation(gui: bool) -> Presentation {
    if gui {
        Presentation::Tui
    } else {
        Presentation::Terminal
    }
}

pub async fn run_cli(config: AppConfig) -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            player_count,
            words,
            gui,
            retire,
        }) => {
            let play_config = PlayConfig {
                player_count,
                words_path: words,
                presentation: presentation(gui),
                retire_word: retire,
            };
            app::play(&play_config).await?;
        }

        Some(Commands::Add { words, gui }) => {
            app::add_words(&words, presentation(gui))?;
        }

        Some(Commands::Rules) => println!("{GAME_RULES}"),

        None => {
            // No subcommand provided - show interactive menu
            app::run_menu(&config).await?;
        }
    }

    Ok(())
}
