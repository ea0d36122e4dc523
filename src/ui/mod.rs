//! Presentation layer: paces the reveal stream one user action at a time.
pub mod menu;
pub mod reveal;
pub mod terminal;
pub mod word_form;

/// What the players got to see before the session ended
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    pub category: String,
    pub word: Option<String>,
    /// Every player saw their role
    pub completed: bool,
}

/// Text shown to a single player when their role is revealed
pub fn role_line(is_impostor: bool, word: &str) -> String {
    if is_impostor {
        "You are the fake :)".to_string()
    } else {
        format!("The word is: {word}")
    }
}

pub const GAME_RULES: &str = "\
This is a game moderator for the board game A fake artist goes to New York.
Out of all players there is one fake artist and the rest are normal artists.
All players get a word category and only the normal artists get the actual
word they have to draw.
Then all players take turns drawing at most one line on a shared piece of
paper, for two rounds. After these two rounds everybody votes on who they
think is the fake. Then the fake reveals themselves and guesses the word.
The fake wins if they aren't caught by the other players or if they guess
the correct word.

Words are loaded from a JSON file: an array of {\"text\": ..., \"category\": ...}
objects. To play or to add words you will be asked for such a file.";
