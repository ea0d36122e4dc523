//! Full-screen reveal: an "Ok!" press pulls the next role, another hides it again
use std::time::Duration;

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    DefaultTerminal, Frame,
};
use tracing::{debug, info};

use crate::core::engine::{RevealEvent, RevealStream};
use crate::ui::{role_line, RevealOutcome};

const PROMPT: &str = "Hey there player, press ok to view your role!";
const FINISHED: &str = "Enjoy the game!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Prompt,
    Role(String),
    Finished,
}

/// What the loop should do after the user pressed Ok
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fetch,
    Redraw,
    Close,
}

/// Screen state, kept apart from drawing so the pacing can be tested headless
#[derive(Debug, Clone)]
pub struct RevealView {
    player_count: usize,
    revealed: usize,
    screen: Screen,
    outcome: RevealOutcome,
}

impl RevealView {
    pub fn new(category: String, player_count: usize) -> Self {
        Self {
            player_count,
            revealed: 0,
            screen: Screen::Prompt,
            outcome: RevealOutcome {
                category,
                ..RevealOutcome::default()
            },
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn acknowledge(&mut self) -> Step {
        match self.screen {
            Screen::Prompt => Step::Fetch,
            Screen::Role(_) => {
                self.screen = if self.revealed >= self.player_count {
                    self.outcome.completed = true;
                    Screen::Finished
                } else {
                    Screen::Prompt
                };
                Step::Redraw
            }
            Screen::Finished => Step::Close,
        }
    }

    /// Feeds the event pulled after [`Step::Fetch`]
    pub fn apply(&mut self, event: Option<RevealEvent>) -> Result<()> {
        match event {
            Some(RevealEvent::PlayerReveal {
                is_impostor, word, ..
            }) => {
                self.revealed += 1;
                self.screen = Screen::Role(role_line(is_impostor, &word));
                self.outcome.word = Some(word);
            }
            Some(RevealEvent::Failure(error)) => return Err(error.into()),
            Some(RevealEvent::CategoryAnnouncement { .. }) => bail!("category announced twice"),
            None => {
                self.outcome.completed = self.revealed >= self.player_count;
                self.screen = Screen::Finished;
            }
        }
        Ok(())
    }

    pub fn title(&self) -> &str {
        match &self.screen {
            Screen::Prompt => PROMPT,
            Screen::Role(line) => line,
            Screen::Finished => FINISHED,
        }
    }

    /// The category is only on screen while a role is shown
    pub fn category_line(&self) -> Option<String> {
        matches!(self.screen, Screen::Role(_))
            .then(|| format!("Category is: {}", self.outcome.category))
    }

    pub fn into_outcome(self) -> RevealOutcome {
        self.outcome
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" A FAKE DRAWER IN BRNO ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let title_style = match self.screen {
            Screen::Role(_) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };
        let mut body = vec![ratatui::text::Line::styled(self.title().to_string(), title_style)];
        if let Some(category) = self.category_line() {
            body.push(ratatui::text::Line::from(""));
            body.push(ratatui::text::Line::from(category));
        }
        f.render_widget(
            Paragraph::new(body)
                .block(
                    Block::default()
                        .title(format!(" PLAYER {}/{} ", self.revealed, self.player_count))
                        .borders(Borders::ALL),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("[Enter] Ok!  [Esc/Q] Quit").alignment(Alignment::Center),
            chunks[2],
        );
    }
}

/// Runs a session in the alternate screen.
///
/// The category is read before the screen is taken over, so an engine
/// failure comes back as an error without flashing an empty view.
pub async fn run(mut stream: RevealStream, player_count: usize) -> Result<RevealOutcome> {
    let category = match stream.next_event().await {
        Some(RevealEvent::CategoryAnnouncement { category }) => category,
        Some(RevealEvent::Failure(error)) => return Err(error.into()),
        Some(other) => bail!("reveal stream started with {other:?}"),
        None => bail!("reveal stream closed unexpectedly"),
    };

    let mut view = RevealView::new(category, player_count);
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut stream, &mut view).await;
    ratatui::restore();

    if !view.outcome.completed {
        info!(revealed = view.revealed(), "reveal view closed early");
        stream.abandon().await;
    }
    result.map(|()| view.into_outcome())
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    stream: &mut RevealStream,
    view: &mut RevealView,
) -> Result<()> {
    loop {
        terminal.draw(|f| view.render(f))?;

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => match view.acknowledge() {
                Step::Fetch => {
                    let event = stream.next_event().await;
                    debug!(?event, "reveal view pulled event");
                    view.apply(event)?;
                }
                Step::Redraw => {}
                Step::Close => return Ok(()),
            },
            KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::RevealError;

    fn reveal(player: usize, is_impostor: bool) -> Option<RevealEvent> {
        Some(RevealEvent::PlayerReveal {
            player,
            is_impostor,
            word: "aardvark".into(),
        })
    }

    #[test]
    fn finishes_after_exactly_player_count_reveals() {
        let mut view = RevealView::new("animal".into(), 2);
        assert_eq!(view.title(), PROMPT);
        assert_eq!(view.category_line(), None);

        assert_eq!(view.acknowledge(), Step::Fetch);
        view.apply(reveal(0, false)).unwrap();
        assert_eq!(view.title(), "The word is: aardvark");
        assert_eq!(view.category_line().as_deref(), Some("Category is: animal"));

        assert_eq!(view.acknowledge(), Step::Redraw);
        assert_eq!(view.screen(), &Screen::Prompt);

        assert_eq!(view.acknowledge(), Step::Fetch);
        view.apply(reveal(1, true)).unwrap();
        assert_eq!(view.title(), "You are the fake :)");

        assert_eq!(view.acknowledge(), Step::Redraw);
        assert_eq!(view.title(), FINISHED);
        assert_eq!(view.acknowledge(), Step::Close);

        let outcome = view.into_outcome();
        assert!(outcome.completed);
        assert_eq!(outcome.word.as_deref(), Some("aardvark"));
    }

    #[test]
    fn early_end_of_stream_is_not_completed() {
        let mut view = RevealView::new("animal".into(), 3);
        view.apply(reveal(0, true)).unwrap();
        view.acknowledge();
        view.apply(None).unwrap();
        assert_eq!(view.screen(), &Screen::Finished);
        assert!(!view.into_outcome().completed);
    }

    #[test]
    fn failure_surfaces_as_error() {
        let mut view = RevealView::new("animal".into(), 3);
        let err = view
            .apply(Some(RevealEvent::Failure(RevealError::MalformedEntry)))
            .unwrap_err();
        assert_eq!(err.downcast_ref::<RevealError>(), Some(&RevealError::MalformedEntry));
    }
}
