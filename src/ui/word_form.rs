//! Full-screen form for appending words to a word file
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    DefaultTerminal, Frame,
};

use crate::core::words::WordEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Word,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Editing,
    /// "Do you want to add another word?"
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Continue,
    /// Keep what was added
    Done,
    /// Throw everything away
    Cancel,
}

pub struct WordForm {
    categories: String,
    word: String,
    category: String,
    focus: Field,
    mode: FormMode,
    error: Option<String>,
    added: Vec<WordEntry>,
}

impl WordForm {
    pub fn new(categories: &[&str]) -> Self {
        Self {
            categories: categories.join(", "),
            word: String::new(),
            category: String::new(),
            focus: Field::Word,
            mode: FormMode::Editing,
            error: None,
            added: Vec::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn added(&self) -> &[WordEntry] {
        &self.added
    }

    pub fn into_added(self) -> Vec<WordEntry> {
        self.added
    }

    pub fn handle_key(&mut self, code: KeyCode) -> FormAction {
        match self.mode {
            FormMode::Editing => self.handle_editing(code),
            FormMode::Confirm => match code {
                KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                    self.mode = FormMode::Editing;
                    FormAction::Continue
                }
                KeyCode::Char('n' | 'N') | KeyCode::Esc => FormAction::Done,
                _ => FormAction::Continue,
            },
        }
    }

    fn handle_editing(&mut self, code: KeyCode) -> FormAction {
        match code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    Field::Word => Field::Category,
                    Field::Category => Field::Word,
                };
            }
            KeyCode::Char(c) => self.focused_mut().push(c),
            KeyCode::Backspace => {
                self.focused_mut().pop();
            }
            KeyCode::Enter => match WordEntry::from_input(&self.word, &self.category) {
                Ok(entry) => {
                    self.added.push(entry);
                    self.word.clear();
                    self.category.clear();
                    self.focus = Field::Word;
                    self.error = None;
                    self.mode = FormMode::Confirm;
                }
                Err(e) => self.error = Some(e.to_string()),
            },
            _ => {}
        }
        FormAction::Continue
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Word => &mut self.word,
            Field::Category => &mut self.category,
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(format!("Categories in word file: {}", self.categories))
                .block(Block::default().title(" ADD WORDS ").borders(Borders::ALL))
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let (body, hint) = match self.mode {
            FormMode::Editing => {
                let field = |label: &str, value: &str, field: Field| {
                    let marker = if self.focus == field { "»" } else { " " };
                    format!("{marker} {label}: {value}")
                };
                let mut body = format!(
                    "{}\n\n{}",
                    field("Word", &self.word, Field::Word),
                    field("Category", &self.category, Field::Category),
                );
                if let Some(error) = &self.error {
                    body.push_str(&format!("\n\n{error}"));
                }
                (body, "[Tab] Switch field  [Enter] Submit  [Esc] Cancel")
            }
            FormMode::Confirm => (
                format!(
                    "Added {} word(s).\n\nDo you want to add another word?",
                    self.added.len()
                ),
                "[Y] Yes  [N] No, save and quit",
            ),
        };

        let style = if self.error.is_some() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        f.render_widget(
            Paragraph::new(body)
                .style(style)
                .block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );
        f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[2]);
    }
}

/// Shows the form until the user finishes or cancels.
/// `None` means cancelled: nothing should be saved.
pub fn run(categories: &[&str]) -> Result<Option<Vec<WordEntry>>> {
    let mut form = WordForm::new(categories);
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut form);
    ratatui::restore();

    Ok(match result? {
        FormAction::Cancel => None,
        _ => Some(form.into_added()),
    })
}

fn event_loop(terminal: &mut DefaultTerminal, form: &mut WordForm) -> Result<FormAction> {
    loop {
        terminal.draw(|f| form.render(f))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match form.handle_key(key.code) {
                    FormAction::Continue => {}
                    action => return Ok(action),
                }
            }
        }
    }
}
