use ratatui::{
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    layout::{Alignment, Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    DefaultTerminal, Frame,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;
use anyhow::Result;

use crate::ui::GAME_RULES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    AddWords,
    Quit,
}

const ITEMS: [&str; 4] = ["Play", "Add words to JSON file", "Game help", "Quit"];

pub struct MainMenu {
    pub selected: usize,
    pub showing_help: bool,
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            selected: 0,
            showing_help: false,
        }
    }

    /// Returns a choice once the user picks something other than the help page
    pub fn handle_key(&mut self, code: KeyCode) -> Option<MenuChoice> {
        if self.showing_help {
            self.showing_help = false;
            return None;
        }
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(ITEMS.len() - 1),
            KeyCode::Char('p') => return Some(MenuChoice::Play),
            KeyCode::Char('a') => return Some(MenuChoice::AddWords),
            KeyCode::Char('h') => self.showing_help = true,
            KeyCode::Char('q') | KeyCode::Esc => return Some(MenuChoice::Quit),
            KeyCode::Enter => match self.selected {
                0 => return Some(MenuChoice::Play),
                1 => return Some(MenuChoice::AddWords),
                2 => self.showing_help = true,
                _ => return Some(MenuChoice::Quit),
            },
            _ => {}
        }
        None
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<MenuChoice> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(choice) = self.handle_key(key.code) {
                        return Ok(choice);
                    }
                }
            }
        }
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" Welcome to a fake drawer in Brno! ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0]
        );

        if self.showing_help {
            f.render_widget(
                Paragraph::new(GAME_RULES)
                    .block(Block::default().title(" HOW TO USE ").borders(Borders::ALL))
                    .wrap(Wrap { trim: false }),
                chunks[1]
            );
            f.render_widget(
                Paragraph::new("Press any key to go back").alignment(Alignment::Center),
                chunks[2]
            );
        } else {
            let items: Vec<ListItem> = ITEMS.iter().enumerate().map(|(i, item)| {
                let style = if i == self.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {}", item)).style(style)
            }).collect();

            f.render_widget(
                List::new(items).block(Block::default().title(" Please select an option ").borders(Borders::ALL)),
                chunks[1]
            );

            f.render_widget(
                Paragraph::new("[↑/↓] Navigate  [Enter] Select  [P] Play  [A] Add  [H] Help  [Q] Quit")
                    .alignment(Alignment::Center),
                chunks[2]
            );
        }
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}
