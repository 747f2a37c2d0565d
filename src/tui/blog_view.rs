use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::blog::page::BlogPage;

/// Hosts the static blog page: draws it and waits for a key press. The
/// page itself has no interactive surface.
pub struct BlogView {
    page: BlogPage,
}

impl BlogView {
    pub fn new(page: BlogPage) -> Self {
        Self { page }
    }

    pub fn run(&self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| frame.render_widget(&self.page, frame.area()))?;
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
