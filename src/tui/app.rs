use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{
        palette::tailwind::{BLUE, SLATE},
        Color, Modifier, Style, Stylize,
    },
    symbols,
    text::Line,
    widgets::{
        Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, StatefulWidget,
        Widget,
    },
    DefaultTerminal, Frame,
};

use crate::tasks::{task::TaskItem, task_list::TaskList};

const LIST_HEADER_STYLE: Style = Style::new().fg(SLATE.c100).bg(BLUE.c800);
const NORMAL_ROW_BG: Color = SLATE.c950;
const ALT_ROW_BG: Color = SLATE.c900;
const SELECTED_STYLE: Style = Style::new().bg(SLATE.c800).add_modifier(Modifier::BOLD);
const TEXT_FG_COLOR: Color = SLATE.c200;
const FOCUSED_BORDER_FG: Color = BLUE.c400;

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    List,
}

pub struct App {
    tasks: TaskList,
    input: String,
    focus: Focus,
    state: ListState,
    // Rows the list entries occupied in the last frame, for click resolution.
    list_rows: Rect,
    exit: bool,
}

const fn alternate_colors(i: usize) -> Color {
    if i % 2 == 0 {
        NORMAL_ROW_BG
    } else {
        ALT_ROW_BG
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            tasks: TaskList::new(),
            input: String::new(),
            focus: Focus::Input,
            state: ListState::default(),
            list_rows: Rect::default(),
            exit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    fn handle_events(&mut self) -> Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => Ok(()),
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match key_event.code {
            KeyCode::Esc => self.exit(),
            KeyCode::Tab => self.toggle_focus(),
            code => match self.focus {
                Focus::Input => self.handle_input_key(code),
                Focus::List => self.handle_list_key(code),
            },
        }
        Ok(())
    }

    fn handle_input_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.state.select_previous(),
            KeyCode::Down => self.state.select_next(),
            other => {
                if let Some(key) = key_name(other) {
                    self.remove_selected(&key);
                }
            }
        }
    }

    /// Left click on an entry row removes that entry; clicks anywhere else
    /// are ignored. Resolution happens here, at the container, so entries
    /// added later need no wiring of their own.
    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) -> Result<()> {
        if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
            if let Some(index) = self.row_to_index(mouse_event.column, mouse_event.row) {
                let id = self.tasks.items()[index].id;
                if self.tasks.remove(id) {
                    self.after_removal();
                }
            }
        }
        Ok(())
    }

    fn row_to_index(&self, column: u16, row: u16) -> Option<usize> {
        if !self.list_rows.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.state.offset() + (row - self.list_rows.y) as usize;
        (index < self.tasks.len()).then_some(index)
    }

    fn submit(&mut self) {
        if self.tasks.submit(&self.input).is_some() {
            self.input.clear();
            self.focus = Focus::Input;
        }
    }

    fn remove_selected(&mut self, key: &str) {
        let Some(index) = self.selected_index() else {
            return;
        };
        let id = self.tasks.items()[index].id;
        if self.tasks.handle_removal_key(id, key) {
            self.after_removal();
        }
    }

    /// The focused entry, clamped to the list bounds the way the list
    /// widget clamps its highlight.
    fn selected_index(&self) -> Option<usize> {
        if self.tasks.is_empty() {
            return None;
        }
        self.state
            .selected()
            .map(|index| index.min(self.tasks.len() - 1))
    }

    fn after_removal(&mut self) {
        if self.tasks.is_empty() {
            self.state.select(None);
            self.focus = Focus::Input;
        } else if let Some(index) = self.state.selected() {
            self.state.select(Some(index.min(self.tasks.len() - 1)));
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.tasks.is_empty() => {
                if self.state.selected().is_none() {
                    self.state.select_first();
                }
                Focus::List
            }
            Focus::Input => Focus::Input,
            Focus::List => Focus::Input,
        };
    }

    fn exit(&mut self) {
        self.exit = true;
    }

    fn render_header(area: Rect, buf: &mut Buffer) {
        Paragraph::new("tudu").bold().centered().render(area, buf);
    }

    fn render_footer(area: Rect, buf: &mut Buffer) {
        Paragraph::new("Tab to switch focus, Enter to add or remove, Esc to quit")
            .centered()
            .render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focus == Focus::Input {
            Style::new().fg(FOCUSED_BORDER_FG)
        } else {
            Style::new()
        };
        Paragraph::new(self.input.as_str())
            .block(
                Block::bordered()
                    .title(Line::raw("New task"))
                    .border_style(border_style),
            )
            .render(area, buf);
    }

    fn render_list(&mut self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .title(Line::raw("Tasks").centered())
            .borders(Borders::TOP)
            .border_set(symbols::border::EMPTY)
            .border_style(LIST_HEADER_STYLE)
            .bg(NORMAL_ROW_BG);
        self.list_rows = block.inner(area);

        let items: Vec<ListItem> = self
            .tasks
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| ListItem::from(item).bg(alternate_colors(i)))
            .collect();

        let highlight_style = if self.focus == Focus::List {
            SELECTED_STYLE
        } else {
            Style::new()
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style)
            .highlight_symbol(">")
            .highlight_spacing(HighlightSpacing::Always);

        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, input, list, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        App::render_header(header, buf);
        self.render_input(input, buf);
        self.render_list(list, buf);
        App::render_footer(footer, buf);
    }
}

impl From<&TaskItem> for ListItem<'_> {
    fn from(item: &TaskItem) -> Self {
        ListItem::new(Line::styled(format!(" {}", item.text), TEXT_FG_COLOR))
    }
}

/// Key names as the task list understands them; keys with no name cannot
/// remove anything.
fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Delete => Some("Delete".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(code.into()).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
    }

    fn buffer_lines(buf: &Buffer) -> Vec<String> {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn typing_and_submitting_adds_a_task() {
        let mut app = App::new();
        type_text(&mut app, "  Buy milk ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.items()[0].text, "Buy milk");
        assert!(app.input.is_empty());
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn blank_submission_is_ignored_and_keeps_the_input() {
        let mut app = App::new();
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.tasks.is_empty());
        assert_eq!(app.input, "   ");
    }

    #[test]
    fn backspace_edits_the_input() {
        let mut app = App::new();
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "a");
    }

    #[test]
    fn tab_moves_focus_to_the_list_and_back() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Input);

        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.state.selected(), Some(0));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn removal_keys_remove_the_focused_entry() {
        for code in [KeyCode::Enter, KeyCode::Backspace, KeyCode::Delete] {
            let mut app = App::new();
            type_text(&mut app, "Buy milk");
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Tab);
            press(&mut app, code);
            assert!(app.tasks.is_empty(), "key {code:?}");
            assert_eq!(app.focus, Focus::Input);
        }
    }

    #[test]
    fn other_keys_leave_the_focused_entry_alone() {
        let mut app = App::new();
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn selection_clamps_after_removing_the_last_entry() {
        let mut app = App::new();
        type_text(&mut app, "one");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "two");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.tasks.items()[0].text, "one");
        assert_eq!(app.state.selected(), Some(0));
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn esc_exits() {
        let mut app = App::new();
        press(&mut app, KeyCode::Esc);
        assert!(app.exit);
    }

    #[test]
    fn render_shows_input_and_tasks() {
        let mut app = App::new();
        app.tasks.submit("Buy milk");
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 8));
        (&mut app).render(buf.area, &mut buf);

        let lines = buffer_lines(&buf);
        assert_eq!(lines[0].trim(), "tudu");
        assert!(lines[1].contains("New task"));
        assert!(lines[4].contains("Tasks"));
        assert!(lines[5].contains("Buy milk"));
    }

    #[test]
    fn clicking_an_entry_row_removes_it() {
        let mut app = App::new();
        app.tasks.submit("Buy milk");
        app.tasks.submit("Walk dog");
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        (&mut app).render(buf.area, &mut buf);

        // header row 0, input rows 1-3, list title row 4, entries from row 5
        click(&mut app, 5, 5);
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.items()[0].text, "Walk dog");

        click(&mut app, 5, 5);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn clicks_outside_entry_rows_are_ignored() {
        let mut app = App::new();
        app.tasks.submit("Buy milk");
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 10));
        (&mut app).render(buf.area, &mut buf);

        click(&mut app, 5, 2); // input field
        click(&mut app, 5, 8); // below the last entry
        assert_eq!(app.tasks.len(), 1);
    }
}
