use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::render::DELETE_LABEL;
use super::state::{App, Focus};

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::Suggestions => self.handle_suggestions_key(key),
        }
    }

    /// Returns true if the key was consumed regardless of focus
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // A notification blocks everything else until acknowledged
        if self.controller.notifications.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.controller.notifications.dismiss();
            }
            return true;
        }

        false
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                self.controller.on_submit();
            }
            KeyCode::Esc => {
                if !self.controller.dismiss_error() {
                    self.should_quit = true;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.focus_suggestions(),
            // Newline shortcuts; the search box is a single line
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {}
            _ => {
                self.textarea.input(key);
                if self.input_text() != self.controller.query() {
                    let text = self.input_text().to_string();
                    self.controller.on_input(&text);
                }
            }
        }
    }

    fn handle_suggestions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => match self.list_state.selected() {
                Some(0) | None => self.focus = Focus::InputField,
                Some(index) => self.list_state.select(Some(index - 1)),
            },
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.controller.suggestions().len().saturating_sub(1);
                let next = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
                self.list_state.select(Some(next));
            }
            KeyCode::Enter => {
                if let Some(word) = self.selected_suggestion().map(str::to_string) {
                    self.select_suggestion(&word);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(word) = self.selected_suggestion().map(str::to_string) {
                    self.controller.on_delete_click(&word);
                }
            }
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => self.focus = Focus::InputField,
            // Typing anywhere goes back to the search box
            KeyCode::Char(_) | KeyCode::Backspace => {
                self.focus = Focus::InputField;
                self.handle_input_field_key(key);
            }
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left)
            || self.controller.notifications.is_visible()
        {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);

        if self.input_area.is_some_and(|area| area.contains(position)) {
            self.focus = Focus::InputField;
            return;
        }

        let Some(area) = self.list_area.filter(|area| area.contains(position)) else {
            return;
        };

        let index = self.list_state.offset() + usize::from(mouse.row - area.y);
        let Some(word) = self.controller.suggestions().get(index).cloned() else {
            return;
        };

        // Rows always end with the label once the list is wider than it
        let label_width = DELETE_LABEL.len() as u16;
        let on_label =
            area.width > label_width && mouse.column >= area.x + area.width - label_width;
        if on_label {
            self.list_state.select(Some(index));
            self.controller.on_delete_click(&word);
        } else {
            self.focus = Focus::Suggestions;
            self.list_state.select(Some(index));
            self.select_suggestion(&word);
        }
    }

    fn focus_suggestions(&mut self) {
        if self.controller.suggestions().is_empty() {
            return;
        }
        self.focus = Focus::Suggestions;
        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    fn select_suggestion(&mut self, word: &str) {
        self.controller.on_suggestion_click(word);
        self.set_input_text(word);
    }
}
