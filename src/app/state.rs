use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, ListState},
};
use tui_textarea::{CursorMove, TextArea};

use crate::controller::Controller;

/// Which component receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    InputField,
    Suggestions,
}

pub struct App {
    pub textarea: TextArea<'static>,
    pub controller: Controller,
    pub focus: Focus,
    pub list_state: ListState,
    /// Inner area of the suggestion list from the last frame, for mouse hits
    pub list_area: Option<Rect>,
    /// Search box area from the last frame
    pub input_area: Option<Rect>,
    pub should_quit: bool,
    server_label: String,
}

impl App {
    pub fn new(controller: Controller, server_label: &str) -> Self {
        Self {
            textarea: new_textarea(),
            controller,
            focus: Focus::default(),
            list_state: ListState::default(),
            list_area: None,
            input_area: None,
            should_quit: false,
            server_label: server_label.to_string(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn server_label(&self) -> &str {
        &self.server_label
    }

    /// Text currently in the search box
    pub fn input_text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Apply finished requests and bring the view in line with the controller
    pub fn tick(&mut self) {
        self.controller.poll_responses();
        self.sync_from_controller();
    }

    /// Mirror the controller's query into the search box and keep the list
    /// selection within bounds
    pub fn sync_from_controller(&mut self) {
        if self.input_text() != self.controller.query() {
            let query = self.controller.query().to_string();
            self.set_input_text(&query);
        }

        let len = self.controller.suggestions().len();
        if len == 0 {
            self.list_state.select(None);
            if self.focus == Focus::Suggestions {
                self.focus = Focus::InputField;
            }
        } else if let Some(index) = self.list_state.selected()
            && index >= len
        {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Replace the search box content, leaving the cursor at the end
    pub fn set_input_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    pub fn selected_suggestion(&self) -> Option<&str> {
        let index = self.list_state.selected()?;
        self.controller.suggestions().get(index).map(String::as_str)
    }
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search for a word ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    textarea.set_cursor_line_style(Style::default());

    textarea
}
