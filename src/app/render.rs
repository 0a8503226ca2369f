use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::{App, Focus};
use crate::config::ConsistencyMode;
use crate::notification::render_notification;

pub(super) const DELETE_LABEL: &str = "[delete]";
pub const LOADING_TEXT: &str = "Loading...";
pub const ENRICHMENT_TITLE: &str = " Related Information ";

const INPUT_HINT: &str = "Enter add · Tab suggestions · Esc quit · Ctrl+C quit";
const LIST_HINT: &str = "Enter select · d delete · Esc back to search";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [header_area, input_area, status_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header_area);
        self.render_input(frame, input_area);
        self.render_status(frame, status_area);

        if self.controller.enrichment().is_empty() {
            self.render_suggestions(frame, body_area);
        } else {
            let [list_area, info_area] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(body_area);
            self.render_suggestions(frame, list_area);
            self.render_enrichment(frame, info_area);
        }

        let hint = match self.focus {
            Focus::InputField => INPUT_HINT,
            Focus::Suggestions => LIST_HINT,
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        render_notification(frame, &self.controller.notifications, frame.area());
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mode = match self.controller.mode() {
            ConsistencyMode::Sequenced => "sequenced",
            ConsistencyMode::LastWriteWins => "last-write-wins",
        };
        let line = Line::from(vec![
            Span::styled(
                " TrieMaster ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ({})", self.server_label(), mode),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::InputField;
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search for a word ")
                .border_style(Style::default().fg(border_color)),
        );
        // Hide the cursor while the list has focus
        let cursor_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);

        frame.render_widget(&self.textarea, area);
        self.input_area = Some(area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if self.controller.is_loading() {
            spans.push(Span::styled(
                format!(" {LOADING_TEXT} "),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(error) = self.controller.error() {
            spans.push(Span::styled(
                format!(" {error} "),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                " Esc to dismiss",
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_suggestions(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Suggestions;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Suggestions ({}) ", self.controller.suggestions().len()))
            .border_style(Style::default().fg(if focused {
                Color::Cyan
            } else {
                Color::DarkGray
            }));

        let inner = block.inner(area);
        self.list_area = Some(inner);

        if self.controller.suggestions().is_empty() {
            let text = if self.controller.query().is_empty() {
                ""
            } else {
                "No suggestions"
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }

        let width = usize::from(inner.width);
        let items: Vec<ListItem> = self
            .controller
            .suggestions()
            .iter()
            .map(|word| ListItem::new(suggestion_row(word, width)))
            .collect();

        let highlight = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_enrichment(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(ENRICHMENT_TITLE)
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(
            Paragraph::new(self.controller.enrichment())
                .block(block)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

const ELLIPSIS: char = '…';

/// One list row: the word on the left, the delete label flush right
///
/// Words too long for the row are cut with an ellipsis so the label is
/// always drawn where the mouse handler expects it.
pub(super) fn suggestion_row(word: &str, width: usize) -> Line<'static> {
    let label_width = DELETE_LABEL.width();
    let shown = fit_width(word, width.saturating_sub(label_width + 1));
    let padding = width
        .saturating_sub(shown.width() + label_width)
        .max(1);

    Line::from(vec![
        Span::raw(shown),
        Span::raw(" ".repeat(padding)),
        Span::styled(DELETE_LABEL, Style::default().fg(Color::Red)),
    ])
}

/// `text` cut to at most `max` columns, ending in an ellipsis when shortened
fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    if max > 0 {
        out.push(ELLIPSIS);
    }
    out
}
