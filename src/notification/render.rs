use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::state::{NotificationKind, NotificationState};

const POPUP_WIDTH: u16 = 50;
const HINT: &str = "Press Enter to continue";

/// Render the visible notification, if any, centered over `area`
pub fn render_notification(frame: &mut Frame, state: &NotificationState, area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let (title, color) = match notification.kind {
        NotificationKind::Success => (" Done ", Color::Green),
        NotificationKind::Failure => (" Error ", Color::Red),
    };

    let width = POPUP_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    // Message lines after wrapping, a blank line, the hint, and two borders
    let message_lines = notification.message.chars().count().div_ceil(inner_width).max(1) as u16;
    let height = (message_lines + 4).min(area.height);

    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let mut hint = HINT.to_string();
    if state.pending_count() > 1 {
        hint.push_str(&format!(" ({} more)", state.pending_count() - 1));
    }

    let text = vec![
        Line::from(notification.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
