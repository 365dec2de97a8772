//! Header widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::theme;

/// Render the application header
pub fn render_header(frame: &mut Frame, area: Rect) {
    let accent = theme::accent();

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled("\u{25CF}", Style::default().fg(accent)), // Accent dot
        Span::styled(" dot", Style::default().fg(theme::text()).bold()),
        Span::styled("spin ", Style::default().fg(accent).bold()),
        Span::styled(
            format!("v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(theme::accent_secondary()),
        ),
        Span::styled("\u{2502} ", Style::default().fg(theme::subtle())),
        Span::styled("Rotating Dots Indicator", Style::default().fg(theme::subtle()).italic()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .border_type(BorderType::Rounded),
    );

    frame.render_widget(title, area);
}
