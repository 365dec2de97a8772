//! Status bar widget showing the indicator's lifecycle and animation state

use dotspin_core::{LifecycleState, LoadingIndicator};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

/// Render a status bar for the indicator
///
/// `color_label` names the color resource currently applied, if any.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    indicator: &LoadingIndicator,
    color_label: Option<&str>,
) {
    let subtle = theme::subtle();
    let text = theme::text();

    let state = indicator.lifecycle_state();
    let state_color = theme::state_color(state);
    let icon = match state {
        LifecycleState::AttachedVisible => "\u{25B6}", // Play
        LifecycleState::AttachedHidden => "\u{23F8}",  // Pause
        LifecycleState::Detached => "\u{25A0}",        // Stop
    };

    let frame_text = if indicator.is_animating() {
        format!(
            "{}/7 ({:>3.0}\u{00B0})",
            indicator.animation_value(),
            indicator.rotation_degrees()
        )
    } else {
        "idle".to_string()
    };

    let color_text = match color_label {
        Some(label) => format!("{} {}", label, indicator.color()),
        None => indicator.color().to_string(),
    };

    let separator = || Span::styled(" \u{2502} ", Style::default().fg(subtle));

    let status_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(state_color)),
        Span::styled(
            state.to_string(),
            Style::default().fg(state_color),
        ),
        separator(),
        Span::styled("Frame: ", Style::default().fg(subtle)),
        Span::styled(frame_text, Style::default().fg(text)),
        separator(),
        Span::styled("Color: ", Style::default().fg(subtle)),
        Span::styled(color_text, Style::default().fg(theme::to_tui_color(indicator.color()))),
        separator(),
        Span::styled("Size: ", Style::default().fg(subtle)),
        Span::styled(format!("{}px", indicator.size()), Style::default().fg(text)),
        separator(),
        Span::styled("Period: ", Style::default().fg(subtle)),
        Span::styled(
            format!("{}ms", indicator.duration().as_millis()),
            Style::default().fg(text),
        ),
    ]);

    let status = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme::border())),
        );

    frame.render_widget(status, area);
}
