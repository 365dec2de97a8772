//! Screen layout for the demo

use dotspin_core::{LifecycleState, View};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;
use crate::theme;
use crate::widgets::{render_footer, render_header, render_status_bar, IndicatorWidget};

const HINTS: &[(&str, &str)] = &[
    ("a", "Attach/Detach"),
    ("v", "Show/Hide"),
    ("c", "Color"),
    ("t", "Theme"),
    ("q", "Quit"),
];

/// Render the whole demo screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_body(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], &app.indicator, app.color_label());
    render_footer(frame, chunks[3], HINTS);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::border()))
        .title(Span::styled(" Indicator ", Style::default().fg(theme::accent())));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let placeholder = match app.indicator.lifecycle_state() {
        LifecycleState::AttachedVisible => None,
        LifecycleState::AttachedHidden => Some(format!(
            "Hidden ({}), press [v] to show",
            app.indicator.visibility()
        )),
        LifecycleState::Detached => Some("Detached, press [a] to attach".to_string()),
    };

    match placeholder {
        None => frame.render_widget(IndicatorWidget::new(&app.indicator), inner),
        Some(message) => {
            let [row] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(inner);
            let text = Paragraph::new(Span::styled(message, Style::default().fg(theme::subtle())))
                .alignment(Alignment::Center);
            frame.render_widget(text, row);
        }
    }
}
