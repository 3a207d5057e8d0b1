//! Status bar widget: one line with the current route and the API in use.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from `App` so it can be rendered alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Path of the current route, e.g. `/trips/abc123`.
    pub path: String,
    /// Base URL of the trip API.
    pub api_url: String,
    /// Number of guests on the draft, shown only while planning.
    pub guest_count: Option<usize>,
}

/// Renders a one-line status bar.
///
/// Display format: `/  2 guests  api: http://localhost:3333/`
/// with the path in Cyan and the API URL in DarkGray.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let gray = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(ctx.path.clone(), cyan)];
    if let Some(count) = ctx.guest_count {
        let noun = if count == 1 { "guest" } else { "guests" };
        spans.push(Span::styled(format!("  {count} {noun}"), cyan));
    }
    if !ctx.api_url.is_empty() {
        spans.push(Span::styled(format!("  api: {}", ctx.api_url), gray));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
