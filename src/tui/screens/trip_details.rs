//! Trip details screen, shown after a trip is created.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::TripId;
use crate::route::Route;
use crate::tui::action::{Action, ScreenState};

/// State for the trip details screen.
#[derive(Debug, Clone, Default)]
pub struct TripDetailsState {
    trip_id: Option<TripId>,
}

impl TripDetailsState {
    /// Creates an empty state. Call [`load`](Self::load) before showing it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the screen at a trip.
    pub fn load(&mut self, trip_id: TripId) {
        self.trip_id = Some(trip_id);
    }

    pub fn trip_id(&self) -> Option<&TripId> {
        self.trip_id.as_ref()
    }
}

impl ScreenState for TripDetailsState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('n') => Action::Navigate(Route::CreateTrip),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the trip details screen.
#[mutants::skip]
pub fn draw_trip_details(state: &TripDetailsState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Trip ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    match state.trip_id() {
        Some(id) => {
            lines.push(Line::styled(
                "Trip created!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::from(format!("Trip id: {id}")));
            lines.push(Line::from(format!(
                "Route: {}",
                Route::TripDetails(id.clone()).path()
            )));
        }
        None => lines.push(Line::from("No trip loaded")),
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "n: plan another trip  q/Esc: quit",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    let [centered] = Layout::vertical([Constraint::Min(0)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(paragraph, centered);
}
