//! Trip creation screen: destination and dates, guest invites, confirmation.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::controller::{CreateTripController, SubmitError, Visibility};
use crate::model::{DateRange, DraftTrip, parse_date};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{FIELD_HEIGHT, Form, FormField, draw_form};
use crate::tui::widgets::modal::{draw_modal, modal_area};

/// Trip form field index for the destination.
const DESTINATION: usize = 0;
/// Trip form field index for the first day of the trip.
const START_DATE: usize = 1;
/// Trip form field index for the last day of the trip.
const END_DATE: usize = 2;

/// Owner form field index for the organizer's name.
const OWNER_NAME: usize = 0;
/// Owner form field index for the organizer's e-mail.
const OWNER_EMAIL: usize = 1;

/// The guest modal's single input field.
const GUEST_EMAIL: usize = 0;

/// Length of a fully typed `YYYY-MM-DD` date.
const DATE_INPUT_LEN: usize = 10;

/// State for the trip creation screen.
#[derive(Debug, Clone)]
pub struct CreateTripState {
    controller: CreateTripController,
    trip_form: Form,
    guest_input: Form,
    owner_form: Form,
    /// Highlighted row in the guest list, or `None` if the list is empty.
    selected_guest: Option<usize>,
    /// Error from the last submit attempt.
    general_error: Option<String>,
}

impl Default for CreateTripState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenState for CreateTripState {
    /// The topmost visible panel receives the key.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let visibility = self.controller.visibility();
        if visibility.confirm_trip_modal {
            self.handle_confirm_key(key)
        } else if visibility.guests_modal {
            self.handle_guests_modal_key(key)
        } else if visibility.guests_input {
            self.handle_invite_step_key(key)
        } else {
            self.handle_destination_step_key(key)
        }
    }
}

impl CreateTripState {
    /// Creates the screen with an empty draft.
    pub fn new() -> Self {
        Self {
            controller: CreateTripController::new(),
            trip_form: Form::new(vec![
                FormField::new("Where are you going?"),
                FormField::new("Start date").with_hint("YYYY-MM-DD"),
                FormField::new("End date").with_hint("YYYY-MM-DD"),
            ]),
            guest_input: Form::new(vec![
                FormField::new("Guest e-mail").with_hint("name@example.com"),
            ]),
            owner_form: Form::new(vec![
                FormField::new("Your full name"),
                FormField::new("Your personal e-mail"),
            ]),
            selected_guest: None,
            general_error: None,
        }
    }

    pub fn controller(&self) -> &CreateTripController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut CreateTripController {
        &mut self.controller
    }

    pub fn trip_form(&self) -> &Form {
        &self.trip_form
    }

    pub fn guest_input(&self) -> &Form {
        &self.guest_input
    }

    pub fn owner_form(&self) -> &Form {
        &self.owner_form
    }

    pub fn selected_guest(&self) -> Option<usize> {
        self.selected_guest
    }

    /// Returns the error from the last submit attempt, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Records a failed submit so the confirm modal can show it.
    pub fn submit_failed(&mut self, err: &SubmitError) {
        let message = if err.is_retryable() {
            format!("{err} (press Enter to retry)")
        } else {
            err.to_string()
        };
        self.general_error = Some(message);
    }

    fn handle_destination_step_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.trip_form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.trip_form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.trip_form.insert_char(ch);
                self.sync_trip_fields();
                Action::None
            }
            KeyCode::Backspace => {
                self.trip_form.delete_char();
                self.sync_trip_fields();
                Action::None
            }
            KeyCode::Enter => {
                if !self.trip_form.has_errors() {
                    self.controller.open_guests_input();
                }
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_invite_step_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('g') => self.controller.open_guests_modal(),
            KeyCode::Char('c') => {
                self.general_error = None;
                self.controller.open_confirm_trip_modal();
            }
            KeyCode::Char('e') | KeyCode::Esc => self.controller.close_guests_input(),
            _ => {}
        }
        Action::None
    }

    fn handle_guests_modal_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(ch) => self.guest_input.insert_char(ch),
            KeyCode::Backspace => self.guest_input.delete_char(),
            KeyCode::Enter => self.add_guest(),
            KeyCode::Up => self.select_prev_guest(),
            KeyCode::Down => self.select_next_guest(),
            KeyCode::Delete => self.remove_selected_guest(),
            KeyCode::Esc => self.controller.close_guests_modal(),
            _ => {}
        }
        Action::None
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.owner_form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.owner_form.focus_prev();
                Action::None
            }
            KeyCode::Char(ch) => {
                self.owner_form.insert_char(ch);
                self.sync_owner_fields();
                Action::None
            }
            KeyCode::Backspace => {
                self.owner_form.delete_char();
                self.sync_owner_fields();
                Action::None
            }
            KeyCode::Enter => {
                self.general_error = None;
                Action::SubmitTrip
            }
            KeyCode::Esc => {
                self.controller.close_confirm_trip_modal();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Pushes the destination and date inputs into the draft.
    fn sync_trip_fields(&mut self) {
        self.controller
            .set_destination(self.trip_form.non_empty_value(DESTINATION));

        let start = self.parse_date_field(START_DATE);
        let end = self.parse_date_field(END_DATE);
        let range = (start.is_some() || end.is_some()).then_some(DateRange { start, end });
        self.controller.set_date_range(range);
    }

    /// Parses one date input. Partial input is not flagged until it is as
    /// long as a full date.
    fn parse_date_field(&mut self, index: usize) -> Option<NaiveDate> {
        self.trip_form.clear_error(index);
        let raw = self.trip_form.non_empty_value(index)?;
        match parse_date(&raw) {
            Ok(date) => Some(date),
            Err(e) => {
                if raw.chars().count() >= DATE_INPUT_LEN {
                    self.trip_form.set_error(index, e.to_string());
                }
                None
            }
        }
    }

    fn sync_owner_fields(&mut self) {
        self.controller
            .set_owner_name(self.owner_form.non_empty_value(OWNER_NAME));
        self.controller
            .set_owner_email(self.owner_form.non_empty_value(OWNER_EMAIL));
    }

    /// Invites the typed address. The input is cleared only when it was added.
    fn add_guest(&mut self) {
        let email = self.guest_input.value(GUEST_EMAIL).trim().to_string();
        if self.controller.add_guest_email(&email) {
            self.guest_input.clear_value(GUEST_EMAIL);
            self.selected_guest = Some(self.controller.guests().len() - 1);
        }
    }

    fn remove_selected_guest(&mut self) {
        let Some(index) = self.selected_guest else {
            return;
        };
        let Some(email) = self.controller.guests().get(index).map(str::to_string) else {
            return;
        };
        self.controller.remove_guest_email(&email);
        let len = self.controller.guests().len();
        self.selected_guest = (len > 0).then(|| index.min(len - 1));
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev_guest(&mut self) {
        self.selected_guest = match self.selected_guest {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next_guest(&mut self) {
        self.selected_guest = match self.selected_guest {
            Some(i) if i + 1 < self.controller.guests().len() => Some(i + 1),
            None if !self.controller.guests().is_empty() => Some(0),
            other => other,
        };
    }
}

/// One-line description of the draft, with `?` for anything not yet chosen.
fn trip_summary(draft: &DraftTrip) -> String {
    let destination = draft.destination.as_deref().unwrap_or("?");
    let range = draft.date_range.unwrap_or_default();
    let start = range.start.map_or_else(|| "?".to_string(), |d| d.to_string());
    let end = range.end.map_or_else(|| "?".to_string(), |d| d.to_string());
    format!("Trip to {destination}, {start} to {end}")
}

fn guest_count_label(count: usize) -> String {
    match count {
        0 => "Who is coming? No guests invited yet".to_string(),
        1 => "1 guest invited".to_string(),
        n => format!("{n} guests invited"),
    }
}

fn footer_hint(visibility: Visibility) -> &'static str {
    if visibility.confirm_trip_modal {
        "Tab: next field  Enter: confirm trip  Esc: back"
    } else if visibility.guests_modal {
        "Enter: invite  Up/Down: select  Del: remove  Esc: done"
    } else if visibility.guests_input {
        "g: invite guests  c: confirm trip  e: change destination/date"
    } else {
        "Tab/Shift+Tab: next/prev  Enter: continue  Esc: quit"
    }
}

/// Renders the trip creation screen and any open modal.
#[mutants::skip]
pub fn draw_create_trip(state: &CreateTripState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" plann.er ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visibility = state.controller().visibility();

    let [tagline_area, form_area, invite_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(state.trip_form().height()),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let tagline = Paragraph::new(Line::from(
        "Invite your friends and plan your next trip!",
    ))
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(tagline, tagline_area);

    draw_form(state.trip_form(), frame, form_area, !visibility.guests_input);

    if visibility.guests_input {
        let invite = Paragraph::new(Line::from(guest_count_label(
            state.controller().guests().len(),
        )))
        .block(
            Block::default()
                .title("Guests")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(invite, invite_area);
    }

    let footer = Paragraph::new(Line::from(footer_hint(visibility)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if visibility.guests_modal {
        draw_guests_modal(state, frame, area);
    }
    if visibility.confirm_trip_modal {
        draw_confirm_modal(state, frame, area);
    }
}

#[mutants::skip]
fn draw_guests_modal(state: &CreateTripState, frame: &mut Frame, area: Rect) {
    let inner = draw_modal(frame, modal_area(area, 60, 16), "Invite guests");
    let [input_area, list_area] =
        Layout::vertical([Constraint::Length(FIELD_HEIGHT), Constraint::Min(0)]).areas(inner);

    draw_form(state.guest_input(), frame, input_area, true);

    let guests = state.controller().guests();
    if guests.is_empty() {
        let empty = Paragraph::new(Line::from("No guests yet."))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    let items: Vec<ListItem> = guests
        .iter()
        .map(|email| ListItem::new(email.to_string()))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut list_state = ListState::default().with_selected(state.selected_guest());
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

#[mutants::skip]
fn draw_confirm_modal(state: &CreateTripState, frame: &mut Frame, area: Rect) {
    let inner = draw_modal(frame, modal_area(area, 64, 14), "Confirm trip");
    let [summary_area, warning_area, form_area, error_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(state.owner_form().height()),
        Constraint::Length(1),
    ])
    .areas(inner);

    let draft = state.controller().draft();
    frame.render_widget(Paragraph::new(Line::from(trip_summary(draft))), summary_area);

    if draft.date_range.is_some_and(|range| range.is_reversed()) {
        let warning = Paragraph::new(Line::from(Span::styled(
            "Warning: end date is before start date",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(warning, warning_area);
    }

    draw_form(state.owner_form(), frame, form_area, true);

    if let Some(err) = state.general_error() {
        let error = Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }
}
