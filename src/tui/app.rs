use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::api::TripApi;
use crate::route::Route;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{CreateTripState, TripDetailsState, draw_create_trip, draw_trip_details};
use super::widgets::{StatusBarContext, draw_status_bar};

/// Top-level application state.
pub struct App<A> {
    route: Route,
    api: A,
    api_url: String,
    runtime: Runtime,
    create_trip: CreateTripState,
    trip_details: TripDetailsState,
    should_quit: bool,
}

impl<A: TripApi> App<A> {
    /// Creates a new `App` on [`Route::CreateTrip`].
    ///
    /// `api_url` is only displayed; requests go wherever `api` sends them.
    pub fn new(api: A, api_url: impl Into<String>) -> Result<Self, AppError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            route: Route::CreateTrip,
            api,
            api_url: api_url.into(),
            runtime,
            create_trip: CreateTripState::new(),
            trip_details: TripDetailsState::new(),
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current route's screen above a status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [body, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.route {
            Route::CreateTrip => draw_create_trip(&self.create_trip, frame, body),
            Route::TripDetails(_) => draw_trip_details(&self.trip_details, frame, body),
        }
        draw_status_bar(&self.status_context(), frame, status);
    }

    /// Builds the status bar contents for the current route.
    fn status_context(&self) -> StatusBarContext {
        let guest_count = match self.route {
            Route::CreateTrip => Some(self.create_trip.controller().guests().len()),
            Route::TripDetails(_) => None,
        };
        StatusBarContext {
            path: self.route.path(),
            api_url: self.api_url.clone(),
            guest_count,
        }
    }

    /// Handles a key event: Ctrl+C first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let action = self.active_screen().handle_key(key);
        self.apply(action);
    }

    fn active_screen(&mut self) -> &mut dyn ScreenState {
        match self.route {
            Route::CreateTrip => &mut self.create_trip,
            Route::TripDetails(_) => &mut self.trip_details,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => self.navigate(route),
            Action::SubmitTrip => self.submit_trip(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Switches routes. Entering the create-trip page always starts a fresh draft.
    fn navigate(&mut self, route: Route) {
        debug!(from = %self.route.path(), to = %route.path(), "navigate");
        match &route {
            Route::CreateTrip => self.create_trip = CreateTripState::new(),
            Route::TripDetails(id) => self.trip_details.load(id.clone()),
        }
        self.route = route;
    }

    /// Runs the submit to completion; the UI waits for the response.
    fn submit_trip(&mut self) {
        let result = self
            .runtime
            .block_on(self.create_trip.controller_mut().submit(&self.api));
        match result {
            Ok(route) => {
                info!(path = %route.path(), "trip ready");
                self.navigate(route);
            }
            Err(e) => self.create_trip.submit_failed(&e),
        }
    }

    /// Returns the current route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the create-trip screen state.
    pub fn create_trip(&self) -> &CreateTripState {
        &self.create_trip
    }

    /// Returns the trip details screen state.
    pub fn trip_details(&self) -> &TripDetailsState {
        &self.trip_details
    }
}
