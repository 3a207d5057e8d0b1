//! Actions returned by screen event handlers.

use crossterm::event::KeyEvent;

use crate::route::Route;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to run side effects and navigate between routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given route.
    Navigate(Route),
    /// Submit the draft trip to the API.
    SubmitTrip,
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
