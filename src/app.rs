//! Application state management for City Weather
//!
//! All screen state lives in [`App`] and changes only through
//! [`App::dispatch`]. Key presses are mapped to [`Action`]s, and finished
//! fetches come back as [`Action::FetchCompleted`]. Starting a fetch is
//! returned to the caller as an [`Effect`] so the state itself never does I/O.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error, info, warn};

use crate::accent::{Accent, AccentSource, FixedAccent, RandomAccent, NEUTRAL};
use crate::cli::StartupConfig;
use crate::confirm::{Choice, Confirmation, PendingAction, Resolution};
use crate::data::{CurrentWeather, FetchError};
use crate::fetch::{FetchOutcome, FetchRequest};
use crate::history::History;
use crate::input::InputField;

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The city text field
    Input,
    /// The search history list
    History,
}

/// A modal message the user has to dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Shown when the API does not know the city, or the query is blank
    pub fn invalid_city() -> Self {
        Self {
            title: "Invalid City Name".to_string(),
            message: "Please enter a valid city name!".to_string(),
        }
    }

    /// Shown when the request or the response failed
    pub fn network(error: &FetchError) -> Self {
        Self {
            title: "Network Error".to_string(),
            message: format!("Could not fetch the weather: {}", error),
        }
    }
}

/// Everything that can change the application state
#[derive(Debug)]
pub enum Action {
    // Input field
    InsertChar(char),
    Backspace,
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Search for the current input
    Submit,

    // Focus and history list
    ToggleFocus,
    FocusInput,
    SelectPrevious,
    SelectNext,
    /// Search again for the selected history entry
    Resubmit,
    /// Ask to delete the selected history entry
    RequestDelete,
    /// Ask to clear the whole history
    RequestClear,

    // Confirmation prompt
    ToggleChoice,
    ResolveConfirmation(Choice),
    ActivateChoice,

    DismissAlert,
    ToggleHelp,
    Quit,

    /// A background fetch finished
    FetchCompleted(FetchOutcome),
}

/// Work the event loop has to perform on behalf of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(FetchRequest),
}

/// Main application struct holding the whole screen state
pub struct App {
    /// City text field
    pub input: InputField,
    /// Most recent successful result, replaced on every success
    pub current: Option<CurrentWeather>,
    /// Session search history
    pub history: History,
    /// Accent color of the screen
    pub accent: Accent,
    /// Part of the screen receiving keys
    pub focus: Focus,
    /// Selected row in the history list
    pub selected: usize,
    /// Pending delete/clear prompt
    pub confirmation: Option<Confirmation>,
    /// Pending alert
    pub alert: Option<Alert>,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Number of fetches started but not yet completed
    pub in_flight: usize,
    /// Local time of the last successful fetch
    pub last_updated: Option<DateTime<Local>>,
    next_request_id: u64,
    accent_source: Box<dyn AccentSource>,
}

impl App {
    /// Creates a new App drawing accents from `accent_source`
    pub fn new(accent_source: Box<dyn AccentSource>) -> Self {
        Self {
            input: InputField::new(),
            current: None,
            history: History::new(),
            accent: NEUTRAL,
            focus: Focus::Input,
            selected: 0,
            confirmation: None,
            alert: None,
            show_help: false,
            should_quit: false,
            in_flight: 0,
            last_updated: None,
            next_request_id: 1,
            accent_source,
        }
    }

    /// Creates a new App instance with the given startup configuration.
    pub fn with_startup_config(config: &StartupConfig) -> Self {
        if config.accent_enabled {
            Self::new(Box::new(RandomAccent::new()))
        } else {
            Self::new(Box::new(FixedAccent(NEUTRAL)))
        }
    }

    /// True while at least one fetch is pending
    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `Ctrl+C`: Quit from anywhere
    /// - Alert: `Enter`/`Esc` dismiss
    /// - Prompt: `Left`/`Right`/`Tab` switch button, `Enter` activates,
    ///   `y` confirms, `n`/`Esc` cancels
    /// - Input: type to edit, `Enter` searches, `Tab`/`Down` focus history,
    ///   `Esc` quits
    /// - History: `Up`/`k`, `Down`/`j` move, `Enter` searches again,
    ///   `x`/`Delete` deletes, `c` clears, `?` help, `Tab`/`Esc` back to input,
    ///   `q` quits
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Option<Effect> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return self.dispatch(Action::Quit);
        }

        let action = self.action_for_key(key_event)?;
        self.dispatch(action)
    }

    /// Maps a key press to an action given the current modal state and focus
    fn action_for_key(&self, key_event: KeyEvent) -> Option<Action> {
        // Alerts sit on top of everything else
        if self.alert.is_some() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc => Some(Action::DismissAlert),
                _ => None,
            };
        }

        if self.confirmation.is_some() {
            return match key_event.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    Some(Action::ToggleChoice)
                }
                KeyCode::Enter => Some(Action::ActivateChoice),
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    Some(Action::ResolveConfirmation(Choice::Confirm))
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(Action::ResolveConfirmation(Choice::Cancel))
                }
                _ => None,
            };
        }

        if self.show_help {
            return match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::ToggleHelp),
                _ => None,
            };
        }

        match self.focus {
            Focus::Input => match key_event.code {
                KeyCode::Enter => Some(Action::Submit),
                KeyCode::Esc => Some(Action::Quit),
                KeyCode::Tab | KeyCode::Down => Some(Action::ToggleFocus),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Delete => Some(Action::DeleteChar),
                KeyCode::Left => Some(Action::CursorLeft),
                KeyCode::Right => Some(Action::CursorRight),
                KeyCode::Home => Some(Action::CursorHome),
                KeyCode::End => Some(Action::CursorEnd),
                KeyCode::F(1) => Some(Action::ToggleHelp),
                KeyCode::Char(c)
                    if !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(Action::InsertChar(c))
                }
                _ => None,
            },
            Focus::History => match key_event.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => Some(Action::FocusInput),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
                KeyCode::Enter => Some(Action::Resubmit),
                KeyCode::Char('x') | KeyCode::Delete => Some(Action::RequestDelete),
                KeyCode::Char('c') => Some(Action::RequestClear),
                KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
                _ => None,
            },
        }
    }

    /// Applies an action to the state, returning any work to start
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::InsertChar(c) => self.input.insert(c),
            Action::Backspace => self.input.backspace(),
            Action::DeleteChar => self.input.delete(),
            Action::CursorLeft => self.input.move_left(),
            Action::CursorRight => self.input.move_right(),
            Action::CursorHome => self.input.move_home(),
            Action::CursorEnd => self.input.move_end(),
            Action::Submit => {
                let query = self.input.value().to_string();
                return self.submit(&query);
            }
            Action::ToggleFocus => self.toggle_focus(),
            Action::FocusInput => self.focus = Focus::Input,
            Action::SelectPrevious => self.move_selection_up(),
            Action::SelectNext => self.move_selection_down(),
            Action::Resubmit => {
                let query = self.history.get(self.selected)?.name.clone();
                return self.submit(&query);
            }
            Action::RequestDelete => {
                if self.selected < self.history.len() {
                    self.confirmation = Some(Confirmation::delete(self.selected));
                }
            }
            Action::RequestClear => {
                if !self.history.is_empty() {
                    self.confirmation = Some(Confirmation::clear());
                }
            }
            Action::ToggleChoice => {
                if let Some(confirmation) = self.confirmation.as_mut() {
                    confirmation.toggle();
                }
            }
            Action::ResolveConfirmation(choice) => {
                if let Some(confirmation) = self.confirmation.take() {
                    self.apply_resolution(confirmation.resolve(choice));
                }
            }
            Action::ActivateChoice => {
                if let Some(confirmation) = self.confirmation.take() {
                    self.apply_resolution(confirmation.activate());
                }
            }
            Action::DismissAlert => self.alert = None,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Quit => self.should_quit = true,
            Action::FetchCompleted(outcome) => self.apply_fetch_outcome(outcome),
        }
        None
    }

    /// Starts a search for `query`, or raises the invalid-city alert if it is blank.
    ///
    /// Manual searches and resubmits both go through here.
    fn submit(&mut self, query: &str) -> Option<Effect> {
        let query = query.trim();
        if query.is_empty() {
            debug!("blank query rejected");
            self.alert = Some(Alert::invalid_city());
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight += 1;
        info!(request_id, query, in_flight = self.in_flight, "search submitted");

        Some(Effect::Fetch(FetchRequest {
            request_id,
            query: query.to_string(),
        }))
    }

    /// Applies a finished fetch.
    ///
    /// Success replaces the current result, clears the input, appends to the
    /// history and picks a new accent. Failures raise an alert and change
    /// nothing else.
    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let FetchOutcome {
            request_id,
            query,
            result,
        } = outcome;

        match result {
            Ok(weather) => {
                info!(request_id, query = %query, result = %weather.summary(), "search succeeded");
                self.history.append(weather.to_record());
                self.current = Some(weather);
                self.input.clear();
                self.accent = self.accent_source.next_accent();
                self.last_updated = Some(Local::now());
            }
            Err(FetchError::InvalidCity { code, message }) => {
                warn!(request_id, query = %query, ?code, %message, "city not found");
                self.alert = Some(Alert::invalid_city());
            }
            Err(err) => {
                error!(request_id, query = %query, error = %err, "weather fetch failed");
                self.alert = Some(Alert::network(&err));
            }
        }
    }

    /// Runs the guarded action if the prompt was confirmed
    fn apply_resolution(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Canceled => debug!("confirmation canceled"),
            Resolution::Confirmed(PendingAction::Delete { index }) => {
                match self.history.delete_at(index) {
                    Some(record) => info!(index, name = %record.name, "history entry deleted"),
                    None => debug!(index, "delete ignored, index out of bounds"),
                }
                self.clamp_selection();
            }
            Resolution::Confirmed(PendingAction::Clear) => {
                let removed = self.history.clear();
                info!(removed, "history cleared");
                self.clamp_selection();
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.history.is_empty() => Focus::History,
            _ => Focus::Input,
        };
        self.clamp_selection();
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.history.len();
        if count == 0 {
            return;
        }
        if self.selected == 0 {
            self.selected = count - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.history.len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1) % count;
    }

    /// Keeps the selection on a valid row; an empty history hands focus back to the input
    fn clamp_selection(&mut self) {
        if self.history.is_empty() {
            self.selected = 0;
            self.focus = Focus::Input;
        } else if self.selected >= self.history.len() {
            self.selected = self.history.len() - 1;
        }
    }
}
