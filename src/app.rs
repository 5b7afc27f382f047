use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::names::selector::{self, GenerateError};
use crate::names::{Gender, NameInfo, NameTable};
use crate::theme::Theme;

/// Form control that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FamilyName,
    Gender,
    Generate,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::FamilyName => Focus::Gender,
            Focus::Gender => Focus::Generate,
            Focus::Generate => Focus::FamilyName,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::FamilyName => Focus::Generate,
            Focus::Gender => Focus::FamilyName,
            Focus::Generate => Focus::Gender,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// Transient warning shown above the results
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub raised_at: Instant,
    pub repeats: u32, // Same warning raised again while still visible
}

pub struct App<R: Rng = ThreadRng> {
    pub focus: Focus,
    pub popup: Popup,

    // Form state
    pub gender: Gender,
    pub last_name: String,

    // Results grid (0..=3 cards)
    pub generated_names: Vec<NameInfo>,

    pub toast: Option<Toast>,
    pub theme: Theme,

    table: NameTable,
    toast_duration: Duration,
    desktop_notifications: bool,
    rng: R,
}

impl App<ThreadRng> {
    pub fn new(config: &AppConfig, table: NameTable) -> Self {
        Self::with_rng(config, table, rand::thread_rng())
    }
}

impl<R: Rng> App<R> {
    pub fn with_rng(config: &AppConfig, table: NameTable, rng: R) -> Self {
        Self {
            focus: Focus::FamilyName,
            popup: Popup::None,

            gender: config.default_gender,
            last_name: String::new(),

            generated_names: Vec::new(),

            toast: None,
            theme: Theme::from_config(&config.theme),

            table,
            toast_duration: config.toast_duration(),
            desktop_notifications: config.desktop_notifications,
            rng,
        }
    }

    /// Whether printable keys currently go into the family name field
    pub fn accepts_text(&self) -> bool {
        self.popup == Popup::None && self.focus == Focus::FamilyName
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle popups first
        if self.popup != Popup::None {
            self.handle_popup_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('r') {
                self.generate();
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::F(1) => self.popup = Popup::Help,
            KeyCode::Esc => self.toast = None,
            _ => match self.focus {
                Focus::FamilyName => self.handle_name_key(key),
                Focus::Gender => self.handle_gender_key(key),
                Focus::Generate => self.handle_button_key(key),
            },
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')
        ) {
            self.popup = Popup::None;
        }
    }

    fn handle_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.generate(),
            KeyCode::Backspace => {
                self.last_name.pop();
            }
            KeyCode::Char(c) => self.last_name.push(c),
            _ => {}
        }
    }

    fn handle_gender_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Char(' ') => {
                self.gender = self.gender.toggle();
            }
            KeyCode::Char('m') => self.gender = Gender::Male,
            KeyCode::Char('f') => self.gender = Gender::Female,
            KeyCode::Char('?') => self.popup = Popup::Help,
            KeyCode::Enter => self.generate(),
            _ => {}
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.generate(),
            KeyCode::Char('?') => self.popup = Popup::Help,
            _ => {}
        }
    }

    /// Replace the result set, or raise the warning and keep prior results
    pub fn generate(&mut self) {
        match selector::generate(&self.table, self.gender, &self.last_name, &mut self.rng) {
            Ok(names) => {
                self.generated_names = names;
                self.toast = None;
            }
            Err(e) => {
                tracing::warn!("Generate rejected: {}", e);
                self.raise_warning(e);
            }
        }
    }

    fn raise_warning(&mut self, error: GenerateError) {
        let title = error.to_string();
        let repeats = match &self.toast {
            Some(toast) if toast.title == title => toast.repeats + 1,
            _ => 1,
        };

        self.toast = Some(Toast {
            title,
            description: error.description().to_string(),
            raised_at: Instant::now(),
            repeats,
        });

        if self.desktop_notifications {
            if let Err(e) = crate::notify(&error.to_string(), error.description()) {
                tracing::warn!("Desktop notification failed: {}", e);
            }
        }
    }

    /// Periodic housekeeping from the event loop
    pub fn tick(&mut self) {
        // Clear the toast once it has been visible long enough
        if let Some(toast) = &self.toast {
            if toast.raised_at.elapsed() >= self.toast_duration {
                self.toast = None;
            }
        }
    }
}
