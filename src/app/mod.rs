// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (screens, localization,
//! configuration, persisted state) and translates messages into side effects
//! like config persistence or backend calls. This file intentionally keeps
//! policy decisions (theme cycling, countdown lifetime, admin persistence)
//! close to the main update loop so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::registration::{self, Record};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::screens::{admin, home, registration as registration_screen, sponsors};
use crate::ui::theming::ThemeMode;
use chrono::{DateTime, Utc};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Home screen state, present only while the home screen is shown. The
    /// countdown and its timer live and die with it.
    home: Option<home::HomeScreen>,
    sponsors: sponsors::SponsorsScreen,
    registration: registration_screen::RegistrationScreen,
    admin: admin::AdminScreen,
    /// The last record a lookup returned, used by the admin resend tool.
    last_record: Option<Record>,
    /// Persisted application state (admin flag, last lookup code).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("home_active", &self.home.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            screen: Screen::Home,
            theme_mode: ThemeMode::System,
            home: None,
            sponsors: sponsors::SponsorsScreen::default(),
            registration: registration_screen::RegistrationScreen::default(),
            admin: admin::AdminScreen::default(),
            last_record: None,
            app_state: persisted_state::AppState::default(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.config = config;

        // Load application state (admin flag, last lookup code)
        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;
        app.seed_from_state();

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        // The app boots on the home screen, countdown running.
        app.home = Some(home::HomeScreen::new(app.event_target()));

        (app, Task::none())
    }

    /// Carries persisted state over into the screens: the registration
    /// input starts out with the last code the user looked up.
    fn seed_from_state(&mut self) {
        if let Some(code) = &self.app_state.last_lookup_code {
            self.registration.prefill(code.clone());
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen_name = self.i18n.tr(self.screen.i18n_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let countdown_sub = match (&self.home, self.screen) {
            (Some(home), Screen::Home) => home.subscription().map(Message::Home),
            _ => Subscription::none(),
        };

        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.is_animating(),
        );

        Subscription::batch([countdown_sub, tick_sub])
    }

    fn is_animating(&self) -> bool {
        let home = self
            .home
            .as_ref()
            .is_some_and(home::HomeScreen::is_animating);
        home || self.registration.is_loading()
    }

    /// The configured event start, falling back to the built-in default when
    /// the configured string does not parse.
    fn event_target(&mut self) -> DateTime<Utc> {
        match self.config.event.starts_at_utc() {
            Ok(target) => target,
            Err(_) => {
                self.notifications.push(notifications::Notification::warning(
                    "notification-event-date-error",
                ));
                self.config.event.starts_at = config::DEFAULT_STARTS_AT.to_string();
                self.config
                    .event
                    .starts_at_utc()
                    .unwrap_or_else(|_| Utc::now())
            }
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;

        // The countdown exists only while the home screen does; navigating
        // away drops the state and with it the timer.
        self.home = if screen == Screen::Home {
            Some(home::HomeScreen::new(self.event_target()))
        } else {
            None
        };
    }

    fn toggle_theme(&mut self) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        };
        self.config.general.theme_mode = self.theme_mode;
        if config::save(&self.config).is_err() {
            self.notifications.push(notifications::Notification::warning(
                "notification-config-save-error",
            ));
        }
    }

    fn save_app_state(&mut self) {
        if let Some(key) = self.app_state.save() {
            self.notifications
                .push(notifications::Notification::warning(&key));
        }
    }

    fn start_lookup(&mut self, code: String) -> Task<Message> {
        let base_url = self.config.backend.api_base_url.clone();
        Task::perform(registration::lookup(base_url, code), |result| {
            Message::Registration(registration_screen::Message::LookupFinished(
                result.map_err(|error| registration_screen::Failure::from_error(&error)),
            ))
        })
    }

    fn resend_confirmation(&mut self) -> Task<Message> {
        let Some(record) = self.last_record.clone() else {
            self.notifications.push(notifications::Notification::info(
                "notification-email-no-record",
            ));
            return Task::none();
        };

        let endpoint = self.config.backend.email_endpoint.clone();
        let request = registration::confirmation_email(&record);
        Task::perform(registration::email::send(endpoint, request), |result| {
            Message::EmailSent(
                result.map_err(|error| registration_screen::Failure::from_error(&error)),
            )
        })
    }

    fn tick(&mut self, now: Instant) {
        self.notifications.tick();
        if let Some(home) = &mut self.home {
            home.animation_tick(now);
        }
        self.registration.animation_tick(now);
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message) {
                navbar::Event::Navigate(screen) => {
                    self.switch_screen(screen);
                    Task::none()
                }
                navbar::Event::ToggleTheme => {
                    self.toggle_theme();
                    Task::none()
                }
            },
            Message::SwitchScreen(screen) => {
                self.switch_screen(screen);
                Task::none()
            }
            Message::Home(message) => {
                if let Some(home) = &mut self.home {
                    home.update(message);
                }
                Task::none()
            }
            Message::Sponsors(message) => {
                self.sponsors.update(message);
                Task::none()
            }
            Message::Registration(message) => match self.registration.update(message) {
                registration_screen::Event::None => Task::none(),
                registration_screen::Event::Lookup(code) => self.start_lookup(code),
                registration_screen::Event::Loaded(record) => {
                    self.app_state.last_lookup_code = Some(record.registration_code.clone());
                    self.last_record = Some(record);
                    self.save_app_state();
                    Task::none()
                }
            },
            Message::Admin(message) => {
                let unlocked = self.app_state.admin_unlocked;
                match self.admin.update(message, unlocked) {
                    admin::Event::None => Task::none(),
                    admin::Event::Unlocked => {
                        self.app_state.admin_unlocked = true;
                        self.save_app_state();
                        Task::none()
                    }
                    admin::Event::LockedOut => {
                        self.app_state.admin_unlocked = false;
                        self.save_app_state();
                        Task::none()
                    }
                    admin::Event::ResendEmail => self.resend_confirmation(),
                }
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                self.tick(now);
                Task::none()
            }
            Message::EmailSent(result) => {
                match result {
                    Ok(()) => self.notifications.push(notifications::Notification::success(
                        "notification-email-sent",
                    )),
                    Err(_) => self.notifications.push(notifications::Notification::error(
                        "notification-email-failed",
                    )),
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            event: &self.config.event,
            home: self.home.as_ref(),
            sponsors: &self.sponsors,
            registration: &self.registration,
            admin: &self.admin,
            admin_unlocked: self.app_state.admin_unlocked,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Points both the config and data directories at temp dirs so tests
    /// never touch the real user profile.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(),
    {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        let config_dir = tempdir().expect("failed to create temp dir");
        let data_dir = tempdir().expect("failed to create temp dir");
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, config_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, data_dir.path());

        test();

        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
    }

    fn sample_record() -> Record {
        Record {
            id: "reg_01".to_string(),
            name: "Ada Byron".to_string(),
            email: "ada@example.org".to_string(),
            registration_code: "MC-2025-0042".to_string(),
            registration_type: "delegate".to_string(),
            registration_status: "confirmed".to_string(),
            payment_status: "paid".to_string(),
            qr_code_url: None,
        }
    }

    #[test]
    fn boot_starts_on_home_with_countdown() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        // Default constructs without home; new() seeds it. Mirror that here.
        let mut app = app;
        app.home = Some(home::HomeScreen::new(app.event_target()));
        assert!(app.home.is_some());
    }

    #[test]
    fn navigating_away_drops_the_home_state() {
        let mut app = App::default();
        app.home = Some(home::HomeScreen::new(app.event_target()));

        app.switch_screen(Screen::Agenda);
        assert_eq!(app.screen, Screen::Agenda);
        assert!(app.home.is_none());

        app.switch_screen(Screen::Home);
        assert!(app.home.is_some());
    }

    #[test]
    fn navigating_to_the_current_screen_is_a_no_op() {
        let mut app = App::default();
        app.home = Some(home::HomeScreen::new(app.event_target()));
        let _ = app.update(Message::SwitchScreen(Screen::Home));
        // The home state survives; the countdown was not reset.
        assert!(app.home.is_some());
    }

    #[test]
    fn theme_toggle_cycles_and_persists() {
        with_temp_dirs(|| {
            let mut app = App::default();
            assert_eq!(app.theme_mode, ThemeMode::System);

            app.toggle_theme();
            assert_eq!(app.theme_mode, ThemeMode::Light);
            app.toggle_theme();
            assert_eq!(app.theme_mode, ThemeMode::Dark);
            app.toggle_theme();
            assert_eq!(app.theme_mode, ThemeMode::System);

            // The last save wrote the mode back to disk.
            let (config, warning) = config::load();
            assert!(warning.is_none());
            assert_eq!(config.general.theme_mode, ThemeMode::System);
        });
    }

    #[test]
    fn loaded_record_is_remembered_and_persisted() {
        with_temp_dirs(|| {
            let mut app = App::default();
            let record = sample_record();

            let _ = app.update(Message::Registration(
                registration_screen::Message::LookupFinished(Ok(record)),
            ));

            assert_eq!(
                app.app_state.last_lookup_code.as_deref(),
                Some("MC-2025-0042")
            );
            assert!(app.last_record.is_some());

            let (state, warning) = persisted_state::AppState::load();
            assert!(warning.is_none());
            assert_eq!(state.last_lookup_code.as_deref(), Some("MC-2025-0042"));
        });
    }

    #[test]
    fn persisted_code_prefills_the_registration_screen() {
        let mut app = App::default();
        app.app_state.last_lookup_code = Some("MC-2025-0042".to_string());
        app.seed_from_state();

        // Submitting without typing looks the remembered code up again.
        let event = app
            .registration
            .update(registration_screen::Message::Submit);
        assert!(matches!(
            event,
            registration_screen::Event::Lookup(code) if code == "MC-2025-0042"
        ));
    }

    #[test]
    fn admin_unlock_persists_across_loads() {
        with_temp_dirs(|| {
            let mut app = App::default();
            let _ = app.update(Message::Admin(admin::Message::UsernameChanged(
                "admin".to_string(),
            )));
            let _ = app.update(Message::Admin(admin::Message::PasswordChanged(
                "pharma2025".to_string(),
            )));
            let _ = app.update(Message::Admin(admin::Message::Submit));

            assert!(app.app_state.admin_unlocked);

            let (state, warning) = persisted_state::AppState::load();
            assert!(warning.is_none());
            assert!(state.admin_unlocked);
        });
    }

    #[test]
    fn resend_without_a_record_only_notifies() {
        let mut app = App::default();
        app.app_state.admin_unlocked = true;
        let _ = app.update(Message::Admin(admin::Message::ResendEmail));
        assert!(app.notifications.has_notifications());
        assert!(app.last_record.is_none());
    }

    #[test]
    fn email_outcome_becomes_a_notification() {
        let mut app = App::default();
        let _ = app.update(Message::EmailSent(Ok(())));
        assert_eq!(app.notifications.visible_count(), 1);

        let failure = registration_screen::Failure {
            key: "error-registration-network",
            reason: None,
        };
        let _ = app.update(Message::EmailSent(Err(failure)));
        assert_eq!(app.notifications.visible_count(), 2);
    }

    #[test]
    fn invalid_event_date_falls_back_with_a_warning() {
        let mut app = App::default();
        app.config.event.starts_at = "not a date".to_string();

        let target = app.event_target();

        assert!(app.notifications.has_notifications());
        // The fallback is the built-in default date.
        let expected = config::DEFAULT_STARTS_AT
            .parse::<DateTime<Utc>>()
            .expect("default parses");
        assert_eq!(target, expected);
        // The config was repaired in memory so later calls are clean.
        assert!(app.config.event.starts_at_utc().is_ok());
    }

    #[test]
    fn tick_advances_notifications() {
        let mut app = App::default();
        app.notifications
            .push(notifications::Notification::success("notification-email-sent"));
        let _ = app.update(Message::Tick(Instant::now()));
        // Freshly pushed, not expired yet.
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn idle_app_requests_no_tick_subscription() {
        let app = App::default();
        assert!(!app.is_animating());
        assert!(!app.notifications.has_notifications());
    }
}
