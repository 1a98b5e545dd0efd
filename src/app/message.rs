// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::screens::{admin, home, registration, sponsors};
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    SwitchScreen(Screen),
    Home(home::Message),
    Sponsors(sponsors::Message),
    Registration(registration::Message),
    Admin(admin::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss and UI animations.
    Tick(Instant),
    /// Outcome of resending the confirmation e-mail.
    EmailSent(Result<(), registration::Failure>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `MEDCONF_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MEDCONF_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
