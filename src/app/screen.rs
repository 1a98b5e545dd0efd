// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Agenda,
    Sponsors,
    Contact,
    Registration,
    Admin,
}

impl Screen {
    /// All screens, in navbar order.
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Agenda,
        Screen::Sponsors,
        Screen::Contact,
        Screen::Registration,
        Screen::Admin,
    ];

    /// Returns the i18n key for the navbar label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Home => "navbar-home",
            Screen::Agenda => "navbar-agenda",
            Screen::Sponsors => "navbar-sponsors",
            Screen::Contact => "navbar-contact",
            Screen::Registration => "navbar-registration",
            Screen::Admin => "navbar-admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_screens_have_distinct_labels() {
        for (i, a) in Screen::ALL.iter().enumerate() {
            for b in &Screen::ALL[i + 1..] {
                assert_ne!(a.i18n_key(), b.i18n_key());
            }
        }
    }
}
