// SPDX-License-Identifier: MPL-2.0
//! Registration screen: look a registration up by its code and show the
//! confirmed record.
//!
//! The actual HTTP call happens at the application level (it owns the
//! backend configuration and the task runtime); this screen only emits a
//! [`Event::Lookup`] and later receives the outcome.

use crate::error::{BackendError, Error};
use crate::i18n::fluent::I18n;
use crate::registration::Record;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{self, card::Hover, card::Variant};
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::Card;
use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element};
use std::f32::consts::TAU;
use std::time::Instant;

/// How far the loading spinner turns per animation frame.
const SPINNER_STEP: f32 = TAU / 60.0;

/// A lookup failure reduced to what the view needs: an i18n key and an
/// optional reason for interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub key: &'static str,
    pub reason: Option<String>,
}

impl Failure {
    /// Maps an application error onto a displayable failure.
    #[must_use]
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Backend(backend) => {
                let reason = match backend {
                    BackendError::Rejected(reason) => Some(reason.clone()),
                    _ => None,
                };
                Self {
                    key: backend.i18n_key(),
                    reason,
                }
            }
            _ => Self {
                key: "error-registration-network",
                reason: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CodeChanged(String),
    Submit,
    LookupFinished(Result<Record, Failure>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Start a backend lookup for this code.
    Lookup(String),
    /// A record arrived; the app may want to remember it.
    Loaded(Record),
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded(Record),
    Failed(Failure),
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationScreen {
    code: String,
    phase: Phase,
    spinner_rotation: f32,
}

impl RegistrationScreen {
    /// Prefills the code input, typically with the last code the user
    /// looked up in a previous session.
    pub fn prefill(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CodeChanged(code) => {
                self.code = code;
                Event::None
            }
            Message::Submit => {
                let code = self.code.trim().to_string();
                if code.is_empty() {
                    self.phase = Phase::Failed(Failure {
                        key: "registration-empty-code",
                        reason: None,
                    });
                    return Event::None;
                }
                self.phase = Phase::Loading;
                Event::Lookup(code)
            }
            Message::LookupFinished(result) => match result {
                Ok(record) => {
                    self.phase = Phase::Loaded(record.clone());
                    Event::Loaded(record)
                }
                Err(failure) => {
                    self.phase = Phase::Failed(failure);
                    Event::None
                }
            },
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// The spinner keeps turning while a lookup is in flight.
    pub fn animation_tick(&mut self, _now: Instant) -> bool {
        if self.is_loading() {
            self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % TAU;
            true
        } else {
            false
        }
    }

    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("registration-code-placeholder"), &self.code)
            .on_input(Message::CodeChanged)
            .on_submit(Message::Submit)
            .padding(spacing::SM)
            .width(sizing::FORM_WIDTH);

        let submit = button(text(i18n.tr("registration-lookup-button")))
            .on_press_maybe((!self.is_loading()).then_some(Message::Submit))
            .style(styles::button::primary)
            .padding([spacing::XS, spacing::MD]);

        let mut body = column![
            text(i18n.tr("registration-title")).size(typography::TITLE_LG),
            row![input, submit]
                .spacing(spacing::SM)
                .align_y(Alignment::Center),
        ]
        .spacing(spacing::LG)
        .padding(spacing::LG);

        body = match &self.phase {
            Phase::Idle => body,
            Phase::Loading => body.push(
                column![
                    AnimatedSpinner::new(palette::PRIMARY_400, self.spinner_rotation)
                        .into_element(),
                    text(i18n.tr("registration-loading")).size(typography::BODY),
                ]
                .spacing(spacing::SM)
                .align_x(Alignment::Center),
            ),
            Phase::Loaded(record) => body.push(success_card(i18n, record)),
            Phase::Failed(failure) => {
                let message = match &failure.reason {
                    Some(reason) => i18n.tr_with_args(failure.key, &[("reason", reason.as_str())]),
                    None => i18n.tr(failure.key),
                };
                body.push(
                    text(message)
                        .size(typography::BODY)
                        .color(palette::ERROR_500),
                )
            }
        };

        body.into()
    }
}

fn success_card<'a>(i18n: &I18n, record: &Record) -> Element<'a, Message> {
    let mut details = column![
        labeled(i18n.tr("registration-name-label"), record.name.clone()),
        labeled(i18n.tr("registration-email-label"), record.email.clone()),
        labeled(
            i18n.tr("registration-code-label"),
            record.registration_code.clone(),
        ),
        labeled(
            i18n.tr("registration-type-label"),
            record.registration_type.clone(),
        ),
        labeled(
            i18n.tr("registration-status-label"),
            record.registration_status.clone(),
        ),
        labeled(
            i18n.tr("registration-payment-label"),
            record.payment_status.clone(),
        ),
    ]
    .spacing(spacing::XS);

    if let Some(url) = &record.qr_code_url {
        details = details.push(labeled(i18n.tr("registration-qr-label"), url.clone()));
    }

    Card::new(details)
        .title(i18n.tr("registration-success-heading"))
        .variant(Variant::Default)
        .hover(Hover::None)
        .width(sizing::FORM_WIDTH)
        .view()
}

fn labeled<'a>(label: String, value: String) -> Element<'a, Message> {
    row![
        text(label).size(typography::BODY_SM),
        text(value).size(typography::BODY),
    ]
    .spacing(spacing::MD)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
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
    fn empty_code_fails_without_a_lookup() {
        let mut screen = RegistrationScreen::default();
        let event = screen.update(Message::Submit);
        assert!(matches!(event, Event::None));
        assert!(matches!(&screen.phase, Phase::Failed(f) if f.key == "registration-empty-code"));
    }

    #[test]
    fn prefilled_code_submits_as_typed() {
        let mut screen = RegistrationScreen::default();
        screen.prefill("MC-2025-0042");
        let event = screen.update(Message::Submit);
        assert!(matches!(event, Event::Lookup(code) if code == "MC-2025-0042"));
    }

    #[test]
    fn submit_trims_and_emits_lookup() {
        let mut screen = RegistrationScreen::default();
        screen.update(Message::CodeChanged("  MC-2025-0042  ".to_string()));
        let event = screen.update(Message::Submit);
        assert!(matches!(event, Event::Lookup(code) if code == "MC-2025-0042"));
        assert!(screen.is_loading());
    }

    #[test]
    fn successful_lookup_reaches_loaded_phase() {
        let mut screen = RegistrationScreen::default();
        screen.update(Message::CodeChanged("MC-2025-0042".to_string()));
        screen.update(Message::Submit);
        let event = screen.update(Message::LookupFinished(Ok(record())));
        assert!(matches!(event, Event::Loaded(_)));
        assert!(matches!(&screen.phase, Phase::Loaded(_)));
    }

    #[test]
    fn failed_lookup_shows_the_failure() {
        let mut screen = RegistrationScreen::default();
        screen.update(Message::CodeChanged("MC-0000".to_string()));
        screen.update(Message::Submit);
        let failure = Failure::from_error(&Error::Backend(BackendError::NotFound));
        screen.update(Message::LookupFinished(Err(failure.clone())));
        assert!(matches!(&screen.phase, Phase::Failed(f) if *f == failure));
        assert!(!screen.is_loading());
    }

    #[test]
    fn failure_mapping_keeps_the_rejection_reason() {
        let error = Error::Backend(BackendError::Rejected("code revoked".to_string()));
        let failure = Failure::from_error(&error);
        assert_eq!(failure.key, "error-registration-rejected");
        assert_eq!(failure.reason.as_deref(), Some("code revoked"));
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut screen = RegistrationScreen::default();
        assert!(!screen.animation_tick(Instant::now()));

        screen.update(Message::CodeChanged("MC-2025-0042".to_string()));
        screen.update(Message::Submit);
        assert!(screen.animation_tick(Instant::now()));
        assert!(screen.spinner_rotation > 0.0);
    }
}
