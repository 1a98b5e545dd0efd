// SPDX-License-Identifier: MPL-2.0
//! Admin screen: credential gate in front of the attendee tools.
//!
//! The credentials are compile-time literals and the unlocked flag is kept
//! in the locally persisted state. This gate keeps casual users out of the
//! resend tooling; it is not an authentication system, and the tools behind
//! it only reach backend endpoints that are safe to call repeatedly.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{self, card::Hover, card::Variant};
use crate::ui::Card;
use iced::widget::{button, column, text, text_input};
use iced::Element;

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "pharma2025";

#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    Logout,
    ResendEmail,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    /// Credentials matched; persist the unlocked flag.
    Unlocked,
    /// Forget the unlocked flag.
    LockedOut,
    /// Resend the confirmation e-mail for the last looked-up registration.
    ResendEmail,
}

#[derive(Debug, Clone, Default)]
pub struct AdminScreen {
    username: String,
    password: String,
    rejected: bool,
}

impl AdminScreen {
    /// `unlocked` comes from the persisted state, owned by the app.
    pub fn update(&mut self, message: Message, unlocked: bool) -> Event {
        match message {
            Message::UsernameChanged(username) => {
                self.username = username;
                self.rejected = false;
                Event::None
            }
            Message::PasswordChanged(password) => {
                self.password = password;
                self.rejected = false;
                Event::None
            }
            Message::Submit => {
                if self.username == ADMIN_USERNAME && self.password == ADMIN_PASSWORD {
                    self.password.clear();
                    self.rejected = false;
                    Event::Unlocked
                } else {
                    self.rejected = true;
                    Event::None
                }
            }
            Message::Logout => {
                self.username.clear();
                self.password.clear();
                self.rejected = false;
                Event::LockedOut
            }
            Message::ResendEmail => {
                if unlocked {
                    Event::ResendEmail
                } else {
                    Event::None
                }
            }
        }
    }

    pub fn view<'a>(&self, i18n: &I18n, unlocked: bool) -> Element<'a, Message> {
        let body = if unlocked {
            self.tools(i18n)
        } else {
            self.login_form(i18n)
        };

        column![text(i18n.tr("admin-title")).size(typography::TITLE_LG), body]
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .into()
    }

    fn login_form<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let mut form = column![
            text_input(&i18n.tr("admin-username-placeholder"), &self.username)
                .on_input(Message::UsernameChanged)
                .padding(spacing::SM),
            text_input(&i18n.tr("admin-password-placeholder"), &self.password)
                .on_input(Message::PasswordChanged)
                .on_submit(Message::Submit)
                .secure(true)
                .padding(spacing::SM),
            button(text(i18n.tr("admin-login-button")))
                .on_press(Message::Submit)
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD]),
        ]
        .spacing(spacing::SM);

        if self.rejected {
            form = form.push(
                text(i18n.tr("admin-invalid-credentials"))
                    .size(typography::BODY_SM)
                    .color(palette::ERROR_500),
            );
        }

        Card::new(form)
            .variant(Variant::Outline)
            .hover(Hover::None)
            .width(sizing::FORM_WIDTH)
            .view()
    }

    fn tools<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let body = column![
            text(i18n.tr("admin-resend-hint")).size(typography::BODY_SM),
            button(text(i18n.tr("admin-resend-button")))
                .on_press(Message::ResendEmail)
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::MD]),
            button(text(i18n.tr("admin-logout-button")))
                .on_press(Message::Logout)
                .style(styles::button::unselected)
                .padding([spacing::XS, spacing::MD]),
        ]
        .spacing(spacing::SM);

        Card::new(body)
            .title(i18n.tr("admin-unlocked-heading"))
            .variant(Variant::Default)
            .hover(Hover::None)
            .width(sizing::FORM_WIDTH)
            .view()
    }
}
