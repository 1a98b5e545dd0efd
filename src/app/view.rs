// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::config::EventConfig;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::screens::{admin, agenda, contact, home, registration, sponsors};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{stack, Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub event: &'a EventConfig,
    pub home: Option<&'a home::HomeScreen>,
    pub sponsors: &'a sponsors::SponsorsScreen,
    pub registration: &'a registration::RegistrationScreen,
    pub admin: &'a admin::AdminScreen,
    pub admin_unlocked: bool,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(&NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(ctx.home, ctx.i18n, ctx.event),
        Screen::Agenda => agenda::view(ctx.i18n),
        Screen::Sponsors => ctx.sponsors.view(ctx.i18n).map(Message::Sponsors),
        Screen::Contact => contact::view(ctx.i18n, ctx.event),
        Screen::Registration => ctx.registration.view(ctx.i18n).map(Message::Registration),
        Screen::Admin => ctx
            .admin
            .view(ctx.i18n, ctx.admin_unlocked)
            .map(Message::Admin),
    };

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let content = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![content, toasts].into()
}

fn view_home<'a>(
    home: Option<&'a home::HomeScreen>,
    i18n: &'a I18n,
    event: &'a EventConfig,
) -> Element<'a, Message> {
    if let Some(home) = home {
        home.view(i18n, event).map(Message::Home)
    } else {
        // The home state is created on navigation; this is unreachable in
        // practice but must render something.
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
