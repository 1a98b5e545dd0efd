// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! One button per screen, highlighted for the active one, plus a theme
//! toggle at the far end. The navbar emits events rather than mutating app
//! state, so the parent decides what a navigation actually does.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, space, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Navigate(Screen),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Navigate(Screen),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    for screen in Screen::ALL {
        let label = ctx.i18n.tr(screen.i18n_key());
        let mut item = button(Text::new(label)).on_press(Message::Navigate(screen));
        item = if screen == ctx.active {
            item.style(styles::button::selected)
        } else {
            item.style(styles::button::unselected)
        };
        row = row.push(item);
    }

    row = row.push(space::horizontal());

    let theme_label = match ctx.theme_mode {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "🌙",
        ThemeMode::System => "🖥",
    };
    row = row.push(
        button(Text::new(theme_label))
            .on_press(Message::ToggleTheme)
            .style(styles::button::unselected),
    );

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders_for_every_screen() {
        let i18n = I18n::default();
        for screen in Screen::ALL {
            let ctx = ViewContext {
                i18n: &i18n,
                active: screen,
                theme_mode: ThemeMode::System,
            };
            let _element = view(&ctx);
        }
    }

    #[test]
    fn navigate_message_becomes_navigate_event() {
        let event = update(Message::Navigate(Screen::Agenda));
        assert!(matches!(event, Event::Navigate(Screen::Agenda)));
    }

    #[test]
    fn theme_toggle_message_becomes_theme_event() {
        let event = update(Message::ToggleTheme);
        assert!(matches!(event, Event::ToggleTheme));
    }
}
