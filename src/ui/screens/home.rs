// SPDX-License-Identifier: MPL-2.0
//! Home screen: hero card, live countdown, highlight cards.
//!
//! This state exists only while the home screen is shown; navigating away
//! drops it, which also drops the countdown and its timer. Coming back
//! re-creates it, so the entrance transitions play again for the fresh
//! state but never twice within one visit.

use crate::config::EventConfig;
use crate::i18n::fluent::I18n;
use crate::ui::card::{Card, Entrance};
use crate::ui::countdown_display::{self, CountdownDisplay};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::card::{Hover, Variant};
use chrono::{DateTime, Utc};
use iced::widget::{column, row, text};
use iced::{Alignment, Element, Length, Subscription};
use std::time::Instant;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("home-highlight-sessions-title", "home-highlight-sessions-body"),
    ("home-highlight-speakers-title", "home-highlight-speakers-body"),
    ("home-highlight-venue-title", "home-highlight-venue-body"),
];

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Countdown(countdown_display::Message),
}

#[derive(Debug, Clone)]
pub struct HomeScreen {
    countdown: CountdownDisplay,
    hero_entrance: Entrance,
    highlight_entrances: [Entrance; 3],
}

impl HomeScreen {
    #[must_use]
    pub fn new(target: DateTime<Utc>) -> Self {
        let mut screen = Self {
            countdown: CountdownDisplay::new(target),
            hero_entrance: Entrance::default(),
            highlight_entrances: [Entrance::default(); 3],
        };
        let now = Instant::now();
        screen.hero_entrance.start(now);
        for entrance in &mut screen.highlight_entrances {
            entrance.start(now);
        }
        screen
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Countdown(message) => self.countdown.update(message),
        }
    }

    /// Replaces the countdown target, abandoning the old schedule.
    pub fn set_target(&mut self, target: DateTime<Utc>) {
        self.countdown.set_target(target);
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.countdown.subscription().map(Message::Countdown)
    }

    /// True while entrances or numeral transitions want frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.hero_entrance.is_animating()
            || self.highlight_entrances.iter().any(Entrance::is_animating)
            || self.countdown.is_animating()
    }

    /// Advances all animations. Returns true while frames are needed.
    pub fn animation_tick(&mut self, now: Instant) -> bool {
        let hero = self.hero_entrance.tick(now);
        let mut highlights = false;
        for entrance in &mut self.highlight_entrances {
            highlights |= entrance.tick(now);
        }
        let countdown = self.countdown.animation_tick(now);
        hero || highlights || countdown
    }

    pub fn view<'a>(&self, i18n: &I18n, event: &EventConfig) -> Element<'a, Message> {
        let now = Instant::now();

        let hero = Card::new(
            column![
                text(event.name.clone()).size(typography::TITLE_XL),
                text(i18n.tr("home-hero-tagline")).size(typography::BODY_LG),
                text(format!("{} · {}", event.venue, event.city)).size(typography::BODY),
            ]
            .spacing(spacing::XS),
        )
        .variant(Variant::Gradient)
        .hover(Hover::None)
        .opacity(self.hero_entrance.progress(now))
        .width(Length::Fill)
        .view();

        let countdown_section = column![
            text(i18n.tr("home-countdown-heading")).size(typography::TITLE_SM),
            self.countdown.view(i18n, now).map(Message::Countdown),
        ]
        .spacing(spacing::SM)
        .align_x(Alignment::Center);

        let mut highlights = row![].spacing(spacing::MD);
        for (index, (title_key, body_key)) in HIGHLIGHTS.iter().enumerate() {
            highlights = highlights.push(
                Card::new(text(i18n.tr(body_key)).size(typography::BODY))
                    .title(i18n.tr(title_key))
                    .variant(Variant::Glass)
                    .hover(Hover::Raise)
                    .opacity(self.highlight_entrances[index].progress(now))
                    .width(sizing::CARD_WIDTH)
                    .view(),
            );
        }

        column![hero, countdown_section, highlights]
            .spacing(spacing::XL)
            .padding(spacing::LG)
            .align_x(Alignment::Center)
            .into()
    }
}
