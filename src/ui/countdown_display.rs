// SPDX-License-Identifier: MPL-2.0
//! Live countdown component.
//!
//! Owns the target instant, the last computed [`Remaining`], and one
//! transition cell per time unit. The first value is computed at
//! construction, before any timer fires; afterwards a one-second
//! subscription drives [`Message::Tick`]. Once the target passes (or while
//! the component is not on screen) [`subscription`](CountdownDisplay::subscription)
//! returns `Subscription::none()`, so no tick outlives the display.

use crate::countdown::Remaining;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::card::{Hover, Variant};
use crate::ui::widgets::flip_digit::Cell;
use crate::ui::Card;
use chrono::{DateTime, Utc};
use iced::widget::{column, row, text};
use iced::{time, Alignment, Element, Subscription};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// One-second timer fired.
    Tick,
}

#[derive(Debug, Clone)]
pub struct CountdownDisplay {
    target: DateTime<Utc>,
    remaining: Remaining,
    days: Cell,
    hours: Cell,
    minutes: Cell,
    seconds: Cell,
}

impl CountdownDisplay {
    /// Creates the display and computes the first value immediately, so the
    /// user never sees a placeholder while waiting for the first tick.
    #[must_use]
    pub fn new(target: DateTime<Utc>) -> Self {
        let remaining = Remaining::between(target, Utc::now());
        Self {
            target,
            remaining,
            days: Cell::new(remaining.days),
            hours: Cell::new(remaining.hours),
            minutes: Cell::new(remaining.minutes),
            seconds: Cell::new(remaining.seconds),
        }
    }

    /// Replaces the target. The old schedule is abandoned wholesale: the
    /// value is recomputed against the new target and the cells re-seeded
    /// without transitions.
    pub fn set_target(&mut self, target: DateTime<Utc>) {
        *self = Self::new(target);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick => self.recompute(Utc::now(), Instant::now()),
        }
    }

    fn recompute(&mut self, now: DateTime<Utc>, instant: Instant) {
        self.remaining = Remaining::between(self.target, now);
        self.days.set(self.remaining.days, instant);
        self.hours.set(self.remaining.hours, instant);
        self.minutes.set(self.remaining.minutes, instant);
        self.seconds.set(self.remaining.seconds, instant);
    }

    /// One-second timer while counting down; nothing once expired. The
    /// runtime cancels the timer as soon as this stops returning it, which
    /// also covers the display being dropped with its screen.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.remaining.expired {
            Subscription::none()
        } else {
            time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.expired
    }

    #[must_use]
    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    #[must_use]
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// True while any numeral swap is mid-flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.days.is_transitioning()
            || self.hours.is_transitioning()
            || self.minutes.is_transitioning()
            || self.seconds.is_transitioning()
    }

    /// Advances numeral transitions. Returns true while frames are needed.
    pub fn animation_tick(&mut self, now: Instant) -> bool {
        let days = self.days.tick(now);
        let hours = self.hours.tick(now);
        let minutes = self.minutes.tick(now);
        let seconds = self.seconds.tick(now);
        days || hours || minutes || seconds
    }

    pub fn view<'a>(&self, i18n: &I18n, now: Instant) -> Element<'a, Message> {
        if self.remaining.expired {
            return text(i18n.tr("countdown-expired"))
                .size(typography::TITLE_MD)
                .into();
        }

        row![
            unit_cell(&self.days, now, i18n.tr("countdown-days")),
            unit_cell(&self.hours, now, i18n.tr("countdown-hours")),
            unit_cell(&self.minutes, now, i18n.tr("countdown-minutes")),
            unit_cell(&self.seconds, now, i18n.tr("countdown-seconds")),
        ]
        .spacing(spacing::MD)
        .into()
    }
}

fn unit_cell<'a>(cell: &Cell, now: Instant, label: String) -> Element<'a, Message> {
    let body = column![
        cell.widget(now, palette::PRIMARY_400),
        text(label).size(typography::CAPTION),
    ]
    .spacing(spacing::XXS)
    .align_x(Alignment::Center);

    Card::new(body)
        .variant(Variant::Glass)
        .hover(Hover::None)
        .width(sizing::COUNTDOWN_CELL + spacing::LG * 2.0)
        .view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn first_value_is_available_before_any_tick() {
        let display = CountdownDisplay::new(Utc::now() + chrono::Duration::days(3));
        assert!(!display.is_expired());
        assert!(display.remaining().days >= 2);
    }

    #[test]
    fn past_target_is_expired_immediately() {
        let display = CountdownDisplay::new(at(2020, 1, 1, 0, 0, 0));
        assert!(display.is_expired());
        assert_eq!(display.remaining(), Remaining::EXPIRED);
    }

    #[test]
    fn tick_after_expiry_stays_all_zero() {
        let mut display = CountdownDisplay::new(at(2020, 1, 1, 0, 0, 0));
        display.update(Message::Tick);
        display.update(Message::Tick);
        assert_eq!(display.remaining(), Remaining::EXPIRED);
    }

    #[test]
    fn changing_target_recomputes_without_transitions() {
        let mut display = CountdownDisplay::new(Utc::now() + chrono::Duration::days(1));
        display.set_target(Utc::now() + chrono::Duration::days(10));
        assert!(display.remaining().days >= 9);
        assert!(!display.is_animating());
    }

    #[test]
    fn recompute_starts_transitions_on_changed_units_only() {
        let target = at(2031, 6, 1, 12, 0, 0);
        let mut display = CountdownDisplay::new(target);
        let instant = Instant::now();

        // Seed from a known reference, then advance one second: only the
        // seconds unit changes.
        display.recompute(at(2031, 5, 30, 12, 0, 10), instant);
        display.animation_tick(instant + Duration::from_secs(1));
        display.recompute(at(2031, 5, 30, 12, 0, 11), instant + Duration::from_secs(1));

        assert!(display.seconds.is_transitioning());
        assert!(!display.minutes.is_transitioning());
        assert!(!display.hours.is_transitioning());
        assert!(!display.days.is_transitioning());
    }
}
