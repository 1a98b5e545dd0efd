// SPDX-License-Identifier: MPL-2.0
//! Flip-digit widget using Canvas for the countdown numeral transition.
//!
//! When a time unit changes value, the outgoing numeral slides up and fades
//! out while the incoming one rises from below. The transition is keyed by
//! the value itself: repainting with an unchanged value never replays it.

use crate::ui::design_tokens::sizing;
use iced::alignment;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Text};
use iced::{mouse, Color, Length, Pixels, Point, Rectangle, Renderer, Theme};
use std::time::{Duration, Instant};

/// How long one numeral swap takes.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Transition state for one time-unit cell, owned by the countdown display.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    value: i64,
    previous: Option<i64>,
    started: Option<Instant>,
}

impl Cell {
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self {
            value,
            previous: None,
            started: None,
        }
    }

    /// Records a new value. A transition starts only when the value actually
    /// changed; setting the same value again is a no-op.
    pub fn set(&mut self, value: i64, now: Instant) {
        if value == self.value {
            return;
        }
        self.previous = Some(self.value);
        self.value = value;
        self.started = Some(now);
    }

    /// Drops transition state once its duration elapsed. Returns true while
    /// more animation frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.started {
            None => false,
            Some(started) => {
                if now.saturating_duration_since(started) >= TRANSITION_DURATION {
                    self.previous = None;
                    self.started = None;
                    false
                } else {
                    true
                }
            }
        }
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.started.is_some()
    }

    /// Transition progress in `0.0..=1.0`; 1.0 when settled.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started {
            None => 1.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Builds the canvas widget for this cell's current frame.
    pub fn widget<Message: 'static>(&self, now: Instant, color: Color) -> iced::Element<'static, Message> {
        FlipDigit::new(self.value, color)
            .with_transition(self.previous, self.progress(now))
            .into_element()
    }
}

/// Canvas renderer for one two-digit numeral.
pub struct FlipDigit {
    cache: Cache,
    current: i64,
    previous: Option<i64>,
    progress: f32,
    color: Color,
}

impl FlipDigit {
    #[must_use]
    pub fn new(current: i64, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            current,
            previous: None,
            progress: 1.0,
            color,
        }
    }

    /// Sets the outgoing numeral and how far the swap has progressed.
    #[must_use]
    pub fn with_transition(mut self, previous: Option<i64>, progress: f32) -> Self {
        self.previous = previous;
        self.progress = progress.clamp(0.0, 1.0);
        self.cache.clear();
        self
    }

    /// Creates a Canvas widget from this cell.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::COUNTDOWN_CELL))
            .height(Length::Fixed(sizing::COUNTDOWN_CELL))
            .into()
    }

    fn numeral(value: i64, position: Point, alpha: f32, color: Color) -> Text {
        Text {
            content: format!("{value:02}"),
            position,
            color: Color {
                a: color.a * alpha,
                ..color
            },
            size: Pixels(sizing::COUNTDOWN_DIGITS),
            align_x: iced::widget::text::Alignment::Center,
            align_y: alignment::Vertical::Center,
            ..Text::default()
        }
    }
}

impl<Message> canvas::Program<Message> for FlipDigit {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let travel = frame.height() / 2.0;

                match self.previous {
                    Some(previous) if self.progress < 1.0 => {
                        // Outgoing numeral slides up and fades out.
                        let out_position = Point::new(
                            center.x,
                            center.y - travel * self.progress,
                        );
                        frame.fill_text(Self::numeral(
                            previous,
                            out_position,
                            1.0 - self.progress,
                            self.color,
                        ));

                        // Incoming numeral rises from below and fades in.
                        let in_position = Point::new(
                            center.x,
                            center.y + travel * (1.0 - self.progress),
                        );
                        frame.fill_text(Self::numeral(
                            self.current,
                            in_position,
                            self.progress,
                            self.color,
                        ));
                    }
                    _ => {
                        frame.fill_text(Self::numeral(self.current, center, 1.0, self.color));
                    }
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_starts_settled() {
        let cell = Cell::new(7);
        assert_eq!(cell.value(), 7);
        assert!(!cell.is_transitioning());
        assert_eq!(cell.progress(Instant::now()), 1.0);
    }

    #[test]
    fn unchanged_value_does_not_start_a_transition() {
        let mut cell = Cell::new(42);
        cell.set(42, Instant::now());
        assert!(!cell.is_transitioning());
    }

    #[test]
    fn changed_value_transitions_and_settles() {
        let mut cell = Cell::new(10);
        let start = Instant::now();
        cell.set(9, start);
        assert!(cell.is_transitioning());
        assert_eq!(cell.value(), 9);

        let mid = start + TRANSITION_DURATION / 2;
        let progress = cell.progress(mid);
        assert!(progress > 0.0 && progress < 1.0);
        assert!(cell.tick(mid));

        let end = start + TRANSITION_DURATION;
        assert!(!cell.tick(end));
        assert!(!cell.is_transitioning());
        assert_eq!(cell.progress(end), 1.0);
    }

    #[test]
    fn rapid_changes_rekey_the_transition() {
        let mut cell = Cell::new(3);
        let start = Instant::now();
        cell.set(2, start);
        cell.set(1, start + Duration::from_millis(100));
        // The newest value wins and the outgoing numeral is the one it
        // replaced, not the original.
        assert_eq!(cell.value(), 1);
        assert!(cell.is_transitioning());
        let progress = cell.progress(start + Duration::from_millis(150));
        assert!(progress < 0.5);
    }
}
