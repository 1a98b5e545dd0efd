// SPDX-License-Identifier: MPL-2.0
//! Card primitive.
//!
//! A card is a purely presentational surface with up to four regions
//! (header, title, content, footer); only `content` is mandatory. The surface
//! style goes through the resolver in [`crate::ui::styles::card`], and an
//! optional [`Entrance`] fades the card in exactly once when its screen first
//! shows it.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::card::{self, Hover, Overrides, Variant};
use iced::widget::{column, container, text};
use iced::{Background, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// How long the one-shot entrance fade lasts.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(400);

/// One-shot entrance transition state.
///
/// The transition plays the first time the owning screen reveals the card and
/// never again for the lifetime of this value; re-creating the screen state
/// re-arms it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entrance {
    started: Option<Instant>,
    played: bool,
}

impl Entrance {
    /// Starts the transition, unless it has already played.
    pub fn start(&mut self, now: Instant) {
        if !self.played && self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Progress in `0.0..=1.0`. Before the first [`start`](Self::start) the
    /// card is hidden; after the transition played it stays fully visible.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.played {
            return 1.0;
        }
        match self.started {
            None => 0.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Advances the transition. Returns true while more frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.played {
            return false;
        }
        match self.started {
            None => false,
            Some(started) => {
                if now.saturating_duration_since(started) >= ENTRANCE_DURATION {
                    self.played = true;
                    self.started = None;
                    false
                } else {
                    true
                }
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.played && self.started.is_some()
    }

    #[must_use]
    pub fn has_played(&self) -> bool {
        self.played
    }
}

/// Builder for one card.
pub struct Card<'a, Message> {
    header: Option<Element<'a, Message>>,
    title: Option<String>,
    content: Element<'a, Message>,
    footer: Option<Element<'a, Message>>,
    variant: Variant,
    hover: Hover,
    hovered: bool,
    overrides: Overrides,
    opacity: f32,
    width: Length,
}

impl<'a, Message: 'a> Card<'a, Message> {
    pub fn new(content: impl Into<Element<'a, Message>>) -> Self {
        Self {
            header: None,
            title: None,
            content: content.into(),
            footer: None,
            variant: Variant::default(),
            hover: Hover::default(),
            hovered: false,
            overrides: Overrides::default(),
            opacity: 1.0,
            width: Length::Shrink,
        }
    }

    pub fn header(mut self, header: impl Into<Element<'a, Message>>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Element<'a, Message>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn hover(mut self, hover: Hover) -> Self {
        self.hover = hover;
        self
    }

    /// Whether the pointer is currently over this card. The owning screen
    /// tracks this (via `mouse_area`) and passes it down.
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Entrance fade factor, usually [`Entrance::progress`].
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let mut body = column![].spacing(spacing::SM);

        if let Some(header) = self.header {
            body = body.push(header);
        }
        if let Some(title) = self.title {
            body = body.push(text(title).size(typography::TITLE_MD));
        }
        body = body.push(self.content);
        if let Some(footer) = self.footer {
            body = body.push(footer);
        }

        let variant = self.variant;
        let hover = self.hover;
        let hovered = self.hovered;
        let overrides = self.overrides;
        let opacity = self.opacity;

        container(body)
            .padding(spacing::LG)
            .width(self.width)
            .style(move |theme: &Theme| {
                let resolved = card::resolve_with(variant, hover, hovered, theme, &overrides);
                container::Style {
                    background: Some(fade_background(resolved.background, opacity)),
                    border: resolved.border,
                    shadow: resolved.shadow,
                    text_color: resolved
                        .text_color
                        .map(|color| fade_color(color, opacity)),
                    ..Default::default()
                }
            })
            .into()
    }
}

fn fade_color(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

fn fade_background(background: Background, opacity: f32) -> Background {
    match background {
        Background::Color(color) => Background::Color(fade_color(color, opacity)),
        Background::Gradient(gradient) => Background::Gradient(gradient.scale_alpha(opacity)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_is_hidden_until_started() {
        let entrance = Entrance::default();
        assert_eq!(entrance.progress(Instant::now()), 0.0);
        assert!(!entrance.is_animating());
    }

    #[test]
    fn entrance_progress_reaches_one() {
        let mut entrance = Entrance::default();
        let start = Instant::now();
        entrance.start(start);
        assert!(entrance.is_animating());

        let mid = start + ENTRANCE_DURATION / 2;
        let progress = entrance.progress(mid);
        assert!(progress > 0.0 && progress < 1.0);

        let end = start + ENTRANCE_DURATION;
        assert_eq!(entrance.progress(end), 1.0);
    }

    #[test]
    fn entrance_plays_exactly_once() {
        let mut entrance = Entrance::default();
        let start = Instant::now();
        entrance.start(start);

        // Ticking past the end marks the transition as played.
        assert!(entrance.tick(start + ENTRANCE_DURATION / 4));
        assert!(!entrance.tick(start + ENTRANCE_DURATION));
        assert!(entrance.has_played());

        // Re-starting is a no-op; the card stays fully visible.
        entrance.start(start + ENTRANCE_DURATION * 2);
        assert!(!entrance.is_animating());
        assert_eq!(entrance.progress(start + ENTRANCE_DURATION * 3), 1.0);
    }

    #[test]
    fn tick_without_start_requests_no_frames() {
        let mut entrance = Entrance::default();
        assert!(!entrance.tick(Instant::now()));
        assert!(!entrance.has_played());
    }

    #[test]
    fn fade_scales_alpha_only() {
        let faded = fade_color(Color::from_rgba(0.2, 0.4, 0.6, 0.8), 0.5);
        assert_eq!(faded.r, 0.2);
        assert_eq!(faded.a, 0.4);
    }
}
