// SPDX-License-Identifier: MPL-2.0
//! Sponsors screen: the roster grouped by tier, with hover treatments.
//!
//! Hover state lives here, not in the cards: each card is wrapped in a
//! `mouse_area` and the screen records which one the pointer is over.

use crate::content::{self, Sponsor, Tier};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::card::{Hover, Variant};
use crate::ui::Card;
use iced::widget::{column, mouse_area, row, scrollable, text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer entered the sponsor card at this roster index.
    Entered(usize),
    /// Pointer left the sponsor card at this roster index.
    Left(usize),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SponsorsScreen {
    hovered: Option<usize>,
}

impl SponsorsScreen {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Entered(index) => self.hovered = Some(index),
            Message::Left(index) => {
                // Enter for the next card can arrive before leave for the
                // previous one; only clear if it is still ours.
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
            }
        }
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn view<'a>(&self, i18n: &I18n) -> Element<'a, Message> {
        let mut body = column![text(i18n.tr("sponsors-title")).size(typography::TITLE_LG)]
            .spacing(spacing::LG)
            .padding(spacing::LG);

        for tier in [Tier::Platinum, Tier::Gold, Tier::Silver] {
            let mut cards = row![].spacing(spacing::MD);
            for (index, sponsor) in content::sponsors_in_tier(tier) {
                cards = cards.push(
                    mouse_area(self.sponsor_card(index, sponsor))
                        .on_enter(Message::Entered(index))
                        .on_exit(Message::Left(index)),
                );
            }

            body = body.push(
                column![
                    text(i18n.tr(tier.i18n_key())).size(typography::TITLE_SM),
                    cards,
                ]
                .spacing(spacing::SM),
            );
        }

        scrollable(body).width(Length::Fill).into()
    }

    fn sponsor_card<'a>(&self, index: usize, sponsor: &Sponsor) -> Element<'a, Message> {
        let variant = match sponsor.tier {
            Tier::Platinum => Variant::Gradient,
            Tier::Gold => Variant::Default,
            Tier::Silver => Variant::Outline,
        };

        Card::new(text(sponsor.tagline.to_string()).size(typography::BODY_SM))
            .title(sponsor.name)
            .variant(variant)
            .hover(Hover::Glow)
            .hovered(self.hovered == Some(index))
            .width(sizing::CARD_WIDTH)
            .view()
    }
}
