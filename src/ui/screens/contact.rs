// SPDX-License-Identifier: MPL-2.0
//! Contact screen: static venue and contact details from configuration.

use crate::config::EventConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::card::{Hover, Variant};
use crate::ui::Card;
use iced::widget::{column, row, text};
use iced::Element;

pub fn view<'a, Message: 'a>(i18n: &I18n, event: &EventConfig) -> Element<'a, Message> {
    let details = column![
        labeled(i18n.tr("contact-venue-label"), event.venue.clone()),
        labeled(i18n.tr("contact-city-label"), event.city.clone()),
        labeled(i18n.tr("contact-email-label"), event.contact_email.clone()),
    ]
    .spacing(spacing::SM);

    column![
        text(i18n.tr("contact-title")).size(typography::TITLE_LG),
        Card::new(details)
            .variant(Variant::Default)
            .hover(Hover::None)
            .width(sizing::FORM_WIDTH)
            .view(),
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG)
    .into()
}

fn labeled<'a, Message: 'a>(label: String, value: String) -> Element<'a, Message> {
    row![
        text(label).size(typography::BODY_SM),
        text(value).size(typography::BODY),
    ]
    .spacing(spacing::MD)
    .into()
}
