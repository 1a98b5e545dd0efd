// SPDX-License-Identifier: MPL-2.0
//! Agenda screen: the two-day programme as outline cards.

use crate::content::{self, Session};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::card::{Hover, Variant};
use crate::ui::Card;
use iced::widget::{column, row, scrollable, text};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let day_one = day_column(i18n.tr("agenda-day-one"), content::sessions_for_day(1));
    let day_two = day_column(i18n.tr("agenda-day-two"), content::sessions_for_day(2));

    let body = column![
        text(i18n.tr("agenda-title")).size(typography::TITLE_LG),
        row![day_one, day_two].spacing(spacing::XL),
    ]
    .spacing(spacing::LG)
    .padding(spacing::LG);

    scrollable(body).width(Length::Fill).into()
}

fn day_column<'a, Message: 'a>(
    heading: String,
    sessions: impl Iterator<Item = &'static Session>,
) -> Element<'a, Message> {
    let mut column = column![text(heading).size(typography::TITLE_SM)].spacing(spacing::MD);

    for session in sessions {
        column = column.push(session_card(session));
    }

    column.into()
}

fn session_card<'a, Message: 'a>(session: &'static Session) -> Element<'a, Message> {
    Card::new(
        column![
            text(format!("{} · {}", session.time, session.room)).size(typography::CAPTION),
            text(session.speaker).size(typography::BODY_SM),
        ]
        .spacing(spacing::XXS),
    )
    .title(session.title)
    .variant(Variant::Outline)
    .hover(Hover::Default)
    .width(Length::Fill)
    .view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn agenda_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}
