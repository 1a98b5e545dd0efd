// SPDX-License-Identifier: MPL-2.0
//! Card surface styles.
//!
//! Every card on every screen goes through [`resolve`]: a closed pair of
//! enums (surface variant × hover treatment) maps to exactly one
//! [`Resolved`] style, so the same combination always renders the same way.
//! Caller overrides are applied last and win over everything the variant or
//! hover treatment chose.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::gradient;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Shadow, Theme, Vector};

/// Card surface treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Opaque surface with a soft shadow.
    #[default]
    Default,
    /// Translucent surface over the page background.
    Glass,
    /// Brand gradient surface with light text.
    Gradient,
    /// Transparent surface with a visible border.
    Outline,
}

/// Hover treatment, independent of the surface variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hover {
    /// Brand-tinted border on hover.
    #[default]
    Default,
    /// Brand glow shadow on hover.
    Glow,
    /// Deeper shadow, as if the card lifted.
    Raise,
    /// No reaction to hover at all.
    None,
}

/// Fully resolved card style. Two equal inputs always resolve to two equal
/// values of this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub background: Background,
    pub border: Border,
    pub shadow: Shadow,
    pub text_color: Option<Color>,
}

/// Caller overrides, applied after variant and hover resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overrides {
    pub background: Option<Background>,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
    pub text_color: Option<Color>,
}

/// Resolves a variant × hover combination into a concrete style.
///
/// The hover treatment only contributes when `hovered` is true; `Hover::None`
/// never contributes. Resolution is pure: no state is read besides the
/// arguments.
#[must_use]
pub fn resolve(variant: Variant, hover: Hover, hovered: bool, theme: &Theme) -> Resolved {
    let mut resolved = base(variant, theme);

    if hovered {
        apply_hover(&mut resolved, hover);
    }

    resolved
}

/// [`resolve`], then caller overrides on top.
#[must_use]
pub fn resolve_with(
    variant: Variant,
    hover: Hover,
    hovered: bool,
    theme: &Theme,
    overrides: &Overrides,
) -> Resolved {
    let mut resolved = resolve(variant, hover, hovered, theme);

    if let Some(background) = overrides.background {
        resolved.background = background;
    }
    if let Some(border) = overrides.border {
        resolved.border = border;
    }
    if let Some(shadow) = overrides.shadow {
        resolved.shadow = shadow;
    }
    if let Some(text_color) = overrides.text_color {
        resolved.text_color = Some(text_color);
    }

    resolved
}

/// Adapter for `container::style`, capturing the combination once.
pub fn style(
    variant: Variant,
    hover: Hover,
    hovered: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let resolved = resolve(variant, hover, hovered, theme);
        container::Style {
            background: Some(resolved.background),
            border: resolved.border,
            shadow: resolved.shadow,
            text_color: resolved.text_color,
            ..Default::default()
        }
    }
}

fn base(variant: Variant, theme: &Theme) -> Resolved {
    let extended = theme.extended_palette();
    let surface = extended.background.base.color;

    match variant {
        Variant::Default => Resolved {
            background: Background::Color(Color {
                a: opacity::SURFACE,
                ..surface
            }),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::SM,
            text_color: None,
        },
        Variant::Glass => Resolved {
            background: Background::Color(Color {
                a: opacity::GLASS,
                ..surface
            }),
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            text_color: None,
        },
        Variant::Gradient => Resolved {
            background: Background::Gradient(
                gradient::Linear::new(Degrees(135.0))
                    .add_stop(0.0, palette::PRIMARY_600)
                    .add_stop(1.0, palette::PRIMARY_400)
                    .into(),
            ),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::MD,
            text_color: Some(palette::WHITE),
        },
        Variant::Outline => Resolved {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: shadow::NONE,
            text_color: None,
        },
    }
}

fn apply_hover(resolved: &mut Resolved, hover: Hover) {
    match hover {
        Hover::Default => {
            resolved.border = Border {
                color: palette::PRIMARY_400,
                width: border::WIDTH_SM.max(resolved.border.width),
                radius: resolved.border.radius,
            };
        }
        Hover::Glow => {
            resolved.shadow = shadow::GLOW;
        }
        Hover::Raise => {
            resolved.shadow = Shadow {
                color: palette::BLACK,
                offset: Vector { x: 0.0, y: 10.0 },
                blur_radius: 20.0,
            };
        }
        Hover::None => {}
    }
}
