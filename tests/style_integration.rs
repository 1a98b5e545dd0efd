// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use medconf::ui::design_tokens::{opacity, palette, sizing, spacing};
    use medconf::ui::styles::button;
    use medconf::ui::styles::card::{self, Hover, Variant};
    use medconf::ui::theming::{AppTheme, ThemeMode};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::selected(&theme, iced::widget::button::Status::Active);
        let _ = button::unselected(&theme, iced::widget::button::Status::Hovered);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::COUNTDOWN_CELL;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }

    #[test]
    fn card_resolution_is_stable_across_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for variant in [
                Variant::Default,
                Variant::Glass,
                Variant::Gradient,
                Variant::Outline,
            ] {
                for hover in [Hover::Default, Hover::Glow, Hover::Raise, Hover::None] {
                    let a = card::resolve(variant, hover, true, &theme);
                    let b = card::resolve(variant, hover, true, &theme);
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn card_variants_are_visually_distinct_at_rest() {
        let theme = Theme::Dark;
        let variants = [
            Variant::Default,
            Variant::Glass,
            Variant::Gradient,
            Variant::Outline,
        ];
        for (i, a) in variants.iter().enumerate() {
            for b in &variants[i + 1..] {
                let left = card::resolve(*a, Hover::None, false, &theme);
                let right = card::resolve(*b, Hover::None, false, &theme);
                assert_ne!(left, right, "{a:?} and {b:?} resolve identically");
            }
        }
    }
}
