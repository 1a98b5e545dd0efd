// SPDX-License-Identifier: MPL-2.0
//! Loading spinner for the registration lookup.
//!
//! A ring of dots orbits the center; the leading dot is fully opaque and
//! the trail fades out behind it. The caller advances `rotation` on each
//! animation tick, so the widget itself stays stateless.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Number of dots in the ring.
const DOT_COUNT: usize = 10;

/// Opacity of the last dot in the trail.
const TAIL_ALPHA: f32 = 0.15;

pub struct AnimatedSpinner {
    cache: Cache,
    /// Angle of the leading dot, radians.
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Opacity of the dot `steps_behind` positions behind the leading one,
    /// fading linearly from opaque down to [`TAIL_ALPHA`].
    fn trail_alpha(steps_behind: usize) -> f32 {
        let last = (DOT_COUNT - 1) as f32;
        let fraction = steps_behind as f32 / last;
        1.0 - fraction * (1.0 - TAIL_ALPHA)
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
                let orbit = frame.width().min(frame.height()) / 2.0 - 5.0;
                let dot_radius = orbit / 6.0;
                let step = TAU / DOT_COUNT as f32;

                for i in 0..DOT_COUNT {
                    // Dots trail clockwise behind the leading one.
                    let angle = self.rotation - i as f32 * step;
                    let position = Point::new(
                        center.x + orbit * angle.cos(),
                        center.y + orbit * angle.sin(),
                    );
                    let dot = Path::circle(position, dot_radius);
                    frame.fill(
                        &dot,
                        Color {
                            a: self.color.a * Self::trail_alpha(i),
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_dot_is_opaque() {
        assert_eq!(AnimatedSpinner::trail_alpha(0), 1.0);
    }

    #[test]
    fn trail_fades_monotonically() {
        for i in 1..DOT_COUNT {
            assert!(AnimatedSpinner::trail_alpha(i) < AnimatedSpinner::trail_alpha(i - 1));
        }
    }

    #[test]
    fn last_dot_keeps_the_tail_alpha() {
        let alpha = AnimatedSpinner::trail_alpha(DOT_COUNT - 1);
        assert!((alpha - TAIL_ALPHA).abs() < f32::EPSILON);
    }
}
