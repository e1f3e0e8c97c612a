//! Composition guide geometry in normalized frame coordinates.
//!
//! `(0, 0)` is the top-left corner of the frame and `(1, 1)` the bottom
//! right. The overlay scales these to whatever viewport it draws into.

use glam::Vec2;

use crate::scene::CompositionGrid;

/// Golden ratio conjugate, `1/φ`.
pub const GOLDEN_SECTION: f32 = 0.618_034;

/// Frame center.
const CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// One primitive of a composition guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guide {
    /// Straight segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
    },
    /// Circle outline with a fixed on-screen radius.
    Circle {
        /// Center point.
        center: Vec2,
        /// Radius in pixels.
        radius_px: f32,
    },
    /// Filled dot with a fixed on-screen radius.
    Dot {
        /// Center point.
        center: Vec2,
        /// Radius in pixels.
        radius_px: f32,
    },
    /// Cubic Bézier segment.
    Curve {
        /// Start point.
        from: Vec2,
        /// First control point.
        c1: Vec2,
        /// Second control point.
        c2: Vec2,
        /// End point.
        to: Vec2,
    },
}

fn line(x0: f32, y0: f32, x1: f32, y1: f32) -> Guide {
    Guide::Line {
        from: Vec2::new(x0, y0),
        to: Vec2::new(x1, y1),
    }
}

/// Primitives to draw for `grid`. Empty for [`CompositionGrid::None`].
#[must_use]
pub fn guides(grid: CompositionGrid) -> Vec<Guide> {
    match grid {
        CompositionGrid::None => Vec::new(),
        CompositionGrid::Thirds => {
            let (a, b) = (1.0 / 3.0, 2.0 / 3.0);
            vec![
                line(a, 0.0, a, 1.0),
                line(b, 0.0, b, 1.0),
                line(0.0, a, 1.0, a),
                line(0.0, b, 1.0, b),
            ]
        }
        CompositionGrid::Center => vec![
            Guide::Circle {
                center: CENTER,
                radius_px: 32.0,
            },
            Guide::Dot {
                center: CENTER,
                radius_px: 2.0,
            },
        ],
        CompositionGrid::GoldenSpiral => golden_spiral(),
    }
}

/// Golden-section subdivision plus an approximate spiral through it.
fn golden_spiral() -> Vec<Guide> {
    let g = GOLDEN_SECTION;
    // Second subdivision of the remaining 1 − g strip.
    let g2 = g + (1.0 - g) * (1.0 - g);
    vec![
        line(0.0, 0.0, 1.0, 0.0),
        line(1.0, 0.0, 1.0, 1.0),
        line(1.0, 1.0, 0.0, 1.0),
        line(0.0, 1.0, 0.0, 0.0),
        line(g, 0.0, g, 1.0),
        line(g, g, 1.0, g),
        line(g2, g, g2, 1.0),
        Guide::Curve {
            from: Vec2::ZERO,
            c1: Vec2::new(1.0, 0.0),
            c2: Vec2::new(1.0, 1.0),
            to: Vec2::new(g, 1.0),
        },
        Guide::Curve {
            from: Vec2::new(g, 1.0),
            c1: Vec2::new(g, g),
            c2: Vec2::new(1.0, g),
            to: Vec2::new(1.0, 0.8),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_frame(p: Vec2) -> bool {
        (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
    }

    #[test]
    fn none_draws_nothing() {
        assert!(guides(CompositionGrid::None).is_empty());
    }

    #[test]
    fn thirds_has_two_vertical_and_two_horizontal_lines() {
        let g = guides(CompositionGrid::Thirds);
        assert_eq!(g.len(), 4);
        let verticals = g
            .iter()
            .filter(|g| matches!(g, Guide::Line { from, to } if from.x == to.x))
            .count();
        assert_eq!(verticals, 2);
        assert!(g.contains(&line(1.0 / 3.0, 0.0, 1.0 / 3.0, 1.0)));
    }

    #[test]
    fn center_marks_the_middle() {
        for guide in guides(CompositionGrid::Center) {
            match guide {
                Guide::Circle { center, .. } | Guide::Dot { center, .. } => {
                    assert_eq!(center, Vec2::splat(0.5));
                }
                other => panic!("unexpected guide {other:?}"),
            }
        }
    }

    #[test]
    fn golden_lines_sit_on_the_section() {
        let g = guides(CompositionGrid::GoldenSpiral);
        assert!(g.contains(&line(GOLDEN_SECTION, 0.0, GOLDEN_SECTION, 1.0)));
        assert!((GOLDEN_SECTION - (5.0_f32.sqrt() - 1.0) / 2.0).abs() < 1e-6);
        let second = g.iter().find_map(|guide| match guide {
            Guide::Line { from, to }
                if from.x == to.x && from.x > GOLDEN_SECTION && from.x < 1.0 =>
            {
                Some(from.x)
            }
            _ => None,
        });
        assert!((second.unwrap() - 0.764).abs() < 1e-3);
    }

    #[test]
    fn every_point_is_inside_the_frame() {
        for grid in CompositionGrid::ALL {
            for guide in guides(grid) {
                let points: Vec<Vec2> = match guide {
                    Guide::Line { from, to } => vec![from, to],
                    Guide::Circle { center, .. } | Guide::Dot { center, .. } => {
                        vec![center]
                    }
                    Guide::Curve { from, c1, c2, to } => vec![from, c1, c2, to],
                };
                assert!(points.into_iter().all(in_frame), "{grid:?}: {guide:?}");
            }
        }
    }
}
