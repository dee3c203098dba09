//! Viewport and coordinate transform tests.

use crate::helpers::assert_point_near;
use kurbo::{Point, Vec2};
use moodboard::Viewport;
use moodboard::input::coords::{CoordinateContext, CoordinateConverter};

#[test]
fn test_zoom_keeps_point_under_cursor() {
    let screens = [
        Point::new(0.0, 0.0),
        Point::new(400.0, 300.0),
        Point::new(-250.0, 1234.5),
    ];
    let deltas = [0.5, -0.3, 2.0, -0.85, 0.001];

    for origin in [Point::ORIGIN, Point::new(64.0, 48.0)] {
        for &screen in &screens {
            for &delta in &deltas {
                let mut viewport = Viewport::new();
                viewport.set_origin(origin);
                viewport.pan_by(Vec2::new(37.0, -12.0));
                viewport.set_scale(1.5);

                let before = viewport.screen_to_canvas(screen);
                viewport.zoom_around(screen, delta);
                assert_point_near(viewport.screen_to_canvas(screen), before);
            }
        }
    }
}

#[test]
fn test_scale_stays_in_range() {
    let mut viewport = Viewport::new();
    for delta in [3.0, 10.0, -0.2, -50.0, 0.7, 100.0, -100.0] {
        viewport.zoom_around(Point::new(10.0, 10.0), delta);
        assert!(viewport.scale() >= 0.1 && viewport.scale() <= 5.0);
    }
    for _ in 0..100 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.scale(), 0.1);
}

#[test]
fn test_set_scale_noop_when_unchanged() {
    let mut viewport = Viewport::new();
    assert!(!viewport.set_scale(1.0));
    assert!(viewport.set_scale(9.0));
    assert_eq!(viewport.scale(), 5.0);
    assert!(!viewport.set_scale(7.0));
    assert!(!viewport.set_scale(f64::NAN));
}

#[test]
fn test_transform_round_trip() {
    let ctx = CoordinateContext::new(Point::new(10.0, 20.0), Vec2::new(-30.0, 45.0), 2.5);
    let canvas = Point::new(123.0, -456.0);
    let screen = CoordinateConverter::canvas_to_screen(canvas, &ctx);
    assert_point_near(CoordinateConverter::screen_to_canvas(screen, &ctx), canvas);
}
