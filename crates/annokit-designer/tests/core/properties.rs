use annokit_designer::geometry::rotated_corners;
use annokit_designer::{
    AnnotCircle, AnnotPolygon, AnnotRectangle, AnnotationShape, DragState, DrawingMode, Extent,
    HitResult, InteractionController, Point, PointerEvent, Shape,
};
use annokit_settings::ShapeStyle;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    0.0..1000.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn extent_mode() -> impl Strategy<Value = DrawingMode> {
    prop_oneof![
        Just(DrawingMode::Rectangle),
        Just(DrawingMode::Circle),
        Just(DrawingMode::Ellipse),
    ]
}

proptest! {
    #[test]
    fn prop_update_extent_normalizes(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let mut rect = AnnotRectangle::new(Extent::default(), ShapeStyle::default());
        rect.update_extent(x1, y1, x2, y2);
        prop_assert!(rect.extent.x1 <= rect.extent.x2);
        prop_assert!(rect.extent.y1 <= rect.extent.y2);
    }

    #[test]
    fn prop_circle_radius_never_below_minimum(r in -1.0e6..1.0e6f64) {
        let mut circle = AnnotCircle::new(Point::default(), r, ShapeStyle::default());
        prop_assert!(circle.radius >= 5.0);
        circle.update_center_radius(1.0, 2.0, r);
        prop_assert!(circle.radius >= 5.0);
    }

    #[test]
    fn prop_handle_beats_body(x1 in coord(), y1 in coord(), w in 0.0..30.0f64, h in 0.0..30.0f64, angle in -7.0..7.0f64) {
        let mut rect = AnnotRectangle::new(Extent::new(x1, y1, x1 + w, y1 + h), ShapeStyle::new("white", 2.0, "#F0F0F0"));
        rect.angle = angle;
        for handle in rect.handles() {
            let hit = rect.check_hit(handle);
            prop_assert!(matches!(hit, HitResult::Handle(_)), "got {:?}", hit);
        }
    }

    #[test]
    fn prop_zero_angle_corners_are_extent_corners(x1 in coord(), y1 in coord(), w in 0.0..500.0f64, h in 0.0..500.0f64) {
        let e = Extent::new(x1, y1, x1 + w, y1 + h);
        prop_assert_eq!(rotated_corners(&e, 0.0), e.corners());
    }

    #[test]
    fn prop_polygon_close(n in 0usize..8) {
        let points = (0..n).map(|i| Point::new(i as f64 * 20.0, (i % 2) as f64 * 15.0)).collect();
        let mut poly = AnnotPolygon::new(points, ShapeStyle::default());
        let closed = poly.close();
        prop_assert_eq!(closed, n > 2);
        prop_assert_eq!(poly.close(), closed);
        prop_assert_eq!(poly.is_closed(), n > 2);
    }

    #[test]
    fn prop_rotation_returns_to_start(x1 in coord(), y1 in coord(), start in -3.0..3.0f64, anchor in point(), via in point()) {
        let mut rect = AnnotRectangle::new(Extent::new(x1, y1, x1 + 40.0, y1 + 20.0), ShapeStyle::default());
        rect.angle = start;
        rect.begin_rotation(anchor);
        rect.rotate(via.x, via.y);
        rect.rotate(anchor.x, anchor.y);
        prop_assert!((rect.angle - start).abs() < 1e-9);
    }

    #[test]
    fn prop_finished_gestures_respect_minimums(
        gestures in prop::collection::vec((extent_mode(), point(), point()), 1..12)
    ) {
        let mut ctrl = InteractionController::default();
        for (mode, from, to) in gestures {
            ctrl.set_mode(mode);
            ctrl.handle(PointerEvent::Press(from));
            ctrl.handle(PointerEvent::Drag(to));
            ctrl.handle(PointerEvent::Release(to));
            prop_assert_eq!(ctrl.state(), DragState::Idle);
            prop_assert!(ctrl.active_shape().is_none());

            for shape in ctrl.shapes() {
                prop_assert_eq!(shape.active_handle(), None);
                match shape {
                    Shape::Rectangle(r) => {
                        prop_assert!(r.extent.width() >= 10.0 - 1e-9);
                        prop_assert!(r.extent.height() >= 10.0 - 1e-9);
                    }
                    Shape::Ellipse(e) => {
                        prop_assert!(e.extent.width() >= 10.0 - 1e-9);
                        prop_assert!(e.extent.height() >= 10.0 - 1e-9);
                    }
                    Shape::Circle(c) => prop_assert!(c.radius >= 5.0),
                    Shape::Polygon(_) | Shape::Polyline(_) => {}
                }
            }
        }
    }

    #[test]
    fn prop_polygon_clicks_then_double_click(ys in prop::collection::vec(0.0..100.0f64, 1..10)) {
        let mut ctrl = InteractionController::default();
        ctrl.set_mode(DrawingMode::Polygon);
        for (i, y) in ys.iter().enumerate() {
            let p = Point::new(i as f64 * 20.0, *y);
            ctrl.handle(PointerEvent::Press(p));
            ctrl.handle(PointerEvent::Release(p));
        }
        ctrl.handle(PointerEvent::DoubleClick(Point::default()));

        prop_assert_eq!(ctrl.shapes().len(), 1);
        match &ctrl.shapes()[0] {
            Shape::Polygon(p) => {
                prop_assert_eq!(p.points.len(), ys.len());
                prop_assert_eq!(p.is_closed(), ys.len() > 2);
            }
            other => prop_assert!(false, "unexpected shape {:?}", other),
        }
    }
}
