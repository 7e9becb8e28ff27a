use annokit_designer::{
    AnnotCircle, AnnotEllipse, AnnotRectangle, AnnotationShape, DragState, DrawingMode, Extent,
    InteractionController, Point, PointerEvent, Shape,
};
use annokit_settings::StyleSettings;

fn gesture(ctrl: &mut InteractionController, from: (f64, f64), to: (f64, f64)) {
    let from = Point::new(from.0, from.1);
    let to = Point::new(to.0, to.1);
    ctrl.handle(PointerEvent::Press(from));
    ctrl.handle(PointerEvent::Drag(to));
    ctrl.handle(PointerEvent::Release(to));
}

fn extent_of(shape: &Shape) -> Extent {
    match shape {
        Shape::Rectangle(r) => r.extent,
        Shape::Ellipse(e) => e.extent,
        other => panic!("no extent on {:?}", other),
    }
}

#[test]
fn test_new_shapes_use_configured_styles() {
    let mut styles = StyleSettings::default();
    styles.ellipse.stroke_color = "pink".to_string();
    let mut ctrl = InteractionController::new(styles);
    ctrl.set_mode(DrawingMode::Ellipse);
    gesture(&mut ctrl, (0.0, 0.0), (30.0, 30.0));
    assert_eq!(ctrl.shapes()[0].style().stroke_color, "pink");
    assert_eq!(ctrl.shapes()[0].style().fill_color, "#F0F0F0");
}

#[test]
fn test_creating_backwards_normalizes() {
    let mut ctrl = InteractionController::default();
    gesture(&mut ctrl, (100.0, 100.0), (40.0, 60.0));
    assert_eq!(extent_of(&ctrl.shapes()[0]), Extent::new(40.0, 60.0, 100.0, 100.0));
}

#[test]
fn test_tiny_backwards_drag_pins_press_corner() {
    let mut ctrl = InteractionController::default();
    gesture(&mut ctrl, (100.0, 100.0), (97.0, 98.0));
    // The press point stays the bottom-right corner.
    assert_eq!(extent_of(&ctrl.shapes()[0]), Extent::new(90.0, 90.0, 100.0, 100.0));
}

#[test]
fn test_resize_corner_handle() {
    let mut ctrl = InteractionController::default();
    ctrl.push_shape(AnnotEllipse::new(
        Extent::new(10.0, 10.0, 60.0, 40.0),
        StyleSettings::default().ellipse,
    ));
    gesture(&mut ctrl, (60.0, 40.0), (80.0, 90.0));
    assert_eq!(extent_of(&ctrl.shapes()[0]), Extent::new(10.0, 10.0, 80.0, 90.0));
    assert_eq!(ctrl.shapes().len(), 1);
}

#[test]
fn test_resize_top_left_clamps_against_bottom_right() {
    let mut ctrl = InteractionController::default();
    ctrl.push_shape(AnnotRectangle::new(
        Extent::new(0.0, 0.0, 50.0, 50.0),
        StyleSettings::default().rectangle,
    ));
    ctrl.handle(PointerEvent::Press(Point::new(0.0, 0.0)));
    assert_eq!(ctrl.state(), DragState::ResizingShape);
    ctrl.handle(PointerEvent::Drag(Point::new(48.0, 45.0)));
    assert_eq!(extent_of(&ctrl.shapes()[0]), Extent::new(40.0, 40.0, 50.0, 50.0));
}

#[test]
fn test_move_circle_by_body() {
    let mut ctrl = InteractionController::default();
    ctrl.push_shape(AnnotCircle::new(Point::new(100.0, 100.0), 30.0, StyleSettings::default().circle));
    gesture(&mut ctrl, (110.0, 95.0), (210.0, 45.0));
    match &ctrl.shapes()[0] {
        Shape::Circle(c) => {
            assert_eq!(c.center, Point::new(200.0, 50.0));
            assert_eq!(c.radius, 30.0);
        }
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_circle_resize_keeps_minimum() {
    let mut ctrl = InteractionController::default();
    ctrl.push_shape(AnnotCircle::new(Point::new(100.0, 100.0), 30.0, StyleSettings::default().circle));
    // Right handle dragged onto the center.
    gesture(&mut ctrl, (130.0, 100.0), (100.0, 100.0));
    match &ctrl.shapes()[0] {
        Shape::Circle(c) => assert_eq!(c.radius, 5.0),
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_topmost_shape_wins() {
    let mut ctrl = InteractionController::default();
    ctrl.set_mode(DrawingMode::Rectangle);
    gesture(&mut ctrl, (0.0, 0.0), (100.0, 100.0));
    // Started outside the first rectangle, dragged back over it.
    gesture(&mut ctrl, (150.0, 150.0), (60.0, 60.0));
    assert_eq!(ctrl.shapes().len(), 2);

    ctrl.handle(PointerEvent::Press(Point::new(75.0, 75.0)));
    assert_eq!(ctrl.state(), DragState::MovingShape);
    assert_eq!(ctrl.active_index(), Some(1));
}

#[test]
fn test_press_origin_recorded_on_hits() {
    let mut ctrl = InteractionController::default();
    ctrl.push_shape(AnnotCircle::new(Point::new(0.0, 0.0), 30.0, StyleSettings::default().circle));
    ctrl.handle(PointerEvent::Press(Point::new(3.0, 4.0)));
    assert_eq!(ctrl.press_origin(), Point::new(3.0, 4.0));
    assert_eq!(ctrl.shapes().len(), 1);
}

#[test]
fn test_polygon_appends_until_closed() {
    let mut ctrl = InteractionController::default();
    ctrl.set_mode(DrawingMode::Polygon);
    for x in [0.0, 30.0, 60.0] {
        ctrl.handle(PointerEvent::Press(Point::new(x, 0.0)));
        ctrl.handle(PointerEvent::Drag(Point::new(x, 20.0)));
        ctrl.handle(PointerEvent::Release(Point::new(x, 20.0)));
    }
    // Dragging during drawing moves the newest vertex.
    assert_eq!(ctrl.shapes()[0].handles().as_slice(), &[
        Point::new(0.0, 20.0),
        Point::new(30.0, 20.0),
        Point::new(60.0, 20.0),
    ]);
    assert!(ctrl.handle(PointerEvent::DoubleClick(Point::new(60.0, 20.0))));
    match &ctrl.shapes()[0] {
        Shape::Polygon(p) => assert!(p.is_closed()),
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_double_click_outside_drawing_is_ignored() {
    let mut ctrl = InteractionController::default();
    gesture(&mut ctrl, (0.0, 0.0), (40.0, 40.0));
    assert!(!ctrl.handle(PointerEvent::DoubleClick(Point::new(20.0, 20.0))));
    assert_eq!(ctrl.state(), DragState::Idle);
}

#[test]
fn test_two_point_polygon_stays_open() {
    let mut ctrl = InteractionController::default();
    ctrl.set_mode(DrawingMode::Polygon);
    ctrl.handle(PointerEvent::Press(Point::new(0.0, 0.0)));
    ctrl.handle(PointerEvent::Press(Point::new(50.0, 0.0)));
    ctrl.handle(PointerEvent::DoubleClick(Point::new(50.0, 0.0)));
    assert_eq!(ctrl.state(), DragState::Idle);
    match &ctrl.shapes()[0] {
        Shape::Polygon(p) => assert!(!p.is_closed()),
        other => panic!("unexpected shape {:?}", other),
    }

    // An open polygon is not reused once drawing has ended.
    ctrl.handle(PointerEvent::Press(Point::new(100.0, 100.0)));
    assert_eq!(ctrl.shapes().len(), 2);
}
