use annokit_designer::geometry::{
    distance, in_handle_region, near_path, point_in_ellipse, rotate_about, rotate_point,
    rotated_corners, Extent, Point,
};
use std::f64::consts::{FRAC_PI_2, PI};

fn close_to(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn test_rotate_point_formula() {
    let (x, y) = rotate_point(3.0, 4.0, PI);
    assert!((x + 3.0).abs() < 1e-12);
    assert!((y + 4.0).abs() < 1e-12);
}

#[test]
fn test_rotate_about_pivot() {
    let p = rotate_about(Point::new(20.0, 10.0), Point::new(10.0, 10.0), FRAC_PI_2);
    assert!(close_to(p, Point::new(10.0, 20.0)));
}

#[test]
fn test_rotated_corners_quarter_turn() {
    let e = Extent::new(0.0, 0.0, 40.0, 20.0);
    let c = rotated_corners(&e, FRAC_PI_2);
    // Pivot (20, 10); the wide box becomes tall.
    assert!(close_to(c[0], Point::new(30.0, -10.0)));
    assert!(close_to(c[2], Point::new(10.0, 30.0)));
}

#[test]
fn test_full_turn_is_identity() {
    let e = Extent::new(5.0, 7.0, 55.0, 31.0);
    let turned = rotated_corners(&e, 2.0 * PI);
    for (a, b) in turned.iter().zip(e.corners().iter()) {
        assert!(close_to(*a, *b));
    }
}

#[test]
fn test_distance() {
    assert_eq!(distance(Point::new(1.0, 1.0), Point::new(4.0, 5.0)), 5.0);
}

#[test]
fn test_handle_region_square() {
    let h = Point::new(0.0, 0.0);
    assert!(in_handle_region(Point::new(-5.0, 5.0), h));
    // Square region, so the corners count too.
    assert!(in_handle_region(Point::new(4.9, 4.9), h));
    assert!(!in_handle_region(Point::new(0.0, -5.5), h));
}

#[test]
fn test_near_path_closed_edge() {
    let tri = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
    let on_closing_edge = Point::new(5.0, 5.5);
    assert!(!near_path(on_closing_edge, &tri, false, 1.0));
    assert!(near_path(on_closing_edge, &tri, true, 1.0));
}

#[test]
fn test_point_in_ellipse_tolerance() {
    let e = Extent::new(0.0, 0.0, 20.0, 20.0);
    assert!(!point_in_ellipse(Point::new(20.5, 10.0), &e, 0.0));
    assert!(point_in_ellipse(Point::new(20.5, 10.0), &e, 1.0));
}
