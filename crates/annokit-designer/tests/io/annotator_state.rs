use annokit_core::{thread_safe, ExportError};
use annokit_designer::{
    parse_script, AnnotationShape, AnnotatorState, DrawingMode, ImageProvider, ImageSource, NullRenderer, Point,
    PointerEvent, SvgRenderer,
};
use annokit_settings::Config;
use std::thread;

fn svg_state(config: Config) -> AnnotatorState<SvgRenderer> {
    let renderer = SvgRenderer::new(800, 600, &config.canvas, config.handles.clone());
    AnnotatorState::new(config, renderer)
}

#[test]
fn test_renders_once_per_changing_event() {
    let mut state = svg_state(Config::default());
    let initial = state.renderer().frames();

    state.handle_event(PointerEvent::Drag(Point::new(5.0, 5.0)));
    assert_eq!(state.renderer().frames(), initial);

    state.handle_event(PointerEvent::Press(Point::new(10.0, 10.0)));
    state.handle_event(PointerEvent::Drag(Point::new(60.0, 40.0)));
    state.handle_event(PointerEvent::Release(Point::new(60.0, 40.0)));
    assert_eq!(state.renderer().frames(), initial + 3);
    assert!(state.renderer().document().contains("<g id=\"shape-0\">"));
}

#[test]
fn test_replay_script_and_export() {
    let script = r#"[
        {"kind": "press", "x": 100, "y": 100},
        {"kind": "drag", "x": 150, "y": 140},
        {"kind": "release", "x": 150, "y": 140},
        {"mode": "polygon"},
        {"kind": "press", "x": 300, "y": 300},
        {"kind": "press", "x": 340, "y": 300},
        {"kind": "press", "x": 340, "y": 340},
        {"kind": "double_click", "x": 340, "y": 340}
    ]"#;
    let mut state = svg_state(Config::default());
    state.replay(parse_script(script).unwrap());
    assert_eq!(state.mode(), DrawingMode::Polygon);
    assert_eq!(state.shapes().len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let path = state.export_annotations(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("blank_image_annotations.json"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value[0]["type"], "rectangle");
    assert_eq!(value[1]["type"], "polygon");
    assert_eq!(value[1]["is_closed"], true);
    assert_eq!(value[1]["coordinates"][2], serde_json::json!([340, 340]));
}

#[test]
fn test_export_failure_leaves_session_untouched() {
    let mut state = AnnotatorState::new(Config::default(), NullRenderer);
    state.set_mode(DrawingMode::Polyline);
    state.handle_event(PointerEvent::Press(Point::new(0.0, 0.0)));
    state.handle_event(PointerEvent::Press(Point::new(30.0, 0.0)));
    let before = state.drag_state();

    let dir = tempfile::tempdir().unwrap();
    let err = state
        .export_to(dir.path().join("no_such_dir").join("out.json"))
        .unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert_eq!(state.drag_state(), before);
    assert_eq!(state.controller().active_index(), Some(0));

    // Drawing continues after the failed export.
    state.handle_event(PointerEvent::Press(Point::new(30.0, 30.0)));
    assert_eq!(state.shapes()[0].handles().len(), 3);
}

#[test]
fn test_export_named_after_image() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("street.png");
    image::RgbImage::new(64, 48).save(&image_path).unwrap();

    let config = Config::default();
    let image = ImageSource::open_or_blank(Some(&image_path), &config.canvas);
    assert_eq!(image.dimensions(), (64, 48));

    let state = AnnotatorState::with_image(config, image, NullRenderer);
    let written = state.export_annotations(dir.path()).unwrap();
    assert_eq!(written, dir.path().join("street_annotations.json"));
    assert_eq!(std::fs::read_to_string(written).unwrap(), "[]");
}

#[test]
fn test_shared_session_across_threads() {
    let state = thread_safe(AnnotatorState::new(Config::default(), NullRenderer));
    state.lock().set_mode(DrawingMode::Circle);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let state = state.clone();
            thread::spawn(move || {
                let centre = Point::new(100.0 + 200.0 * i as f64, 100.0);
                // One gesture per critical section.
                let mut session = state.lock();
                session.handle_event(PointerEvent::Press(centre));
                session.handle_event(PointerEvent::Drag(Point::new(centre.x + 20.0, centre.y)));
                session.handle_event(PointerEvent::Release(Point::new(centre.x + 20.0, centre.y)));
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(state.lock().shapes().len(), 4);
}
