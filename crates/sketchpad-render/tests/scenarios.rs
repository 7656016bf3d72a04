//! End-to-end drawing sessions: pointer events in, SVG documents out.

use kurbo::{Point, Size, Vec2};
use sketchpad_core::{Canvas, MouseButton, PointerEvent, SketchpadConfig, ToolKind, Viewport};
use sketchpad_render::{RenderContext, Snapshot, SvgRenderer, export_snapshot};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn stroke(canvas: &mut Canvas, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    canvas.handle_pointer_event(PointerEvent::Down {
        position: Point::new(first.0, first.1),
        button: MouseButton::Left,
    });
    for &(x, y) in rest {
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(x, y),
        });
    }
    canvas.handle_pointer_event(PointerEvent::Up);
}

#[test]
fn session_with_every_tool_exports_in_history_order() {
    init_logging();
    let mut canvas = Canvas::new();

    canvas.set_tool(ToolKind::Rectangle);
    stroke(&mut canvas, &[(10.0, 10.0), (50.0, 40.0)]);
    canvas.set_tool(ToolKind::Circle);
    stroke(&mut canvas, &[(100.0, 100.0), (103.0, 104.0)]);
    canvas.set_tool(ToolKind::Line);
    stroke(&mut canvas, &[(0.0, 200.0), (20.0, 220.0)]);
    canvas.set_tool(ToolKind::Polyline);
    stroke(&mut canvas, &[(30.0, 30.0), (31.0, 32.0), (33.0, 35.0)]);
    canvas.set_tool(ToolKind::Path);
    stroke(&mut canvas, &[(60.0, 60.0), (61.0, 60.0)]);

    let snapshot = export_snapshot(&canvas.editor, &canvas.export_options).unwrap();
    let markup = &snapshot.markup;
    let order: Vec<usize> = ["<rect", "<circle", "<line", "<polyline", "<path"]
        .iter()
        .map(|tag| markup.find(tag).expect("element present"))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{markup}");
    assert!(markup.contains(r#"r="5""#));
    assert!(markup.contains(r#"points="30,30 31,32 33,35""#));
    assert!(markup.contains(r#"d="M60 60 L61 60""#));
}

#[test]
fn undo_redo_round_trip_reaches_export() {
    init_logging();
    let mut canvas = Canvas::new();
    stroke(&mut canvas, &[(0.0, 0.0), (10.0, 10.0)]);
    canvas.set_tool(ToolKind::Line);
    stroke(&mut canvas, &[(100.0, 0.0), (120.0, 0.0)]);

    assert!(canvas.undo());
    let after_undo = export_snapshot(&canvas.editor, &canvas.export_options).unwrap();
    assert!(!after_undo.markup.contains("<line"));

    assert!(canvas.redo());
    let after_redo = export_snapshot(&canvas.editor, &canvas.export_options).unwrap();
    assert!(after_redo.markup.contains("<line"));
}

#[test]
fn new_stroke_after_undo_drops_redo() {
    init_logging();
    let mut canvas = Canvas::new();
    stroke(&mut canvas, &[(0.0, 0.0), (10.0, 10.0)]);
    stroke(&mut canvas, &[(20.0, 20.0), (30.0, 30.0)]);
    canvas.undo();
    stroke(&mut canvas, &[(40.0, 40.0), (50.0, 50.0)]);

    assert!(!canvas.redo());
    let snapshot = export_snapshot(&canvas.editor, &canvas.export_options).unwrap();
    assert_eq!(snapshot.markup.matches("<rect").count(), 2);
    assert!(!snapshot.markup.contains(r#"x="20""#));
}

#[test]
fn click_without_drag_leaves_nothing() {
    init_logging();
    let mut canvas = Canvas::new();
    canvas.set_tool(ToolKind::Line);
    stroke(&mut canvas, &[(5.0, 5.0)]);

    assert!(canvas.editor.is_empty());
    let (_, width, height) = export_snapshot(&canvas.editor, &canvas.export_options)
        .unwrap()
        .into_parts();
    assert!((width - 32.0).abs() < f64::EPSILON);
    assert!((height - 32.0).abs() < f64::EPSILON);
}

#[test]
fn singular_viewport_or_nan_input_never_reaches_export() {
    init_logging();
    let mut canvas = Canvas::new();
    canvas.viewport = Viewport::from_offset_zoom(Vec2::ZERO, 0.0);
    stroke(&mut canvas, &[(1.0, 1.0), (20.0, 20.0)]);

    canvas.viewport = Viewport::new();
    stroke(&mut canvas, &[(10.0, 10.0), (f64::NAN, 5.0)]);
    assert!(canvas.editor.is_empty());

    stroke(&mut canvas, &[(10.0, 10.0), (30.0, 20.0), (f64::NAN, 5.0)]);
    let snapshot = export_snapshot(&canvas.editor, &canvas.export_options).unwrap();
    assert_eq!(canvas.editor.len(), 1);
    assert!(!snapshot.markup.contains("NaN"));
    assert!(snapshot.markup.contains(r#"viewBox="0 0 52 42""#));
}

#[test]
fn live_view_shows_shape_before_release() {
    init_logging();
    let mut canvas = Canvas::new();
    canvas.viewport = Viewport::from_offset_zoom(Vec2::new(8.0, 8.0), 1.0);
    canvas.handle_pointer_event(PointerEvent::Down {
        position: Point::new(18.0, 18.0),
        button: MouseButton::Left,
    });
    canvas.handle_pointer_event(PointerEvent::Move {
        position: Point::new(28.0, 38.0),
    });

    let ctx = RenderContext::new(&canvas.editor, Size::new(640.0, 480.0));
    let live = SvgRenderer::render_document(&ctx).unwrap();
    assert!(live.contains(r#"<rect x="10" y="10" width="10" height="20""#));

    let exported = export_snapshot(&canvas.editor, &canvas.export_options).unwrap();
    assert!(!exported.markup.contains("<rect"));
}

#[test]
fn configured_session_writes_file() {
    init_logging();
    let config = SketchpadConfig::from_json(
        r##"{
            "tools": {"stroke_color": {"r": 0, "g": 128, "b": 0, "a": 255}, "stroke_width": 4.0},
            "export": {"file_name": "session.svg", "background": {"r": 255, "g": 255, "b": 255, "a": 255}}
        }"##,
    )
    .unwrap();
    let mut canvas = Canvas::with_config(config);
    stroke(&mut canvas, &[(40.0, 40.0), (80.0, 60.0)]);

    let snapshot = export_snapshot(&canvas.editor, &canvas.export_options).unwrap();
    assert!(snapshot.markup.contains(r##"stroke="#008000" stroke-width="4""##));
    assert!(snapshot.markup.contains(r#"viewBox="24 24 72 52""#));

    let dir = tempfile::tempdir().unwrap();
    let path = snapshot.save_in(dir.path()).unwrap();
    assert!(path.ends_with("session.svg"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert_eq!(Snapshot::MIME_TYPE, "image/svg+xml");
}
