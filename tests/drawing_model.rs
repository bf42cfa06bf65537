use egui::{Color32, pos2};
use sticker_sketchpad::document::Document;
use sticker_sketchpad::event::{EventLog, SketchEvent};
use sticker_sketchpad::style::StrokeStyle;
use sticker_sketchpad::surface::{RecordingSurface, SurfaceOp};
use sticker_sketchpad::tools::FixedCosmetics;
use sticker_sketchpad::{Action, InputEvent, Sketchpad, SketchpadConfig};

fn style() -> StrokeStyle {
    StrokeStyle::new(3.0, Color32::from_rgb(200, 40, 40))
}

// Helper to commit a finished one-point stroke
fn commit_stroke(doc: &mut Document, x: f32) {
    doc.begin_stroke(x, x, style());
    doc.end_gesture();
}

fn sketchpad() -> Sketchpad {
    Sketchpad::with_cosmetics(SketchpadConfig::default(), Box::new(FixedCosmetics::default()))
}

#[test]
fn test_stroke_scenario_records_points_in_order() {
    let mut doc = Document::new();
    let handle = doc.begin_stroke(10.0, 10.0, style());
    doc.extend(handle, 20.0, 10.0).unwrap();
    doc.extend(handle, 20.0, 20.0).unwrap();
    doc.end_gesture();

    assert_eq!(doc.len(), 1);
    let stroke = doc.committed()[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]
    );
}

#[test]
fn test_replay_renders_n_points_with_n_minus_one_segments() {
    for n in 2..12 {
        let mut doc = Document::new();
        let handle = doc.begin_stroke(0.0, 0.0, style());
        for i in 1..n {
            doc.extend(handle, i as f32 * 3.0, (i % 3) as f32).unwrap();
        }
        doc.end_gesture();

        let mut surface = RecordingSurface::new();
        for _ in 0..3 {
            doc.replay(&mut surface);
        }
        let ops = surface.ops();
        assert_eq!(ops.len(), 3);
        for op in ops {
            match op {
                SurfaceOp::Polyline { points, .. } => assert_eq!(points.len(), n),
                other => panic!("unexpected op {other:?}"),
            }
            assert_eq!(op.segment_count(), n - 1);
            assert_eq!(op, &ops[0]);
        }
    }
}

#[test]
fn test_undo_then_redo_restores_identical_commands() {
    let mut doc = Document::new();
    for i in 0..4 {
        commit_stroke(&mut doc, i as f32);
    }
    let before = doc.committed_ids();

    assert!(doc.undo());
    assert_eq!(doc.len(), 3);
    assert!(doc.redo());
    assert_eq!(doc.committed_ids(), before);
    assert!(doc.redo_buffer().is_empty());
}

#[test]
fn test_three_strokes_undo_twice_redo_once() {
    let mut doc = Document::new();
    commit_stroke(&mut doc, 1.0);
    commit_stroke(&mut doc, 2.0);
    commit_stroke(&mut doc, 3.0);
    let ids = doc.committed_ids();

    doc.undo();
    doc.undo();
    assert_eq!(doc.committed_ids(), [ids[0]]);
    // stroke3 was undone first, so stroke2 is on top (last)
    assert_eq!(doc.redo_ids(), [ids[2], ids[1]]);
    assert_eq!(doc.redo_buffer().last().unwrap().id(), ids[1]);

    doc.redo();
    assert_eq!(doc.committed_ids(), [ids[0], ids[1]]);
    assert_eq!(doc.redo_ids(), [ids[2]]);
}

#[test]
fn test_new_gesture_invalidates_redo_history() {
    let mut doc = Document::new();
    commit_stroke(&mut doc, 1.0);
    commit_stroke(&mut doc, 2.0);
    doc.undo();
    assert_eq!(doc.redo_buffer().len(), 1);

    doc.begin_stroke(5.0, 5.0, style());
    assert!(doc.redo_buffer().is_empty());
    assert_eq!(doc.len(), 2);

    doc.undo();
    doc.begin_sticker(1.0, 1.0, "★", 0.0).unwrap();
    assert!(doc.redo_buffer().is_empty());
}

#[test]
fn test_clear_is_not_redoable() {
    let mut doc = Document::new();
    commit_stroke(&mut doc, 1.0);
    commit_stroke(&mut doc, 2.0);
    doc.undo();

    doc.clear();
    assert!(doc.is_empty());
    assert!(doc.redo_buffer().is_empty());
    assert!(!doc.redo());
    assert!(doc.is_empty());
}

#[test]
fn test_single_click_commits_a_dot() {
    let mut pad = sketchpad();
    pad.handle_input(InputEvent::PointerDown { pos: pos2(7.0, 8.0) });
    pad.handle_input(InputEvent::PointerUp);

    let mut surface = RecordingSurface::new();
    pad.document().replay(&mut surface);
    assert_eq!(
        surface.ops(),
        &[SurfaceOp::Dot {
            center: pos2(7.0, 8.0),
            radius: 1.5,
            color: Color32::BLACK,
        }]
    );
}

#[test]
fn test_controller_drag_builds_stroke_and_notifies() {
    let mut pad = sketchpad();
    let log = EventLog::new();
    pad.subscribe_all(log.clone());

    pad.handle_input(InputEvent::PointerDown { pos: pos2(10.0, 10.0) });
    pad.handle_input(InputEvent::PointerMove { pos: pos2(20.0, 10.0) });
    pad.handle_input(InputEvent::PointerMove { pos: pos2(20.0, 20.0) });
    pad.handle_input(InputEvent::PointerUp);

    let stroke = pad.document().committed()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 3);
    assert_eq!(stroke.style().thickness, 3.0);
    assert_eq!(log.events(), [SketchEvent::ContentsChanged; 3]);

    // moving after the gesture only moves the preview
    log.clear();
    pad.handle_input(InputEvent::PointerMove { pos: pos2(30.0, 30.0) });
    assert_eq!(log.events(), [SketchEvent::PointerMoved]);
    assert_eq!(pad.document().committed()[0].as_stroke().unwrap().points().len(), 3);
}

#[test]
fn test_sticker_drag_repositions_placed_sticker() {
    let mut pad = sketchpad();
    pad.apply(Action::SelectSticker("🎮".to_owned())).unwrap();
    pad.handle_input(InputEvent::PointerDown { pos: pos2(10.0, 10.0) });
    pad.handle_input(InputEvent::PointerMove { pos: pos2(40.0, 50.0) });
    pad.handle_input(InputEvent::PointerUp);

    let sticker = pad.document().committed()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), pos2(40.0, 50.0));
    assert_eq!(sticker.style().glyph, "🎮");
}

#[test]
fn test_sticker_without_glyph_does_nothing() {
    let mut pad = sketchpad();
    pad.handle_input(InputEvent::PointerDown { pos: pos2(1.0, 1.0) });
    pad.handle_input(InputEvent::PointerUp);
    pad.apply(Action::Undo).unwrap();
    assert_eq!(pad.document().redo_buffer().len(), 1);

    pad.apply(Action::SelectSticker(String::new())).unwrap();
    let log = EventLog::new();
    pad.subscribe_contents(Box::new(log.clone()));
    pad.handle_input(InputEvent::PointerDown { pos: pos2(5.0, 5.0) });

    assert!(pad.document().is_empty());
    assert_eq!(pad.document().redo_buffer().len(), 1);
    assert!(!pad.session().is_drawing());
    assert!(log.events().is_empty());
}

#[test]
fn test_strokes_keep_the_style_they_were_created_with() {
    let mut pad = sketchpad();
    pad.handle_input(InputEvent::PointerDown { pos: pos2(1.0, 1.0) });
    pad.handle_input(InputEvent::PointerUp);
    pad.apply(Action::SelectMarker(10.0)).unwrap();
    pad.handle_input(InputEvent::PointerDown { pos: pos2(2.0, 2.0) });
    pad.handle_input(InputEvent::PointerUp);

    let thicknesses: Vec<f32> = pad
        .document()
        .committed()
        .iter()
        .map(|c| c.as_stroke().unwrap().style().thickness)
        .collect();
    assert_eq!(thicknesses, [3.0, 10.0]);
}
