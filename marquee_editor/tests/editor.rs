// Copyright 2025 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `marquee_editor` crate.
//!
//! These run whole press/move/release sequences against a box editor and
//! check the resulting collection, selection and exports.

use kurbo::{Point, Rect, Size};
use marquee_editor::{
    CountPolicy, DiscardReason, Editor, EditorConfig, EditorState, PressOutcome, ReleaseOutcome,
};
use marquee_geometry::{DisplayRect, NormPoint};
use marquee_shapes::{BoundingBox, Corner, DragOutcome, Provenance, ShapeMeta};

fn frame() -> DisplayRect {
    DisplayRect::new(Rect::new(0.0, 0.0, 1000.0, 1000.0)).unwrap()
}

fn draw(editor: &mut Editor<BoundingBox>, from: (f64, f64), to: (f64, f64)) -> ReleaseOutcome {
    let frame = frame();
    editor.unselect();
    editor.press(from.into(), &frame);
    editor.move_to(to.into(), &frame, 1.0);
    editor.release(to.into(), &frame, 1.0)
}

#[test]
fn drawing_a_box_commits_the_exact_diagonal() {
    let mut editor = Editor::<BoundingBox>::default();
    let out = draw(&mut editor, (100.0, 100.0), (500.0, 500.0));
    assert_eq!(out, ReleaseOutcome::Committed { index: 0, evicted: 0 });
    assert_eq!(editor.shapes().len(), 1);

    let b = &editor.shapes().shapes()[0];
    assert_eq!(b.primary(), NormPoint::new(0.1, 0.1));
    assert_eq!(b.opposite(), NormPoint::new(0.5, 0.5));
    assert_eq!(b.corner(Corner::PrimaryRow), NormPoint::new(0.5, 0.1));
    assert_eq!(b.corner(Corner::PrimaryColumn), NormPoint::new(0.1, 0.5));
}

#[test]
fn exactly_two_evicts_the_most_recent_shape() {
    let config = EditorConfig {
        count_policy: CountPolicy::ExactlyTwo,
        ..EditorConfig::default()
    };
    let mut editor = Editor::<BoundingBox>::new(config).unwrap();
    draw(&mut editor, (100.0, 100.0), (300.0, 300.0));
    draw(&mut editor, (400.0, 400.0), (600.0, 600.0));
    let out = draw(&mut editor, (650.0, 100.0), (900.0, 300.0));
    assert_eq!(out, ReleaseOutcome::Committed { index: 1, evicted: 1 });

    let shapes = editor.shapes().shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].primary(), NormPoint::new(0.1, 0.1));
    assert_eq!(shapes[1].primary(), NormPoint::new(0.65, 0.1));
}

#[test]
fn exactly_one_replaces_the_shape() {
    let config = EditorConfig {
        count_policy: CountPolicy::ExactlyOne,
        ..EditorConfig::default()
    };
    let mut editor = Editor::<BoundingBox>::new(config).unwrap();
    draw(&mut editor, (100.0, 100.0), (300.0, 300.0));
    draw(&mut editor, (400.0, 400.0), (600.0, 600.0));
    assert_eq!(editor.shapes().len(), 1);
    assert_eq!(editor.shapes().shapes()[0].primary(), NormPoint::new(0.4, 0.4));
}

#[test]
fn small_releases_never_change_the_count() {
    let mut editor = Editor::<BoundingBox>::default();
    draw(&mut editor, (100.0, 100.0), (300.0, 300.0));
    let before = editor.shapes().len();

    // Too thin, too short, too small a diagonal, and too small once zoomed.
    for (to, zoom) in [
        ((700.0, 505.0), 1.0),
        ((505.0, 700.0), 1.0),
        ((525.0, 525.0), 1.0),
        ((530.0, 530.0), 4.0),
    ] {
        let frame = frame();
        editor.unselect();
        editor.press(Point::new(500.0, 500.0), &frame);
        editor.move_to(to.into(), &frame, zoom);
        let out = editor.release(to.into(), &frame, zoom);
        assert_eq!(out, ReleaseOutcome::Discarded(DiscardReason::TooSmall), "to {to:?}");
        assert_eq!(editor.shapes().len(), before);
    }
}

#[test]
fn out_of_reach_drag_leaves_geometry_untouched() {
    let frame = frame();
    let mut editor = Editor::<BoundingBox>::default();
    draw(&mut editor, (200.0, 200.0), (600.0, 500.0));
    let before = editor.shapes().shapes()[0].clone();

    // The shape stays selected after commit, so the next press starts a drag.
    editor.press(Point::new(690.0, 530.0), &frame);
    let out = editor.move_to(Point::new(690.0, 530.0), &frame, 1.0);
    assert_eq!(out, Some(DragOutcome::OutOfReach { distance_sq: 9000.0 }));
    assert_eq!(editor.shapes().shapes()[0], before);
}

#[test]
fn dragging_the_selected_box_resizes_it() {
    let frame = frame();
    let mut editor = Editor::<BoundingBox>::default();
    draw(&mut editor, (200.0, 200.0), (600.0, 500.0));

    editor.press(Point::new(600.0, 500.0), &frame);
    for x in [610.0, 630.0, 650.0] {
        let out = editor.move_to(Point::new(x, 500.0), &frame, 1.0);
        assert!(out.is_some_and(|o| o.is_applied()));
    }
    let out = editor.release(Point::new(650.0, 500.0), &frame, 1.0);
    // 50 px of travel is not enough to re-snap.
    assert_eq!(out, ReleaseOutcome::Edited { index: 0, resnapped: false });
    assert_eq!(editor.shapes().shapes()[0].opposite(), NormPoint::new(0.65, 0.5));
}

#[test]
fn committed_corners_snap_to_candidates() {
    let mut editor = Editor::<BoundingBox>::default();
    editor.set_candidates(vec![NormPoint::new(0.12, 0.09), NormPoint::new(0.9, 0.9)]);
    draw(&mut editor, (100.0, 100.0), (500.0, 500.0));
    let b = &editor.shapes().shapes()[0];
    assert_eq!(b.primary(), NormPoint::new(0.12, 0.09));
    assert_eq!(b.opposite(), NormPoint::new(0.5, 0.5));
}

#[test]
fn long_edit_drags_resnap() {
    let frame = frame();
    let mut editor = Editor::<BoundingBox>::default();
    draw(&mut editor, (200.0, 200.0), (500.0, 500.0));
    editor.set_candidates(vec![NormPoint::new(0.61, 0.6)]);

    editor.press(Point::new(500.0, 500.0), &frame);
    for step in 1..=10 {
        let d = f64::from(step) * 10.0;
        editor.move_to(Point::new(500.0 + d, 500.0 + d), &frame, 1.0);
    }
    let out = editor.release(Point::new(600.0, 600.0), &frame, 1.0);
    assert_eq!(out, ReleaseOutcome::Edited { index: 0, resnapped: true });
    assert_eq!(editor.shapes().shapes()[0].opposite(), NormPoint::new(0.61, 0.6));
}

#[test]
fn merge_skips_exact_duplicates() {
    let mut editor = Editor::<BoundingBox>::default();
    let a = BoundingBox::with_meta(
        NormPoint::new(0.1, 0.1),
        NormPoint::new(0.3, 0.3),
        ShapeMeta::ai_generated(),
    );
    let b = BoundingBox::new(NormPoint::new(0.5, 0.5), NormPoint::new(0.7, 0.7));
    assert_eq!(editor.merge_external([a.clone(), b.clone()]), 2);
    assert_eq!(editor.merge_external([a, b.clone(), b]), 0);
    // Same corners recorded the other way round count as a different shape.
    let flipped = BoundingBox::new(NormPoint::new(0.3, 0.3), NormPoint::new(0.1, 0.1));
    assert_eq!(editor.merge_external([flipped]), 1);
    assert_eq!(editor.shapes().len(), 3);
}

#[test]
fn delete_removes_only_the_selection() {
    let mut editor = Editor::<BoundingBox>::default();
    draw(&mut editor, (100.0, 100.0), (300.0, 300.0));
    draw(&mut editor, (400.0, 400.0), (600.0, 600.0));
    assert!(editor.select(0));
    assert!(editor.delete_selected().is_some());
    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.shapes().shapes()[0].primary(), NormPoint::new(0.4, 0.4));
    assert!(editor.delete_selected().is_none());
    assert!(!editor.select(4));
}

#[test]
fn export_for_submission_clears_pending_flags() {
    let mut editor = Editor::<BoundingBox>::default();
    editor.merge_external([BoundingBox::with_meta(
        NormPoint::new(0.25, 0.5),
        NormPoint::new(0.75, 0.25),
        ShapeMeta::ai_generated(),
    )]);

    let draft = editor.export(Size::new(800.0, 400.0), false);
    assert!(draft[0].should_remove);
    assert_eq!(draft[0].points, [[200.0, 100.0], [600.0, 200.0]]);
    assert_eq!(draft[0].annotation_state, Provenance::AiGenerated);

    let submitted = editor.export(Size::new(800.0, 400.0), true);
    assert!(!submitted[0].should_remove);
    let json = serde_json::to_value(&submitted).unwrap();
    assert_eq!(json[0]["should_remove"], false);
}

#[test]
fn config_round_trips_through_json() {
    let config: EditorConfig = serde_json::from_str(
        r#"{ "size_limits": { "min_side": 10.0 }, "count_policy": "exactly_one" }"#,
    )
    .unwrap();
    assert_eq!(config.size_limits.min_side, 10.0);
    assert_eq!(config.size_limits.min_diagonal, 40.0);
    assert_eq!(config.count_policy, CountPolicy::ExactlyOne);
    assert_eq!(config.handle_reach_sq, 6000.0);

    let invalid = EditorConfig {
        handle_reach_sq: f64::INFINITY,
        ..EditorConfig::default()
    };
    assert!(Editor::<BoundingBox>::new(invalid).is_err());
}

#[test]
fn selecting_abandons_the_draft() {
    let frame = frame();
    let mut editor = Editor::<BoundingBox>::default();
    editor.merge_external([BoundingBox::new(
        NormPoint::new(0.6, 0.6),
        NormPoint::new(0.9, 0.9),
    )]);

    assert_eq!(
        editor.press(Point::new(100.0, 100.0), &frame),
        PressOutcome::DrawingStarted
    );
    editor.move_to(Point::new(400.0, 400.0), &frame, 1.0);
    assert!(editor.select(0));
    assert_eq!(editor.state(), EditorState::Selected(0));
    assert_eq!(editor.draft(), None);

    let out = editor.release(Point::new(400.0, 400.0), &frame, 1.0);
    assert_eq!(out, ReleaseOutcome::Edited { index: 0, resnapped: false });
    assert_eq!(editor.shapes().len(), 1);
}

#[test]
fn merged_overflow_is_not_trimmed_on_commit() {
    let config = EditorConfig {
        count_policy: CountPolicy::ExactlyTwo,
        ..EditorConfig::default()
    };
    let mut editor = Editor::<BoundingBox>::new(config).unwrap();
    let merged = editor.merge_external([
        BoundingBox::new(NormPoint::new(0.05, 0.05), NormPoint::new(0.2, 0.2)),
        BoundingBox::new(NormPoint::new(0.3, 0.05), NormPoint::new(0.45, 0.2)),
        BoundingBox::new(NormPoint::new(0.55, 0.05), NormPoint::new(0.7, 0.2)),
    ]);
    assert_eq!(merged, 3);

    let out = draw(&mut editor, (100.0, 500.0), (400.0, 800.0));
    assert_eq!(out, ReleaseOutcome::Committed { index: 3, evicted: 0 });
    assert_eq!(editor.shapes().len(), 4);
}

#[test]
fn gestures_never_touch_hints() {
    let frame = frame();
    let mut editor = Editor::<BoundingBox>::default();
    let hint = BoundingBox::new(NormPoint::new(0.2, 0.2), NormPoint::new(0.6, 0.5));
    editor.set_hints(vec![hint.clone()]);

    // A press on the hint starts a draft instead of selecting it.
    assert_eq!(
        editor.press(Point::new(600.0, 500.0), &frame),
        PressOutcome::DrawingStarted
    );
    editor.move_to(Point::new(800.0, 800.0), &frame, 1.0);
    editor.release(Point::new(800.0, 800.0), &frame, 1.0);

    // Dragging the committed shape, which shares a corner with the hint.
    editor.press(Point::new(600.0, 500.0), &frame);
    editor.move_to(Point::new(550.0, 450.0), &frame, 1.0);
    editor.release(Point::new(550.0, 450.0), &frame, 1.0);
    editor.delete_selected();
    editor.undo();
    editor.reset();

    assert_eq!(editor.shapes().hints(), &[hint]);
}
