//! Integration tests: commit / undo / redo through the canvas surface.
//!
//! Runs the same scenarios against both history modes where their
//! behavior is meant to agree, and pins down where they differ.

use pretty_assertions::assert_eq;
use tc_core::config::{CanvasConfig, HistoryMode, IdAllocation};
use tc_core::model::Element;
use tc_editor::CanvasSurface;

fn conventional() -> CanvasSurface {
    CanvasSurface::new(CanvasConfig::default())
}

fn legacy() -> CanvasSurface {
    CanvasSurface::new(CanvasConfig::legacy())
}

fn both() -> [CanvasSurface; 2] {
    [conventional(), legacy()]
}

fn add(surface: &mut CanvasSurface, text: &str) {
    surface.set_pending_text(text);
    assert!(surface.submit(), "submit {text:?} rejected");
}

fn texts(surface: &CanvasSurface) -> Vec<&str> {
    surface.elements().iter().map(Element::text).collect()
}

fn ids(surface: &CanvasSurface) -> Vec<u64> {
    surface.elements().iter().map(|e| e.id().get()).collect()
}

// ─── Commit ─────────────────────────────────────────────────────────────

#[test]
fn each_commit_adds_one_element_with_index_id() {
    for mut surface in both() {
        for (i, text) in ["a", "b", "c", "d"].into_iter().enumerate() {
            add(&mut surface, text);
            assert_eq!(surface.elements().len(), i + 1);
            assert_eq!(surface.elements()[i].id().get(), i as u64);
        }
    }
}

#[test]
fn whitespace_submit_leaves_store_alone() {
    for mut surface in both() {
        add(&mut surface, "keep");
        surface.set_pending_text("   ");
        assert!(!surface.submit());
        assert_eq!(texts(&surface), vec!["keep"]);
    }
}

// ─── Empty stacks ───────────────────────────────────────────────────────

#[test]
fn undo_on_empty_history_is_noop() {
    for mut surface in both() {
        assert!(!surface.undo());
        assert!(surface.elements().is_empty());
        assert!(!surface.can_undo());
    }
}

#[test]
fn redo_on_empty_future_is_noop() {
    for mut surface in both() {
        add(&mut surface, "x");
        assert!(!surface.redo());
        assert_eq!(texts(&surface), vec!["x"]);
    }
}

// ─── Round trips ────────────────────────────────────────────────────────

#[test]
fn commit_undo_redo_round_trip() {
    for mut surface in both() {
        add(&mut surface, "first");
        let before: Vec<Element> = surface.elements().to_vec();

        add(&mut surface, "Hello");
        let with_hello: Vec<Element> = surface.elements().to_vec();

        assert!(surface.undo());
        assert_eq!(surface.elements(), before.as_slice());

        assert!(surface.redo());
        assert_eq!(surface.elements(), with_hello.as_slice());
    }
}

#[test]
fn two_commits_walk_back_and_forth() {
    for mut surface in both() {
        add(&mut surface, "A");
        add(&mut surface, "B");
        assert_eq!(texts(&surface), vec!["A", "B"]);
        assert_eq!(ids(&surface), vec![0, 1]);

        surface.undo();
        assert_eq!(texts(&surface), vec!["A"]);
        surface.undo();
        assert_eq!(texts(&surface), Vec::<&str>::new());
        surface.redo();
        assert_eq!(texts(&surface), vec!["A"]);
        surface.redo();
        assert_eq!(texts(&surface), vec!["A", "B"]);
    }
}

// ─── Style freezing ─────────────────────────────────────────────────────

#[test]
fn style_is_frozen_at_commit() {
    for mut surface in both() {
        surface.styles_mut().toggle_bold();
        add(&mut surface, "X");
        assert!(surface.elements()[0].style().bold);

        surface.styles_mut().toggle_bold();
        assert!(!surface.style().bold);
        assert!(surface.elements()[0].style().bold);
    }
}

// ─── Where the modes differ ─────────────────────────────────────────────

#[test]
fn conventional_commit_after_undo_clears_redo() {
    let mut surface = conventional();
    add(&mut surface, "A");
    add(&mut surface, "B");
    surface.undo();
    add(&mut surface, "C");

    assert!(!surface.can_redo());
    assert!(!surface.redo());
    assert_eq!(texts(&surface), vec!["A", "C"]);
}

#[test]
fn legacy_commit_after_undo_keeps_stale_redo() {
    let mut surface = legacy();
    add(&mut surface, "A");
    add(&mut surface, "B");
    surface.undo();
    add(&mut surface, "C");

    assert!(surface.can_redo());
    assert!(surface.redo());
    // The stale redo entry brings back B and drops C.
    assert_eq!(texts(&surface), vec!["A", "B"]);
}

#[test]
fn monotonic_ids_never_repeat() {
    let mut surface = conventional();
    assert_eq!(surface.config().ids, IdAllocation::Monotonic);
    add(&mut surface, "A");
    add(&mut surface, "B");
    surface.undo();
    add(&mut surface, "C");
    assert_eq!(ids(&surface), vec![0, 2]);
}

#[test]
fn positional_ids_repeat_after_undo() {
    let mut surface = legacy();
    assert_eq!(surface.config().history, HistoryMode::Legacy);
    add(&mut surface, "A");
    add(&mut surface, "B");
    surface.undo();
    add(&mut surface, "C");
    assert_eq!(ids(&surface), vec![0, 1]);
}

// ─── Drags stay out of history ──────────────────────────────────────────

#[test]
fn reposition_is_not_undoable() {
    for mut surface in both() {
        add(&mut surface, "A");
        add(&mut surface, "B");
        let a_before = surface.elements()[0].clone();

        surface.drag_end(1, 120.0, 30.0).unwrap();
        assert_eq!(surface.elements()[0], a_before);
        let b = &surface.elements()[1];
        assert_eq!((b.position().x, b.position().y), (120.0, 30.0));
        assert_eq!(b.text(), "B");

        // Undo removes B rather than reverting its move.
        surface.undo();
        assert_eq!(texts(&surface), vec!["A"]);
    }
}
