//! History manager tests against raw snapshots.

use kurbo::Point;
use moodboard::CanvasItem;
use moodboard::history::{History, Snapshot};
use std::sync::Arc;

fn snapshot(len: usize) -> Snapshot {
    Arc::new(
        (0..len)
            .map(|i| CanvasItem::note(Point::new(i as f64 * 250.0, 0.0)))
            .collect(),
    )
}

#[test]
fn test_linearity() {
    let mut history = History::new(snapshot(0));
    let (a, b, c) = (snapshot(1), snapshot(2), snapshot(3));

    history.commit(a);
    history.commit(b);
    history.undo();
    history.commit(Arc::clone(&c));

    assert!(history.redo().is_none());
    assert!(Arc::ptr_eq(&history.current(), &c));
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut history = History::new(snapshot(0));
    let commits: Vec<Snapshot> = (1..=6).map(snapshot).collect();
    for s in &commits {
        assert!(history.commit(Arc::clone(s)));
    }

    for expected in commits.iter().rev().skip(1) {
        assert!(Arc::ptr_eq(&history.undo().unwrap(), expected));
    }
    assert!(history.undo().unwrap().is_empty());
    assert!(!history.can_undo());

    for expected in &commits {
        assert!(Arc::ptr_eq(&history.redo().unwrap(), expected));
    }
    assert!(!history.can_redo());
}

#[test]
fn test_redundant_commit_is_ignored() {
    let mut history = History::new(snapshot(0));
    let a = snapshot(1);
    history.commit(Arc::clone(&a));
    assert!(!history.commit(a));
    assert_eq!(history.len(), 2);
}
