use super::StrokeTracker;
use ink_graphics::Point;

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn points_of(tracker: &StrokeTracker, index: usize) -> Vec<Point> {
    tracker.segments()[index].points().to_vec()
}

#[test]
fn single_pointer_stroke_accumulates_points() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.extend([(1, p(1.0, 1.0))]);
    tracker.extend([(1, p(2.0, 2.0))]);

    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.segments()[0].pointer_id(), 1);
    assert_eq!(
        points_of(&tracker, 0),
        vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]
    );
}

#[test]
fn two_pointers_extend_their_own_segments() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.begin(2, p(5.0, 5.0));
    let extended = tracker.extend([(1, p(1.0, 0.0)), (2, p(5.0, 6.0))]);

    assert_eq!(extended, 2);
    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker.segments()[0].pointer_id(), 1);
    assert_eq!(points_of(&tracker, 0), vec![p(0.0, 0.0), p(1.0, 0.0)]);
    assert_eq!(tracker.segments()[1].pointer_id(), 2);
    assert_eq!(points_of(&tracker, 1), vec![p(5.0, 5.0), p(5.0, 6.0)]);
}

#[test]
fn reused_id_extends_only_the_newest_segment() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.extend([(1, p(1.0, 0.0))]);
    tracker.end(1);
    tracker.begin(1, p(9.0, 9.0));
    tracker.extend([(1, p(9.0, 8.0))]);

    assert_eq!(tracker.len(), 2);
    assert!(tracker.segments().iter().all(|s| s.pointer_id() == 1));
    assert_eq!(points_of(&tracker, 0), vec![p(0.0, 0.0), p(1.0, 0.0)]);
    assert_eq!(points_of(&tracker, 1), vec![p(9.0, 9.0), p(9.0, 8.0)]);
}

#[test]
fn clear_on_empty_tracker_is_a_no_op() {
    let mut tracker = StrokeTracker::new();
    tracker.clear();
    tracker.clear();
    assert!(tracker.is_empty());
    assert_eq!(tracker.segments().len(), 0);
}

#[test]
fn clear_resets_everything() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.begin(2, p(1.0, 1.0));
    tracker.extend([(1, p(2.0, 2.0))]);

    tracker.clear();
    assert!(tracker.segments().is_empty());
    assert!(tracker.current(1).is_none());
    assert_eq!(tracker.extend([(1, p(3.0, 3.0))]), 0);

    tracker.begin(3, p(4.0, 4.0));
    assert_eq!(tracker.len(), 1);
    assert_eq!(points_of(&tracker, 0), vec![p(4.0, 4.0)]);
}

#[test]
fn recorded_points_never_change() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.extend([(1, p(1.0, 1.0))]);
    let before = points_of(&tracker, 0);

    tracker.begin(2, p(7.0, 7.0));
    tracker.extend([(1, p(2.0, 2.0)), (2, p(8.0, 8.0))]);
    tracker.begin(1, p(3.0, 3.0));
    tracker.extend([(1, p(4.0, 4.0))]);

    let after = points_of(&tracker, 0);
    assert_eq!(&after[..before.len()], before.as_slice());
    assert_eq!(after, vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]);
}

#[test]
fn older_segments_with_same_id_are_never_extended() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(4, p(0.0, 0.0));
    tracker.begin(5, p(1.0, 1.0));
    tracker.begin(4, p(2.0, 2.0));
    tracker.begin(4, p(3.0, 3.0));

    for step in 0..5 {
        tracker.extend([(4, p(10.0 + step as f32, 0.0))]);
    }

    assert_eq!(points_of(&tracker, 0), vec![p(0.0, 0.0)]);
    assert_eq!(points_of(&tracker, 2), vec![p(2.0, 2.0)]);
    assert_eq!(tracker.segments()[3].len(), 6);
    assert_eq!(tracker.current(4), tracker.segments().last());
}

#[test]
fn repeated_id_in_one_snapshot_extends_once() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.extend([(1, p(1.0, 1.0))]);
    tracker.begin(1, p(5.0, 5.0));

    let extended = tracker.extend([(1, p(6.0, 6.0)), (1, p(7.0, 7.0))]);

    assert_eq!(extended, 1);
    assert_eq!(points_of(&tracker, 0), vec![p(0.0, 0.0), p(1.0, 1.0)]);
    assert_eq!(points_of(&tracker, 1), vec![p(5.0, 5.0), p(6.0, 6.0)]);
}

#[test]
fn unknown_pointer_is_skipped() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    let extended = tracker.extend([(42, p(1.0, 1.0)), (1, p(2.0, 2.0))]);
    assert_eq!(extended, 1);
    assert_eq!(tracker.len(), 1);
    assert_eq!(points_of(&tracker, 0), vec![p(0.0, 0.0), p(2.0, 2.0)]);
    tracker.end(42);
}

#[test]
fn interleaved_pointers_do_not_mix() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.extend([(1, p(0.0, 1.0))]);
    tracker.begin(2, p(100.0, 0.0));
    tracker.extend([(2, p(100.0, 1.0)), (1, p(0.0, 2.0))]);
    tracker.extend([(2, p(100.0, 2.0))]);
    tracker.end(1);
    tracker.extend([(2, p(100.0, 3.0))]);

    assert!(points_of(&tracker, 0).iter().all(|pt| pt.x == 0.0));
    assert!(points_of(&tracker, 1).iter().all(|pt| pt.x == 100.0));
    assert_eq!(tracker.segments()[0].len(), 3);
    assert_eq!(tracker.segments()[1].len(), 4);
    assert_eq!(tracker.point_count(), 7);
}

#[test]
fn end_does_not_detach_the_segment() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.end(1);
    tracker.extend([(1, p(1.0, 1.0))]);
    assert_eq!(points_of(&tracker, 0), vec![p(0.0, 0.0), p(1.0, 1.0)]);
}

#[test]
fn segments_can_be_read_repeatedly() {
    let mut tracker = StrokeTracker::new();
    tracker.begin(1, p(0.0, 0.0));
    tracker.begin(2, p(1.0, 1.0));
    let first: Vec<_> = tracker.segments().iter().map(|s| s.pointer_id()).collect();
    let second: Vec<_> = tracker.segments().iter().map(|s| s.pointer_id()).collect();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(first, second);
}
