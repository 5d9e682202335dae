use snakehost_core::{bootstrap, run_paced, NullSource};
use snakehost_testkit::RecordingEngine;
use std::time::Duration;

#[test]
fn tick_rate_10_paces_steps_100ms_apart() {
    let mut engine = RecordingEngine::new(10);
    let mut scheduler = bootstrap(&mut engine).expect("bootstrap");

    run_paced(&mut engine, &mut scheduler, &mut NullSource, Some(4)).expect("paced run");

    let spans = engine.step_spans();
    assert_eq!(spans.len(), 4);

    for pair in spans.windows(2) {
        let (_, prev_end) = pair[0];
        let (next_start, _) = pair[1];
        let gap = next_start - prev_end;
        // Anchored to completion: the sleep never wakes early, so the
        // gap is at least the interval (small slack for offset
        // measurement noise); the upper bound is loose to tolerate a
        // busy test host.
        assert!(gap >= Duration::from_millis(95), "gap too short: {gap:?}");
        assert!(gap <= Duration::from_millis(500), "gap too long: {gap:?}");
    }
}

#[test]
fn slow_steps_never_overlap_or_stack() {
    // Interval 50ms, but each step takes 80ms: the next step must still
    // start a full interval after the previous one *completes*.
    let mut engine = RecordingEngine::new(20).with_step_delay(Duration::from_millis(80));
    let mut scheduler = bootstrap(&mut engine).expect("bootstrap");

    run_paced(&mut engine, &mut scheduler, &mut NullSource, Some(3)).expect("paced run");

    let spans = engine.step_spans();
    assert_eq!(spans.len(), 3);

    for pair in spans.windows(2) {
        let (_, prev_end) = pair[0];
        let (next_start, _) = pair[1];
        assert!(
            next_start >= prev_end,
            "step invocations overlapped: {spans:?}"
        );
        let gap = next_start - prev_end;
        assert!(gap >= Duration::from_millis(45), "gap too short: {gap:?}");
    }
}
