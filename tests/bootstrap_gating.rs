use snakehost_core::{bootstrap, run_paced, NullSource};
use snakehost_testkit::{CallKind, RecordingEngine};

#[test]
fn failed_init_reaches_nothing_else() {
    let mut engine = RecordingEngine::new(10).with_failing_init();

    let err = bootstrap(&mut engine).unwrap_err();
    assert!(
        format!("{err:#}").contains("engine initialization failed"),
        "unexpected error: {err:#}"
    );

    // No tick-rate query, no keypress, no step. Nothing at all.
    assert!(engine.calls().is_empty());
}

#[test]
fn tick_rate_is_queried_exactly_once() {
    let mut engine = RecordingEngine::new(100);
    let mut scheduler = bootstrap(&mut engine).expect("bootstrap");

    run_paced(&mut engine, &mut scheduler, &mut NullSource, Some(5)).expect("paced run");

    assert_eq!(engine.count(&CallKind::Init), 1);
    assert_eq!(engine.count(&CallKind::TickRate), 1);
    assert_eq!(engine.count(&CallKind::StepStart), 5);
}

#[test]
fn step_failure_is_fatal_and_stops_the_loop() {
    let mut engine = RecordingEngine::new(100).with_failing_step(2);
    let mut scheduler = bootstrap(&mut engine).expect("bootstrap");

    let err = run_paced(&mut engine, &mut scheduler, &mut NullSource, None).unwrap_err();
    assert!(
        format!("{err:#}").contains("simulation step failed"),
        "unexpected error: {err:#}"
    );

    // The second step began, failed, and nothing ran afterwards.
    assert_eq!(engine.count(&CallKind::StepStart), 2);
    assert_eq!(engine.count(&CallKind::StepEnd), 1);
    let calls = engine.calls();
    assert_eq!(calls.last().expect("calls recorded").kind, CallKind::StepStart);
}
