use snakehost_core::{bootstrap, run_paced};
use snakehost_testkit::{write_jsonl, QueueSource, RecordingEngine};

#[test]
fn driver_call_log_can_be_written() {
    let mut engine = RecordingEngine::new(50);
    let mut scheduler = bootstrap(&mut engine).expect("bootstrap");
    let mut keys = QueueSource::from_codes(&[37, 38, 39]);
    run_paced(&mut engine, &mut scheduler, &mut keys, Some(3)).expect("paced run");

    let path = std::env::temp_dir().join("snakehost_call_log.jsonl");
    write_jsonl(&path, &engine.calls()).expect("can write log");

    let contents = std::fs::read_to_string(&path).expect("can read log");
    // init + tick_rate + 3 keypresses + 3 step start/end pairs
    assert_eq!(contents.lines().count(), 11);
}
