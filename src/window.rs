use crate::config::DriverConfig;
use crate::keymap::Keymap;
use anyhow::Result;
use snakehost_core::{bootstrap, Engine};
use std::cell::RefCell;
use std::rc::Rc;
use winit::dpi::LogicalSize;
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Run the driver against a real window.
///
/// The tick timer is the event loop itself: after each step the
/// control flow is set to `WaitUntil(next_deadline)`, with the
/// deadline anchored to the step's completion, so a slow step delays
/// the next one instead of stacking behind it. Keyboard events and
/// timer wakeups interleave on this one thread, which means a
/// keypress arriving between two steps always reaches the engine
/// before the next step runs.
pub fn run<E: Engine + 'static>(mut engine: E, config: &DriverConfig) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(config.window.title.clone())
        .with_inner_size(LogicalSize::new(
            config.window.width,
            config.window.height,
        ))
        .build(&event_loop)?;

    let keymap = Keymap::from_config(config);
    let mut scheduler = bootstrap(&mut engine)?;

    let first_deadline = scheduler
        .next_deadline()
        .expect("scheduler running after bootstrap");
    event_loop.set_control_flow(ControlFlow::WaitUntil(first_deadline));

    // Step failures are fatal; the loop callback can only exit, so the
    // error is parked here and returned once the loop unwinds.
    let step_error: Rc<RefCell<Option<anyhow::Error>>> = Rc::new(RefCell::new(None));
    let step_error_sink = Rc::clone(&step_error);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window closed; quitting");
                elwt.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                // Every press is forwarded in delivery order, auto-repeat
                // included. The window owns the keyboard while focused, so
                // no platform default (scrolling etc.) fires for these keys.
                if event.state.is_pressed() {
                    match keymap.code_for(&event.physical_key) {
                        Some(code) => engine.submit_keypress(code),
                        None => {
                            tracing::trace!(key = ?event.physical_key, "key without engine code")
                        }
                    }
                }
            }
            _ => {}
        },
        Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
            match scheduler.run_step(&mut engine) {
                Ok(next_deadline) => {
                    elwt.set_control_flow(ControlFlow::WaitUntil(next_deadline));
                }
                Err(err) => {
                    tracing::error!(%err, "simulation step failed; stopping");
                    *step_error_sink.borrow_mut() = Some(err);
                    elwt.exit();
                }
            }
        }
        _ => {}
    })?;

    if let Some(err) = step_error.borrow_mut().take() {
        return Err(err);
    }
    Ok(())
}
