use std::cell::{Cell, RefCell};
use std::rc::Rc;

use approx::assert_relative_eq;
use vizij_clock_core::{ClockConfig, ClockManager, ClockState, Repeat, Timer};

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

fn bump(c: &Rc<Cell<u32>>) -> impl FnMut() + 'static {
    let c = Rc::clone(c);
    move || c.set(c.get() + 1)
}

/// it should register on start, advance on update and complete at duration
#[test]
fn timer_plays_once_and_completes() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0));
    let completed = counter();
    timer.on_completed(bump(&completed));

    assert_eq!(timer.state(), ClockState::Stopped);
    assert!(manager.is_empty());

    timer.start();
    assert_eq!(timer.state(), ClockState::Playing);
    assert!(manager.contains(timer.id()));

    manager.update(0.5);
    assert_relative_eq!(timer.progress(), 0.5);
    assert_eq!(completed.get(), 0);

    manager.update(0.5);
    assert_eq!(completed.get(), 1);
    assert_eq!(timer.state(), ClockState::Stopped);
    assert_relative_eq!(timer.progress(), 1.0);
    assert!(!timer.is_active());
    assert!(manager.is_empty());

    manager.update(0.5);
    assert_eq!(completed.get(), 1);
}

/// it should keep progress and elapsed time across pause/resume
#[test]
fn pause_and_resume_keep_the_playhead() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(2.0));
    timer.start();
    manager.update(0.5);

    timer.pause();
    assert_eq!(timer.state(), ClockState::Paused);
    assert_eq!(manager.active_count(), 0);
    manager.update(1.0);
    assert_relative_eq!(timer.progress(), 0.25);
    assert_relative_eq!(timer.total_elapsed(), 0.5);

    timer.resume();
    assert_eq!(timer.state(), ClockState::Playing);
    manager.update(0.5);
    assert_relative_eq!(timer.progress(), 0.5);
    assert_relative_eq!(timer.total_elapsed(), 1.0);
}

/// it should ignore pause on a stopped clock and resume a stopped clock in place
#[test]
fn pause_and_resume_guards() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0));
    timer.pause();
    assert_eq!(timer.state(), ClockState::Stopped);

    timer.start();
    manager.update(0.25);
    timer.stop();
    assert_eq!(timer.state(), ClockState::Stopped);
    assert!(manager.is_empty());

    timer.resume();
    manager.update(0.25);
    assert_relative_eq!(timer.progress(), 0.5);

    timer.resume();
    assert_eq!(manager.active_count(), 1);
}

/// it should restart from zero on every start
#[test]
fn start_resets_elapsed_time() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0));
    timer.start();
    manager.update(0.75);
    timer.start();
    assert_relative_eq!(timer.progress(), 0.0);
    assert_relative_eq!(timer.total_elapsed(), 0.0);
    assert_eq!(manager.active_count(), 1);
}

/// it should wait out the begin offset and fire begin exactly once
#[test]
fn begin_offset_delays_progress() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0).with_begin_offset(0.5));
    let began = counter();
    timer.on_begin(bump(&began));

    timer.start();
    manager.update(0.25);
    assert_eq!(began.get(), 0);
    assert_relative_eq!(timer.progress(), 0.0);

    manager.update(0.5);
    assert_eq!(began.get(), 1);
    assert_relative_eq!(timer.progress(), 0.25);

    manager.update(0.25);
    assert_eq!(began.get(), 1);
}

/// it should jump straight past a pending begin offset
#[test]
fn skip_to_begin_removes_the_wait() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0).with_begin_offset(4.0));
    timer.start();
    timer.skip_to_begin();
    manager.update(0.25);
    assert_relative_eq!(timer.progress(), 0.25);
}

/// it should count one loop per there-and-back pair under auto-reverse
#[test]
fn looped_counts_pairs_under_auto_reverse() {
    let manager = ClockManager::new();
    let timer = Timer::new(
        &manager,
        ClockConfig::new(1.0)
            .with_repeat(Repeat::Forever)
            .with_auto_reverse(true),
    );
    let loops = counter();
    timer.on_looped(bump(&loops));
    timer.start();
    manager.update(2.5);
    assert_eq!(loops.get(), 1);
    assert_relative_eq!(timer.progress(), 0.5);
    assert_eq!(timer.state(), ClockState::Playing);
}

/// it should fire looped once per boundary crossed in a single large step
#[test]
fn catch_up_fires_every_loop() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0));
    timer.set_looping(true);
    assert!(timer.is_looping());
    let loops = counter();
    timer.on_looped(bump(&loops));
    timer.start();
    manager.update(10.0);
    assert_eq!(loops.get(), 10);
    assert!(timer.is_active());

    timer.set_looping(false);
    assert_eq!(timer.repeat(), Repeat::Count(0));
    manager.update(0.5);
    assert_eq!(timer.state(), ClockState::Stopped);
}

/// it should play the first pass plus the requested repeats
#[test]
fn finite_repeat_then_complete() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0));
    timer.set_repeat(Repeat::Count(1));
    let events = Rc::new(RefCell::new(Vec::new()));
    {
        let e = Rc::clone(&events);
        timer.on_looped(move || e.borrow_mut().push("looped"));
        let e = Rc::clone(&events);
        timer.on_completed(move || e.borrow_mut().push("completed"));
    }
    timer.start();
    manager.update(1.5);
    manager.update(0.5);
    assert_eq!(*events.borrow(), vec!["looped", "completed"]);
}

/// it should allow restarting from inside the completed callback
#[test]
fn restart_from_completed_callback() {
    let manager = ClockManager::new();
    let timer = Timer::new(&manager, ClockConfig::new(1.0));
    let began = counter();
    let completed = counter();
    timer.on_begin(bump(&began));
    {
        let weak = timer.downgrade();
        let completed = Rc::clone(&completed);
        timer.on_completed(move || {
            completed.set(completed.get() + 1);
            if completed.get() == 1 {
                if let Some(t) = weak.upgrade() {
                    t.start();
                }
            }
        });
    }

    timer.start();
    manager.update(1.0);
    assert_eq!(completed.get(), 1);
    assert_eq!(timer.state(), ClockState::Playing);
    assert_relative_eq!(timer.progress(), 0.0);

    manager.update(0.5);
    assert_eq!(began.get(), 2);
    assert_relative_eq!(timer.progress(), 0.5);

    manager.update(0.5);
    assert_eq!(completed.get(), 2);
    assert!(manager.is_empty());
}

/// it should keep progress within [0, 1] for every step pattern
#[test]
fn progress_stays_in_range() {
    let manager = ClockManager::new();
    let timer = Timer::new(
        &manager,
        ClockConfig::new(0.75)
            .with_begin_offset(0.125)
            .with_repeat(Repeat::Count(3))
            .with_auto_reverse(true),
    );
    timer.start();
    for step in [0.0625f32, 0.5, 0.3125, 1.25, 0.0, 0.125, 2.0] {
        manager.update(step);
        let p = timer.progress();
        assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
    }
}
