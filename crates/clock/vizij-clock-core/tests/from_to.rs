use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use vizij_clock_core::{
    ClockConfig, ClockManager, ClockState, Color, FromToAnimation, Vec2,
};

/// it should reach the halfway value and then complete at `to`
#[test]
fn linear_float_halfway_then_complete() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 100.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let completed = Rc::new(RefCell::new(0));
    {
        let seen = Rc::clone(&seen);
        anim.set_apply(move |v| seen.borrow_mut().push(*v));
        let completed = Rc::clone(&completed);
        anim.on_completed(move || *completed.borrow_mut() += 1);
    }

    anim.start();
    manager.update(0.5);
    assert_relative_eq!(anim.current_value().unwrap(), 50.0);

    manager.update(0.5);
    assert_eq!(*completed.borrow(), 1);
    assert_relative_eq!(anim.current_value().unwrap(), 100.0);
    assert_eq!(anim.state(), ClockState::Stopped);
    assert_eq!(*seen.borrow(), vec![0.0, 50.0, 100.0]);
}

/// it should produce its first value synchronously on start
#[test]
fn start_delivers_initial_value() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 10i32, 20);
    assert_eq!(anim.current_value(), None);
    anim.start();
    assert_eq!(anim.current_value(), Some(10));
}

/// it should not deliver a value before the begin offset has passed
#[test]
fn begin_offset_delays_first_value() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 1.0);
    anim.set_begin_offset(0.5);
    anim.start();
    assert_eq!(anim.current_value(), None);
    manager.update(0.25);
    assert_eq!(anim.current_value(), None);
    manager.update(0.5);
    assert_relative_eq!(anim.current_value().unwrap(), 0.25);
}

/// it should run backwards on the reverse pass and finish at `from`
#[test]
fn auto_reverse_is_symmetric() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 8.0);
    anim.set_config(ClockConfig::new(1.0).with_auto_reverse(true));
    anim.start();

    manager.update(0.25);
    assert_relative_eq!(anim.current_value().unwrap(), 2.0);
    manager.update(1.0);
    assert_relative_eq!(anim.current_value().unwrap(), 6.0);
    manager.update(0.5);
    assert_relative_eq!(anim.current_value().unwrap(), 2.0);
    manager.update(0.25);
    assert_eq!(anim.state(), ClockState::Stopped);
    assert_relative_eq!(anim.current_value().unwrap(), 0.0);
}

/// it should sample the source at the eased progress
#[test]
fn progress_transform_eases_values() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 100.0);
    anim.set_progress_transform(|p| p * p);
    anim.start();
    manager.update(0.5);
    assert_relative_eq!(anim.current_value().unwrap(), 25.0);
    assert_relative_eq!(anim.progress(), 0.5);

    anim.clear_progress_transform();
    manager.update(0.25);
    assert_relative_eq!(anim.current_value().unwrap(), 75.0);
}

/// it should pick up endpoint changes on the next tick
#[test]
fn endpoints_are_live() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, Vec2::ZERO, Vec2::new(4.0, 8.0));
    anim.start();
    manager.update(0.5);
    assert_eq!(anim.current_value(), Some(Vec2::new(2.0, 4.0)));

    anim.set_to(Vec2::new(8.0, 0.0));
    assert_eq!(anim.to(), Vec2::new(8.0, 0.0));
    assert_eq!(anim.from(), Vec2::ZERO);
    manager.update(0.0);
    assert_eq!(anim.current_value(), Some(Vec2::new(4.0, 0.0)));
}

/// it should use a custom interpolator over the default blend
#[test]
fn custom_interpolator_wins() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 10.0);
    anim.set_interpolate(|a, b, p| if p < 0.5 { *a } else { *b });
    anim.start();
    manager.update(0.25);
    assert_eq!(anim.current_value(), Some(0.0));
    manager.update(0.5);
    assert_eq!(anim.current_value(), Some(10.0));
}

/// it should animate types without a Lerp impl through with_lerp
#[test]
fn explicit_lerp_for_foreign_types() {
    fn step(a: &bool, b: &bool, p: f32) -> bool {
        if p >= 1.0 {
            *b
        } else {
            *a
        }
    }
    let manager = ClockManager::new();
    let anim = FromToAnimation::with_lerp(&manager, false, true, step);
    anim.start();
    manager.update(0.5);
    assert_eq!(anim.current_value(), Some(false));
    manager.update(0.5);
    assert_eq!(anim.current_value(), Some(true));
}

/// it should truncate per channel when blending colours
#[test]
fn color_blend_truncates() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, Color::BLACK, Color::rgba(255, 100, 3, 255));
    anim.start();
    manager.update(0.5);
    assert_eq!(anim.current_value(), Some(Color::rgba(127, 50, 1, 255)));
}

/// it should survive the sink clearing and replacing itself
#[test]
fn apply_replaced_from_inside_the_sink() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 1.0);
    let second = Rc::new(RefCell::new(Vec::new()));
    {
        let weak = anim.downgrade();
        let second = Rc::clone(&second);
        anim.set_apply(move |v| {
            if *v > 0.0 {
                if let Some(me) = weak.upgrade() {
                    let second = Rc::clone(&second);
                    me.set_apply(move |v| second.borrow_mut().push(*v));
                }
            }
        });
    }
    anim.start();
    manager.update(0.25);
    manager.update(0.25);
    assert_eq!(*second.borrow(), vec![0.5]);
}

/// it should hit `to` at one duration and `from` at two under auto-reverse
#[test]
fn auto_reverse_turnaround_points() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 8.0);
    anim.set_auto_reverse(true);
    anim.set_duration(0.5);
    anim.start();
    manager.update(0.5);
    assert_eq!(anim.current_value(), anim.value_at(1.0));
    assert!(anim.is_active());
    manager.update(0.5);
    assert_eq!(anim.current_value(), anim.value_at(0.0));
    assert_eq!(anim.state(), ClockState::Stopped);
}

/// it should deliver the value produced when the sink restarts its own animation
#[test]
fn sink_restarting_its_animation_sees_the_restart_value() {
    let manager = ClockManager::new();
    let anim = FromToAnimation::new(&manager, 0.0f32, 1.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let weak = anim.downgrade();
        let seen = Rc::clone(&seen);
        let restarted = std::cell::Cell::new(false);
        anim.set_apply(move |v| {
            seen.borrow_mut().push(*v);
            if *v >= 0.5 && !restarted.replace(true) {
                if let Some(me) = weak.upgrade() {
                    me.start();
                }
            }
        });
    }
    anim.start();
    manager.update(0.5);
    assert_eq!(*seen.borrow(), vec![0.0, 0.5, 0.0]);
    assert_eq!(anim.current_value(), Some(0.0));

    manager.update(0.25);
    assert_eq!(*seen.borrow(), vec![0.0, 0.5, 0.0, 0.25]);
}
