//! Integration tests for the loading indicator
//!
//! These tests drive the indicator the way a host does:
//! - lifecycle callbacks start and stop exactly one animation
//! - frame timestamps advance the rotation through every step
//! - the transform-based draw routine matches the closed-form layout

use std::time::Duration;

use dotspin_core::geometry::{dot_radius, MAX_ANIMATION_VALUE};
use dotspin_core::{
    layout_dots, AttributeSet, Color, DisplayMetrics, LifecycleState, LoadingIndicator,
    RecordingCanvas, View, Visibility, LINE_COUNT,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Snapshot of the animation-related state after a host event
#[derive(Debug, PartialEq)]
struct Snapshot {
    state: LifecycleState,
    animating: bool,
    listeners: usize,
}

fn snapshot(indicator: &LoadingIndicator) -> Snapshot {
    Snapshot {
        state: indicator.lifecycle_state(),
        animating: indicator.is_animating(),
        listeners: indicator.frame_listener_count(),
    }
}

#[test]
fn test_attach_visible_hidden_visible_detach() {
    init_tracing();
    let mut indicator = LoadingIndicator::default();

    indicator.on_attached_to_window();
    assert_eq!(
        snapshot(&indicator),
        Snapshot {
            state: LifecycleState::AttachedVisible,
            animating: true,
            listeners: 1
        }
    );

    indicator.on_visibility_changed(Visibility::Visible);
    assert_eq!(snapshot(&indicator).listeners, 1);

    indicator.on_visibility_changed(Visibility::Invisible);
    assert_eq!(
        snapshot(&indicator),
        Snapshot {
            state: LifecycleState::AttachedHidden,
            animating: false,
            listeners: 0
        }
    );

    indicator.on_visibility_changed(Visibility::Visible);
    assert!(indicator.is_animating());
    assert_eq!(indicator.frame_listener_count(), 1);

    indicator.on_detached_from_window();
    assert_eq!(
        snapshot(&indicator),
        Snapshot {
            state: LifecycleState::Detached,
            animating: false,
            listeners: 0
        }
    );
    assert!(!indicator.has_animator());
    assert!(!indicator.on_frame(ms(10_000)));
}

#[test]
fn test_cycles_through_every_step_then_restarts() {
    init_tracing();
    let mut indicator = LoadingIndicator::default();
    indicator.on_attached_to_window();

    // 60 Hz frames over two full rotations
    let mut seen = Vec::new();
    let mut t = 5_000u64;
    while t < 5_000 + 1_600 {
        indicator.on_frame(ms(t));
        let value = indicator.animation_value();
        if seen.last() != Some(&value) {
            seen.push(value);
        }
        t += 16;
    }

    let one_cycle: Vec<i32> = (0..=MAX_ANIMATION_VALUE).collect();
    let expected: Vec<i32> = one_cycle.iter().chain(one_cycle.iter()).copied().collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_cycle_length_follows_duration() {
    for duration in [100u64, 800, 2_400] {
        let attrs = AttributeSet::new().with("duration", duration.to_string());
        let mut indicator =
            LoadingIndicator::from_attributes(&attrs, &DisplayMetrics::default()).unwrap();
        indicator.on_attached_to_window();

        indicator.on_frame(ms(0));
        indicator.on_frame(ms(duration - 1));
        assert_eq!(indicator.animation_value(), MAX_ANIMATION_VALUE);
        indicator.on_frame(ms(duration));
        assert_eq!(indicator.animation_value(), 0);
    }
}

#[test]
fn test_draw_matches_closed_form_for_every_step() {
    init_tracing();
    let size = 40.0;
    let attrs = AttributeSet::new().with("size", "20dp");
    let mut indicator = LoadingIndicator::from_attributes(&attrs, &DisplayMetrics::new(2.0)).unwrap();
    assert_eq!(indicator.size(), size);
    indicator.on_attached_to_window();
    indicator.on_frame(ms(0));

    for step in 0..=MAX_ANIMATION_VALUE {
        indicator.on_frame(ms(step as u64 * 100));
        assert_eq!(indicator.animation_value(), step);

        let mut canvas = RecordingCanvas::new();
        indicator.on_draw(&mut canvas);
        assert!(canvas.is_balanced());

        let drawn: Vec<_> = canvas.circles().collect();
        let expected = layout_dots(size, step);
        assert_eq!(drawn.len(), LINE_COUNT);
        for (circle, dot) in drawn.iter().zip(expected.iter()) {
            assert!(
                circle.center.distance_to(dot.center) < 1e-3,
                "step {} dot {}: drawn {:?}, expected {:?}",
                step,
                dot.index,
                circle.center,
                dot.center
            );
            assert!((circle.radius - dot_radius(dot.index, size)).abs() < 1e-4);
        }
    }
}

#[test]
fn test_color_change_reaches_next_draw_only() {
    let mut indicator = LoadingIndicator::default();
    indicator.on_attached_to_window();
    indicator.on_frame(ms(0));

    let mut before = RecordingCanvas::new();
    indicator.on_draw(&mut before);

    indicator.set_color("#80FF0000".parse().unwrap());
    let mut after = RecordingCanvas::new();
    indicator.on_draw(&mut after);

    assert!(before.circles().all(|c| c.color == Color::WHITE));
    assert!(after
        .circles()
        .all(|c| c.color == Color::rgba(0xFF, 0, 0, 0x80)));
    assert_eq!(indicator.config().size, 32.0);
    assert_eq!(indicator.config().duration_ms, 800);
}
