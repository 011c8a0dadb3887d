//! End-to-end reveal scenarios: a host driving latches, poses, and delayed
//! transition work through the scheduler.

use glimmer::{Direction, Ease, Pose, Reveal, RevealConfig, Scheduler, Vec2};

fn cfg() -> RevealConfig {
    RevealConfig {
        delay_secs: 0.3,
        duration_secs: 0.8,
        direction: Direction::Up,
        distance: 50.0,
        ease: Ease::Linear,
        ..RevealConfig::default()
    }
}

#[test]
fn scrolled_into_view_transition_spans_expected_window() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut reveal = Reveal::new(cfg());

    // Host scrolls; the region qualifies at t=2.0s.
    assert!(!reveal.observe(0.0, 1.0));
    assert!(reveal.observe(0.25, 2.0));

    // Hidden through the delay: transition starts at t = 2.3.
    assert_eq!(reveal.pose_at(2.0), Pose { opacity: 0.0, offset: Vec2::new(0.0, 50.0) });
    assert_eq!(reveal.pose_at(2.3).opacity, 0.0);
    assert!(reveal.pose_at(2.31).opacity > 0.0);

    // Visible pose reached at t = 2.0 + 0.3 + 0.8 = 3.1, and held forever.
    assert_eq!(reveal.pose_at(3.1), Pose::visible());
    assert_eq!(reveal.pose_at(1000.0), Pose::visible());
    assert!(reveal.is_settled(3.1));
}

#[test]
fn region_never_in_view_schedules_nothing() {
    let mut reveal = Reveal::new(cfg());
    let mut scheduler: Scheduler<&str> = Scheduler::new();

    // The host only schedules transition work when the latch fires.
    for i in 0..100 {
        let now = f64::from(i) * 0.1;
        if reveal.observe(0.0, now) {
            scheduler
                .schedule_after(reveal.config().delay_secs, "start-transition")
                .unwrap();
        }
    }

    assert_eq!(scheduler.pending(), 0);
    assert!(scheduler.advance(60.0).is_empty());
    assert_eq!(reveal.pose_at(60.0).opacity, 0.0);
}

#[test]
fn unmount_cancels_pending_transition_callback() {
    let mut reveal = Reveal::new(cfg());
    let mut scheduler: Scheduler<&str> = Scheduler::new();

    assert!(reveal.observe(1.0, scheduler.now_secs()));
    let timer = scheduler
        .schedule_after(reveal.config().delay_secs, "start-transition")
        .unwrap();

    // Component unmounts at t = 0.1s; its teardown cancels the timer.
    assert!(scheduler.advance(0.1).is_empty());
    assert!(scheduler.cancel(timer));

    // However long the session runs on, the callback never fires.
    assert!(scheduler.advance(100.0).is_empty());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn remount_after_reveal_does_not_replay() {
    let mut first = Reveal::new(cfg());
    first.observe(1.0, 0.0);
    assert_eq!(first.pose_at(5.0), Pose::visible());

    // Remount with the same configuration: statically visible from the start.
    let second = Reveal::restored(cfg());
    assert_eq!(second.pose_at(0.0), Pose::visible());
    assert_eq!(second.pose_at(0.05), Pose::visible());
}

#[test]
fn fail_open_host_reveals_without_visibility_queries() {
    // Non-interactive rendering target: no intersection mechanism at all.
    let mut reveal = Reveal::new(cfg());
    assert!(reveal.force_visible(0.0));
    assert_eq!(reveal.pose_at(1.1), Pose::visible());
}

#[test]
fn opacity_only_direction_never_offsets() {
    let mut reveal = Reveal::new(RevealConfig {
        direction: Direction::None,
        delay_secs: 0.0,
        ..cfg()
    });
    reveal.observe(1.0, 0.0);
    for i in 0..=20 {
        let pose = reveal.pose_at(f64::from(i) * 0.05);
        assert_eq!(pose.offset, Vec2::ZERO);
    }
}
