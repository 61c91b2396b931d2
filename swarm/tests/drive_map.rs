use swarm::{botspecs, drive_torques, WheelTorques};

#[test]
fn straight_line_drives_both_sides_equally() {
    let spec = botspecs::scout_bot_spec();
    for fwd in [-1.0, -0.25, 0.0, 0.5, 1.0] {
        let t = drive_torques(&spec, fwd, 0.0);
        assert_eq!(t.right, t.left);
        assert_eq!(t.right, fwd * spec.speed);
    }
}

#[test]
fn right_turn_slows_the_right_side() {
    let spec = botspecs::scout_bot_spec();
    let t = drive_torques(&spec, 0.5, 0.4);
    assert!(t.right < t.left);
    assert!((t.left - t.right - 2.0 * 0.4 * spec.turn_speed).abs() < 1e-5);
}

#[test]
fn left_turn_mirrors_right_turn() {
    let spec = botspecs::scout_bot_spec();
    let r = drive_torques(&spec, 0.5, 0.4);
    let l = drive_torques(&spec, 0.5, -0.4);
    assert_eq!(
        WheelTorques {
            right: l.left,
            left: l.right
        },
        r
    );
}

#[test]
fn pivot_in_place() {
    let spec = botspecs::scout_bot_spec();
    let t = drive_torques(&spec, 0.0, 1.0);
    assert_eq!(t.right, -t.left);
    assert_eq!(t.left, spec.turn_speed);
}
