use swarm::{
    botspecs, steer_manual, steer_step, steer_step_dbg, BotInputs, BotSpec, BotState, Quatf,
    SteerStepDebug, Vec3f,
};

const DT: f32 = 1.0 / 50.0;

fn facing_forward(move_vector: Vec3f) -> BotState {
    let mut state = BotState::at_spawn(Vec3f::ZERO, Quatf::IDENTITY);
    state.move_vector = move_vector;
    state
}

fn spec() -> BotSpec {
    botspecs::scout_bot_spec()
}

#[test]
fn forward_control_converges_without_overshoot() {
    let spec = spec();
    // Aligned with the desired direction: target settles at |mv| = 1
    let mut state = facing_forward(Vec3f::new(0.0, 0.0, 1.0));
    let mut prev = state.fwd_control;
    for _ in 0..400 {
        steer_step(&spec, &mut state, DT);
        assert!(state.fwd_control >= prev - 1e-6, "monotone approach");
        assert!(state.fwd_control <= 1.0 + 1e-4, "no overshoot");
        prev = state.fwd_control;
    }
    assert!(state.fwd_control > 0.99, "got {}", state.fwd_control);
}

#[test]
fn speed_changes_are_rate_limited() {
    let spec = spec();
    let mut state = facing_forward(Vec3f::new(0.0, 0.0, 1.0));
    steer_step(&spec, &mut state, DT);
    assert!(state.fwd_control > 0.0);
    assert!(
        state.fwd_control < 0.5,
        "one tick must not close most of the gap, got {}",
        state.fwd_control
    );
}

#[test]
fn aligned_target_needs_no_turn() {
    let spec = spec();
    let mut state = facing_forward(Vec3f::new(0.0, 0.0, 1.0));
    let turn = steer_step(&spec, &mut state, DT);
    assert_eq!(turn, 0.0);
}

#[test]
fn target_to_the_right_turns_right() {
    let spec = spec();
    let mut state = facing_forward(Vec3f::new(1.0, 0.0, 0.0));
    let mut dbg = SteerStepDebug::default();
    let turn = steer_step_dbg(&spec, &mut state, DT, Some(&mut dbg));
    assert!(turn > 0.0, "positive turn is rightward, got {turn}");
    assert!((dbg.turn_angle - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    assert!(dbg.turn_sign > 0.9 && dbg.turn_sign < 1.0, "divide-based sign, got {}", dbg.turn_sign);
}

#[test]
fn target_to_the_left_turns_left() {
    let spec = spec();
    let mut state = facing_forward(Vec3f::new(-1.0, 0.0, 0.0));
    let turn = steer_step(&spec, &mut state, DT);
    assert!(turn < 0.0, "negative turn is leftward, got {turn}");
}

#[test]
fn zero_vector_is_inert() {
    let spec = spec();
    let mut state = facing_forward(Vec3f::ZERO);
    state.fwd_control = 0.6;
    for _ in 0..200 {
        let turn = steer_step(&spec, &mut state, DT);
        assert_eq!(turn, 0.0);
        assert!(state.fwd_control.is_finite());
    }
    assert!(state.fwd_control < 0.01, "decays toward rest, got {}", state.fwd_control);
}

#[test]
fn turn_authority_backs_off_at_speed() {
    let spec = spec();
    let target = Vec3f::new(1.0, 0.0, 0.0);

    let mut slow = facing_forward(target);
    slow.fwd_control = 0.0;
    let mut slow_dbg = SteerStepDebug::default();
    let slow_turn = steer_step_dbg(&spec, &mut slow, DT, Some(&mut slow_dbg));

    let mut fast = facing_forward(target);
    fast.fwd_control = 0.9;
    let mut fast_dbg = SteerStepDebug::default();
    let fast_turn = steer_step_dbg(&spec, &mut fast, DT, Some(&mut fast_dbg));

    assert!(
        fast_turn < slow_turn,
        "fast bot must turn softer ({fast_turn} vs {slow_turn})"
    );
    assert!(fast_dbg.turn_damping < slow_dbg.turn_damping);
}

#[test]
fn sharp_turns_shed_speed() {
    let spec = spec();
    // Desired direction dead astern: alignment is -1, so the target speed
    // drops below the vector magnitude by turn_sharpness worth of blend
    let mut state = facing_forward(Vec3f::new(0.0, 0.0, -1.0));
    let mut dbg = SteerStepDebug::default();
    steer_step_dbg(&spec, &mut state, DT, Some(&mut dbg));
    assert!((dbg.fwd_align + 1.0).abs() < 1e-5);
    let expected = swarm::lerp(1.0, -1.0, spec.turn_sharpness);
    assert!((dbg.fwd_target - expected).abs() < 1e-5);
}

#[test]
fn manual_inputs_are_clamped() {
    assert_eq!(steer_manual(BotInputs { fwd: 2.0, turn: -3.0 }), (1.0, -1.0));
    assert_eq!(steer_manual(BotInputs { fwd: 0.4, turn: 0.2 }), (0.4, 0.2));
}
