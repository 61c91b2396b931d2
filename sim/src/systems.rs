use std::time::Duration;

use bevy_ecs::prelude::*;
use rand::Rng;
use tracing::{debug, info};

use swarm::{
    drive_torques, flocking_step, steer_manual, steer_step, BotId, BotState, GoalLookup,
    PeerSample, Quatf, Vec3f, BODY_UP,
};

use crate::config::Config;
use crate::world::{integrate_drive, Arena};
use crate::{
    Bot, BotOutputs, BotSpecComp, BotStateComp, DriveOutputs, FlockClock, ManualInputs,
    SharedOutputs, SimClock, SimRng,
};

pub fn spawn_bots(mut commands: Commands, cfg: Res<Config>, mut rng: ResMut<SimRng>) {
    use bevy::time::{Timer, TimerMode};

    for i in 0..cfg.bots {
        let angle = i as f32 / cfg.bots.max(1) as f32 * std::f32::consts::TAU;
        let ring = cfg.spawn_radius * (0.4 + 0.6 * rng.0.gen::<f32>());
        let position = Vec3f::new(angle.cos() * ring, 0.0, angle.sin() * ring);
        let yaw = rng.0.gen_range(0.0..std::f32::consts::TAU);

        // Pre-expire the clock so the first recompute lands on tick one
        let period = 1.0 / cfg.bot.control_hz;
        let mut flock_clock = Timer::from_seconds(period, TimerMode::Repeating);
        flock_clock.set_elapsed(Duration::from_secs_f32(period));

        commands.spawn((
            Bot { id: BotId(i) },
            BotSpecComp(cfg.bot.clone()),
            BotStateComp(BotState::at_spawn(position, Quatf::from_axis_angle(BODY_UP, yaw))),
            FlockClock(flock_clock),
            ManualInputs::default(),
            DriveOutputs::default(),
        ));
    }
    info!(bots = cfg.bots, "Swarm spawned");
}

/// Refresh the pose snapshot the neighbour queries read from. Runs before
/// the controllers so every bot scans the same consistent frame.
pub fn refresh_peer_snapshot(mut arena: ResMut<Arena>, bots: Query<(&Bot, &BotStateComp)>) {
    arena.peers.clear();
    for (bot, state) in &bots {
        arena.peers.push(PeerSample {
            id: bot.id,
            position: state.0.position,
            velocity: state.0.velocity,
        });
    }
}

/// Low-rate task: each bot recomputes and publishes its desired-movement
/// vector when its own clock fires. Both tasks run on this one schedule,
/// so the publish is a plain whole-struct write with no reader ever seeing
/// a partial vector.
pub fn flocking_control(
    clock: Res<SimClock>,
    arena: Res<Arena>,
    mut rng: ResMut<SimRng>,
    mut bots: Query<(&Bot, &BotSpecComp, &mut FlockClock, &mut BotStateComp)>,
) {
    let tick = Duration::from_secs_f32(clock.dt);
    let arena = &*arena;
    let rng = &mut rng.0;
    for (bot, spec, mut flock_clock, mut state) in &mut bots {
        if !flock_clock.0.tick(tick).just_finished() {
            continue;
        }
        let mut jitter = || rng.gen_range(-0.3f32..=0.3f32);
        flocking_step(
            &spec.0,
            bot.id,
            &mut state.0,
            arena,
            arena,
            arena,
            &mut jitter,
        );
    }
}

/// High-rate task: translate the current desired vector (or manual input)
/// into wheel torques and advance the chassis.
pub fn drive_bots(
    clock: Res<SimClock>,
    cfg: Res<Config>,
    arena: Res<Arena>,
    mut bots: Query<(&BotSpecComp, &ManualInputs, &mut BotStateComp, &mut DriveOutputs)>,
) {
    let dt = clock.dt;
    for (spec, manual, mut state, mut out) in &mut bots {
        let (fwd, turn) = if spec.0.swarm_controlled {
            let turn = steer_step(&spec.0, &mut state.0, dt);
            (state.0.fwd_control, turn)
        } else {
            let (fwd, turn) = steer_manual(manual.0);
            state.0.fwd_control = fwd;
            (fwd, turn)
        };

        let torques = drive_torques(&spec.0, fwd, turn);
        out.torques = torques;
        out.turn_control = turn;

        integrate_drive(&mut state.0, torques, cfg.wheels_per_side, dt);
        state.0.position = arena.clamp_inside(state.0.position);
    }
}

/// Mirror per-bot outputs into the shared handle external consumers
/// (actuation, rendering) read from.
pub fn publish_outputs(
    shared: Res<SharedOutputs>,
    bots: Query<(&Bot, &BotStateComp, &DriveOutputs)>,
) {
    let mut map = shared.0.write();
    for (bot, state, out) in &bots {
        map.insert(
            bot.id.0,
            BotOutputs {
                position: state.0.position,
                velocity: state.0.velocity,
                move_vector: state.0.move_vector,
                torques: out.torques,
            },
        );
    }
}

pub fn log_progress(
    mut ticks: Local<u32>,
    cfg: Res<Config>,
    arena: Res<Arena>,
    bots: Query<&BotStateComp, With<Bot>>,
) {
    *ticks = ticks.wrapping_add(1);
    if *ticks % 250 != 0 {
        return;
    }
    let mut centroid = Vec3f::ZERO;
    let mut count = 0u32;
    for state in &bots {
        centroid += state.0.position;
        count += 1;
    }
    if count == 0 {
        return;
    }
    centroid /= count as f32;
    match arena.resolve(&cfg.bot.goal_tag) {
        Some(goal) => debug!(
            tick = *ticks,
            ?centroid,
            goal_distance = centroid.distance(goal),
            "swarm progress"
        ),
        None => debug!(tick = *ticks, ?centroid, "swarm progress"),
    }
}
