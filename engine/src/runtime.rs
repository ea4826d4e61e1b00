use crate::state::SimState;
use drift_shared::config::{HostConfig, SimConfig};
use drift_shared::protocol::{ContactsMsg, SceneStateMsg};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::Instant;

/// Control commands from the host / scene layer to the simulation loop
pub enum SimCommand {
    SetSphereCount { count: usize },
    SetSpeedMultiplier { value: f64 },
    SetPaused { paused: bool },
}

/// Broadcasts from the simulation loop to scene-layer subscribers
#[derive(Debug, Clone)]
pub enum SimBroadcast {
    SceneState(SceneStateMsg),
    Contacts(ContactsMsg),
}

/// Run the simulation loop. Owns all simulation state; the sphere
/// collection is mutated only here, so steps are atomic with respect to
/// every other task.
pub async fn run_sim_loop(
    mut cmd_rx: mpsc::Receiver<SimCommand>,
    broadcast_tx: broadcast::Sender<SimBroadcast>,
    sim_config: SimConfig,
    host_config: HostConfig,
) {
    let mut state = SimState::new(sim_config, host_config.rng_seed);

    let tick_duration = Duration::from_secs_f64(1.0 / host_config.tick_rate_hz as f64);
    let snapshot_every_n = (host_config.tick_rate_hz / host_config.snapshot_rate_hz) as u64;
    let mut tick_count: u64 = 0;
    let mut paused = false;
    let mut last_tick = Instant::now();

    let mut tick_interval = tokio::time::interval(tick_duration);
    tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tick_interval.tick() => {
                if paused {
                    // Stopped scheduler: no stepping, no time accumulation.
                    last_tick = Instant::now();
                    continue;
                }

                let now = Instant::now();
                let raw_dt = (now - last_tick).as_secs_f64();
                last_tick = now;

                let contacts = state.tick(raw_dt);
                if !contacts.is_empty() {
                    let _ = broadcast_tx.send(SimBroadcast::Contacts(
                        SimState::contacts_msg(&contacts),
                    ));
                }

                tick_count += 1;
                if tick_count % snapshot_every_n == 0 {
                    let _ = broadcast_tx.send(SimBroadcast::SceneState(state.scene_state()));
                }
            }

            Some(cmd) = cmd_rx.recv() => {
                match cmd {
                    SimCommand::SetSphereCount { count } => {
                        state.set_sphere_count(count);
                        tracing::info!(
                            "Sphere count set to {}",
                            state.room.sphere_count()
                        );
                    }
                    SimCommand::SetSpeedMultiplier { value } => {
                        state.set_speed_multiplier(value);
                        tracing::info!(
                            "Speed multiplier set to {}",
                            state.room.speed_multiplier()
                        );
                    }
                    SimCommand::SetPaused { paused: next } => {
                        if paused != next {
                            paused = next;
                            if !paused {
                                last_tick = Instant::now();
                            }
                            tracing::info!("Simulation {}", if paused { "paused" } else { "resumed" });
                        }
                    }
                }
            }

            else => break,
        }
    }

    tracing::info!("Simulation loop ended");
}
