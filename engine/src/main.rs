use drift_engine::runtime::{run_sim_loop, SimBroadcast, SimCommand};
use drift_shared::config::{HostConfig, SimConfig};
use drift_shared::protocol::{ControlMsg, SceneMsg};
use tokio::io::AsyncBufReadExt;
use tokio::sync::{broadcast, mpsc};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let sim_config = SimConfig::default();
    let host_config = HostConfig::default();

    // Validate configuration before starting
    if let Err(e) = sim_config.validate() {
        eprintln!("Invalid simulation configuration: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = host_config.validate() {
        eprintln!("Invalid host configuration: {}", e);
        std::process::exit(1);
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<SimCommand>(64);
    let (broadcast_tx, mut broadcast_rx) = broadcast::channel::<SimBroadcast>(256);

    // Spawn simulation loop
    tokio::spawn(run_sim_loop(cmd_rx, broadcast_tx, sim_config, host_config));

    // Control messages arrive as JSON lines on stdin (e.g. from UI sliders):
    //   {"type":"set_sphere_count","count":20}
    //   {"type":"set_speed_multiplier","value":1.5}
    //   {"type":"set_paused","paused":true}
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<ControlMsg>(line) {
                Ok(msg) => {
                    let cmd = match msg {
                        ControlMsg::SetSphereCount { count } => SimCommand::SetSphereCount { count },
                        ControlMsg::SetSpeedMultiplier { value } => {
                            SimCommand::SetSpeedMultiplier { value }
                        }
                        ControlMsg::SetPaused { paused } => SimCommand::SetPaused { paused },
                    };
                    if cmd_tx.send(cmd).await.is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!("Ignoring malformed control line: {}", e),
            }
        }
    });

    tracing::info!("Drift room engine started");

    // Stand-in scene layer: emit every boundary message as a JSON line.
    loop {
        match broadcast_rx.recv().await {
            Ok(msg) => {
                let scene_msg = match msg {
                    SimBroadcast::SceneState(m) => SceneMsg::SceneState(m),
                    SimBroadcast::Contacts(m) => SceneMsg::Contacts(m),
                };
                match serde_json::to_string(&scene_msg) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::warn!("Failed to encode scene message: {}", e),
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Scene consumer lagged, skipped {} messages", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
