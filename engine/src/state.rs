use crate::room::{ContactEvent, SphereRoom};
use crate::sphere::Sphere;
use drift_shared::config::SimConfig;
use drift_shared::protocol::{round4, ContactWire, ContactsMsg, SceneStateMsg, SphereWire};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Simulation state owned by the host-loop task: the room plus the seeded
/// RNG that makes a run reproducible, and the conversions to boundary
/// messages.
pub struct SimState {
    pub room: SphereRoom,
    pub rng: ChaCha8Rng,
}

impl SimState {
    pub fn new(config: SimConfig, rng_seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let mut room = SphereRoom::new(config);
        room.set_sphere_count(config.sphere_count, &mut rng);
        Self { room, rng }
    }

    /// Advance one frame. The raw frame delta is clamped here so a long
    /// host pause cannot inject an integration step that tunnels spheres
    /// through walls or past each other.
    pub fn tick(&mut self, raw_dt: f64) -> Vec<ContactEvent> {
        let dt = raw_dt.clamp(0.0, self.room.config().max_step_delta);
        self.room.step(dt, &mut self.rng)
    }

    pub fn set_sphere_count(&mut self, count: usize) {
        self.room.set_sphere_count(count, &mut self.rng);
    }

    pub fn set_speed_multiplier(&mut self, value: f64) {
        self.room.set_speed_multiplier(value);
    }

    /// Kinematic snapshot for the scene layer.
    pub fn scene_state(&self) -> SceneStateMsg {
        SceneStateMsg {
            spheres: self.room.spheres().iter().map(sphere_wire).collect(),
        }
    }

    pub fn contacts_msg(events: &[ContactEvent]) -> ContactsMsg {
        ContactsMsg {
            contacts: events
                .iter()
                .map(|e| ContactWire {
                    sphere_id: e.sphere_id,
                    impact: round4(e.impact),
                    radius: round4(e.radius),
                    base_speed: round4(e.base_speed),
                })
                .collect(),
        }
    }
}

fn sphere_wire(sphere: &Sphere) -> SphereWire {
    SphereWire {
        id: sphere.id,
        pos: [
            round4(sphere.position.x),
            round4(sphere.position.y),
            round4(sphere.position.z),
        ],
        vel: [
            round4(sphere.velocity.x),
            round4(sphere.velocity.y),
            round4(sphere.velocity.z),
        ],
        radius: round4(sphere.radius),
        base_speed: round4(sphere.base_speed),
    }
}
