use crate::vec3::{self, Vec3};
use drift_shared::config::SimConfig;
use rand::Rng;

/// Direction used whenever a sampled vector degenerates to near-zero.
pub const DEFAULT_DIRECTION: Vec3 = Vec3 {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};

/// A simulated rigid body. Visual attributes (hue, material, light handles)
/// live in the scene layer; the engine only tracks kinematics.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Fixed at creation; the legal region per axis is
    /// |position.axis| <= half_room - radius
    pub radius: f64,
    /// Target cruising speed the governor pulls the sphere back toward
    pub base_speed: f64,
    /// Most recent non-degenerate unit movement direction, used to restart
    /// a stalled sphere along a coherent heading
    pub last_direction: Vec3,
}

impl Sphere {
    pub fn speed(&self) -> f64 {
        vec3::length(self.velocity)
    }
}

/// Sample a uniform random direction. Components are drawn from
/// [-0.5, 0.5); a degenerate near-zero draw falls back to +X.
pub fn random_direction(rng: &mut impl Rng) -> Vec3 {
    let v = Vec3::new(
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
    );
    if vec3::length_sq(v) < 1e-6 {
        return DEFAULT_DIRECTION;
    }
    vec3::normalize(v)
}

/// Find a collision-free spawn position by rejection sampling against the
/// existing spheres. Falls back to the room center once the attempt budget
/// is spent (a saturated room accepts an initial overlap rather than
/// failing the spawn).
pub fn find_spawn_position(
    radius: f64,
    existing: &[Sphere],
    config: &SimConfig,
    rng: &mut impl Rng,
) -> Vec3 {
    let limit = config.half_room() - radius - config.wall_clearance;

    for _ in 0..config.max_spawn_attempts {
        let candidate = Vec3::new(
            (rng.gen::<f64>() - 0.5) * 2.0 * limit,
            (rng.gen::<f64>() - 0.5) * 2.0 * limit,
            (rng.gen::<f64>() - 0.5) * 2.0 * limit,
        );

        let blocked = existing.iter().any(|other| {
            let min_distance = radius + other.radius + config.spawn_clearance;
            vec3::distance_sq(candidate, other.position) < min_distance * min_distance
        });

        if !blocked {
            return candidate;
        }
    }

    Vec3::zero()
}
