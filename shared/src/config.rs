/// Simulation configuration for the sphere room.
///
/// All values are validated up front; the simulation core itself never
/// re-checks them (degenerate numerics inside a step are handled by
/// substitution, not by failure).
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimConfig {
    /// Edge length of the cubic room
    pub room_size: f64,
    /// Number of spheres the room starts with
    pub sphere_count: usize,
    pub min_spheres: usize,
    pub max_spheres: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Cruising-speed range sampled per sphere at creation
    pub min_speed: f64,
    pub max_speed: f64,
    /// Kinetic-energy retention for sphere-sphere impulses (1 = elastic)
    pub restitution: f64,
    /// Relative deviation from the cruising speed tolerated before the
    /// governor renormalizes (0.0005 = 0.05%)
    pub speed_tolerance: f64,
    /// Speed below which a sphere counts as stalled
    pub stall_speed: f64,
    /// Clearance between a freshly placed sphere and the walls
    pub wall_clearance: f64,
    /// Clearance between a freshly placed sphere and existing spheres
    pub spawn_clearance: f64,
    /// Rejection-sampling budget before falling back to the room center
    pub max_spawn_attempts: u32,
    /// Magnitude of the random separation vector substituted when two
    /// sphere centers coincide exactly
    pub collision_jitter: f64,
    /// Upper bound on a single integration step (seconds)
    pub max_step_delta: f64,
    pub min_speed_multiplier: f64,
    pub max_speed_multiplier: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            room_size: 20.0,
            sphere_count: 14,
            min_spheres: 1,
            max_spheres: 36,
            min_radius: 0.65,
            max_radius: 1.25,
            min_speed: 0.45,
            max_speed: 0.7,
            restitution: 0.9,
            speed_tolerance: 5e-4,
            stall_speed: 1e-6,
            wall_clearance: 0.3,
            spawn_clearance: 0.25,
            max_spawn_attempts: 400,
            collision_jitter: 1e-3,
            max_step_delta: 0.033, // ~2 frames at 60 Hz
            min_speed_multiplier: 0.1,
            max_speed_multiplier: 3.0,
        }
    }
}

impl SimConfig {
    pub fn half_room(&self) -> f64 {
        self.room_size * 0.5
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.room_size.is_finite() || self.room_size <= 0.0 {
            return Err("room_size must be finite and > 0".to_string());
        }
        if !self.min_radius.is_finite() || self.min_radius <= 0.0 {
            return Err("min_radius must be finite and > 0".to_string());
        }
        if !self.max_radius.is_finite() || self.max_radius < self.min_radius {
            return Err("max_radius must be finite and >= min_radius".to_string());
        }
        if !self.wall_clearance.is_finite() || self.wall_clearance < 0.0 {
            return Err("wall_clearance must be finite and >= 0".to_string());
        }
        // Guards the bounds enforcer's assumption that radius < half room,
        // and keeps the spawn sampling region non-empty.
        if self.max_radius + self.wall_clearance >= self.half_room() {
            return Err(format!(
                "max_radius + wall_clearance must be < half the room size ({})",
                self.half_room()
            ));
        }
        if !self.min_speed.is_finite() || self.min_speed <= 0.0 {
            return Err("min_speed must be finite and > 0".to_string());
        }
        if !self.max_speed.is_finite() || self.max_speed < self.min_speed {
            return Err("max_speed must be finite and >= min_speed".to_string());
        }
        if self.min_spheres == 0 {
            return Err("min_spheres must be >= 1".to_string());
        }
        if self.max_spheres < self.min_spheres {
            return Err("max_spheres must be >= min_spheres".to_string());
        }
        if self.sphere_count < self.min_spheres || self.sphere_count > self.max_spheres {
            return Err("sphere_count must be within [min_spheres, max_spheres]".to_string());
        }
        if !self.restitution.is_finite() || !(0.0..=1.0).contains(&self.restitution) {
            return Err("restitution must be within [0, 1]".to_string());
        }
        if !self.speed_tolerance.is_finite() || self.speed_tolerance <= 0.0 {
            return Err("speed_tolerance must be finite and > 0".to_string());
        }
        if !self.stall_speed.is_finite() || self.stall_speed <= 0.0 {
            return Err("stall_speed must be finite and > 0".to_string());
        }
        if !self.spawn_clearance.is_finite() || self.spawn_clearance < 0.0 {
            return Err("spawn_clearance must be finite and >= 0".to_string());
        }
        if self.max_spawn_attempts == 0 {
            return Err("max_spawn_attempts must be >= 1".to_string());
        }
        if !self.collision_jitter.is_finite() || self.collision_jitter <= 0.0 {
            return Err("collision_jitter must be finite and > 0".to_string());
        }
        if !self.max_step_delta.is_finite() || self.max_step_delta <= 0.0 {
            return Err("max_step_delta must be finite and > 0".to_string());
        }
        if !self.min_speed_multiplier.is_finite() || self.min_speed_multiplier <= 0.0 {
            return Err("min_speed_multiplier must be finite and > 0".to_string());
        }
        if !self.max_speed_multiplier.is_finite()
            || self.max_speed_multiplier < self.min_speed_multiplier
        {
            return Err("max_speed_multiplier must be finite and >= min_speed_multiplier".to_string());
        }
        Ok(())
    }
}

/// Host-loop configuration
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub tick_rate_hz: u32,
    /// Scene snapshots broadcast at this rate; must divide tick_rate_hz
    pub snapshot_rate_hz: u32,
    pub rng_seed: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            snapshot_rate_hz: 15,
            rng_seed: 42,
        }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_rate_hz == 0 {
            return Err("tick_rate_hz must be >= 1".to_string());
        }
        if self.snapshot_rate_hz == 0 {
            return Err("snapshot_rate_hz must be >= 1".to_string());
        }
        if self.snapshot_rate_hz > self.tick_rate_hz {
            return Err("snapshot_rate_hz must be <= tick_rate_hz".to_string());
        }
        if self.tick_rate_hz % self.snapshot_rate_hz != 0 {
            return Err("snapshot_rate_hz must divide tick_rate_hz".to_string());
        }
        Ok(())
    }
}
