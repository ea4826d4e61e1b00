use crate::bounds::enforce_bounds;
use crate::collision::resolve_collision;
use crate::governor::maintain_speed;
use crate::sphere::{find_spawn_position, random_direction, Sphere};
use crate::vec3;
use drift_shared::config::SimConfig;
use rand::Rng;

/// Contact notification raised once per touched sphere per step,
/// de-duplicated across wall and pair contacts.
#[derive(Debug, Clone)]
pub struct ContactEvent {
    pub sphere_id: u32,
    /// Relative speed at detection for pair contacts, own speed for wall
    /// contacts; when several contacts touch one sphere the strongest wins.
    pub impact: f64,
    pub radius: f64,
    pub base_speed: f64,
}

/// Marks an index as untouched in the per-step impact scratch.
const NO_CONTACT: f64 = -1.0;

/// The sphere room simulation. Owns the live sphere collection; one `step`
/// per host frame, sphere add/remove only between steps.
pub struct SphereRoom {
    config: SimConfig,
    spheres: Vec<Sphere>,
    next_sphere_id: u32,
    speed_multiplier: f64,
    contact_buffer: Vec<ContactEvent>,
    impact_scratch: Vec<f64>,
}

impl SphereRoom {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            spheres: Vec::new(),
            next_sphere_id: 1,
            speed_multiplier: 1.0,
            contact_buffer: Vec::new(),
            impact_scratch: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Create a sphere with sampled radius, cruising speed, direction and a
    /// collision-free position (center fallback when the room is saturated).
    pub fn add_sphere(&mut self, rng: &mut impl Rng) -> u32 {
        let id = self.next_sphere_id;
        self.next_sphere_id = self.next_sphere_id.wrapping_add(1);

        let radius = self.config.min_radius
            + rng.gen::<f64>() * (self.config.max_radius - self.config.min_radius);
        let base_speed = self.config.min_speed
            + rng.gen::<f64>() * (self.config.max_speed - self.config.min_speed);
        let position = find_spawn_position(radius, &self.spheres, &self.config, rng);
        let direction = random_direction(rng);

        self.spheres.push(Sphere {
            id,
            position,
            velocity: vec3::scale(direction, base_speed),
            radius,
            base_speed,
            last_direction: direction,
        });
        id
    }

    /// Drop a sphere from the live collection. The scene layer releases the
    /// visual resources tied to the id on its side.
    pub fn remove_sphere(&mut self, id: u32) -> bool {
        let before = self.spheres.len();
        self.spheres.retain(|s| s.id != id);
        self.spheres.len() != before
    }

    /// Grow or shrink the live collection to `count`, clamped to the
    /// configured bounds. Shrinking drops the most recently added spheres.
    pub fn set_sphere_count(&mut self, count: usize, rng: &mut impl Rng) {
        let target = count.clamp(self.config.min_spheres, self.config.max_spheres);
        while self.spheres.len() < target {
            self.add_sphere(rng);
        }
        self.spheres.truncate(target);
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn get_sphere(&self, id: u32) -> Option<&Sphere> {
        self.spheres.iter().find(|s| s.id == id)
    }

    /// Mutable access to a sphere (for testing)
    pub fn get_sphere_mut(&mut self, id: u32) -> Option<&mut Sphere> {
        self.spheres.iter_mut().find(|s| s.id == id)
    }

    /// Clamped to the configured multiplier range.
    pub fn set_speed_multiplier(&mut self, value: f64) {
        self.speed_multiplier = value.clamp(
            self.config.min_speed_multiplier,
            self.config.max_speed_multiplier,
        );
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Advance the simulation by `dt` seconds (already clamped by the
    /// caller). Phases run strictly in order: integrate, walls, pairwise
    /// collisions, speed governing, then event collection.
    pub fn step(&mut self, dt: f64, rng: &mut impl Rng) -> Vec<ContactEvent> {
        let effective_dt = dt * self.speed_multiplier;
        let half_room = self.config.half_room();
        let count = self.spheres.len();

        self.impact_scratch.clear();
        self.impact_scratch.resize(count, NO_CONTACT);

        for sphere in &mut self.spheres {
            vec3::add_scaled_in_place(&mut sphere.position, sphere.velocity, effective_dt);
        }

        for (index, sphere) in self.spheres.iter_mut().enumerate() {
            if enforce_bounds(sphere, half_room) {
                let impact = vec3::length(sphere.velocity);
                if impact > self.impact_scratch[index] {
                    self.impact_scratch[index] = impact;
                }
            }
        }

        for first in 0..count {
            let (head, tail) = self.spheres.split_at_mut(first + 1);
            let a = &mut head[first];
            for (offset, b) in tail.iter_mut().enumerate() {
                let rel_speed = vec3::length(vec3::sub(a.velocity, b.velocity));
                if resolve_collision(
                    a,
                    b,
                    self.config.restitution,
                    self.config.collision_jitter,
                    rng,
                ) {
                    let second = first + 1 + offset;
                    if rel_speed > self.impact_scratch[first] {
                        self.impact_scratch[first] = rel_speed;
                    }
                    if rel_speed > self.impact_scratch[second] {
                        self.impact_scratch[second] = rel_speed;
                    }
                }
            }
        }

        for sphere in &mut self.spheres {
            maintain_speed(
                sphere,
                self.config.stall_speed,
                self.config.speed_tolerance,
                rng,
            );
        }

        // One event per touched sphere; buffer reused across steps.
        let mut events = std::mem::take(&mut self.contact_buffer);
        events.clear();
        for (index, &impact) in self.impact_scratch.iter().enumerate() {
            if impact >= 0.0 {
                let sphere = &self.spheres[index];
                events.push(ContactEvent {
                    sphere_id: sphere.id,
                    impact,
                    radius: sphere.radius,
                    base_speed: sphere.base_speed,
                });
            }
        }

        let result = events.clone();
        self.contact_buffer = events;
        result
    }
}
