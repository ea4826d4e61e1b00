use crate::sphere::{random_direction, Sphere};
use crate::vec3;
use rand::Rng;

/// Pull a sphere's instantaneous speed back toward its cruising speed,
/// called once per sphere per step after all collision responses.
///
/// A stalled sphere (speed below `stall_speed`, e.g. an impulse and a wall
/// hit cancelling out) is restarted at `base_speed` along its last coherent
/// heading, falling back to a random direction. Otherwise the velocity is
/// rescaled — direction preserved — whenever the relative deviation from
/// `base_speed` exceeds `tolerance`. `last_direction` is refreshed from the
/// resulting velocity either way.
pub fn maintain_speed(sphere: &mut Sphere, stall_speed: f64, tolerance: f64, rng: &mut impl Rng) {
    let speed = vec3::length(sphere.velocity);

    if speed < stall_speed {
        let direction = if vec3::length_sq(sphere.last_direction) > 1e-6 {
            vec3::normalize(sphere.last_direction)
        } else {
            random_direction(rng)
        };
        sphere.velocity = vec3::scale(direction, sphere.base_speed);
        sphere.last_direction = direction;
        return;
    }

    let deviation = (speed - sphere.base_speed).abs() / sphere.base_speed;
    if deviation > tolerance {
        sphere.velocity = vec3::scale(sphere.velocity, sphere.base_speed / speed);
    }
    sphere.last_direction = vec3::normalize(sphere.velocity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::{vec3, Vec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const STALL_SPEED: f64 = 1e-6;
    const TOLERANCE: f64 = 5e-4;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn test_sphere(velocity: Vec3, base_speed: f64) -> Sphere {
        Sphere {
            id: 0,
            position: Vec3::zero(),
            velocity,
            radius: 1.0,
            base_speed,
            last_direction: Vec3::zero(),
        }
    }

    #[test]
    fn overspeed_is_rescaled_to_base() {
        let mut s = test_sphere(vec3(5.0, 0.0, 0.0), 2.0);
        maintain_speed(&mut s, STALL_SPEED, TOLERANCE, &mut test_rng());
        assert!((s.speed() - 2.0).abs() < 1e-9);
        assert!(s.velocity.x > 0.0, "direction must be preserved");
    }

    #[test]
    fn underspeed_is_rescaled_to_base() {
        let mut s = test_sphere(vec3(0.0, 0.1, 0.0), 0.5);
        maintain_speed(&mut s, STALL_SPEED, TOLERANCE, &mut test_rng());
        assert!((s.speed() - 0.5).abs() < 1e-9);
        assert!(s.velocity.y > 0.0);
    }

    #[test]
    fn within_tolerance_is_left_alone() {
        // 0.01% off base, under the 0.05% tolerance: no rescale.
        let speed = 2.0 * (1.0 + 1e-4);
        let mut s = test_sphere(vec3(speed, 0.0, 0.0), 2.0);
        maintain_speed(&mut s, STALL_SPEED, TOLERANCE, &mut test_rng());
        assert_eq!(s.velocity.x, speed);
    }

    #[test]
    fn stall_recovers_along_last_direction() {
        let mut s = test_sphere(Vec3::zero(), 2.0);
        s.last_direction = vec3(1.0, 0.0, 0.0);
        maintain_speed(&mut s, STALL_SPEED, TOLERANCE, &mut test_rng());
        assert!((s.velocity.x - 2.0).abs() < 1e-9);
        assert!(s.velocity.y.abs() < 1e-9);
        assert!(s.velocity.z.abs() < 1e-9);
    }

    #[test]
    fn stall_without_history_picks_some_unit_direction() {
        let mut s = test_sphere(Vec3::zero(), 0.7);
        maintain_speed(&mut s, STALL_SPEED, TOLERANCE, &mut test_rng());
        assert!((s.speed() - 0.7).abs() < 1e-9);
        assert!((vec3::length(s.last_direction) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn near_zero_velocity_counts_as_stalled() {
        let mut s = test_sphere(vec3(1e-9, 0.0, 0.0), 1.0);
        s.last_direction = vec3(0.0, 1.0, 0.0);
        maintain_speed(&mut s, STALL_SPEED, TOLERANCE, &mut test_rng());
        assert!((s.velocity.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn last_direction_tracks_velocity() {
        let mut s = test_sphere(vec3(0.0, 0.0, -3.0), 1.5);
        maintain_speed(&mut s, STALL_SPEED, TOLERANCE, &mut test_rng());
        assert!((s.last_direction.z - -1.0).abs() < 1e-9);
        assert!((vec3::length(s.last_direction) - 1.0).abs() < 1e-9);
    }
}
