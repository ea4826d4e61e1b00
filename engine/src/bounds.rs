use crate::sphere::Sphere;

/// Clamp a sphere to the axis-aligned cubic room, forcing the velocity
/// component at a touched wall to point back inward. Axes are handled
/// independently so a corner hit clamps two or three of them in one call.
/// Returns true when any wall was touched.
///
/// Assumes radius < half_room; configuration validation guarantees it.
pub fn enforce_bounds(sphere: &mut Sphere, half_room: f64) -> bool {
    let limit = half_room - sphere.radius;
    let mut hit = false;

    if sphere.position.x > limit {
        sphere.position.x = limit;
        sphere.velocity.x = -sphere.velocity.x.abs();
        hit = true;
    } else if sphere.position.x < -limit {
        sphere.position.x = -limit;
        sphere.velocity.x = sphere.velocity.x.abs();
        hit = true;
    }

    if sphere.position.y > limit {
        sphere.position.y = limit;
        sphere.velocity.y = -sphere.velocity.y.abs();
        hit = true;
    } else if sphere.position.y < -limit {
        sphere.position.y = -limit;
        sphere.velocity.y = sphere.velocity.y.abs();
        hit = true;
    }

    if sphere.position.z > limit {
        sphere.position.z = limit;
        sphere.velocity.z = -sphere.velocity.z.abs();
        hit = true;
    } else if sphere.position.z < -limit {
        sphere.position.z = -limit;
        sphere.velocity.z = sphere.velocity.z.abs();
        hit = true;
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::DEFAULT_DIRECTION;
    use crate::vec3::vec3;

    const HALF_ROOM: f64 = 10.0;

    fn test_sphere(position: crate::vec3::Vec3, velocity: crate::vec3::Vec3) -> Sphere {
        Sphere {
            id: 0,
            position,
            velocity,
            radius: 1.0,
            base_speed: 0.5,
            last_direction: DEFAULT_DIRECTION,
        }
    }

    #[test]
    fn inside_room_is_untouched() {
        let mut s = test_sphere(vec3(0.0, 2.0, -3.0), vec3(0.3, -0.2, 0.1));
        assert!(!enforce_bounds(&mut s, HALF_ROOM));
        assert_eq!(s.position, vec3(0.0, 2.0, -3.0));
        assert_eq!(s.velocity, vec3(0.3, -0.2, 0.1));
    }

    #[test]
    fn upper_wall_clamps_and_reflects() {
        let mut s = test_sphere(vec3(9.4, 0.0, 0.0), vec3(0.5, 0.0, 0.0));
        assert!(enforce_bounds(&mut s, HALF_ROOM));
        assert_eq!(s.position.x, 9.0);
        assert!(s.velocity.x <= 0.0);
        assert_eq!(s.velocity.x, -0.5);
    }

    #[test]
    fn lower_wall_clamps_and_reflects() {
        let mut s = test_sphere(vec3(0.0, -9.7, 0.0), vec3(0.0, -0.4, 0.0));
        assert!(enforce_bounds(&mut s, HALF_ROOM));
        assert_eq!(s.position.y, -9.0);
        assert!(s.velocity.y >= 0.0);
        assert_eq!(s.velocity.y, 0.4);
    }

    #[test]
    fn velocity_already_inward_keeps_its_sign() {
        // Overshot position with a velocity that already points back in:
        // the sign is forced inward, not blindly negated.
        let mut s = test_sphere(vec3(9.5, 0.0, 0.0), vec3(-0.5, 0.0, 0.0));
        assert!(enforce_bounds(&mut s, HALF_ROOM));
        assert_eq!(s.position.x, 9.0);
        assert_eq!(s.velocity.x, -0.5);
    }

    #[test]
    fn corner_hit_clamps_multiple_axes_in_one_call() {
        let mut s = test_sphere(vec3(9.5, -9.5, 9.5), vec3(0.2, -0.2, 0.2));
        assert!(enforce_bounds(&mut s, HALF_ROOM));
        assert_eq!(s.position, vec3(9.0, -9.0, 9.0));
        assert!(s.velocity.x <= 0.0);
        assert!(s.velocity.y >= 0.0);
        assert!(s.velocity.z <= 0.0);
    }

    #[test]
    fn limit_scales_with_radius() {
        let mut s = test_sphere(vec3(8.6, 0.0, 0.0), vec3(0.5, 0.0, 0.0));
        s.radius = 1.5;
        assert!(enforce_bounds(&mut s, HALF_ROOM));
        assert_eq!(s.position.x, 8.5);
    }
}
