use crate::sphere::Sphere;
use crate::vec3::{self, Vec3};
use rand::Rng;

/// Floor for the contact distance once an overlap is established, so the
/// normal never divides by a numerically-zero length.
const MIN_CONTACT_DISTANCE: f64 = 1e-4;

/// Resolve one unordered sphere pair: symmetric positional de-penetration
/// plus an elastic impulse along the contact normal (both bodies are unit
/// mass). `jitter` is the magnitude of the random separation substituted
/// when the centers coincide exactly — a numerical tie-break, not a
/// physical event.
///
/// Returns true iff a velocity changed (impulse or reflective correction);
/// positional correction alone, with separating velocities, reports false.
pub fn resolve_collision(
    a: &mut Sphere,
    b: &mut Sphere,
    restitution: f64,
    jitter: f64,
    rng: &mut impl Rng,
) -> bool {
    let mut delta = vec3::sub(b.position, a.position);
    let min_distance = a.radius + b.radius;
    let mut distance_sq = vec3::length_sq(delta);

    if distance_sq == 0.0 {
        delta = Vec3::new(
            rng.gen::<f64>() * jitter,
            rng.gen::<f64>() * jitter,
            rng.gen::<f64>() * jitter,
        );
        distance_sq = vec3::length_sq(delta);
    }

    if distance_sq > min_distance * min_distance {
        return false;
    }

    let distance = distance_sq.sqrt().max(MIN_CONTACT_DISTANCE);
    let normal = vec3::scale(delta, 1.0 / distance);
    let overlap = min_distance - distance;

    vec3::add_scaled_in_place(&mut a.position, normal, -overlap * 0.5);
    vec3::add_scaled_in_place(&mut b.position, normal, overlap * 0.5);

    let mut responded = false;

    // normal points a -> b, so the pair approaches when the relative
    // velocity projects positively onto it.
    let vel_along_normal = vec3::dot(vec3::sub(a.velocity, b.velocity), normal);
    if vel_along_normal > 0.0 {
        let impulse = (1.0 + restitution) * vel_along_normal * 0.5;
        vec3::add_scaled_in_place(&mut a.velocity, normal, -impulse);
        vec3::add_scaled_in_place(&mut b.velocity, normal, impulse);
        responded = true;
    }

    // A single impulse can under-correct when several pairs touch the same
    // sphere in one step. Reflect any per-sphere component still pointing
    // into the other body.
    let a_inward = vec3::dot(a.velocity, normal);
    if a_inward > 0.0 {
        vec3::add_scaled_in_place(&mut a.velocity, normal, -2.0 * a_inward);
        responded = true;
    }
    let b_inward = vec3::dot(b.velocity, normal);
    if b_inward < 0.0 {
        vec3::add_scaled_in_place(&mut b.velocity, normal, -2.0 * b_inward);
        responded = true;
    }

    responded
}
