use std::f32::consts::TAU;

use crate::{OrbitState, SpectatorCamera};

/// Advance the spectator camera around the orbit center.
/// Cosmetic only; the camera height is left as it is.
pub fn advance_orbit(orbit: &mut OrbitState, camera: &mut SpectatorCamera) {
    if !orbit.enabled {
        return;
    }

    orbit.angle = (orbit.angle + orbit.speed).rem_euclid(TAU);
    camera.position.x = orbit.center.x + orbit.radius * orbit.angle.cos();
    camera.position.z = orbit.center.z + orbit.radius * orbit.angle.sin();
    camera.target = orbit.center;
}
