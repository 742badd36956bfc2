use glam::{EulerRot, Quat, Vec3};

/// Per-tick blend factor, `clamp(delta_seconds * lerp_speed, 0, 1)`.
pub fn interpolation_factor(delta_seconds: f32, lerp_speed: f32) -> f32 {
    let raw = delta_seconds * lerp_speed;
    if !raw.is_finite() {
        return if raw > 0.0 { 1.0 } else { 0.0 };
    }
    raw.clamp(0.0, 1.0)
}

pub fn position_lerp(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    from + (to - from) * t
}

/// Shortest-arc slerp. The endpoints are returned exactly, so a full step lands on `to`
/// instead of its negated twin.
pub fn rotation_slerp(from: Quat, to: Quat, t: f32) -> Quat {
    if t <= 0.0 || from == to {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    from.slerp(to, t)
}

pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(yaw_degrees.to_radians())
}

/// Yaw of `rotation` about +Y, normalized to `[0, 360)`.
pub fn yaw_degrees(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    let degrees = yaw.to_degrees().rem_euclid(360.0);
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Orientation difference in radians, treating `q` and `-q` as the same rotation.
///
/// Chord form `4 * atan2(|a - b|, |a + b|)`; it stays exact for nearly equal rotations, where
/// `acos` of the dot product does not.
pub fn rotation_distance(a: Quat, b: Quat) -> f32 {
    let b = if a.dot(b) < 0.0 { -b } else { b };
    4.0 * (a - b).length().atan2((a + b).length())
}
