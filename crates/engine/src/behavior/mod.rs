mod interp;
mod random;
mod wander;

pub use interp::{
    interpolation_factor, position_lerp, rotation_distance, rotation_slerp, yaw_degrees,
    yaw_rotation,
};
pub use random::{UniformSource, WanderRng};
pub use wander::{
    ArgumentIssue, ConfigIssue, TickOutcome, WanderBounds, WanderConfig, WanderError, Wanderer,
    DEFAULT_ARRIVAL_THRESHOLD, DEFAULT_GROUND_HEIGHT, DEFAULT_LERP_SPEED,
    DEFAULT_ROTATION_RANGE_DEGREES, RECOMMENDED_LERP_SPEED_RANGE,
};
