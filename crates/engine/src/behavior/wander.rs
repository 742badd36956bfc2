use std::ops::RangeInclusive;

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::app::TransformAccess;

use super::interp::{interpolation_factor, position_lerp, rotation_slerp, yaw_rotation};
use super::random::UniformSource;

pub const DEFAULT_ROTATION_RANGE_DEGREES: f32 = 360.0;
pub const DEFAULT_LERP_SPEED: f32 = 0.05;
pub const RECOMMENDED_LERP_SPEED_RANGE: RangeInclusive<f32> = 0.01..=0.1;
pub const DEFAULT_ARRIVAL_THRESHOLD: f32 = 1.0;
pub const DEFAULT_GROUND_HEIGHT: f32 = 0.0;

/// Axis-aligned wander rectangle on the ground plane. `x` spans world X, `y` spans world Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WanderBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for WanderBounds {
    fn default() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(10.0, 10.0),
        }
    }
}

impl WanderBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Inclusive containment test on the ground plane; Y is ignored.
    pub fn contains_ground_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.z >= self.min.y
            && point.z <= self.max.y
    }

    fn validate(&self) -> Result<(), ConfigIssue> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigIssue::NonFiniteBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.min.x > self.max.x {
            return Err(ConfigIssue::InvertedBounds {
                axis: 'x',
                min: self.min.x,
                max: self.max.x,
            });
        }
        if self.min.y > self.max.y {
            return Err(ConfigIssue::InvertedBounds {
                axis: 'y',
                min: self.min.y,
                max: self.max.y,
            });
        }
        if !(self.max - self.min).is_finite() {
            return Err(ConfigIssue::OversizedBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WanderConfig {
    pub bounds: WanderBounds,
    pub rotation_range_degrees: f32,
    pub lerp_speed: f32,
    pub arrival_threshold: f32,
    pub ground_height: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            bounds: WanderBounds::default(),
            rotation_range_degrees: DEFAULT_ROTATION_RANGE_DEGREES,
            lerp_speed: DEFAULT_LERP_SPEED,
            arrival_threshold: DEFAULT_ARRIVAL_THRESHOLD,
            ground_height: DEFAULT_GROUND_HEIGHT,
        }
    }
}

impl WanderConfig {
    pub fn validate(&self) -> Result<(), WanderError> {
        self.bounds.validate()?;
        if !self.rotation_range_degrees.is_finite() || self.rotation_range_degrees < 0.0 {
            return Err(ConfigIssue::RotationRange(self.rotation_range_degrees).into());
        }
        if !self.lerp_speed.is_finite() || self.lerp_speed <= 0.0 {
            return Err(ConfigIssue::LerpSpeed(self.lerp_speed).into());
        }
        if !self.arrival_threshold.is_finite() || self.arrival_threshold <= 0.0 {
            return Err(ConfigIssue::ArrivalThreshold(self.arrival_threshold).into());
        }
        if !self.ground_height.is_finite() {
            return Err(ConfigIssue::GroundHeight(self.ground_height).into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigIssue {
    #[error("bounds must be finite, got min={min} max={max}")]
    NonFiniteBounds { min: Vec2, max: Vec2 },
    #[error("bounds min.{axis} ({min}) is greater than max.{axis} ({max})")]
    InvertedBounds { axis: char, min: f32, max: f32 },
    #[error("bounds span overflows f32, got min={min} max={max}")]
    OversizedBounds { min: Vec2, max: Vec2 },
    #[error("rotation range must be finite and non-negative, got {0}")]
    RotationRange(f32),
    #[error("lerp speed must be finite and positive, got {0}")]
    LerpSpeed(f32),
    #[error("arrival threshold must be finite and positive, got {0}")]
    ArrivalThreshold(f32),
    #[error("ground height must be finite, got {0}")]
    GroundHeight(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArgumentIssue {
    #[error("delta time must not be negative, got {0}")]
    NegativeDeltaTime(f32),
    #[error("delta time must be finite, got {0}")]
    NonFiniteDeltaTime(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WanderError {
    #[error("invalid wander configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    #[error("invalid tick argument: {0}")]
    InvalidArgument(#[from] ArgumentIssue),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Still approaching the target; `distance` is measured after this tick's step.
    Moving { distance: f32 },
    /// Arrived within the threshold and drew a new target.
    Resampled { arrival_distance: f32 },
}

/// Idle wander behavior for one object.
///
/// The wanderer owns only its target; the visible transform belongs to the host and is passed
/// into [`Wanderer::initialize`] and [`Wanderer::tick`] explicitly.
#[derive(Debug, Clone)]
pub struct Wanderer {
    config: WanderConfig,
    target_position: Vec3,
    target_rotation: Quat,
    sampled_yaw_degrees: Option<f32>,
    resample_count: u64,
}

impl Wanderer {
    pub fn new(config: WanderConfig) -> Result<Self, WanderError> {
        config.validate()?;
        warn_if_lerp_speed_unusual(config.lerp_speed);
        Ok(Self {
            config,
            target_position: Vec3::ZERO,
            target_rotation: Quat::IDENTITY,
            sampled_yaw_degrees: None,
            resample_count: 0,
        })
    }

    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    /// Swaps in a new configuration. The current target is kept until the next arrival.
    pub fn set_config(&mut self, config: WanderConfig) -> Result<(), WanderError> {
        config.validate()?;
        warn_if_lerp_speed_unusual(config.lerp_speed);
        self.config = config;
        Ok(())
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn target_rotation(&self) -> Quat {
        self.target_rotation
    }

    /// Yaw drawn by the most recent resample, `None` until the first one.
    pub fn sampled_yaw_degrees(&self) -> Option<f32> {
        self.sampled_yaw_degrees
    }

    pub fn resample_count(&self) -> u64 {
        self.resample_count
    }

    pub fn initialize<T>(&mut self, transform: &T)
    where
        T: TransformAccess + ?Sized,
    {
        self.target_position = transform.position();
        self.target_rotation = transform.rotation();
    }

    /// Advances the host transform toward the target and resamples on arrival.
    ///
    /// A negative or non-finite `delta_seconds` rejects the whole tick; nothing is written.
    pub fn tick<T, R>(
        &mut self,
        delta_seconds: f32,
        transform: &mut T,
        rng: &mut R,
    ) -> Result<TickOutcome, WanderError>
    where
        T: TransformAccess + ?Sized,
        R: UniformSource + ?Sized,
    {
        if !delta_seconds.is_finite() {
            return Err(ArgumentIssue::NonFiniteDeltaTime(delta_seconds).into());
        }
        if delta_seconds < 0.0 {
            return Err(ArgumentIssue::NegativeDeltaTime(delta_seconds).into());
        }

        let t = interpolation_factor(delta_seconds, self.config.lerp_speed);
        let position = position_lerp(transform.position(), self.target_position, t);
        let rotation = rotation_slerp(transform.rotation(), self.target_rotation, t);
        transform.set_position(position);
        transform.set_rotation(rotation);

        let distance = position.distance(self.target_position);
        if distance < self.config.arrival_threshold {
            self.resample_target(rng);
            return Ok(TickOutcome::Resampled {
                arrival_distance: distance,
            });
        }
        Ok(TickOutcome::Moving { distance })
    }

    /// Draws a fresh target inside the bounds. The host transform is left alone.
    pub fn resample_target<R>(&mut self, rng: &mut R)
    where
        R: UniformSource + ?Sized,
    {
        let bounds = self.config.bounds;
        let x = rng.uniform(bounds.min.x, bounds.max.x);
        let z = rng.uniform(bounds.min.y, bounds.max.y);
        let yaw = rng.uniform(0.0, self.config.rotation_range_degrees);

        self.target_position = Vec3::new(x, self.config.ground_height, z);
        self.target_rotation = yaw_rotation(yaw);
        self.sampled_yaw_degrees = Some(yaw);
        self.resample_count = self.resample_count.saturating_add(1);
        debug!(
            x,
            z,
            yaw_degrees = yaw,
            resample_count = self.resample_count,
            "wander_target_resampled"
        );
    }
}

fn lerp_speed_is_recommended(lerp_speed: f32) -> bool {
    RECOMMENDED_LERP_SPEED_RANGE.contains(&lerp_speed)
}

fn warn_if_lerp_speed_unusual(lerp_speed: f32) {
    if !lerp_speed_is_recommended(lerp_speed) {
        warn!(
            lerp_speed,
            recommended_min = *RECOMMENDED_LERP_SPEED_RANGE.start(),
            recommended_max = *RECOMMENDED_LERP_SPEED_RANGE.end(),
            "lerp_speed_outside_recommended_range"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Transform;
    use crate::behavior::interp::{rotation_distance, yaw_degrees};
    use crate::behavior::random::WanderRng;

    const EPSILON: f32 = 1e-5;

    /// Replays fractions of each requested range, in order, cycling when exhausted.
    struct ScriptedDraws {
        fractions: Vec<f32>,
        next: usize,
    }

    impl ScriptedDraws {
        fn new(fractions: &[f32]) -> Self {
            Self {
                fractions: fractions.to_vec(),
                next: 0,
            }
        }
    }

    impl UniformSource for ScriptedDraws {
        fn uniform(&mut self, low: f32, high: f32) -> f32 {
            let fraction = self.fractions[self.next % self.fractions.len()];
            self.next += 1;
            low + (high - low) * fraction
        }
    }

    fn square_config() -> WanderConfig {
        WanderConfig {
            bounds: WanderBounds::new(Vec2::ZERO, Vec2::new(10.0, 10.0)),
            rotation_range_degrees: 360.0,
            lerp_speed: 0.05,
            ..WanderConfig::default()
        }
    }

    fn started_wanderer(config: WanderConfig, transform: &Transform) -> Wanderer {
        let mut wanderer = Wanderer::new(config).expect("valid config");
        wanderer.initialize(transform);
        wanderer
    }

    #[test]
    fn initialize_copies_start_transform_into_target() {
        let transform = Transform {
            position: Vec3::new(3.0, 1.5, -2.0),
            rotation: yaw_rotation(45.0),
        };
        let wanderer = started_wanderer(square_config(), &transform);

        assert_eq!(wanderer.target_position(), transform.position);
        assert_eq!(wanderer.target_rotation(), transform.rotation);
        assert_eq!(wanderer.resample_count(), 0);
        assert_eq!(wanderer.sampled_yaw_degrees(), None);
    }

    #[test]
    fn resampled_targets_stay_inside_bounds() {
        let config = WanderConfig {
            bounds: WanderBounds::new(Vec2::new(-5.0, 2.0), Vec2::new(3.0, 2.5)),
            rotation_range_degrees: 90.0,
            ..WanderConfig::default()
        };
        let mut wanderer = Wanderer::new(config).expect("valid config");
        let mut rng = WanderRng::from_seed(11);

        for _ in 0..5_000 {
            wanderer.resample_target(&mut rng);
            let target = wanderer.target_position();
            assert!(config.bounds.contains_ground_point(target), "{target}");
            assert_eq!(target.y, 0.0);

            let yaw = wanderer.sampled_yaw_degrees().expect("yaw sampled");
            assert!((0.0..90.0).contains(&yaw), "yaw out of range: {yaw}");
            assert!(
                rotation_distance(wanderer.target_rotation(), yaw_rotation(yaw)) < 1e-4,
                "target rotation must be yaw-only"
            );
        }
    }

    #[test]
    fn resample_maps_second_bounds_axis_to_world_z() {
        let config = WanderConfig {
            bounds: WanderBounds::new(Vec2::new(0.0, 100.0), Vec2::new(1.0, 200.0)),
            ..WanderConfig::default()
        };
        let mut wanderer = Wanderer::new(config).expect("valid config");
        let mut draws = ScriptedDraws::new(&[0.5, 0.25, 0.5]);

        wanderer.resample_target(&mut draws);

        assert_eq!(wanderer.target_position(), Vec3::new(0.5, 0.0, 125.0));
        assert_eq!(wanderer.sampled_yaw_degrees(), Some(180.0));
        assert!((yaw_degrees(wanderer.target_rotation()) - 180.0).abs() < 1e-3);
    }

    #[test]
    fn resample_uses_configured_ground_height() {
        let config = WanderConfig {
            ground_height: 2.5,
            ..square_config()
        };
        let mut wanderer = Wanderer::new(config).expect("valid config");
        wanderer.resample_target(&mut WanderRng::from_seed(1));

        assert_eq!(wanderer.target_position().y, 2.5);
    }

    #[test]
    fn resample_does_not_touch_host_transform() {
        let transform = Transform {
            position: Vec3::new(4.0, 0.0, 4.0),
            rotation: yaw_rotation(12.0),
        };
        let before = transform;
        let mut wanderer = started_wanderer(square_config(), &transform);

        wanderer.resample_target(&mut WanderRng::from_seed(5));

        assert_eq!(transform, before);
        assert_ne!(wanderer.target_position(), before.position);
    }

    #[test]
    fn zero_width_bounds_and_zero_rotation_range_pin_the_target() {
        let config = WanderConfig {
            bounds: WanderBounds::new(Vec2::new(2.0, 3.0), Vec2::new(2.0, 3.0)),
            rotation_range_degrees: 0.0,
            ..WanderConfig::default()
        };
        let mut wanderer = Wanderer::new(config).expect("degenerate bounds are valid");
        wanderer.resample_target(&mut WanderRng::from_seed(9));

        assert_eq!(wanderer.target_position(), Vec3::new(2.0, 0.0, 3.0));
        assert_eq!(wanderer.sampled_yaw_degrees(), Some(0.0));
        assert_eq!(wanderer.target_rotation(), Quat::IDENTITY);
    }

    #[test]
    fn full_step_lands_exactly_on_previous_target() {
        let config = WanderConfig {
            lerp_speed: 1.0,
            ..square_config()
        };
        let mut transform = Transform::default();
        let mut wanderer = started_wanderer(config, &transform);
        let mut rng = WanderRng::from_seed(21);
        wanderer.resample_target(&mut rng);
        let target_position = wanderer.target_position();
        let target_rotation = wanderer.target_rotation();

        let outcome = wanderer
            .tick(1.0, &mut transform, &mut rng)
            .expect("tick succeeds");

        assert!((transform.position - target_position).length() < EPSILON);
        assert!(rotation_distance(transform.rotation, target_rotation) < EPSILON);
        assert!(matches!(outcome, TickOutcome::Resampled { .. }));
    }

    #[test]
    fn zero_delta_leaves_transform_unchanged() {
        let mut transform = Transform {
            position: Vec3::new(9.0, 0.0, 1.0),
            rotation: yaw_rotation(200.0),
        };
        let mut wanderer = Wanderer::new(square_config()).expect("valid config");
        wanderer.initialize(&Transform::default());
        let before = transform;

        let outcome = wanderer
            .tick(0.0, &mut transform, &mut WanderRng::from_seed(2))
            .expect("tick succeeds");

        assert_eq!(transform, before);
        assert!(matches!(outcome, TickOutcome::Moving { .. }));
    }

    #[test]
    fn first_tick_resamples_because_target_starts_at_current_position() {
        let mut transform = Transform {
            position: Vec3::new(5.0, 0.0, 5.0),
            rotation: Quat::IDENTITY,
        };
        let mut wanderer = started_wanderer(square_config(), &transform);

        let outcome = wanderer
            .tick(1.0 / 60.0, &mut transform, &mut WanderRng::from_seed(3))
            .expect("tick succeeds");

        assert_eq!(
            outcome,
            TickOutcome::Resampled {
                arrival_distance: 0.0
            }
        );
        assert_eq!(wanderer.resample_count(), 1);
        assert_eq!(transform.position, Vec3::new(5.0, 0.0, 5.0));
    }

    #[test]
    fn negative_delta_is_rejected_without_side_effects() {
        let mut transform = Transform {
            position: Vec3::new(1.0, 0.0, 1.0),
            rotation: Quat::IDENTITY,
        };
        let mut wanderer = started_wanderer(square_config(), &transform);
        wanderer.resample_target(&mut WanderRng::from_seed(4));
        let target_before = wanderer.target_position();
        let transform_before = transform;

        let error = wanderer
            .tick(-0.016, &mut transform, &mut WanderRng::from_seed(4))
            .expect_err("negative delta must be rejected");

        assert_eq!(
            error,
            WanderError::InvalidArgument(ArgumentIssue::NegativeDeltaTime(-0.016))
        );
        assert_eq!(transform, transform_before);
        assert_eq!(wanderer.target_position(), target_before);
        assert_eq!(wanderer.resample_count(), 1);
    }

    #[test]
    fn non_finite_delta_is_rejected() {
        let mut transform = Transform::default();
        let mut wanderer = started_wanderer(square_config(), &transform);

        let error = wanderer
            .tick(f32::NAN, &mut transform, &mut WanderRng::from_seed(4))
            .expect_err("nan delta must be rejected");

        assert!(matches!(
            error,
            WanderError::InvalidArgument(ArgumentIssue::NonFiniteDeltaTime(_))
        ));
    }

    #[test]
    fn approaches_target_monotonically_until_arrival() {
        let mut transform = Transform::default();
        let mut wanderer = started_wanderer(square_config(), &transform);
        let mut draws = ScriptedDraws::new(&[0.75, 0.5, 0.25]);
        wanderer.resample_target(&mut draws);
        let first_target = wanderer.target_position();
        assert_eq!(first_target, Vec3::new(7.5, 0.0, 5.0));

        let mut previous = transform.position.distance(first_target);
        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 1_000, "never arrived");
            match wanderer
                .tick(1.0, &mut transform, &mut draws)
                .expect("tick succeeds")
            {
                TickOutcome::Moving { distance } => {
                    assert!(distance < previous, "{distance} !< {previous}");
                    assert!(distance >= DEFAULT_ARRIVAL_THRESHOLD);
                    previous = distance;
                }
                TickOutcome::Resampled { arrival_distance } => {
                    assert!(arrival_distance < DEFAULT_ARRIVAL_THRESHOLD);
                    assert!(arrival_distance < previous);
                    break;
                }
            }
        }

        assert_eq!(wanderer.resample_count(), 2);
        assert!(square_config()
            .bounds
            .contains_ground_point(wanderer.target_position()));
    }

    #[test]
    fn rotation_converges_alongside_position() {
        let mut transform = Transform::default();
        let config = WanderConfig {
            lerp_speed: 0.5,
            ..square_config()
        };
        let mut wanderer = started_wanderer(config, &transform);
        let mut draws = ScriptedDraws::new(&[1.0, 1.0, 0.25]);
        wanderer.resample_target(&mut draws);
        let target_rotation = wanderer.target_rotation();

        let mut previous = rotation_distance(transform.rotation, target_rotation);
        for _ in 0..4 {
            wanderer
                .tick(1.0, &mut transform, &mut draws)
                .expect("tick succeeds");
            let current = rotation_distance(transform.rotation, target_rotation);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn arrival_threshold_is_configurable() {
        let config = WanderConfig {
            arrival_threshold: 20.0,
            ..square_config()
        };
        let mut transform = Transform::default();
        let mut wanderer = started_wanderer(config, &transform);
        let mut draws = ScriptedDraws::new(&[1.0, 1.0, 0.0]);
        wanderer.resample_target(&mut draws);

        let outcome = wanderer
            .tick(0.0, &mut transform, &mut draws)
            .expect("tick succeeds");

        assert!(matches!(outcome, TickOutcome::Resampled { .. }));
    }

    #[test]
    fn inverted_bounds_fail_fast() {
        let config = WanderConfig {
            bounds: WanderBounds::new(Vec2::new(5.0, 0.0), Vec2::new(1.0, 10.0)),
            ..WanderConfig::default()
        };

        let error = Wanderer::new(config).expect_err("inverted x must fail");
        assert_eq!(
            error,
            WanderError::InvalidConfiguration(ConfigIssue::InvertedBounds {
                axis: 'x',
                min: 5.0,
                max: 1.0,
            })
        );

        let config = WanderConfig {
            bounds: WanderBounds::new(Vec2::new(0.0, 4.0), Vec2::new(1.0, -4.0)),
            ..WanderConfig::default()
        };
        assert!(matches!(
            Wanderer::new(config),
            Err(WanderError::InvalidConfiguration(
                ConfigIssue::InvertedBounds { axis: 'y', .. }
            ))
        ));
    }

    #[test]
    fn oversized_bounds_fail_fast() {
        let config = WanderConfig {
            bounds: WanderBounds::new(Vec2::new(-3.0e38, -1.0), Vec2::new(3.0e38, 1.0)),
            ..WanderConfig::default()
        };

        assert!(matches!(
            Wanderer::new(config),
            Err(WanderError::InvalidConfiguration(
                ConfigIssue::OversizedBounds { .. }
            ))
        ));
    }

    #[test]
    fn large_finite_bounds_resample_inside() {
        let config = WanderConfig {
            bounds: WanderBounds::new(Vec2::new(-1.5e38, -1.0), Vec2::new(1.5e38, 1.0)),
            ..WanderConfig::default()
        };
        let mut wanderer = Wanderer::new(config).expect("span fits in f32");
        let mut rng = WanderRng::from_seed(23);

        for _ in 0..1_000 {
            wanderer.resample_target(&mut rng);
            let target = wanderer.target_position();
            assert!(target.is_finite(), "{target}");
            assert!(config.bounds.contains_ground_point(target), "{target}");
        }
    }

    #[test]
    fn lerp_speed_outside_recommended_range_is_accepted() {
        assert!(lerp_speed_is_recommended(DEFAULT_LERP_SPEED));
        assert!(lerp_speed_is_recommended(0.01));
        assert!(lerp_speed_is_recommended(0.1));
        assert!(!lerp_speed_is_recommended(0.005));
        assert!(!lerp_speed_is_recommended(0.5));

        let config = WanderConfig {
            lerp_speed: 4.0,
            ..WanderConfig::default()
        };
        assert!(Wanderer::new(config).is_ok());
    }

    #[test]
    fn invalid_scalars_fail_fast() {
        let cases = [
            WanderConfig {
                rotation_range_degrees: -1.0,
                ..WanderConfig::default()
            },
            WanderConfig {
                lerp_speed: 0.0,
                ..WanderConfig::default()
            },
            WanderConfig {
                lerp_speed: f32::NAN,
                ..WanderConfig::default()
            },
            WanderConfig {
                arrival_threshold: 0.0,
                ..WanderConfig::default()
            },
            WanderConfig {
                ground_height: f32::INFINITY,
                ..WanderConfig::default()
            },
            WanderConfig {
                bounds: WanderBounds::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE),
                ..WanderConfig::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(
                    Wanderer::new(config),
                    Err(WanderError::InvalidConfiguration(_))
                ),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn set_config_rejects_invalid_and_keeps_previous() {
        let mut wanderer = Wanderer::new(square_config()).expect("valid config");
        let bad = WanderConfig {
            rotation_range_degrees: -30.0,
            ..square_config()
        };

        assert!(wanderer.set_config(bad).is_err());
        assert_eq!(wanderer.config(), &square_config());

        let good = WanderConfig {
            lerp_speed: 0.1,
            ..square_config()
        };
        wanderer.set_config(good).expect("valid config");
        assert_eq!(wanderer.config().lerp_speed, 0.1);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: WanderConfig = serde_json::from_str(
            r#"{ "bounds": { "min": [-3.0, -4.0], "max": [3.0, 4.0] }, "lerp_speed": 0.02 }"#,
        )
        .expect("config json");

        assert_eq!(config.bounds.min, Vec2::new(-3.0, -4.0));
        assert_eq!(config.bounds.max, Vec2::new(3.0, 4.0));
        assert_eq!(config.lerp_speed, 0.02);
        assert_eq!(config.rotation_range_degrees, DEFAULT_ROTATION_RANGE_DEGREES);
        assert_eq!(config.arrival_threshold, DEFAULT_ARRIVAL_THRESHOLD);
        assert_eq!(config.ground_height, DEFAULT_GROUND_HEIGHT);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let error = WanderError::from(ConfigIssue::InvertedBounds {
            axis: 'y',
            min: 3.0,
            max: 1.0,
        });
        assert_eq!(
            error.to_string(),
            "invalid wander configuration: bounds min.y (3) is greater than max.y (1)"
        );
    }
}
