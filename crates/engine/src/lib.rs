pub mod app;
pub mod behavior;

pub use app::{
    run_headless, AppError, Entity, EntityId, LoopConfig, LoopMetricsSnapshot, RunSummary, Scene,
    SceneCommand, SceneWorld, StopReason, Transform, TransformAccess,
};
pub use behavior::{
    ConfigIssue, ArgumentIssue, TickOutcome, UniformSource, WanderBounds, WanderConfig,
    WanderError, WanderRng, Wanderer,
};
pub use glam::{Quat, Vec2, Vec3};
