mod loop_runner;
mod metrics;
mod scene;

pub use loop_runner::{run_headless, AppError, LoopConfig, RunSummary, StopReason};
pub use metrics::LoopMetricsSnapshot;
pub use scene::{
    Entity, EntityId, EntityIdAllocator, Scene, SceneCommand, SceneWorld, Transform,
    TransformAccess,
};
