use engine::{
    EntityId, Quat, Scene, SceneCommand, SceneWorld, TickOutcome, Transform, Vec2, Vec3,
    WanderConfig, WanderError, WanderRng, Wanderer,
};
use tracing::{debug, error, info, warn};

struct WanderAgent {
    entity_id: EntityId,
    wanderer: Wanderer,
}

/// Scene that spawns a fixed population of idle wanderers and steps each one per tick.
pub(crate) struct WanderScene {
    config: WanderConfig,
    wanderer_count: u32,
    spawn_points: Vec<Vec3>,
    rng: WanderRng,
    agents: Vec<WanderAgent>,
    load_failure: Option<String>,
    ticks: u64,
    total_resamples: u64,
}

impl WanderScene {
    pub(crate) fn new(
        config: WanderConfig,
        wanderer_count: u32,
        spawn_points: Vec<Vec3>,
        rng: WanderRng,
    ) -> Result<Self, WanderError> {
        config.validate()?;
        Ok(Self {
            config,
            wanderer_count,
            spawn_points,
            rng,
            agents: Vec::new(),
            load_failure: None,
            ticks: 0,
            total_resamples: 0,
        })
    }

    fn start_position(&self, index: usize) -> Vec3 {
        if let Some(point) = self.spawn_points.get(index) {
            return *point;
        }
        let bounds = self.config.bounds;
        let fraction = (index as f32 + 1.0) / (self.wanderer_count as f32 + 1.0);
        let ground = bounds.min + (bounds.max - bounds.min) * fraction;
        ground_point(ground, self.config.ground_height)
    }

    #[cfg(test)]
    fn wanderer_for(&self, entity_id: EntityId) -> Option<&Wanderer> {
        self.agents
            .iter()
            .find(|agent| agent.entity_id == entity_id)
            .map(|agent| &agent.wanderer)
    }
}

fn ground_point(ground: Vec2, height: f32) -> Vec3 {
    Vec3::new(ground.x, height, ground.y)
}

impl Scene for WanderScene {
    fn load(&mut self, world: &mut SceneWorld) {
        self.agents.clear();
        self.load_failure = None;
        self.ticks = 0;
        self.total_resamples = 0;

        for index in 0..self.wanderer_count as usize {
            let mut wanderer = match Wanderer::new(self.config) {
                Ok(wanderer) => wanderer,
                Err(error) => {
                    error!(error = %error, index, "wanderer_create_failed");
                    self.load_failure = Some(error.to_string());
                    return;
                }
            };
            let transform = Transform {
                position: self.start_position(index),
                rotation: Quat::IDENTITY,
            };
            let entity_id = world.spawn(transform, format!("wanderer_{index}"));
            wanderer.initialize(&transform);
            self.agents.push(WanderAgent {
                entity_id,
                wanderer,
            });
        }

        info!(
            wanderer_count = self.agents.len(),
            bounds_min = %self.config.bounds.min,
            bounds_max = %self.config.bounds.max,
            lerp_speed = self.config.lerp_speed,
            arrival_threshold = self.config.arrival_threshold,
            "wander_scene_loaded"
        );
    }

    fn update(&mut self, fixed_dt_seconds: f32, world: &mut SceneWorld) -> SceneCommand {
        if let Some(reason) = &self.load_failure {
            return SceneCommand::Abort(reason.clone());
        }

        self.ticks = self.ticks.saturating_add(1);
        for agent in &mut self.agents {
            let Some(entity) = world.find_entity_mut(agent.entity_id) else {
                warn!(entity_id = agent.entity_id.0, "wanderer_entity_missing");
                continue;
            };
            match agent.wanderer.tick(fixed_dt_seconds, entity, &mut self.rng) {
                Ok(TickOutcome::Moving { .. }) => {}
                Ok(TickOutcome::Resampled { arrival_distance }) => {
                    self.total_resamples = self.total_resamples.saturating_add(1);
                    let target = agent.wanderer.target_position();
                    debug!(
                        entity_id = agent.entity_id.0,
                        arrival_distance,
                        target_x = target.x,
                        target_z = target.z,
                        "wanderer_new_target"
                    );
                }
                Err(error) => {
                    error!(
                        entity_id = agent.entity_id.0,
                        error = %error,
                        "wanderer_tick_failed"
                    );
                    return SceneCommand::Abort(error.to_string());
                }
            }
        }
        SceneCommand::None
    }

    fn unload(&mut self, _world: &mut SceneWorld) {
        info!(
            ticks = self.ticks,
            total_resamples = self.total_resamples,
            "wander_scene_unloaded"
        );
        self.agents.clear();
    }

    fn debug_summary(&self, _world: &SceneWorld) -> Option<String> {
        Some(format!(
            "wanderers={} ticks={} resamples={}",
            self.agents.len(),
            self.ticks,
            self.total_resamples
        ))
    }
}
