use engine::{LoopConfig, Scene, WanderRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::settings::{load_settings, settings_path_from_env, SettingsError};
use super::wander_scene::WanderScene;

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, SettingsError> {
    init_tracing();
    info!("=== Wander Startup ===");

    let settings_path = settings_path_from_env()?;
    let settings = load_settings(settings_path.as_deref())?;
    let source = settings_path
        .as_deref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    info!(
        source = source.as_str(),
        wanderer_count = settings.wanderer_count,
        seed = ?settings.seed,
        spawn_point_count = settings.spawn_points.len(),
        "settings_loaded"
    );

    let rng = WanderRng::from_optional_seed(settings.seed);
    let scene = WanderScene::new(
        settings.wander,
        settings.wanderer_count,
        settings.spawn_positions(),
        rng,
    )?;

    Ok(AppWiring {
        config: settings.loop_settings.to_loop_config(),
        scene: Box::new(scene),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
