use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine::{LoopConfig, Vec3, WanderConfig, WanderError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const SETTINGS_ENV_VAR: &str = "WANDER_SETTINGS";

const DEFAULT_WANDERER_COUNT: u32 = 4;
const DEFAULT_MAX_TICKS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WanderSettings {
    pub(crate) wanderer_count: u32,
    pub(crate) seed: Option<u64>,
    /// Start positions by wanderer index; wanderers past the end are spread along the
    /// bounds diagonal.
    pub(crate) spawn_points: Vec<[f32; 3]>,
    pub(crate) wander: WanderConfig,
    #[serde(rename = "loop")]
    pub(crate) loop_settings: LoopSettings,
}

impl Default for WanderSettings {
    fn default() -> Self {
        Self {
            wanderer_count: DEFAULT_WANDERER_COUNT,
            seed: None,
            spawn_points: Vec::new(),
            wander: WanderConfig::default(),
            loop_settings: LoopSettings::default(),
        }
    }
}

impl WanderSettings {
    pub(crate) fn validate(&self) -> Result<(), SettingsError> {
        self.wander.validate()?;
        for (index, point) in self.spawn_points.iter().enumerate() {
            if point.iter().any(|component| !component.is_finite()) {
                return Err(SettingsError::NonFiniteSpawnPoint {
                    index,
                    point: *point,
                });
            }
        }
        Ok(())
    }

    pub(crate) fn spawn_positions(&self) -> Vec<Vec3> {
        self.spawn_points.iter().copied().map(Vec3::from).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LoopSettings {
    pub(crate) target_tps: u32,
    pub(crate) max_frame_delta_ms: u64,
    pub(crate) max_ticks_per_frame: u32,
    pub(crate) metrics_log_interval_ms: u64,
    pub(crate) max_ticks: Option<u64>,
    pub(crate) realtime: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        let defaults = LoopConfig::default();
        Self {
            target_tps: defaults.target_tps,
            max_frame_delta_ms: defaults.max_frame_delta.as_millis() as u64,
            max_ticks_per_frame: defaults.max_ticks_per_frame,
            metrics_log_interval_ms: defaults.metrics_log_interval.as_millis() as u64,
            max_ticks: Some(DEFAULT_MAX_TICKS),
            realtime: defaults.realtime,
        }
    }
}

impl LoopSettings {
    pub(crate) fn to_loop_config(&self) -> LoopConfig {
        LoopConfig {
            target_tps: self.target_tps,
            max_frame_delta: Duration::from_millis(self.max_frame_delta_ms),
            max_ticks_per_frame: self.max_ticks_per_frame,
            metrics_log_interval: Duration::from_millis(self.metrics_log_interval_ms),
            max_ticks: self.max_ticks,
            realtime: self.realtime,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error(transparent)]
    Wander(#[from] WanderError),
    #[error("spawn point {index} must be finite, got {point:?}")]
    NonFiniteSpawnPoint { index: usize, point: [f32; 3] },
}

/// Settings path from `WANDER_SETTINGS`; `None` when the variable is unset.
pub(crate) fn settings_path_from_env() -> Result<Option<PathBuf>, SettingsError> {
    match env::var(SETTINGS_ENV_VAR) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(PathBuf::from(value))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(SettingsError::EnvVar {
            var: SETTINGS_ENV_VAR,
            source,
        }),
    }
}

/// Loads and validates settings; no path means built-in defaults.
pub(crate) fn load_settings(path: Option<&Path>) -> Result<WanderSettings, SettingsError> {
    let settings = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_settings_json(&raw, path)?
        }
        None => WanderSettings::default(),
    };
    settings.validate()?;
    Ok(settings)
}

fn parse_settings_json(raw: &str, path: &Path) -> Result<WanderSettings, SettingsError> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    match serde_path_to_error::deserialize::<_, WanderSettings>(&mut deserializer) {
        Ok(settings) => Ok(settings),
        Err(error) => {
            let location = error.path().to_string();
            let source = error.into_inner();
            let message = if location.is_empty() || location == "." {
                source.to_string()
            } else {
                format!("at {location}: {source}")
            };
            Err(SettingsError::Parse {
                path: path.to_path_buf(),
                message,
            })
        }
    }
}
