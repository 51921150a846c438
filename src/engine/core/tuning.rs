use bevy::asset::LoadState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::camera_settings::{TUNABLE_MAX, TUNABLE_MIN, TUNING_ASSET_PATH};
use crate::engine::camera::free_fly::{FreeFlyRig, FreeFlySettings};
use crate::engine::camera::sensitivity::SensitivityCurve;

/// Camera tuning as a JSON-loadable asset. Mirrors the numeric half of
/// [`FreeFlySettings`]; key and button bindings stay code-side.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct CameraTuning {
    pub movement_sensitivity: f32,
    pub boost: f32,
    pub position_smooth_time: f32,
    pub rotation_smooth_time: f32,
    #[serde(default)]
    pub invert_y: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity_curve: Option<SensitivityCurve>,
}

impl CameraTuning {
    /// Copies the tuning onto live settings, clamping the bounded fields
    /// to their valid 0.001–1 range.
    pub fn apply(&self, settings: &mut FreeFlySettings) {
        settings.movement_sensitivity = self.movement_sensitivity.clamp(TUNABLE_MIN, TUNABLE_MAX);
        settings.boost = self.boost;
        settings.position_smooth_time = self.position_smooth_time.clamp(TUNABLE_MIN, TUNABLE_MAX);
        settings.rotation_smooth_time = self.rotation_smooth_time.clamp(TUNABLE_MIN, TUNABLE_MAX);
        settings.invert_y = self.invert_y;
        if let Some(curve) = &self.sensitivity_curve {
            settings.sensitivity_curve = curve.clone();
        }
    }
}

#[derive(Resource, Default)]
pub struct TuningLoader {
    handle: Option<Handle<CameraTuning>>,
    finished: bool,
}

/// Kicks off the tuning asset load.
pub fn start_tuning_load(mut loader: ResMut<TuningLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load(TUNING_ASSET_PATH));
}

/// Applies the tuning to every rig once the asset resolves. A missing or
/// malformed file keeps the defaults and logs a warning.
pub fn apply_tuning_when_ready(
    mut loader: ResMut<TuningLoader>,
    asset_server: Res<AssetServer>,
    tunings: Res<Assets<CameraTuning>>,
    mut rigs: Query<&mut FreeFlyRig>,
) {
    if loader.finished {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        return;
    };
    if let Some(tuning) = tunings.get(&handle) {
        for mut rig in rigs.iter_mut() {
            tuning.apply(&mut rig.settings);
        }
        info!("Applied camera tuning from {TUNING_ASSET_PATH}");
        loader.finished = true;
    } else if matches!(asset_server.load_state(&handle), LoadState::Failed(_)) {
        warn!("Camera tuning {TUNING_ASSET_PATH} failed to load, keeping defaults");
        loader.finished = true;
    }
}
