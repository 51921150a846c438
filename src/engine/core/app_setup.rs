use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::camera::free_fly::{FreeFlyRig, activate_added_rigs, drive_free_fly_rigs};
use crate::engine::core::tuning::{
    CameraTuning, TuningLoader, apply_tuning_when_ready, start_tuning_load,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::devices::{claim_active_gamepad, resolve_input_devices};
use crate::engine::session::{SessionRegistry, register_added_rigs, unregister_removed_rigs};

/// The camera rig as a plain Bevy plugin.
///
/// Resolves the input device slots (use the current device, else create a
/// virtual one), activates and registers rigs as their components appear,
/// and runs the sample-then-update pipeline once per fixed tick. The
/// session registry is injected by the embedding app; without it the
/// registration systems are silent no-ops.
pub struct FreeFlyCameraPlugin;

impl Plugin for FreeFlyCameraPlugin {
    fn build(&self, app: &mut App) {
        resolve_input_devices(app);
        app.add_systems(PreUpdate, (activate_added_rigs, register_added_rigs))
            .add_systems(
                FixedUpdate,
                (claim_active_gamepad, drive_free_fly_rigs).chain(),
            )
            .add_systems(PostUpdate, unregister_removed_rigs);
    }
}

/// Builds the demo viewer application.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<CameraTuning>::new(&["json"]))
        .add_plugins(FreeFlyCameraPlugin)
        .init_resource::<SessionRegistry>()
        .init_resource::<TuningLoader>()
        .add_systems(Startup, (setup_scene, start_tuning_load))
        .add_systems(Update, (apply_tuning_when_ready, fps_text_update_system));

    app
}

fn create_default_plugins() -> impl PluginGroup {
    DefaultPlugins.set(WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    })
}

#[derive(Component)]
pub struct FpsText;

/// Spawns the rigged camera, lighting, landmark geometry, and the UI.
fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
        FreeFlyRig::default(),
    ));

    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    // Landmark grid so camera motion is visible.
    let cube = meshes.add(Cuboid::from_length(1.0));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.6, 0.4),
        ..default()
    });
    for x in -4..=4 {
        for z in -4..=4 {
            commands.spawn((
                Mesh3d(cube.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(x as f32 * 4.0, 0.0, z as f32 * 4.0),
            ));
        }
    }

    spawn_ui(&mut commands);
}

fn spawn_ui(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(
                    "LMB drag: look | RMB drag: pan | WASD+QE: move\n\
                     Shift: 10x | wheel: boost | R: reset",
                ),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}
