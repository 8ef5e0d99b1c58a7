use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::pbr::{CascadeShadowConfigBuilder, DistanceFog, FogFalloff};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, HOME_CAMERA_EYE};
use crate::engine::camera::reframe::{ReframeRequest, reframe_camera};
use crate::engine::camera::rig::{CameraRig, camera_controller};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::crowd_texture::{
    CrowdTextureLoader, check_crowd_texture, start_crowd_texture_loading,
};
use crate::engine::loading::policy_loader::{
    PolicyLoader, check_policy_loaded, start_policy_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::template_builder::build_templates_when_ready;
use crate::engine::population::policy::PopulationPolicy;
use crate::engine::population::request::PopulationRequest;
use crate::engine::population::scheduler::{
    InitialPopulation, SceneGeneration, handle_population_requests, queue_initial_population,
    run_population_batches,
};
use crate::engine::systems::presets::population_preset_keys;
use crate::engine::systems::viewport_resize::{ResizeDebounce, handle_viewport_resize};
use crate::engine::ui::labels::update_labels;
use crate::engine::ui::readout::{
    PopulationReadout, fps_text_update_system, readout_text_update_system, spawn_hud,
};

pub fn create_app(initial_population: u64) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers PopulationPolicy as a loadable asset type from JSON.
        .add_plugins(JsonAssetPlugin::<PopulationPolicy>::new(&["json"]))
        .init_state::<AppState>()
        .insert_resource(ClearColor(Color::srgb_u8(0x87, 0xce, 0xeb)))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 400.0,
            ..default()
        })
        .insert_resource(InitialPopulation(initial_population))
        .init_resource::<LoadingProgress>()
        .init_resource::<CrowdTextureLoader>()
        .init_resource::<PolicyLoader>()
        .init_resource::<PopulationPolicy>()
        .init_resource::<SceneGeneration>()
        .init_resource::<PopulationReadout>()
        .init_resource::<CameraRig>()
        .init_resource::<ResizeDebounce>()
        .add_event::<PopulationRequest>()
        .add_event::<ReframeRequest>();

    app.add_systems(
        Startup,
        (setup, start_policy_loading, start_crowd_texture_loading),
    )
    .add_systems(
        Update,
        (
            check_policy_loaded,
            check_crowd_texture,
            build_templates_when_ready,
            transition_to_running,
        )
            .chain()
            .run_if(in_state(AppState::Loading)),
    )
    .add_systems(OnEnter(AppState::Running), queue_initial_population)
    // Fixed per-frame order: requests, deferred batches, reframing, camera
    // input (which applies the rig pose and the ground clamp), then label
    // projection against the final camera pose.
    .add_systems(
        Update,
        (
            population_preset_keys,
            handle_population_requests,
            run_population_batches,
            reframe_camera,
            camera_controller,
            update_labels,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    )
    .add_systems(
        Update,
        (
            handle_viewport_resize,
            readout_text_update_system,
            fps_text_update_system,
        ),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}

// Startup system that only handles basic scene scaffolding; everything
// layout-dependent is spawned by the population scheduler.
fn setup(mut commands: Commands) {
    spawn_camera(&mut commands);
    spawn_lighting(&mut commands);
    spawn_hud(&mut commands);
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(HOME_CAMERA_EYE).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog {
            color: Color::srgb_u8(0xf0, 0xf0, 0xf0),
            falloff: FogFalloff::ExponentialSquared { density: 0.00025 },
            ..default()
        },
    ));
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(500.0, 1_000.0, 500.0).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            maximum_distance: 3_000.0,
            ..default()
        }
        .build(),
    ));
}
