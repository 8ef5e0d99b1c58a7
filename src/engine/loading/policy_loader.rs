use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;
use crate::engine::population::policy::PopulationPolicy;

#[derive(Resource, Default)]
pub struct PolicyLoader {
    handle: Option<Handle<PopulationPolicy>>,
}

pub fn start_policy_loading(mut loader: ResMut<PolicyLoader>, asset_server: Res<AssetServer>) {
    loader.handle = Some(asset_server.load("config/population_policy.json"));
}

/// Replace the built-in policy defaults with the JSON override when it
/// exists; a missing or unreadable file keeps the defaults.
pub fn check_policy_loaded(
    mut commands: Commands,
    mut loader: ResMut<PolicyLoader>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    policies: Res<Assets<PopulationPolicy>>,
) {
    if progress.policy_resolved {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        progress.policy_resolved = true;
        return;
    };

    if let Some(policy) = policies.get(&handle) {
        info!("Population policy loaded from config/population_policy.json");
        commands.insert_resource(policy.clone());
        progress.policy_resolved = true;
    } else if matches!(
        asset_server.get_load_state(&handle),
        Some(LoadState::Failed(_))
    ) {
        warn!("No population policy override found; using built-in defaults");
        loader.handle = None;
        progress.policy_resolved = true;
    }
}
