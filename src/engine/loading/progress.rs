use bevy::prelude::*;

/// Loading milestones gating the transition to the running state.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub policy_resolved: bool,
    pub crowd_texture_resolved: bool,
    pub templates_built: bool,
}
