use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Move to the running state once the policy and the tier templates have
/// resolved, whichever way the crowd texture chain ended.
pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.policy_resolved && progress.templates_built {
        info!("→ Assets resolved, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
