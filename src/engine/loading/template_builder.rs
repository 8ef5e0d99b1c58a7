use bevy::prelude::*;

use crate::engine::loading::crowd_texture::CrowdTextureLoader;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::stadium::templates::StadiumTemplates;

/// Build the three detail-tier templates once the crowd texture chain has
/// resolved, with or without a texture. Runs exactly once per session.
pub fn build_templates_when_ready(
    mut commands: Commands,
    mut progress: ResMut<LoadingProgress>,
    loader: Res<CrowdTextureLoader>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if progress.templates_built || !progress.crowd_texture_resolved {
        return;
    }

    let templates = StadiumTemplates::build(&mut meshes, &mut materials, loader.loaded_texture());
    if templates.has_crowd_texture() {
        info!("Stadium templates built with crowd texture");
    } else {
        info!("Stadium templates built with flat crowd fallback");
    }

    commands.insert_resource(templates);
    progress.templates_built = true;
}
