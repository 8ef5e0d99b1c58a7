use bevy::asset::LoadState;
use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Ordered crowd covering candidates, tried until one loads. When every
/// candidate fails the stands fall back to a flat colour; the pipeline
/// never fails on a missing covering.
const CROWD_TEXTURE_CANDIDATES: [&str; 3] = [
    "textures/crowd_stands_a.jpg",
    "textures/crowd_stands_b.jpg",
    "textures/crowd_stands_c.png",
];

#[derive(Resource, Default)]
pub struct CrowdTextureLoader {
    candidate: usize,
    handle: Option<Handle<Image>>,
    loaded: Option<Handle<Image>>,
}

impl CrowdTextureLoader {
    pub fn loaded_texture(&self) -> Option<Handle<Image>> {
        self.loaded.clone()
    }
}

pub fn start_crowd_texture_loading(
    mut loader: ResMut<CrowdTextureLoader>,
    asset_server: Res<AssetServer>,
) {
    loader.handle = Some(asset_server.load(CROWD_TEXTURE_CANDIDATES[0]));
}

/// Poll the current candidate; on failure advance to the next one, on
/// success configure repeat wrapping so the covering can tile across the
/// stands.
pub fn check_crowd_texture(
    mut loader: ResMut<CrowdTextureLoader>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
) {
    if progress.crowd_texture_resolved {
        return;
    }
    let Some(handle) = loader.handle.clone() else {
        progress.crowd_texture_resolved = true;
        return;
    };

    match asset_server.get_load_state(&handle) {
        Some(LoadState::Loaded) => {
            configure_crowd_sampler(&mut images, &handle);
            info!(
                "Crowd texture loaded: {}",
                CROWD_TEXTURE_CANDIDATES[loader.candidate]
            );
            loader.loaded = Some(handle);
            progress.crowd_texture_resolved = true;
        }
        Some(LoadState::Failed(_)) => {
            warn!(
                "Crowd texture candidate failed: {}",
                CROWD_TEXTURE_CANDIDATES[loader.candidate]
            );
            loader.candidate += 1;
            match CROWD_TEXTURE_CANDIDATES.get(loader.candidate) {
                Some(path) => loader.handle = Some(asset_server.load(*path)),
                None => {
                    warn!("All crowd texture candidates failed; using flat fallback colour");
                    loader.handle = None;
                    progress.crowd_texture_resolved = true;
                }
            }
        }
        _ => {}
    }
}

fn configure_crowd_sampler(images: &mut Assets<Image>, handle: &Handle<Image>) {
    if let Some(image) = images.get_mut(handle) {
        image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            mag_filter: ImageFilterMode::Linear,
            min_filter: ImageFilterMode::Linear,
            mipmap_filter: ImageFilterMode::Linear,
            ..default()
        });
    }
}
