use bevy::math::Affine2;
use bevy::prelude::*;

use crate::engine::stadium::DetailTier;

/// Mesh handles for one detail tier. Pole and fixture are absent on the low
/// tier to bound triangle count.
#[derive(Debug, Clone)]
pub struct TierTemplate {
    pub base: Handle<Mesh>,
    pub bowl: Handle<Mesh>,
    pub field: Handle<Mesh>,
    pub stands: Handle<Mesh>,
    pub pole: Option<Handle<Mesh>>,
    pub fixture: Option<Handle<Mesh>>,
    /// Crowd texture tiling across the stands, trimmed down with the tier.
    pub crowd_repeat: Vec2,
}

/// Immutable geometry and material bundles for the three detail tiers,
/// built once per session. Stadium instances reference these handles and
/// never mutate them; the only per-instance state is the crowd material
/// created through [`StadiumTemplates::crowd_material_instance`].
#[derive(Resource)]
pub struct StadiumTemplates {
    high: TierTemplate,
    medium: TierTemplate,
    low: TierTemplate,
    pub base_material: Handle<StandardMaterial>,
    pub bowl_material: Handle<StandardMaterial>,
    pub field_material: Handle<StandardMaterial>,
    pub pole_material: Handle<StandardMaterial>,
    pub fixture_material: Handle<StandardMaterial>,
    crowd_texture: Option<Handle<Image>>,
    crowd_fallback_material: Handle<StandardMaterial>,
}

impl StadiumTemplates {
    pub fn build(
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        crowd_texture: Option<Handle<Image>>,
    ) -> Self {
        let high = build_tier(meshes, 32, 5, 16, true, Vec2::new(8.0, 3.0));
        let medium = build_tier(meshes, 16, 3, 8, false, Vec2::new(6.0, 2.0));
        let low = build_tier(meshes, 8, 1, 4, false, Vec2::new(4.0, 1.0));

        let base_material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x88, 0x88, 0x88),
            perceptual_roughness: 0.7,
            metallic: 0.3,
            ..default()
        });
        let bowl_material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xcc, 0xcc, 0xcc),
            perceptual_roughness: 0.8,
            metallic: 0.2,
            double_sided: true,
            cull_mode: None,
            ..default()
        });
        let field_material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x00, 0x3d, 0x00),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        });
        let pole_material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x55, 0x55, 0x55),
            perceptual_roughness: 0.7,
            metallic: 0.5,
            ..default()
        });
        let fixture_material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x33, 0x33, 0x33),
            perceptual_roughness: 0.8,
            metallic: 0.5,
            ..default()
        });
        let crowd_fallback_material = materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xe7, 0x4c, 0x3c),
            perceptual_roughness: 0.9,
            metallic: 0.1,
            double_sided: true,
            cull_mode: None,
            ..default()
        });

        Self {
            high,
            medium,
            low,
            base_material,
            bowl_material,
            field_material,
            pole_material,
            fixture_material,
            crowd_texture,
            crowd_fallback_material,
        }
    }

    pub fn tier(&self, tier: DetailTier) -> &TierTemplate {
        match tier {
            DetailTier::High => &self.high,
            DetailTier::Medium => &self.medium,
            DetailTier::Low => &self.low,
        }
    }

    pub fn has_crowd_texture(&self) -> bool {
        self.crowd_texture.is_some()
    }

    /// Per-instance crowd material with a randomised texture offset so
    /// neighbouring stadiums do not show the same crowd pattern. Falls back
    /// to a flat colour when no crowd texture could be loaded.
    pub fn crowd_material_instance(
        &self,
        materials: &mut Assets<StandardMaterial>,
        tier: DetailTier,
    ) -> Handle<StandardMaterial> {
        let Some(texture) = self.crowd_texture.clone() else {
            return self.crowd_fallback_material.clone();
        };

        let repeat = self.tier(tier).crowd_repeat;
        let offset = Vec2::new(
            rand::random::<f32>() * 0.5,
            rand::random::<f32>() * 0.5,
        );

        materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xee, 0xee, 0xee),
            base_color_texture: Some(texture),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            emissive: LinearRgba::rgb(0.02, 0.02, 0.02),
            double_sided: true,
            cull_mode: None,
            uv_transform: Affine2::from_scale_angle_translation(repeat, 0.0, offset),
            ..default()
        })
    }
}

fn build_tier(
    meshes: &mut Assets<Mesh>,
    resolution: u32,
    bowl_segments: u32,
    stands_segments: u32,
    with_lights: bool,
    crowd_repeat: Vec2,
) -> TierTemplate {
    let base = meshes.add(
        ConicalFrustum {
            radius_top: 100.0,
            radius_bottom: 110.0,
            height: 20.0,
        }
        .mesh()
        .resolution(resolution)
        .segments(1),
    );
    let bowl = meshes.add(
        ConicalFrustum {
            radius_top: 95.0,
            radius_bottom: 105.0,
            height: 40.0,
        }
        .mesh()
        .resolution(resolution)
        .segments(bowl_segments),
    );
    let field = meshes.add(Circle::new(70.0).mesh().resolution(resolution));
    let stands = meshes.add(
        ConicalFrustum {
            radius_top: 75.0,
            radius_bottom: 102.0,
            height: 30.0,
        }
        .mesh()
        .resolution(resolution)
        .segments(stands_segments),
    );

    let (pole, fixture) = if with_lights {
        (
            Some(meshes.add(Cylinder::new(1.0, 80.0).mesh().resolution(6))),
            Some(meshes.add(Cuboid::new(10.0, 5.0, 10.0))),
        )
    } else {
        (None, None)
    };

    TierTemplate {
        base,
        bowl,
        field,
        stands,
        pole,
        fixture,
        crowd_repeat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_default() -> (
        Assets<Mesh>,
        Assets<StandardMaterial>,
        StadiumTemplates,
    ) {
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let templates = StadiumTemplates::build(&mut meshes, &mut materials, None);
        (meshes, materials, templates)
    }

    #[test]
    fn low_tier_omits_light_masts() {
        let (_, _, templates) = build_default();
        assert!(templates.tier(DetailTier::High).pole.is_some());
        assert!(templates.tier(DetailTier::High).fixture.is_some());
        assert!(templates.tier(DetailTier::Medium).pole.is_none());
        assert!(templates.tier(DetailTier::Low).pole.is_none());
        assert!(templates.tier(DetailTier::Low).fixture.is_none());
    }

    #[test]
    fn crowd_repeat_decreases_with_tier() {
        let (_, _, templates) = build_default();
        assert_eq!(templates.tier(DetailTier::High).crowd_repeat, Vec2::new(8.0, 3.0));
        assert_eq!(templates.tier(DetailTier::Medium).crowd_repeat, Vec2::new(6.0, 2.0));
        assert_eq!(templates.tier(DetailTier::Low).crowd_repeat, Vec2::new(4.0, 1.0));
    }

    #[test]
    fn missing_crowd_texture_falls_back_to_flat_colour() {
        let (_, mut materials, templates) = build_default();
        let before = materials.len();
        let handle = templates.crowd_material_instance(&mut materials, DetailTier::High);
        assert_eq!(handle, templates.crowd_fallback_material);
        // The fallback is shared, not a fresh per-instance material.
        assert_eq!(materials.len(), before);
    }
}
