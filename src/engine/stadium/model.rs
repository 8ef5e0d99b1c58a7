use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;

use crate::engine::stadium::templates::StadiumTemplates;
use crate::engine::stadium::DetailTier;

/// One stadium's visual group, standing for a slice of the population.
#[derive(Component, Debug, Clone, Copy)]
pub struct StadiumUnit {
    pub index: usize,
    pub occupancy: u64,
    pub tier: DetailTier,
}

/// Radius at which the two floodlight masts stand around the base.
const LIGHT_MAST_RADIUS: f32 = 105.0;

/// Instantiate one stadium from its tier template: parent group at the grid
/// position, child meshes per part at fixed vertical offsets. Shadows are
/// only paid for on the high tier.
pub fn spawn_stadium(
    commands: &mut Commands,
    templates: &StadiumTemplates,
    materials: &mut Assets<StandardMaterial>,
    tier: DetailTier,
    position: Vec3,
    index: usize,
    occupancy: u64,
) -> Entity {
    let template = templates.tier(tier);
    let crowd_material = templates.crowd_material_instance(materials, tier);
    let shadows = tier == DetailTier::High;

    let mut unit = commands.spawn((
        Transform::from_translation(position),
        Visibility::default(),
        StadiumUnit {
            index,
            occupancy,
            tier,
        },
        Name::new(format!("stadium-{}", index + 1)),
    ));

    unit.with_children(|parent| {
        spawn_part(
            parent,
            template.base.clone(),
            templates.base_material.clone(),
            Transform::from_xyz(0.0, 10.0, 0.0),
            shadows,
        );
        spawn_part(
            parent,
            template.bowl.clone(),
            templates.bowl_material.clone(),
            Transform::from_xyz(0.0, 40.0, 0.0),
            shadows,
        );
        spawn_part(
            parent,
            template.field.clone(),
            templates.field_material.clone(),
            Transform::from_xyz(0.0, 21.0, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            shadows,
        );
        // Slight rotation aligns the covering seam away from the entrance.
        spawn_part(
            parent,
            template.stands.clone(),
            crowd_material,
            Transform::from_xyz(0.0, 30.0, 0.0).with_rotation(Quat::from_rotation_y(FRAC_PI_4)),
            shadows,
        );

        if tier == DetailTier::High {
            if let (Some(pole), Some(fixture)) = (&template.pole, &template.fixture) {
                for i in 0..2 {
                    let angle = i as f32 * PI;
                    let x = angle.cos() * LIGHT_MAST_RADIUS;
                    let z = angle.sin() * LIGHT_MAST_RADIUS;

                    spawn_part(
                        parent,
                        pole.clone(),
                        templates.pole_material.clone(),
                        Transform::from_xyz(x, 60.0, z),
                        true,
                    );
                    spawn_part(
                        parent,
                        fixture.clone(),
                        templates.fixture_material.clone(),
                        Transform::from_xyz(x, 100.0, z),
                        true,
                    );
                }
            }
        }
    });

    unit.id()
}

fn spawn_part(
    parent: &mut ChildSpawnerCommands,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
    transform: Transform,
    shadows: bool,
) {
    let mut part = parent.spawn((Mesh3d(mesh), MeshMaterial3d(material), transform));
    if !shadows {
        part.insert((NotShadowCaster, NotShadowReceiver));
    }
}
