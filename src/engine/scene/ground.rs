/// Ground plane and helper grid, rebuilt to fit each population layout.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use crate::constants::GROUND_GRID_CELL;

#[derive(Component)]
pub struct GroundPlane;

#[derive(Component)]
pub struct GroundGrid;

/// Spawn a ground plane sized to the layout plus a line grid slightly above
/// it to avoid z-fighting.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    ground_size: f32,
) {
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x4c, 0xa6, 0x4c),
        perceptual_roughness: 0.8,
        metallic: 0.2,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ground_size, ground_size))),
        MeshMaterial3d(ground_material),
        Transform::IDENTITY,
        Name::new("ground"),
        GroundPlane,
    ));

    let grid_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 0.0, 0.0, 0.35),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(create_grid_mesh(ground_size))),
        MeshMaterial3d(grid_material),
        Transform::from_xyz(0.0, 0.1, 0.0),
        Name::new("ground-grid"),
        GroundGrid,
    ));
}

/// Build one line-list mesh holding every grid line in both directions.
fn create_grid_mesh(ground_size: f32) -> Mesh {
    let divisions = (ground_size / GROUND_GRID_CELL).floor().max(1.0) as u32;
    let spacing = ground_size / divisions as f32;
    let half = ground_size * 0.5;

    let mut vertices: Vec<[f32; 3]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for i in 0..=divisions {
        let offset = -half + i as f32 * spacing;

        // Line running along Z at a fixed X, then its X-direction twin.
        for (start, end) in [
            ([offset, 0.0, -half], [offset, 0.0, half]),
            ([-half, 0.0, offset], [half, 0.0, offset]),
        ] {
            let base = vertices.len() as u32;
            vertices.push(start);
            vertices.push(end);
            indices.extend_from_slice(&[base, base + 1]);
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));

    mesh
}
