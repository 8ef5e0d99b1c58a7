use bevy::prelude::*;

use crate::constants::LABEL_DISTANCE_CUTOFF;

/// Overlay marker bound to one stadium's world anchor. Labels carry no
/// other state; their screen position is recomputed every frame.
#[derive(Component, Debug)]
pub struct StadiumLabel {
    pub anchor: Vec3,
}

pub fn spawn_label(commands: &mut Commands, ordinal: usize, anchor: Vec3) {
    commands.spawn((
        Text::new(format!("#{ordinal}")),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
            ..default()
        },
        Visibility::Hidden,
        StadiumLabel { anchor },
        Name::new(format!("label-{ordinal}")),
    ));
}

/// Reproject every active label against the current camera: distance-cull
/// first (skipping the projection entirely), then place the node at the
/// anchor's viewport position, hiding it when the anchor falls behind the
/// camera.
pub fn update_labels(
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut labels: Query<(&mut Node, &mut Visibility, &StadiumLabel)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let camera_position = camera_transform.translation();

    for (mut node, mut visibility, label) in &mut labels {
        if label.anchor.distance(camera_position) > LABEL_DISTANCE_CUTOFF {
            *visibility = Visibility::Hidden;
            continue;
        }

        match camera.world_to_viewport(camera_transform, label.anchor) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                *visibility = Visibility::Visible;
            }
            Err(_) => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
