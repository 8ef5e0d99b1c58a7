use bevy::prelude::*;

use crate::constants::{CAMERA_FAR, MAX_FRAMING_DISTANCE};
use crate::engine::camera::rig::CameraRig;

/// Request to refit the camera around a completed layout.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReframeRequest {
    pub ground_size: f32,
    pub rows: usize,
}

/// Camera pose framing the full layout: eye, target, far plane. The
/// distance follows a logarithmic scale of the row count so very large
/// populations do not push the camera out linearly.
pub fn framing_pose(ground_size: f32, rows: usize) -> (Vec3, Vec3, f32) {
    let base_distance = (ground_size * 0.4).max(800.0);
    let scale = (rows as f32 / 2.0).max(1.0).log10() + 1.0;
    let distance = (base_distance * scale).min(MAX_FRAMING_DISTANCE);
    let height = (distance * 0.4).max(400.0);
    let far = (distance * 3.0).max(CAMERA_FAR);

    (Vec3::new(distance, height, distance), Vec3::ZERO, far)
}

pub fn reframe_camera(
    mut requests: EventReader<ReframeRequest>,
    mut rig: ResMut<CameraRig>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    let (eye, target, far) = framing_pose(request.ground_size, request.rows);
    rig.eye = eye;
    rig.target = target;

    if let Ok(mut projection) = projections.single_mut() {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.far = far;
        }
    }

    info!(
        "Reframed camera at distance {:.0} for {} rows",
        eye.x, request.rows
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_layouts_frame_at_the_base_distance() {
        let (eye, target, far) = framing_pose(10_000.0, 1);
        assert_eq!(eye, Vec3::new(4_000.0, 1_600.0, 4_000.0));
        assert_eq!(target, Vec3::ZERO);
        assert_eq!(far, CAMERA_FAR);
    }

    #[test]
    fn framing_distance_is_capped_for_huge_layouts() {
        let (eye, _, far) = framing_pose(2_051_000.0, 4_100);
        assert_eq!(eye.x, MAX_FRAMING_DISTANCE);
        assert_eq!(far, MAX_FRAMING_DISTANCE * 3.0);
    }

    #[test]
    fn distance_grows_logarithmically_with_rows() {
        let (small, _, _) = framing_pose(12_000.0, 4);
        let (large, _, _) = framing_pose(12_000.0, 40);
        assert!(large.x > small.x);
        // A tenfold row increase adds one log step, not a tenfold distance.
        assert!(large.x < small.x * 2.5);
    }

    #[test]
    fn framing_height_is_floored() {
        let (eye, _, _) = framing_pose(10.0, 1);
        assert!(eye.y >= 400.0);
    }
}
