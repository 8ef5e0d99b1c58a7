use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::{
    HOME_CAMERA_EYE, MAX_POLAR_ANGLE, MAX_ZOOM_DISTANCE, MIN_CAMERA_HEIGHT, MIN_POLAR_ANGLE,
    MIN_ZOOM_DISTANCE, MOVEMENT_SPEED, ORBIT_SENSITIVITY, SPRINT_MULTIPLIER,
};

/// Free-fly and orbit navigation state driving the single scene camera.
/// Keyboard flight and pointer orbit/pan mutate the same eye/target pair,
/// applied in a fixed order each frame with the ground clamp last.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: HOME_CAMERA_EYE,
            target: Vec3::ZERO,
        }
    }
}

impl CameraRig {
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }

    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Translate eye and target together, preserving the view direction.
    pub fn free_fly(&mut self, direction: Vec3, amount: f32) {
        let Some(step) = direction.try_normalize() else {
            return;
        };
        self.eye += step * amount;
        self.target += step * amount;
    }

    /// Rotate the eye around the target, keeping the orbit above the ground
    /// plane by clamping the polar angle.
    pub fn orbit(&mut self, delta: Vec2) {
        let offset = self.eye - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let mut azimuth = offset.x.atan2(offset.z);
        let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        azimuth -= delta.x * ORBIT_SENSITIVITY;
        polar = (polar + delta.y * ORBIT_SENSITIVITY).clamp(MIN_POLAR_ANGLE, MAX_POLAR_ANGLE);

        self.eye = self.target
            + radius
                * Vec3::new(
                    polar.sin() * azimuth.sin(),
                    polar.cos(),
                    polar.sin() * azimuth.cos(),
                );
    }

    /// Screen-space pan, scaled by the current orbit distance.
    pub fn pan(&mut self, delta: Vec2) {
        let right = self.right();
        let up = right.cross(self.forward()).normalize_or_zero();
        let step = (right * -delta.x + up * delta.y) * self.distance() * 0.001;
        self.eye += step;
        self.target += step;
    }

    /// Dolly toward or away from the target within the zoom limits.
    pub fn zoom(&mut self, scroll: f32) {
        let offset = self.eye - self.target;
        let distance = offset.length().max(f32::EPSILON);
        let new_distance =
            (distance - distance * 0.2 * scroll).clamp(MIN_ZOOM_DISTANCE, MAX_ZOOM_DISTANCE);
        self.eye = self.target + offset / distance * new_distance;
    }

    /// Final correction applied after all movement each frame; the eye is
    /// never allowed below the minimum height above the ground plane.
    pub fn clamp_above_ground(&mut self) {
        if self.eye.y < MIN_CAMERA_HEIGHT {
            self.eye.y = MIN_CAMERA_HEIGHT;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-frame navigation: keyboard free-fly first, then pointer orbit/pan
/// and wheel zoom, then the ground clamp, then the camera transform.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut rig: ResMut<CameraRig>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyR) {
        rig.reset();
    }

    let forward = rig.forward();
    let right = rig.right();
    let mut direction = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        direction += forward;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        direction -= forward;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        direction += right;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        direction -= right;
    }

    if direction != Vec3::ZERO {
        let mut speed = MOVEMENT_SPEED;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= SPRINT_MULTIPLIER;
        }
        rig.free_fly(direction, speed * time.delta_secs());
    }

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            rig.orbit(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            rig.pan(mouse_delta);
        }
    }

    let mut scroll = 0.0;
    for event in scroll_events.read() {
        scroll += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.05,
        };
    }
    if scroll.abs() > f32::EPSILON {
        rig.zoom(scroll);
    }

    rig.clamp_above_ground();

    *transform = Transform::from_translation(rig.eye).looking_at(rig.target, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_clamp_is_a_lower_bound() {
        let mut rig = CameraRig::default();
        rig.eye.y = -250.0;
        rig.clamp_above_ground();
        assert_eq!(rig.eye.y, MIN_CAMERA_HEIGHT);

        rig.eye.y = 400.0;
        rig.clamp_above_ground();
        assert_eq!(rig.eye.y, 400.0);
    }

    #[test]
    fn free_fly_preserves_the_view_direction() {
        let mut rig = CameraRig::default();
        let before = rig.target - rig.eye;
        rig.free_fly(Vec3::new(1.0, 0.0, 1.0), 250.0);
        let after = rig.target - rig.eye;
        assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn zoom_respects_the_distance_limits() {
        let mut rig = CameraRig::default();
        for _ in 0..100 {
            rig.zoom(1.0);
        }
        assert!((rig.distance() - MIN_ZOOM_DISTANCE).abs() < 1e-2);

        for _ in 0..100 {
            rig.zoom(-1.0);
        }
        assert!(rig.distance() <= MAX_ZOOM_DISTANCE + 1e-2);
    }

    #[test]
    fn orbit_keeps_the_radius_and_stays_above_the_horizon() {
        let mut rig = CameraRig::default();
        let radius = rig.distance();
        rig.orbit(Vec2::new(300.0, 900.0));
        assert!((rig.distance() - radius).abs() < 1e-2);
        assert!(rig.eye.y >= 0.0);
    }
}
