use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::constants::RESIZE_DEBOUNCE_SECONDS;

/// Debounces window resizes so the projection is only touched once per
/// settle instead of on every intermediate size.
#[derive(Resource)]
pub struct ResizeDebounce {
    timer: Timer,
    pending: Option<Vec2>,
}

impl Default for ResizeDebounce {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(RESIZE_DEBOUNCE_SECONDS, TimerMode::Once);
        timer.pause();
        Self {
            timer,
            pending: None,
        }
    }
}

pub fn handle_viewport_resize(
    mut debounce: ResMut<ResizeDebounce>,
    mut resize_events: EventReader<WindowResized>,
    time: Res<Time>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
) {
    for event in resize_events.read() {
        debounce.pending = Some(Vec2::new(event.width, event.height));
        debounce.timer.reset();
        debounce.timer.unpause();
    }

    debounce.timer.tick(time.delta());
    if !debounce.timer.just_finished() {
        return;
    }

    let Some(size) = debounce.pending.take() else {
        return;
    };
    if size.y <= 0.0 {
        return;
    }

    if let Ok(mut projection) = projections.single_mut() {
        if let Projection::Perspective(perspective) = &mut *projection {
            perspective.aspect_ratio = size.x / size.y;
        }
    }
    info!("Viewport resized to {}x{}", size.x as u32, size.y as u32);
}
