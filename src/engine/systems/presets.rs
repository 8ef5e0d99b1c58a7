use bevy::prelude::*;

use crate::engine::population::request::PopulationRequest;

/// Preset head counts on the number row, the quickest way to repopulate
/// the scene while it is running.
const PRESETS: [(KeyCode, u64); 6] = [
    (KeyCode::Digit1, 100_000),
    (KeyCode::Digit2, 1_000_000),
    (KeyCode::Digit3, 10_000_000),
    (KeyCode::Digit4, 100_000_000),
    (KeyCode::Digit5, 1_000_000_000),
    (KeyCode::Digit6, 8_200_000_000),
];

pub fn population_preset_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<PopulationRequest>,
) {
    for (key, people) in PRESETS {
        if keyboard.just_pressed(key) {
            info!("Preset population selected: {people}");
            requests.write(PopulationRequest { people });
        }
    }
}
