use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

/// Current layout summary surfaced to the HUD.
#[derive(Resource, Default)]
pub struct PopulationReadout {
    pub stadiums: usize,
    pub people: u64,
}

#[derive(Component)]
pub struct StadiumCountText;

#[derive(Component)]
pub struct PeopleTotalText;

#[derive(Component)]
pub struct FpsText;

pub fn spawn_hud(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Stadiums: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                StadiumCountText,
            ));
            parent.spawn((
                Text::new("People: 0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(36.0),
                    left: Val::Px(12.0),
                    ..default()
                },
                PeopleTotalText,
            ));
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.0, 0.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

pub fn readout_text_update_system(
    readout: Res<PopulationReadout>,
    mut counts: Query<&mut Text, (With<StadiumCountText>, Without<PeopleTotalText>)>,
    mut totals: Query<&mut Text, (With<PeopleTotalText>, Without<StadiumCountText>)>,
) {
    if !readout.is_changed() {
        return;
    }

    for mut text in &mut counts {
        text.0 = format!("Stadiums: {}", readout.stadiums);
    }
    for mut text in &mut totals {
        text.0 = format!("People: {}", format_thousands(readout.people));
    }
}

pub fn fps_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    for mut text in &mut query {
        if let Some(fps) = diagnostics.get(&FrameTimeDiagnosticsPlugin::FPS) {
            if let Some(value) = fps.smoothed() {
                text.0 = format!("FPS: {value:.1}");
            }
        }
    }
}

/// Group digits with commas for the people readout.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(250_000), "250,000");
        assert_eq!(format_thousands(8_200_000_000), "8,200,000,000");
    }
}
