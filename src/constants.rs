use bevy::math::Vec3;

/// Number of people represented by a single stadium.
pub const STADIUM_CAPACITY: u64 = 100_000;

/// World-space distance between neighbouring stadiums on the grid.
pub const STADIUM_SPACING: f32 = 500.0;

/// Maximum stadiums per grid row.
pub const MAX_GRID_COLUMNS: usize = 20;

/// Minimum edge length of the ground plane.
pub const MIN_GROUND_SIZE: f32 = 10_000.0;

/// Cell size of the helper grid drawn on the ground plane.
pub const GROUND_GRID_CELL: f32 = 400.0;

/// Free-fly translation speed in world units per second.
pub const MOVEMENT_SPEED: f32 = 1_800.0;

/// Speed multiplier while the sprint modifier is held.
pub const SPRINT_MULTIPLIER: f32 = 3.0;

/// The camera eye never drops below this height above the ground plane.
pub const MIN_CAMERA_HEIGHT: f32 = 10.0;

pub const MIN_ZOOM_DISTANCE: f32 = 100.0;
pub const MAX_ZOOM_DISTANCE: f32 = 12_000.0;

/// Polar angle limits keep the orbit above the ground plane.
pub const MIN_POLAR_ANGLE: f32 = 0.15;
pub const MAX_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

pub const ORBIT_SENSITIVITY: f32 = 0.005;

/// Upper bound on the reframing distance for very large layouts.
pub const MAX_FRAMING_DISTANCE: f32 = 15_000.0;

/// Home pose the camera starts from and resets to.
pub const HOME_CAMERA_EYE: Vec3 = Vec3::new(600.0, 400.0, 600.0);

pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 15_000.0;

/// Height of a label anchor above its stadium's origin.
pub const LABEL_HEIGHT: f32 = 120.0;

/// Labels beyond this camera distance are hidden without projecting.
pub const LABEL_DISTANCE_CUTOFF: f32 = 5_000.0;

/// Window resizes settle for this long before the projection is updated.
pub const RESIZE_DEBOUNCE_SECONDS: f32 = 0.1;

pub const DEFAULT_POPULATION: u64 = 1_000_000;
