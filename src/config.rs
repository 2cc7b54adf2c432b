//! Everything that would be a knob, all in one place.
//!
//! There is no runtime configuration: the scale table is picked by the
//! `realistic-scale` cargo feature, and the remaining defaults are constants.

use crate::model::RingSpec;

// Initial state of the toggles
pub const SHOW_ORBITS: bool = true;
pub const SHOW_LABELS: bool = true;
pub const ENABLE_TRAILS: bool = false;
pub const ENABLE_ROTATION: bool = false;

// Window and frame pacing
pub const WINDOW_TITLE: &str = "Solar System";
pub const WINDOW_WIDTH: u32 = 1720;
pub const WINDOW_HEIGHT: u32 = 920;
pub const TICK_RATE: u64 = 60;
/// Simulation time accumulated per tick at unit speed.
pub const TIME_STEP: f64 = 0.01;

// Speed slider
pub const MIN_TIME_SPEED: f64 = 0.1;
pub const MAX_TIME_SPEED: f64 = 5.0;
pub const DEFAULT_TIME_SPEED: f64 = 1.0;
pub const TIME_SPEED_STEP: f64 = 0.1;

// Camera
pub const VIEW_RANGE: f64 = 40.0;
pub const DEFAULT_FORWARD: [f64; 3] = [-1.0, -1.0, -1.0];
pub const ROTATION_SPEED: f64 = 0.05;
pub const ROTATION_RADIUS: f64 = 40.0;
pub const ROTATION_HEIGHT: f64 = 15.0;

// Orbit paths and rings are sampled every ORBIT_STEP_DEGREES, 0 through 360
pub const ORBIT_STEP_DEGREES: usize = 10;
pub const NUM_RINGS: usize = 8;
pub const ORBIT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

// Planet trails
pub const TRAIL_INTERVAL: usize = 10;
pub const TRAIL_RETAIN: usize = 100;

// Earth's moon
pub const MOON_NAME: &str = "Moon";
pub const MOON_HOST: &str = "Earth";
pub const MOON_ORBIT_RADIUS: f64 = 0.7;
pub const MOON_SPEED: f64 = 7.0;
pub const MOON_RADIUS: f64 = 0.1;
pub const MOON_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Sun
pub const SUN_NAME: &str = "Sun";
pub const SUN_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
pub const GLOW_RATIO: f64 = 1.1;

// Meteors spawn in the source band and get recycled once they cross METEOR_RESET_X
pub const NUM_METEORS: usize = 3;
pub const METEOR_RADIUS: f64 = 0.15;
pub const METEOR_RESET_X: f64 = 50.0;
pub const METEOR_SOURCE_X: (f64, f64) = (-50.0, -30.0);
pub const METEOR_SOURCE_YZ: (f64, f64) = (-10.0, 10.0);
pub const METEOR_VELOCITY_X: (f64, f64) = (1.0, 2.0);
pub const METEOR_VELOCITY_YZ: (f64, f64) = (-0.2, 0.2);
pub const METEOR_TRAIL_RETAIN: usize = 30;

// Background stars
pub const NUM_STARS: usize = 300;
pub const STAR_EXTENT: f64 = 200.0;
pub const STAR_MIN_RADIUS: f64 = 0.05;
pub const STAR_RADIUS_JITTER: f64 = 0.1;

const GRAY_60: [f32; 3] = [0.6, 0.6, 0.6];
const GRAY_80: [f32; 3] = [0.8, 0.8, 0.8];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const ORANGE: [f32; 3] = [1.0, 0.6, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];

/// One line of a planet table. Speeds are in degrees per tick.
#[derive(Debug, Clone, Copy)]
pub struct PlanetRow {
    pub name: &'static str,
    pub distance: f64,
    pub radius: f64,
    pub color: [f32; 3],
    pub speed: f64,
    pub tilt: f64,
    pub rings: Option<RingSpec>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScaleTable {
    pub sun_radius: f64,
    /// Multiplies planet (and moon) radii before they're rendered
    pub scale_factor: f64,
    pub planets: &'static [PlanetRow],
}

/// Distances in AU, sizes in Earth radii. The planets end up very small.
pub const REALISTIC_SCALE: ScaleTable = ScaleTable {
    sun_radius: 109.2,
    scale_factor: 5.0,
    planets: &[
        PlanetRow { name: "Mercury", distance: 0.39, radius: 0.38, color: GRAY_60, speed: 4.1, tilt: 0.03, rings: None },
        PlanetRow { name: "Venus", distance: 0.72, radius: 0.95, color: ORANGE, speed: 1.6, tilt: 177.4, rings: None },
        PlanetRow { name: "Earth", distance: 1.00, radius: 1.00, color: BLUE, speed: 1.0, tilt: 23.4, rings: None },
        PlanetRow { name: "Mars", distance: 1.52, radius: 0.53, color: RED, speed: 0.53, tilt: 25.2, rings: None },
        PlanetRow { name: "Jupiter", distance: 5.20, radius: 11.2, color: ORANGE, speed: 0.084, tilt: 3.1, rings: None },
        PlanetRow {
            name: "Saturn", distance: 9.58, radius: 9.45, color: YELLOW, speed: 0.034, tilt: 26.7,
            rings: Some(RingSpec { inner: 1.5, outer: 2.3, color: WHITE }),
        },
        PlanetRow {
            name: "Uranus", distance: 19.22, radius: 4.01, color: CYAN, speed: 0.012, tilt: 97.8,
            rings: Some(RingSpec { inner: 1.3, outer: 1.7, color: GRAY_80 }),
        },
        PlanetRow { name: "Neptune", distance: 30.05, radius: 3.88, color: BLUE, speed: 0.006, tilt: 28.3, rings: None },
    ],
};

/// Compressed distances and inflated sizes, so everything fits on screen.
pub const VISUAL_SCALE: ScaleTable = ScaleTable {
    sun_radius: 2.5,
    scale_factor: 1.0,
    planets: &[
        PlanetRow { name: "Mercury", distance: 4.0, radius: 0.2, color: GRAY_60, speed: 1.6, tilt: 0.03, rings: None },
        PlanetRow { name: "Venus", distance: 6.0, radius: 0.4, color: ORANGE, speed: 1.2, tilt: 177.4, rings: None },
        PlanetRow { name: "Earth", distance: 8.0, radius: 0.5, color: BLUE, speed: 1.0, tilt: 23.4, rings: None },
        PlanetRow { name: "Mars", distance: 10.0, radius: 0.3, color: RED, speed: 0.8, tilt: 25.2, rings: None },
        PlanetRow { name: "Jupiter", distance: 14.0, radius: 1.1, color: ORANGE, speed: 0.4, tilt: 3.1, rings: None },
        PlanetRow {
            name: "Saturn", distance: 18.0, radius: 0.9, color: YELLOW, speed: 0.3, tilt: 26.7,
            rings: Some(RingSpec { inner: 1.2, outer: 2.0, color: WHITE }),
        },
        PlanetRow {
            name: "Uranus", distance: 22.0, radius: 0.7, color: CYAN, speed: 0.2, tilt: 97.8,
            rings: Some(RingSpec { inner: 1.1, outer: 2.5, color: GRAY_80 }),
        },
        PlanetRow { name: "Neptune", distance: 26.0, radius: 0.7, color: BLUE, speed: 0.1, tilt: 28.3, rings: None },
    ],
};

/// The table selected at build time.
pub fn active_table() -> &'static ScaleTable {
    if cfg!(feature = "realistic-scale") {
        &REALISTIC_SCALE
    } else {
        &VISUAL_SCALE
    }
}
