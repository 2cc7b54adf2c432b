use crate::config::{
    DEFAULT_TIME_SPEED, ENABLE_ROTATION, ENABLE_TRAILS, MAX_TIME_SPEED, MIN_TIME_SPEED,
    SHOW_LABELS, SHOW_ORBITS,
};

/// Everything the user can ask for. Each command touches exactly one field
/// of `Controls`, except `ResetView`, which only concerns the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePause,
    ToggleOrbits,
    ToggleLabels,
    ToggleTrails,
    ToggleRotation,
    SetSpeed(f64),
    ResetView,
}

/// Groups of drawn primitives that are shown or hidden together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Orbits,
    Rings,
    Labels,
    Trails,
    MeteorTrails,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub running: bool,
    pub orbits_visible: bool,
    pub labels_visible: bool,
    pub trails_enabled: bool,
    pub auto_rotate: bool,
    pub time_speed: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            running: true,
            orbits_visible: SHOW_ORBITS,
            labels_visible: SHOW_LABELS,
            trails_enabled: ENABLE_TRAILS,
            auto_rotate: ENABLE_ROTATION,
            time_speed: DEFAULT_TIME_SPEED,
        }
    }
}

impl Controls {
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::TogglePause => self.running = !self.running,
            Command::ToggleOrbits => self.orbits_visible = !self.orbits_visible,
            Command::ToggleLabels => self.labels_visible = !self.labels_visible,
            Command::ToggleTrails => self.trails_enabled = !self.trails_enabled,
            Command::ToggleRotation => self.auto_rotate = !self.auto_rotate,
            Command::SetSpeed(speed) => {
                self.time_speed = nalgebra::clamp(speed, MIN_TIME_SPEED, MAX_TIME_SPEED)
            }
            // The camera isn't ours; the view handles this one
            Command::ResetView => {}
        }
        log::info!("{:?} -> {}", command, self.summary());
    }

    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Orbits => self.orbits_visible,
            Layer::Labels => self.labels_visible,
            Layer::Trails => self.trails_enabled,
            Layer::Rings | Layer::MeteorTrails | Layer::Info => true,
        }
    }

    /// Caption of the pause button: what pressing it would do.
    pub fn pause_caption(&self) -> &'static str {
        if self.running {
            "Pause"
        } else {
            "Resume"
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "running={} orbits={} labels={} trails={} rotation={} speed={:.1}",
            self.running,
            self.orbits_visible,
            self.labels_visible,
            self.trails_enabled,
            self.auto_rotate,
            self.time_speed,
        )
    }
}
