use std::time::Instant;

use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use nalgebra::Point2;

use crate::config::TIME_SPEED_STEP;
use crate::model::{Command, Controls};

// Key config, all in one place
const KEY_TOGGLE_PAUSE: Key = Key::Space;
const KEY_TOGGLE_ORBITS: Key = Key::O;
const KEY_TOGGLE_LABELS: Key = Key::L;
const KEY_TOGGLE_TRAILS: Key = Key::T;
const KEY_TOGGLE_ROTATION: Key = Key::R;
const KEY_RESET_VIEW: Key = Key::Home;
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;

/// A press and release further apart than this (in pixels) is a drag, not a click.
const CLICK_TOLERANCE: f32 = 4.0;

pub const HELP_TEXT: &str = "[Space] Pause/Resume
[O] Toggle Orbits
[L] Toggle Labels
[T] Toggle Trails
[R] Toggle Auto-Rotation
[Home] Reset View
[,] / [.] Simulation Speed
Drag to rotate, scroll to zoom, click a body for info";

/// What the user asked for, once raw window events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Command(Command),
    Click(Point2<f32>),
}

pub struct Controller {
    cursor: Point2<f32>,
    press_pos: Option<Point2<f32>>,
    fps_counter: FpsCounter,
}

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: usize,
    previous_fps: f64,
}

impl FpsCounter {
    pub fn new(window_size_millis: usize) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            previous_fps: 0.0,
            window_size_millis,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn value(&self) -> f64 {
        self.previous_fps
    }

    pub fn increment(&mut self) {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed.as_millis() > self.window_size_millis as u128 {
            self.previous_fps = (1000 * self.counter) as f64 / elapsed.as_millis() as f64;
            self.reset();
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            cursor: Point2::origin(),
            press_pos: None,
            fps_counter: FpsCounter::new(1000),
        }
    }

    pub fn process_event(&mut self, event: &WindowEvent, controls: &Controls) -> Option<Input> {
        let command = match *event {
            WindowEvent::Key(key, Action::Press, _) => match key {
                KEY_TOGGLE_PAUSE => Command::TogglePause,
                KEY_TOGGLE_ORBITS => Command::ToggleOrbits,
                KEY_TOGGLE_LABELS => Command::ToggleLabels,
                KEY_TOGGLE_TRAILS => Command::ToggleTrails,
                KEY_TOGGLE_ROTATION => Command::ToggleRotation,
                KEY_RESET_VIEW => Command::ResetView,
                KEY_SPEED_UP => Command::SetSpeed(controls.time_speed + TIME_SPEED_STEP),
                KEY_SLOW_DOWN => Command::SetSpeed(controls.time_speed - TIME_SPEED_STEP),
                _ => return None,
            },
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = Point2::new(x as f32, y as f32);
                return None;
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                self.press_pos = Some(self.cursor);
                return None;
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
                let press_pos = self.press_pos.take()?;
                if nalgebra::distance(&press_pos, &self.cursor) > CLICK_TOLERANCE {
                    return None;
                }
                return Some(Input::Click(self.cursor));
            }
            _ => return None,
        };
        Some(Input::Command(command))
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}
