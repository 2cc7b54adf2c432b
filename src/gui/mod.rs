use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use rand::rngs::StdRng;

use self::controller::{Controller, Input};
use self::view::View;
use crate::model::{Command, Controls, Inspector, SolarSystem};

mod camera;
mod controller;
mod renderers;
mod view;

pub struct Simulation {
    system: SolarSystem,
    controls: Controls,
    inspector: Inspector,
    rng: StdRng,
    view: View,
    controller: Controller,
}

impl Simulation {
    pub fn new(system: SolarSystem, rng: StdRng, window: &mut Window) -> Self {
        Self {
            view: View::new(&system, window),
            inspector: Inspector::new(&system),
            controls: Controls::default(),
            controller: Controller::new(),
            system,
            rng,
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Process events
        for event in events.iter() {
            match self.controller.process_event(&event.value, &self.controls) {
                Some(Input::Command(Command::ResetView)) => {
                    log::info!("Resetting view");
                    self.view.reset_camera();
                }
                Some(Input::Command(command)) => self.controls.apply(command),
                Some(Input::Click(cursor)) => match self.view.pick_ray(&cursor) {
                    Some((origin, dir)) => {
                        self.inspector.click(&self.system, &origin, &dir);
                    }
                    None => self.inspector.clear(),
                },
                None => {}
            }
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        self.system.tick(&self.controls, &mut self.rng);
        if self.controls.running && self.controls.auto_rotate {
            self.view.follow_auto_rotation(self.system.auto_rotation_eye());
        }
        self.view.update_scene_objects(&self.system);
        self.view.prerender_scene(
            window,
            &self.system,
            &self.controls,
            &self.inspector,
            self.controller.fps(),
        );
        self.controller.increment_frame_counter();
    }
}
