/*
 * Application Module
 *
 * This module defines the main application model for the viewer.
 * It owns both simulations, builds the window and runs one simulation
 * tick per frame for whichever scene is active.
 *
 * Simulation coordinates are window pixels with the origin in the top-left
 * corner and y pointing down; the renderer and input modules convert to and
 * from nannou's centred, y-up frame.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::boundary::Bounds;
use crate::debug::DebugInfo;
use crate::environment::{Environment, SimulationMode};
use crate::gas_tank::GasTank;
use crate::histogram::SpeedHistogram;
use crate::input::{key_pressed, mouse_moved, mouse_pressed, raw_window_event};
use crate::params::{EnvironmentParams, GasParams};
use crate::renderer::view;
use crate::ui;
use crate::vector::Vector;

pub const WINDOW_WIDTH: f32 = 1400.0;
pub const WINDOW_HEIGHT: f32 = 900.0;
pub const MARGIN: f32 = 75.0;
pub const HIST_WIDTH: f32 = 275.0;
pub const HIST_HEIGHT: f32 = 125.0;

pub const INITIAL_PREY: usize = 150;
pub const INITIAL_PREDATORS: usize = 2;

// Which simulation the window shows and steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Boids,
    Gas,
}

// Main model for the application
pub struct Model {
    pub scene: Scene,
    pub environment: Environment,
    pub tank: GasTank,
    pub histograms: Vec<SpeedHistogram>,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub mouse_position: Vec2,
    pub paused: bool,
    pub show_debug: bool,
}

// Boids get the whole window minus a margin
pub fn environment_bounds() -> Bounds {
    Bounds::new(
        Vector::xy(MARGIN, MARGIN),
        WINDOW_WIDTH - 2.0 * MARGIN,
        WINDOW_HEIGHT - 2.0 * MARGIN,
    )
}

// The tank sits to the right of the histogram column
pub fn tank_bounds() -> Bounds {
    Bounds::new(
        Vector::xy(2.0 * MARGIN + HIST_WIDTH, MARGIN),
        WINDOW_WIDTH - 3.0 * MARGIN - HIST_WIDTH,
        WINDOW_HEIGHT - 2.0 * MARGIN,
    )
}

// Top-left corner of the histogram for particle type `index`
pub fn histogram_origin(index: usize) -> Vector {
    let i = index as f32;
    Vector::xy(MARGIN, (i + 1.0) * MARGIN + i * HIST_HEIGHT)
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Boid & Ideal Gas Simulation")
        .size(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32)
        .resizable(false)
        .view(view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build window");

    let window = app.window(window_id).expect("Window closed during setup");
    let egui = Egui::from_window(&window);

    let mut environment = Environment::new(
        environment_bounds(),
        SimulationMode::PredatorPrey,
        EnvironmentParams::default(),
        StdRng::from_entropy(),
    );
    environment.initialize(INITIAL_PREY, INITIAL_PREDATORS);

    let gas_params = GasParams::default();
    let tank = GasTank::new(tank_bounds(), &gas_params, StdRng::from_entropy())
        .expect("Default gas parameters are valid");
    let histograms = build_histograms(&tank);

    info!(scene = ?Scene::Boids, "Viewer ready");

    Model {
        scene: Scene::Boids,
        environment,
        tank,
        histograms,
        egui,
        debug_info: DebugInfo::default(),
        mouse_position: Vec2::ZERO,
        paused: false,
        show_debug: false,
    }
}

// One histogram per particle type, sized for the largest particle
fn build_histograms(tank: &GasTank) -> Vec<SpeedHistogram> {
    let largest_radius = tank
        .particle_types()
        .iter()
        .map(|t| t.radius)
        .fold(0.0_f32, f32::max);

    tank.particle_types()
        .iter()
        .enumerate()
        .map(|(kind, t)| SpeedHistogram::new(kind, t.mass, t.color, 1.5 * largest_radius))
        .collect()
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.egui.set_elapsed_time(update.since_start);

    let actions = ui::update_ui(model);

    if actions.clear {
        clear_scene(model);
    }
    if actions.next_particle {
        model.tank.change_current_particle();
    }

    if !model.paused {
        match model.scene {
            Scene::Boids => model.environment.update(),
            Scene::Gas => {
                model.tank.update();
                for histogram in &mut model.histograms {
                    histogram.update(model.tank.particles());
                }
            }
        }
    }

    model.debug_info.refresh(&model.environment, &model.tank);
}

pub fn clear_scene(model: &mut Model) {
    match model.scene {
        Scene::Boids => model.environment.clear(),
        Scene::Gas => model.tank.clear(),
    }
}
