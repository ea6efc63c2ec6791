/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for adjusting simulation parameters
 * and an optional text overlay with population statistics.
 */

use nannou::prelude::*;
use nannou_egui::egui;

use crate::app::{Model, Scene};
use crate::debug::DebugInfo;
use crate::params::EnvironmentParams;

// Discrete events requested through the panel this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct UiActions {
    pub clear: bool,
    pub next_particle: bool,
}

// Build the control panel and return the events the user triggered
pub fn update_ui(model: &mut Model) -> UiActions {
    let mut actions = UiActions::default();
    let ctx = model.egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.horizontal(|ui| {
                ui.radio_value(&mut model.scene, Scene::Boids, "Boids");
                ui.radio_value(&mut model.scene, Scene::Gas, "Ideal Gas");
            });
            ui.separator();

            match model.scene {
                Scene::Boids => {
                    let params = &mut model.environment.params;
                    ui.checkbox(&mut params.spawn_predator, "Spawn Predator");

                    ui.collapsing("Boid Parameters", |ui| {
                        ui.add(egui::Slider::new(&mut params.boid_size, EnvironmentParams::get_boid_size_range()).text("Boid Size"));
                        ui.add(egui::Slider::new(&mut params.boid_max_speed, EnvironmentParams::get_boid_speed_range()).text("Boid Speed"));
                        ui.add(egui::Slider::new(&mut params.boid_vision, EnvironmentParams::get_vision_range()).text("Boid Vision"));
                        ui.add(egui::Slider::new(&mut params.separation, EnvironmentParams::get_weight_range()).text("Separation"));
                        ui.add(egui::Slider::new(&mut params.alignment, EnvironmentParams::get_weight_range()).text("Alignment"));
                        ui.add(egui::Slider::new(&mut params.cohesion, EnvironmentParams::get_weight_range()).text("Cohesion"));
                    });

                    ui.collapsing("Predator Parameters", |ui| {
                        ui.add(egui::Slider::new(&mut params.pred_size, EnvironmentParams::get_pred_size_range()).text("Pred Size"));
                        ui.add(egui::Slider::new(&mut params.pred_max_speed, EnvironmentParams::get_pred_speed_range()).text("Predator Speed"));
                        ui.add(egui::Slider::new(&mut params.pred_vision, EnvironmentParams::get_vision_range()).text("Predator Vision"));
                        ui.add(egui::Slider::new(&mut params.chase, EnvironmentParams::get_chase_range()).text("Chase"));
                    });

                    ui.collapsing("Obstacle Parameters", |ui| {
                        ui.add(egui::Slider::new(&mut params.obstacle_size, EnvironmentParams::get_obstacle_size_range()).text("Obstacle Size"));
                    });

                    ui.label("Left click/drag: spawn boid");
                    ui.label("Right click: place obstacle");
                }
                Scene::Gas => {
                    let current = model.tank.current_particle();
                    ui.label(format!(
                        "Current Particle: mass {:.1}, radius {:.1}",
                        current.mass, current.radius
                    ));
                    if ui.button("Next Particle Type").clicked() {
                        actions.next_particle = true;
                    }
                    ui.label("Left click/drag: spawn particle");
                }
            }

            ui.separator();
            if ui.button("Clear").clicked() {
                actions.clear = true;
            }
            ui.checkbox(&mut model.show_debug, "Show Debug Info");
            ui.checkbox(&mut model.paused, "Pause Simulation");
        });

    actions
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, scene: Scene, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 20.0;

    let lines = match scene {
        Scene::Boids => vec![
            format!("FPS: {:.1}", debug_info.fps),
            format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
            format!("Tick: {}", debug_info.tick),
            format!("Prey: {}", debug_info.prey),
            format!("Predators: {}", debug_info.predators),
            format!("Obstacles: {}", debug_info.obstacles),
            format!("Caught: {}", debug_info.caught_total),
        ],
        Scene::Gas => vec![
            format!("FPS: {:.1}", debug_info.fps),
            format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
            format!("Particles: {}", debug_info.particles),
            format!("Kinetic energy: {:.0}", debug_info.kinetic_energy),
        ],
    };

    // Background panel in the bottom-right corner
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = panel_x;
    let text_top = window_rect.bottom() + panel_height - margin;
    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(text_x, text_top - i as f32 * line_height)
            .w(panel_width - margin)
            .left_justify()
            .color(WHITE)
            .font_size(14);
    }
}
