/*
 * Input Module
 *
 * This module handles user input events for both scenes.
 * Pointer positions are converted from nannou's centred frame into
 * simulation coordinates before they reach the managers.
 *
 * Features:
 * - Left click or drag spawns a boid or a gas particle
 * - Right click places an obstacle in the boid scene
 * - Delete clears the active scene, Right cycles the particle type,
 *   Space pauses
 * - Handling UI interaction
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};
use tracing::debug;

use crate::app::{clear_scene, Model, Scene};
use crate::vector::Vector;

// nannou (centred, y up) to simulation (top-left origin, y down)
pub fn to_sim(point: Vec2, window_rect: Rect) -> Vector {
    Vector::xy(point.x - window_rect.left(), window_rect.top() - point.y)
}

fn pointer_over_ui(model: &Model) -> bool {
    model.egui.ctx().is_pointer_over_area()
}

// Spawn whatever the active scene spawns under the cursor
fn spawn_at_cursor(app: &App, model: &mut Model) {
    let point = to_sim(model.mouse_position, app.window_rect());
    match model.scene {
        Scene::Boids => model.environment.add_boid(point),
        Scene::Gas => model.tank.add_particle(point),
    }
}

// Mouse moved event handler
pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;

    // Dragging with the left button keeps spawning
    if app.mouse.buttons.left().is_down() && !pointer_over_ui(model) {
        spawn_at_cursor(app, model);
    }
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if pointer_over_ui(model) {
        return;
    }

    match button {
        MouseButton::Left => spawn_at_cursor(app, model),
        MouseButton::Right if model.scene == Scene::Boids => {
            let point = to_sim(model.mouse_position, app.window_rect());
            model.environment.add_obstacle(point);
        }
        _ => {}
    }
}

// Keyboard shortcuts
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Delete => clear_scene(model),
        Key::Right => model.tank.change_current_particle(),
        Key::Space => {
            model.paused = !model.paused;
            debug!(paused = model.paused, "Toggled pause");
        }
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
