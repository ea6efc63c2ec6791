/*
 * Renderer Module
 *
 * This module handles the rendering of both scenes.
 * It only reads simulation state through the managers' slice accessors:
 * - boids as triangles pointing along their heading, obstacles as discs
 * - gas particles as discs plus one speed histogram per particle type
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::{histogram_origin, Model, Scene, HIST_HEIGHT, HIST_WIDTH};
use crate::boid::Boid;
use crate::boundary::Bounds;
use crate::histogram::{SpeedHistogram, NUM_SECTIONS};
use crate::ui;
use crate::vector::Vector;
use crate::Rgb;

// Simulation (top-left origin, y down) to nannou (centred, y up)
pub fn to_screen(point: Vector, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}

fn color(tag: Rgb) -> Rgb8 {
    rgb(tag[0], tag[1], tag[2])
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    draw.background().color(BLACK);

    match model.scene {
        Scene::Boids => draw_environment(&draw, model, window_rect),
        Scene::Gas => draw_tank(&draw, model, window_rect),
    }

    if model.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, model.scene, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!("Failed to draw frame: {:?}", err);
    }

    // Draw the egui UI
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!("Failed to draw UI: {:?}", err);
    }
}

fn draw_bounds(draw: &Draw, bounds: &Bounds, window_rect: Rect) {
    draw.rect()
        .xy(to_screen(bounds.center(), window_rect))
        .w_h(bounds.width, bounds.height)
        .no_fill()
        .stroke_weight(1.0)
        .stroke(WHITE);
}

fn draw_environment(draw: &Draw, model: &Model, window_rect: Rect) {
    let environment = &model.environment;
    draw_bounds(draw, environment.bounds(), window_rect);

    for obstacle in environment.obstacles() {
        draw.ellipse()
            .xy(to_screen(obstacle.position, window_rect))
            .radius(obstacle.radius)
            .color(color(obstacle.color));
    }

    for boid in environment.prey().iter().chain(environment.predators()) {
        draw_boid(draw, boid, window_rect);
    }
}

// Triangle pointing along the heading; a still boid points right
fn draw_boid(draw: &Draw, boid: &Boid, window_rect: Rect) {
    let heading = boid.heading();
    // y flips between the two frames
    let angle = (-heading.y).atan2(heading.x);
    let size = boid.size;

    let points = [
        pt2(size, 0.0),
        pt2(-size, size / 2.0),
        pt2(-size, -size / 2.0),
    ];

    draw.polygon()
        .color(color(boid.color))
        .points(points)
        .xy(to_screen(boid.position, window_rect))
        .rotate(angle);
}

fn draw_tank(draw: &Draw, model: &Model, window_rect: Rect) {
    let tank = &model.tank;
    draw_bounds(draw, tank.bounds(), window_rect);

    for particle in tank.particles() {
        draw.ellipse()
            .xy(to_screen(particle.position, window_rect))
            .radius(particle.radius)
            .color(color(particle.color));
    }

    for (index, histogram) in model.histograms.iter().enumerate() {
        draw_histogram(draw, histogram, histogram_origin(index), window_rect);
    }

    // Preview of the type the next click spawns, centred under the tank
    let current = tank.current_particle();
    let bounds = tank.bounds();
    let label_pos = Vector::xy(bounds.center().x, bounds.bottom() + 35.0);
    draw.text("Current Particle:")
        .xy(to_screen(label_pos, window_rect))
        .color(WHITE)
        .font_size(18);
    draw.ellipse()
        .xy(to_screen(label_pos + Vector::xy(110.0, 0.0), window_rect))
        .radius(current.radius)
        .color(color(current.color));
}

fn draw_histogram(draw: &Draw, histogram: &SpeedHistogram, top_left: Vector, window_rect: Rect) {
    let origin = top_left + Vector::xy(0.0, HIST_HEIGHT);

    // Title and axes
    draw.text(&format!("Speeds, mass {:.2}", histogram.mass))
        .xy(to_screen(top_left + Vector::xy(HIST_WIDTH / 2.0, -15.0), window_rect))
        .w(HIST_WIDTH)
        .color(WHITE)
        .font_size(14);
    draw.line()
        .start(to_screen(top_left, window_rect))
        .end(to_screen(origin, window_rect))
        .weight(1.0)
        .color(WHITE);
    draw.line()
        .start(to_screen(origin, window_rect))
        .end(to_screen(origin + Vector::xy(HIST_WIDTH, 0.0), window_rect))
        .weight(1.0)
        .color(WHITE);

    let bar_width = HIST_WIDTH / NUM_SECTIONS as f32;
    let edges = histogram.section_edges();
    for section in 0..NUM_SECTIONS {
        let height = histogram.relative_height(section) * HIST_HEIGHT;
        let left = section as f32 * bar_width;

        if height > 0.0 {
            let center = origin + Vector::xy(left + bar_width / 2.0, -height / 2.0);
            draw.rect()
                .xy(to_screen(center, window_rect))
                .w_h(bar_width - 1.0, height)
                .color(color(histogram.color));
        }

        // Label every other section edge
        if section % 2 == 1 {
            draw.text(&format!("{:.1}", edges[section]))
                .xy(to_screen(origin + Vector::xy(left + bar_width, 12.0), window_rect))
                .color(WHITE)
                .font_size(11);
        }
    }

    draw.text(&format!("max count {}", histogram.max_count))
        .xy(to_screen(top_left + Vector::xy(HIST_WIDTH - 40.0, 10.0), window_rect))
        .color(WHITE)
        .font_size(11);
}
