//! Shape generation for 2D primitives
//!
//! All generators emit triangle lists in screen pixel space (y down);
//! the pipeline maps to NDC at upload time. The background fill lives in
//! the scene pass clear color, so no rectangle primitive is needed.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned ellipse
pub fn ellipse(
    center: Vec2,
    radius_x: f32,
    radius_y: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius_x * theta1.cos(),
            center.y + radius_y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius_x * theta2.cos(),
            center.y + radius_y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    ellipse(center, radius, radius, color, segments)
}

/// Generate vertices for a stroked arc: a band of the given width centered
/// on `radius`, spanning `theta_start..theta_end` (radians, y-down screen
/// convention, so `0..PI` is the lower half).
pub fn arc_band(
    center: Vec2,
    radius: f32,
    width: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let span = theta_end - theta_start;
    let inner_r = radius - width / 2.0;
    let outer_r = radius + width / 2.0;

    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let t1 = i as f32 / segments as f32;
        let t2 = (i + 1) as f32 / segments as f32;

        let theta1 = theta_start + t1 * span;
        let theta2 = theta_start + t2 * span;

        let inner1 = center + Vec2::new(inner_r * theta1.cos(), inner_r * theta1.sin());
        let outer1 = center + Vec2::new(outer_r * theta1.cos(), outer_r * theta1.sin());
        let inner2 = center + Vec2::new(inner_r * theta2.cos(), inner_r * theta2.sin());
        let outer2 = center + Vec2::new(outer_r * theta2.cos(), outer_r * theta2.sin());

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}
