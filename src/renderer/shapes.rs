//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for an axis-aligned filled rectangle (two triangles)
pub fn rect(center: Vec2, half: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let left = center.x - half.x;
    let right = center.x + half.x;
    let bottom = center.y - half.y;
    let top = center.y + half.y;

    vec![
        Vertex::new(left, bottom, color),
        Vertex::new(right, bottom, color),
        Vertex::new(right, top, color),
        Vertex::new(right, top, color),
        Vertex::new(left, top, color),
        Vertex::new(left, bottom, color),
    ]
}

/// Generate vertices for a filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let step = 2.0 * PI / segments as f32;

    for i in 0..segments {
        let rim1 = center + radius * Vec2::from_angle(step * i as f32);
        let rim2 = center + radius * Vec2::from_angle(step * (i + 1) as f32);

        // One slice of the fan, apex at the center
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(rim1.x, rim1.y, color));
        vertices.push(Vertex::new(rim2.x, rim2.y, color));
    }

    vertices
}
