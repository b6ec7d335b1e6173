//! Shared visualization utilities for the ray BSP inspectors.

use std::hash::{Hash, Hasher};

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use nalgebra::{Point3, Vector3};
use ray_bsp::{Aabb, Cuboid, Object, ObjectId, Ray, Sphere, Triangle};

pub mod navigator;
pub use navigator::TreeNavigator;

/// Scene objects the inspectors know how to draw.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Triangle(Triangle),
}

impl Object for Shape {
    fn bounds(&self) -> Aabb {
        match self {
            Shape::Sphere(s) => s.bounds(),
            Shape::Cuboid(c) => c.bounds(),
            Shape::Triangle(t) => t.bounds(),
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Cuboid(c) => c.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
        }
    }
}

#[inline]
pub fn to_vec3(p: &Point3<f64>) -> Vec3 {
    vec3(p.x as f32, p.y as f32, p.z as f32)
}

/// Generates a deterministic color from an object id, stable across frames.
pub fn object_color(id: ObjectId) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    id.index().hash(&mut hasher);
    let hash = hasher.finish();

    let r = (((hash >> 16) & 0xFF) as u8).max(40);
    let g = (((hash >> 8) & 0xFF) as u8).max(40);
    let b = ((hash & 0xFF) as u8).max(40);

    Color::from_rgba(r, g, b, 255)
}

/// Draws the edges of a box.
pub fn draw_bounds(bounds: &Aabb, color: Color) {
    if bounds.is_empty() {
        return;
    }
    let size = bounds.size();
    draw_cube_wires(
        to_vec3(&bounds.center()),
        vec3(size.x as f32, size.y as f32, size.z as f32),
        color,
    );
}

/// Draws a single shape filled with `color`.
pub fn draw_shape(shape: &Shape, color: Color) {
    match shape {
        Shape::Sphere(s) => draw_sphere(to_vec3(&s.center()), s.radius() as f32, None, color),
        Shape::Cuboid(c) => {
            let bounds = c.bounds();
            let size = bounds.size();
            draw_cube(
                to_vec3(&bounds.center()),
                vec3(size.x as f32, size.y as f32, size.z as f32),
                None,
                color,
            );
        }
        Shape::Triangle(t) => {
            let vertices = t
                .vertices()
                .iter()
                .map(|p| Vertex::new2(to_vec3(p), vec2(0.0, 0.0), color))
                .collect();
            // Both windings so the face shows from either side.
            let mesh = Mesh {
                vertices,
                indices: vec![0, 1, 2, 0, 2, 1],
                texture: None,
            };
            draw_mesh(&mesh);
        }
    }
}

/// Cuboids for the `size` corners of a regular lattice, spaced `spacing` apart.
pub fn lattice_scene(size: usize, spacing: f64) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let offset = (size as f64 - 1.0) * spacing * 0.5;
    for i in 0..size {
        for j in 0..size {
            for k in 0..size {
                let center = Point3::new(
                    i as f64 * spacing - offset,
                    j as f64 * spacing - offset,
                    k as f64 * spacing - offset,
                );
                let shape = match (i + j + k) % 3 {
                    0 => Shape::Sphere(Sphere::new(center, spacing * 0.3)),
                    1 => Shape::Cuboid(Cuboid::new(center, Vector3::repeat(spacing * 0.25))),
                    _ => Shape::Triangle(Triangle::new(
                        center + Vector3::new(-0.3, -0.3, 0.0) * spacing,
                        center + Vector3::new(0.3, -0.3, 0.1) * spacing,
                        center + Vector3::new(0.0, 0.3, -0.1) * spacing,
                    )),
                };
                shapes.push(shape);
            }
        }
    }
    shapes
}

/// Simple orbit camera for 3D scene navigation.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    /// Multiplier for scroll wheel zoom
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: vec3(0.0, 0.0, 0.0),
            zoom_speed: 5.0,
            min_distance: 10.0,
            max_distance: 200.0,
        }
    }

    /// Sets the zoom configuration (speed and distance limits).
    pub fn with_zoom(mut self, speed: f32, min: f32, max: f32) -> Self {
        self.zoom_speed = speed;
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Updates camera state from mouse drag, scroll and arrow keys.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        self.pitch = self.pitch.clamp(-1.5, 1.5);

        let scroll = mouse_wheel().1;
        self.distance -= scroll * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);

        if is_key_down(KeyCode::Left) {
            self.yaw += 0.02;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= 0.02;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += 0.02;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= 0.02;
        }

        // WASD pans the target, which moves the view ray with it.
        let step = self.distance * 0.005;
        if is_key_down(KeyCode::W) {
            self.target.y += step;
        }
        if is_key_down(KeyCode::S) {
            self.target.y -= step;
        }
        if is_key_down(KeyCode::A) {
            self.target.x -= step;
        }
        if is_key_down(KeyCode::D) {
            self.target.x += step;
        }
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + vec3(x, y, z)
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            ..Default::default()
        }
    }

    /// The ray leaving the eye towards the orbit target.
    pub fn view_ray(&self) -> Ray {
        let eye = self.position();
        Ray::towards(
            Point3::new(eye.x as f64, eye.y as f64, eye.z as f64),
            Point3::new(self.target.x as f64, self.target.y as f64, self.target.z as f64),
        )
    }
}

/// Draws the probe ray up to `distance`, or a short stub on a miss.
pub fn draw_probe(ray: &Ray, distance: f64) {
    let (end, color) = if distance.is_finite() {
        (ray.at(distance), YELLOW)
    } else {
        (ray.at(1000.0), DARKGRAY)
    };
    draw_line_3d(to_vec3(&ray.origin()), to_vec3(&end), color);
    if distance.is_finite() {
        draw_sphere(to_vec3(&end), 0.08, None, YELLOW);
    }
}
