//! Objects stacked so that no axis separates them, next to a row that
//! splits cleanly. The stack ends up in one oversized leaf.

use macroquad::prelude::*;
use nalgebra::{Point3, Vector3};
use ray_bsp::{BspTree, BuildConfig, Cuboid, Sphere};
use ray_bsp_viz::{draw_probe, OrbitCamera, Shape, TreeNavigator};

fn generate_scene() -> Vec<Shape> {
    let mut shapes = Vec::new();

    for _ in 0..4 {
        shapes.push(Shape::Cuboid(Cuboid::new(
            Point3::new(-3.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        )));
    }
    for i in 0..4 {
        shapes.push(Shape::Sphere(Sphere::new(
            Point3::new(1.0 + i as f64 * 1.5, 0.0, 0.0),
            0.6,
        )));
    }

    shapes
}

#[macroquad::main("Ray BSP Degenerate Splits")]
async fn main() {
    let config = BuildConfig::default().with_min_object_count(1);
    let tree = match BspTree::build(generate_scene(), &config) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("failed to build tree: {err}");
            return;
        }
    };
    println!("{}", tree.dump());

    let mut camera = OrbitCamera::new(12.0, 0.3, 0.3).with_zoom(0.5, 3.0, 40.0);
    let mut navigator = TreeNavigator::new();

    loop {
        camera.update();
        navigator.update(&tree);

        let ray = camera.view_ray();
        let hit = tree.closest_intersection(&ray);

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        navigator.render(&tree, hit.object_id());
        draw_probe(&ray, hit.distance());

        set_default_camera();

        draw_text(
            &format!(
                "Degenerate splits - {} oversized leaves",
                tree.stats().oversized_leaves
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        navigator.draw_ui(&tree, 50.0);

        next_frame().await
    }
}
