use macroquad::prelude::*;
use ray_bsp::BspTree;
use ray_bsp_viz::{draw_probe, lattice_scene, OrbitCamera, TreeNavigator};

#[macroquad::main("Ray BSP Inspector")]
async fn main() {
    println!("Generating lattice scene...");
    let shapes = lattice_scene(5, 2.0);

    println!("Building BSP tree...");
    let tree = match BspTree::from_objects(shapes) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("failed to build tree: {err}");
            return;
        }
    };
    let stats = tree.stats();
    println!(
        "BSP tree built: {} objects, {} nodes, depth {}",
        tree.len(),
        stats.node_count,
        stats.max_depth
    );

    let mut camera = OrbitCamera::new(20.0, 0.4, 0.4).with_zoom(1.0, 4.0, 60.0);
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
                "Ray BSP - {} objects, {} leaves, {} oversized",
                tree.len(),
                stats.leaf_count,
                stats.oversized_leaves
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        let hit_text = match hit.object_id() {
            Some(id) => format!("View ray hits object {id} at {:.3}", hit.distance()),
            None => "View ray misses".to_string(),
        };
        draw_text(&hit_text, 10.0, 45.0, 18.0, GRAY);

        navigator.draw_ui(&tree, 70.0);

        draw_text(
            "Drag mouse to rotate, scroll to zoom, WASD to pan",
            10.0,
            175.0,
            16.0,
            DARKGRAY,
        );
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 195.0, 16.0, DARKGRAY);

        next_frame().await
    }
}
