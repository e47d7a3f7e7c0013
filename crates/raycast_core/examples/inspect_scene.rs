//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/basic.json

use std::env;

use raycast_core::scene_file::load_scene;
use raycast_core::Primitive;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-file>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- scenes/basic.json");
        println!("  cargo run --example inspect_scene -- scenes/planes.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!(
                "View plane: {} x {}",
                scene.camera.view_width, scene.camera.view_height
            );
            println!("Spheres: {}", scene.sphere_count());
            println!("Planes: {}", scene.plane_count());

            println!("\n--- Objects ---");
            for (i, object) in scene.objects.iter().enumerate() {
                let c = object.color;
                match object.primitive {
                    Primitive::Sphere(sphere) => println!(
                        "  [{}] sphere at ({:.2}, {:.2}, {:.2}) r={:.2} color ({:.2}, {:.2}, {:.2})",
                        i,
                        sphere.center.x,
                        sphere.center.y,
                        sphere.center.z,
                        sphere.radius,
                        c.x,
                        c.y,
                        c.z
                    ),
                    Primitive::Plane(plane) => println!(
                        "  [{}] plane through ({:.2}, {:.2}, {:.2}) n=({:.2}, {:.2}, {:.2}) color ({:.2}, {:.2}, {:.2})",
                        i,
                        plane.point.x,
                        plane.point.y,
                        plane.point.z,
                        plane.normal.x,
                        plane.normal.y,
                        plane.normal.z,
                        c.x,
                        c.y,
                        c.z
                    ),
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
