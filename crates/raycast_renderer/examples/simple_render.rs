//! Simple ray caster example.
//!
//! Renders a small scene of spheres over a floor plane and saves it as PPM.

use raycast_renderer::{render, save_ppm, Camera, RenderConfig, Scene, SceneObject, DVec3};

fn main() {
    env_logger::init();

    println!("Raycast - Simple Example");
    println!("========================");

    let scene = build_scene();
    println!("Created {} objects", scene.object_count());

    let (width, height) = (640, 480);
    println!("Rendering {}x{}...", width, height);

    let start = std::time::Instant::now();
    let image = render(&scene, width, height, &RenderConfig::default());
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    if let Err(e) = save_ppm(&image, filename) {
        eprintln!("Failed to save image: {}", e);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("simple", Camera::new(1.6, 1.2));

    // Floor; rows grow towards +y, so +y is "down" in the image
    scene.add_object(SceneObject::plane(
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
        DVec3::new(0.3, 0.3, 0.3),
    ));

    // Three spheres resting on it
    scene.add_object(SceneObject::sphere(
        DVec3::new(-1.5, 0.5, 6.0),
        0.5,
        DVec3::new(0.9, 0.1, 0.1),
    ));
    scene.add_object(SceneObject::sphere(
        DVec3::new(0.0, 0.0, 7.0),
        1.0,
        DVec3::new(0.1, 0.8, 0.2),
    ));
    scene.add_object(SceneObject::sphere(
        DVec3::new(1.5, 0.5, 6.0),
        0.5,
        DVec3::new(0.2, 0.3, 0.9),
    ));

    scene
}
