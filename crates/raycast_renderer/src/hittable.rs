//! Hittable trait and closest-hit search over scene objects.

use raycast_core::{Primitive, SceneObject};
use raycast_math::{Interval, Ray};

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the ray parameter of the nearest hit strictly inside `ray_t`.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64>;
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t),
            Primitive::Plane(plane) => plane.hit(ray, ray_t),
        }
    }
}

impl Hittable for SceneObject {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        self.primitive.hit(ray, ray_t)
    }
}

/// Find the nearest object hit by `ray` in front of its origin.
///
/// Objects are tested in order; on equal distances the earlier object wins.
pub fn closest_hit<'a>(objects: &'a [SceneObject], ray: &Ray) -> Option<(f64, &'a SceneObject)> {
    let mut closest = None;
    let mut closest_so_far = Interval::POSITIVE.max;

    for object in objects {
        let interval = Interval::new(Interval::POSITIVE.min, closest_so_far);
        if let Some(t) = object.hit(ray, interval) {
            closest_so_far = t;
            closest = Some((t, object));
        }
    }

    closest
}
