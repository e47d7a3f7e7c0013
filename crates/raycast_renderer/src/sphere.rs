//! Ray/sphere intersection.

use crate::hittable::Hittable;
use raycast_core::Sphere;
use raycast_math::{Interval, Ray};

impl Hittable for Sphere {
    /// Solves `a*t^2 + b*t + c = 0` for the ray, preferring the smaller root.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let near = (-b - sqrtd) / (2.0 * a);
        if ray_t.surrounds(near) {
            return Some(near);
        }

        let far = (-b + sqrtd) / (2.0 * a);
        ray_t.surrounds(far).then_some(far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycast_math::DVec3;

    fn sphere(center: DVec3, radius: f64) -> Sphere {
        Sphere { center, radius }
    }

    #[test]
    fn test_sphere_hit_entry_point() {
        let sphere = sphere(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0));

        let t = sphere.hit(&ray, Interval::POSITIVE).unwrap();
        assert!((t - 4.0).abs() < 1e-9); // Should hit at t=4, not t=6
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = sphere(DVec3::new(0.0, 0.0, 5.0), 1.0);

        // Ray pointing away from sphere
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::POSITIVE).is_none());

        // Ray passing beside it
        let ray = Ray::new(DVec3::new(2.0, 0.0, 0.0), DVec3::Z);
        assert!(sphere.hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = sphere(DVec3::new(0.0, 0.0, -5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        assert!(sphere.hit(&ray, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_origin_inside_sphere_uses_far_root() {
        let sphere = sphere(DVec3::ZERO, 2.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        let t = sphere.hit(&ray, Interval::POSITIVE).unwrap();
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = sphere(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0));

        // t is in units of the direction vector
        let t = sphere.hit(&ray, Interval::POSITIVE).unwrap();
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_spheres() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        // Zero radius: only a tangent point, never hit by an off-center ray
        let point = sphere(DVec3::new(1.0, 0.0, 5.0), 0.0);
        assert!(point.hit(&ray, Interval::POSITIVE).is_none());

        // Zero direction gives NaN roots
        let zero = Ray::new(DVec3::ZERO, DVec3::ZERO);
        let unit = sphere(DVec3::new(0.0, 0.0, 5.0), 1.0);
        assert!(unit.hit(&zero, Interval::POSITIVE).is_none());
    }

    #[test]
    fn test_respects_interval_max() {
        let sphere = sphere(DVec3::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        assert!(sphere.hit(&ray, Interval::new(0.0, 3.0)).is_none());
    }
}
