//! Ray/plane intersection.

use crate::hittable::Hittable;
use raycast_core::Plane;
use raycast_math::{Interval, Ray};

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f64> {
        // Signed offset of the plane from the origin
        let d = -self.normal.dot(self.point);
        let t = -(self.normal.dot(ray.origin()) + d) / self.normal.dot(ray.direction());

        // Parallel rays give an infinite or NaN t, which is never surrounded
        ray_t.surrounds(t).then_some(t)
    }
}
