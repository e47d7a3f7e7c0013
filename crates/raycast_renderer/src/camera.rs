//! Pinhole camera for ray generation.

use raycast_core::Camera;
use raycast_math::{DVec3, Ray};

/// Camera at the origin looking down +Z, with its view plane at z = 1.
///
/// Pixel (0, 0) is the top-left of the image and maps to the
/// (-x, -y) corner of the view plane.
#[derive(Clone, Debug)]
pub struct PinholeCamera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // View plane size at unit distance
    view_width: f64,
    view_height: f64,

    center: DVec3,
}

impl PinholeCamera {
    /// Create a 1x1 pixel camera with the scene camera's view plane.
    pub fn new(camera: &Camera) -> Self {
        Self {
            image_width: 1,
            image_height: 1,
            view_width: camera.view_width,
            view_height: camera.view_height,
            center: DVec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Center of pixel (x, y) on the view plane.
    pub fn pixel_center(&self, x: u32, y: u32) -> DVec3 {
        let pixel_width = self.view_width / f64::from(self.image_width);
        let pixel_height = self.view_height / f64::from(self.image_height);

        let x_coord = self.center.x - self.view_width / 2.0 + pixel_width * (f64::from(x) + 0.5);
        let y_coord = self.center.y - self.view_height / 2.0 + pixel_height * (f64::from(y) + 0.5);

        DVec3::new(x_coord, y_coord, self.center.z + 1.0)
    }

    /// Generate the unit-direction ray through the center of pixel (x, y).
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        Ray::through(self.center, self.pixel_center(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel_looks_forward() {
        let camera = PinholeCamera::new(&Camera::new(2.0, 2.0));

        let ray = camera.get_ray(0, 0);
        assert_eq!(ray.origin(), DVec3::ZERO);
        assert_eq!(ray.direction(), DVec3::Z);
    }

    #[test]
    fn test_pixel_centers() {
        let camera = PinholeCamera::new(&Camera::new(2.0, 1.0)).with_resolution(4, 2);

        assert_eq!(camera.pixel_center(0, 0), DVec3::new(-0.75, -0.25, 1.0));
        assert_eq!(camera.pixel_center(3, 1), DVec3::new(0.75, 0.25, 1.0));
        assert_eq!(camera.pixel_center(1, 0), DVec3::new(-0.25, -0.25, 1.0));
    }

    #[test]
    fn test_rays_are_normalized_and_symmetric() {
        let camera = PinholeCamera::new(&Camera::new(1.0, 1.0)).with_resolution(3, 3);

        for y in 0..3 {
            for x in 0..3 {
                let ray = camera.get_ray(x, y);
                assert!((ray.direction().length() - 1.0).abs() < 1e-12);
                assert!(ray.direction().z > 0.0);
            }
        }

        let top_left = camera.get_ray(0, 0).direction();
        let bottom_right = camera.get_ray(2, 2).direction();
        assert!((top_left.x + bottom_right.x).abs() < 1e-12);
        assert!((top_left.y + bottom_right.y).abs() < 1e-12);
        assert!((camera.get_ray(1, 1).direction() - DVec3::Z).length() < 1e-12);
    }
}
