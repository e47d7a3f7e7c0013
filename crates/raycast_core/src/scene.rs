//! Scene types for raycast.
//!
//! A scene is an ordered list of flat-colored primitives plus the view
//! dimensions of a pinhole camera sitting at the origin and looking down +Z.
//! The parser builds a [`Scene`] once; the renderer only ever reads it.

use std::fmt;

use raycast_math::DVec3;

/// RGB color with components nominally in [0, 1].
pub type Color = DVec3;

/// Camera view plane dimensions at unit distance from the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Width of the view plane
    pub view_width: f64,

    /// Height of the view plane
    pub view_height: f64,
}

impl Camera {
    /// Create a camera with the given view plane size.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            view_width,
            view_height,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// A sphere given by its center and radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
}

/// An infinite plane through `point`, oriented by `normal`.
///
/// The normal does not have to be unit length, but must be non-zero for
/// the plane to be visible.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane {
    pub point: DVec3,
    pub normal: DVec3,
}

/// Geometry of a scene object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Lowercase name of the primitive, as written in scene files.
    pub fn type_name(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Plane(_) => "plane",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A flat-colored primitive in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneObject {
    /// Surface color (RGB, 0-1)
    pub color: Color,

    /// Object geometry
    pub primitive: Primitive,
}

impl SceneObject {
    /// Create a sphere object.
    pub fn sphere(center: DVec3, radius: f64, color: Color) -> Self {
        Self {
            color,
            primitive: Primitive::Sphere(Sphere { center, radius }),
        }
    }

    /// Create a plane object.
    pub fn plane(point: DVec3, normal: DVec3, color: Color) -> Self {
        Self {
            color,
            primitive: Primitive::Plane(Plane { point, normal }),
        }
    }
}

/// A parsed scene, ready for rendering.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene name (usually from filename)
    pub name: String,

    /// Camera view dimensions
    pub camera: Camera,

    /// Objects in declaration order
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(name: impl Into<String>, camera: Camera) -> Self {
        Self {
            name: name.into(),
            camera,
            objects: Vec::new(),
        }
    }

    /// Append an object to the scene.
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Get total object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get the number of spheres.
    pub fn sphere_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| matches!(o.primitive, Primitive::Sphere(_)))
            .count()
    }

    /// Get the number of planes.
    pub fn plane_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| matches!(o.primitive, Primitive::Plane(_)))
            .count()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
