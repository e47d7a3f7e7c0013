//! Scene file parser.
//!
//! A hand-written recursive-descent reader for a restricted JSON dialect.
//! The parser works directly on the character stream and tracks the
//! current line so every error can point at the offending input.
//!
//! # Supported Syntax
//!
//! - A single top-level array: `[ {...}, {...} ]`
//! - Objects whose first key is `"type"`: `"camera"`, `"sphere"` or `"plane"`
//! - Strings: printable ASCII, no escapes, at most 128 characters
//! - Numbers: `-1`, `0.5`, `2e-3`
//! - Vectors: `[x, y, z]`
//!
//! Parsing fails on the first error; no partial scene is ever returned.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use raycast_math::{DVec3, Interval};
use thiserror::Error;

use crate::scene::{Camera, Plane, Primitive, Scene, SceneObject, Sphere};

/// Longest string the scene format allows.
pub const MAX_STRING_LEN: usize = 128;

/// Errors that can occur during scene parsing.
///
/// Every variant carries the 1-based line number where parsing stopped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected end of file on line {line}")]
    UnexpectedEof { line: usize },

    #[error("Expected {expected} on line {line}, found '{found}'")]
    Unexpected {
        expected: &'static str,
        found: char,
        line: usize,
    },

    #[error("Strings longer than {} characters are not supported (line {line})", MAX_STRING_LEN)]
    StringTooLong { line: usize },

    #[error("Strings with escape codes are not supported (line {line})")]
    EscapeSequence { line: usize },

    #[error("Strings may contain only printable ASCII characters (line {line})")]
    InvalidCharacter { line: usize },

    #[error("Invalid number \"{text}\" on line {line}")]
    InvalidNumber { text: String, line: usize },

    #[error("Expected \"type\" key on line {line}, found \"{found}\"")]
    MissingType { found: String, line: usize },

    #[error("Unknown type \"{name}\" on line {line}")]
    UnknownType { name: String, line: usize },

    #[error("Unknown property \"{name}\" on line {line}")]
    UnknownProperty { name: String, line: usize },

    #[error("Unexpected '{property}' attribute on {kind} on line {line}")]
    InvalidProperty {
        property: &'static str,
        kind: EntryKind,
        line: usize,
    },

    #[error("Scene on line {line} contains no objects")]
    EmptyScene { line: usize },

    #[error("Unexpected content after the end of the scene on line {line}")]
    TrailingContent { line: usize },
}

impl ParseError {
    /// Line number the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedEof { line }
            | ParseError::Unexpected { line, .. }
            | ParseError::StringTooLong { line }
            | ParseError::EscapeSequence { line }
            | ParseError::InvalidCharacter { line }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::MissingType { line, .. }
            | ParseError::UnknownType { line, .. }
            | ParseError::UnknownProperty { line, .. }
            | ParseError::InvalidProperty { line, .. }
            | ParseError::EmptyScene { line }
            | ParseError::TrailingContent { line } => *line,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Kind of record named by an entry's `"type"` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Camera,
    Sphere,
    Plane,
}

impl EntryKind {
    fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "camera" => Some(EntryKind::Camera),
            "sphere" => Some(EntryKind::Sphere),
            "plane" => Some(EntryKind::Plane),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryKind::Camera => "camera",
            EntryKind::Sphere => "sphere",
            EntryKind::Plane => "plane",
        })
    }
}

/// Keys an entry may carry after `"type"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Property {
    Width,
    Height,
    Radius,
    Color,
    Position,
    Normal,
}

impl Property {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "width" => Some(Property::Width),
            "height" => Some(Property::Height),
            "radius" => Some(Property::Radius),
            "color" => Some(Property::Color),
            "position" => Some(Property::Position),
            "normal" => Some(Property::Normal),
            _ => None,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Property::Width => "width",
            Property::Height => "height",
            Property::Radius => "radius",
            Property::Color => "color",
            Property::Position => "position",
            Property::Normal => "normal",
        }
    }
}

/// Entry being filled in while its properties are read.
enum Pending {
    Camera,
    Object(SceneObject),
}

impl Pending {
    fn new(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Camera => Pending::Camera,
            EntryKind::Sphere => Pending::Object(SceneObject {
                color: DVec3::ZERO,
                primitive: Primitive::Sphere(Sphere::default()),
            }),
            EntryKind::Plane => Pending::Object(SceneObject {
                color: DVec3::ZERO,
                primitive: Primitive::Plane(Plane::default()),
            }),
        }
    }

    fn kind(&self) -> EntryKind {
        match self {
            Pending::Camera => EntryKind::Camera,
            Pending::Object(object) => match object.primitive {
                Primitive::Sphere(_) => EntryKind::Sphere,
                Primitive::Plane(_) => EntryKind::Plane,
            },
        }
    }
}

/// Scene file parser.
pub struct SceneParser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    camera: Camera,
    cameras_seen: usize,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser from file contents.
    pub fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
            line: 1,
            camera: Camera::default(),
            cameras_seen: 0,
        }
    }

    /// Set the camera used when the scene declares none.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    /// Parse the whole input into a scene.
    pub fn parse(mut self) -> ParseResult<Scene> {
        let mut scene = Scene::new("", self.camera);

        self.skip_ws();
        self.expect_char('[')?;
        self.skip_ws();

        if self.chars.peek() == Some(&']') {
            return Err(ParseError::EmptyScene { line: self.line });
        }

        loop {
            self.skip_ws();
            self.parse_entry(&mut scene)?;
            self.skip_ws();

            match self.next_char()? {
                ',' => continue,
                ']' => break,
                found => {
                    return Err(ParseError::Unexpected {
                        expected: "',' or ']'",
                        found,
                        line: self.line,
                    })
                }
            }
        }

        self.skip_ws();
        if self.chars.peek().is_some() {
            return Err(ParseError::TrailingContent { line: self.line });
        }

        log::debug!(
            "Parsed {} objects ({} spheres, {} planes), view {}x{}",
            scene.object_count(),
            scene.sphere_count(),
            scene.plane_count(),
            scene.camera.view_width,
            scene.camera.view_height
        );

        Ok(scene)
    }

    /// Parse one `{ "type": ..., ... }` entry and record it in `scene`.
    fn parse_entry(&mut self, scene: &mut Scene) -> ParseResult<()> {
        self.expect_char('{')?;
        self.skip_ws();

        let start_line = self.line;
        let key = self.next_string()?;
        if key != "type" {
            return Err(ParseError::MissingType {
                found: key,
                line: start_line,
            });
        }

        self.skip_ws();
        self.expect_char(':')?;
        self.skip_ws();

        let type_line = self.line;
        let type_name = self.next_string()?;
        let kind = EntryKind::from_type_name(&type_name).ok_or(ParseError::UnknownType {
            name: type_name,
            line: type_line,
        })?;

        let mut pending = Pending::new(kind);
        self.skip_ws();

        loop {
            match self.next_char()? {
                '}' => break,
                ',' => {
                    self.skip_ws();
                    self.parse_property(scene, &mut pending)?;
                    self.skip_ws();
                }
                found => {
                    return Err(ParseError::Unexpected {
                        expected: "',' or '}'",
                        found,
                        line: self.line,
                    })
                }
            }
        }

        match pending {
            Pending::Camera => {
                self.cameras_seen += 1;
                if self.cameras_seen > 1 {
                    log::warn!(
                        "Camera on line {} overrides an earlier camera; the last one wins",
                        start_line
                    );
                }
            }
            Pending::Object(object) => {
                check_object(&object, start_line);
                log::debug!("Line {}: {} {:?}", start_line, kind, object);
                scene.add_object(object);
            }
        }

        Ok(())
    }

    /// Parse one `"key": value` pair into the pending entry.
    fn parse_property(&mut self, scene: &mut Scene, pending: &mut Pending) -> ParseResult<()> {
        let line = self.line;
        let key = self.next_string()?;
        self.skip_ws();
        self.expect_char(':')?;
        self.skip_ws();

        let property =
            Property::from_key(&key).ok_or(ParseError::UnknownProperty { name: key, line })?;

        match (property, pending) {
            (Property::Width, Pending::Camera) => scene.camera.view_width = self.next_number()?,
            (Property::Height, Pending::Camera) => scene.camera.view_height = self.next_number()?,
            (Property::Color, Pending::Object(object)) => object.color = self.next_vector()?,
            (Property::Position, Pending::Object(object)) => {
                let position = self.next_vector()?;
                match &mut object.primitive {
                    Primitive::Sphere(sphere) => sphere.center = position,
                    Primitive::Plane(plane) => plane.point = position,
                }
            }
            (
                Property::Radius,
                Pending::Object(SceneObject {
                    primitive: Primitive::Sphere(sphere),
                    ..
                }),
            ) => sphere.radius = self.next_number()?,
            (
                Property::Normal,
                Pending::Object(SceneObject {
                    primitive: Primitive::Plane(plane),
                    ..
                }),
            ) => plane.normal = self.next_vector()?,
            (property, pending) => {
                return Err(ParseError::InvalidProperty {
                    property: property.key(),
                    kind: pending.kind(),
                    line,
                })
            }
        }

        Ok(())
    }

    /// Consume the next character, failing at end of input.
    fn next_char(&mut self) -> ParseResult<char> {
        let c = self
            .chars
            .next()
            .ok_or(ParseError::UnexpectedEof { line: self.line })?;
        if c == '\n' {
            self.line += 1;
        }
        Ok(c)
    }

    /// Consume the next character and check that it is `expected`.
    fn expect_char(&mut self, expected: char) -> ParseResult<()> {
        let found = self.next_char()?;
        if found == expected {
            return Ok(());
        }

        Err(ParseError::Unexpected {
            expected: match expected {
                '[' => "'['",
                ']' => "']'",
                '{' => "'{'",
                ':' => "':'",
                ',' => "','",
                '"' => "string",
                _ => "character",
            },
            found,
            line: self.line,
        })
    }

    /// Skip whitespace, counting newlines.
    fn skip_ws(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_whitespace() {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.chars.next();
        }
    }

    /// Parse a double-quoted string.
    fn next_string(&mut self) -> ParseResult<String> {
        self.expect_char('"')?;

        let mut buffer = String::new();
        loop {
            let c = self.next_char()?;
            if c == '"' {
                break;
            }
            if buffer.len() >= MAX_STRING_LEN {
                return Err(ParseError::StringTooLong { line: self.line });
            }
            if c == '\\' {
                return Err(ParseError::EscapeSequence { line: self.line });
            }
            if !(' '..='~').contains(&c) {
                return Err(ParseError::InvalidCharacter { line: self.line });
            }
            buffer.push(c);
        }

        Ok(buffer)
    }

    /// Parse a decimal number.
    fn next_number(&mut self) -> ParseResult<f64> {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
                break;
            }
            text.push(c);
            self.chars.next();
        }

        if text.is_empty() {
            return match self.chars.peek() {
                Some(&found) => Err(ParseError::Unexpected {
                    expected: "number",
                    found,
                    line: self.line,
                }),
                None => Err(ParseError::UnexpectedEof { line: self.line }),
            };
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::InvalidNumber {
                text,
                line: self.line,
            }),
        }
    }

    /// Parse a `[x, y, z]` vector.
    fn next_vector(&mut self) -> ParseResult<DVec3> {
        self.expect_char('[')?;
        self.skip_ws();
        let x = self.next_number()?;
        self.skip_ws();
        self.expect_char(',')?;
        self.skip_ws();
        let y = self.next_number()?;
        self.skip_ws();
        self.expect_char(',')?;
        self.skip_ws();
        let z = self.next_number()?;
        self.skip_ws();
        self.expect_char(']')?;

        Ok(DVec3::new(x, y, z))
    }
}

/// Warn about objects that parse but cannot render as intended.
fn check_object(object: &SceneObject, line: usize) {
    match object.primitive {
        Primitive::Sphere(sphere) if sphere.radius <= 0.0 => {
            log::warn!(
                "Sphere on line {} has non-positive radius {}",
                line,
                sphere.radius
            );
        }
        Primitive::Plane(plane) if plane.normal == DVec3::ZERO => {
            log::warn!("Plane on line {} has no normal and will never be hit", line);
        }
        _ => {}
    }

    let unit = Interval::new(0.0, 1.0);
    if !object.color.to_array().iter().all(|&c| unit.contains(c)) {
        log::warn!(
            "Color {:?} on line {} is outside [0, 1] and will be clamped",
            object.color,
            line
        );
    }
}

/// Parse a scene string using the default camera.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    parse_scene_with_camera(content, Camera::default())
}

/// Parse a scene string, using `camera` when the scene declares none.
pub fn parse_scene_with_camera(content: &str, camera: Camera) -> ParseResult<Scene> {
    SceneParser::new(content).with_camera(camera).parse()
}
