use crate::{
    consts::DEFAULT_TRANSFORM,
    field::{field, Configurable, Field},
};
use serde::Serialize;

/// Mounting position relative to the parent actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Mounting rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorTransform {
    pub location: Location,
    pub rotation: Rotation,
}

impl SensorTransform {
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.location = Location { x, y, z };
    }

    pub fn set_rotation(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.rotation = Rotation { pitch, yaw, roll };
    }
}

impl Default for SensorTransform {
    fn default() -> Self {
        DEFAULT_TRANSFORM
    }
}

static TRANSFORM_FIELDS: &[Field<SensorTransform>] = &[
    field!(SensorTransform, "PositionX" => location.x),
    field!(SensorTransform, "PositionY" => location.y),
    field!(SensorTransform, "PositionZ" => location.z),
    field!(SensorTransform, "RotationPitch" => rotation.pitch),
    field!(SensorTransform, "RotationYaw" => rotation.yaw),
    field!(SensorTransform, "RotationRoll" => rotation.roll),
];

impl Configurable for SensorTransform {
    const SUBJECT: &'static str = "transform";

    fn fields() -> &'static [Field<Self>] {
        TRANSFORM_FIELDS
    }
}
