//! Sensor descriptions attached to the player vehicle.
//!
//! A [`Sensor`] pairs a name and a mounting [`SensorTransform`] with one
//! variant of the closed [`Description`] set. The variant is chosen by the
//! `SensorType` key of the sensor's settings section.

pub mod camera;
pub mod lidar;
pub mod transform;

pub use camera::{CameraDescription, PostProcessing};
pub use lidar::LidarDescription;
pub use transform::{Location, Rotation, SensorTransform};

use crate::{
    config::SectionSource,
    consts::{SENSOR_LIST_SECTION, SENSOR_TYPE_KEY},
    error::{Error, Result},
    field::Configurable,
    validate::{self, Issue, ValidationPolicy},
};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, info_span};

/// Kind tag selecting the [`Description`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorType {
    Camera,
    LidarRayCast,
}

impl SensorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camera => "CAMERA",
            Self::LidarRayCast => "LIDAR_RAY_CAST",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Camera, Self::LidarRayCast]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Description {
    Camera(CameraDescription),
    Lidar(LidarDescription),
}

impl Description {
    /// Default description for the given kind.
    pub fn new(kind: SensorType) -> Self {
        match kind {
            SensorType::Camera => Self::Camera(CameraDescription::default()),
            SensorType::LidarRayCast => Self::Lidar(LidarDescription::default()),
        }
    }

    pub fn sensor_type(&self) -> SensorType {
        match self {
            Self::Camera(_) => SensorType::Camera,
            Self::Lidar(_) => SensorType::LidarRayCast,
        }
    }

    pub fn as_lidar(&self) -> Option<&LidarDescription> {
        match self {
            Self::Lidar(lidar) => Some(lidar),
            _ => None,
        }
    }

    pub fn as_camera(&self) -> Option<&CameraDescription> {
        match self {
            Self::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    pub fn load(&mut self, source: &dyn SectionSource, section: &str) {
        match self {
            Self::Camera(camera) => camera.load(source, section),
            Self::Lidar(lidar) => lidar.load(source, section),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Camera(camera) => camera.set(key, value),
            Self::Lidar(lidar) => lidar.set(key, value),
        }
    }

    pub fn check(&self) -> Vec<Issue> {
        match self {
            Self::Camera(camera) => camera.check(),
            Self::Lidar(lidar) => lidar.check(),
        }
    }

    pub fn describe(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Camera(camera) => camera.describe(),
            Self::Lidar(lidar) => lidar.describe(),
        }
    }
}

/// A named sensor and its resolved settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sensor {
    pub name: String,
    pub transform: SensorTransform,
    pub description: Description,
}

impl Sensor {
    pub fn new(name: impl Into<String>, kind: SensorType) -> Self {
        Self {
            name: name.into(),
            transform: SensorTransform::default(),
            description: Description::new(kind),
        }
    }

    /// Settings section holding the keys of the sensor called `name`.
    pub fn section_name(name: &str) -> String {
        format!("{SENSOR_LIST_SECTION}/{name}")
    }

    /// Loads the sensor called `name` from its `[CARLA/Sensor/<name>]` section.
    ///
    /// Only the `SensorType` key is mandatory. Every other key falls back to
    /// the default of its field.
    pub fn load(source: &dyn SectionSource, name: &str) -> Result<Self> {
        let section = Self::section_name(name);
        let raw_kind = source
            .get(&section, SENSOR_TYPE_KEY)
            .ok_or_else(|| Error::MissingKey {
                section: section.clone(),
                key: SENSOR_TYPE_KEY.to_string(),
            })?;
        let kind = SensorType::from_name(raw_kind).ok_or_else(|| Error::UnknownSensorType {
            sensor: name.to_string(),
            value: raw_kind.to_string(),
        })?;

        let mut sensor = Self::new(name, kind);
        sensor.transform.load(source, &section);
        sensor.description.load(source, &section);
        debug!("Loaded {kind} sensor '{name}' from [{section}]");

        Ok(sensor)
    }

    pub fn sensor_type(&self) -> SensorType {
        self.description.sensor_type()
    }

    /// Sets a transform or description field by its settings key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self.transform.set(key, value) {
            Err(Error::UnknownKey(_)) => self.description.set(key, value),
            result => result,
        }
    }

    pub fn issues(&self) -> Vec<Issue> {
        let mut issues = self.transform.check();
        issues.extend(self.description.check());
        issues
    }

    pub fn validate(&self, policy: ValidationPolicy) -> Result<Vec<Issue>> {
        validate::enforce(&self.name, self.issues(), policy)
    }

    pub fn describe(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![(SENSOR_TYPE_KEY, self.sensor_type().to_string())];
        entries.extend(self.transform.describe());
        entries.extend(self.description.describe());
        entries
    }

    pub fn log(&self) {
        let _span = info_span!("sensor", name = %self.name).entered();
        for (key, value) in self.describe() {
            info!("{key} = {value}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Sections;

    #[test]
    fn sensor_type_names() {
        assert_eq!(
            SensorType::from_name("LIDAR_RAY_CAST"),
            Some(SensorType::LidarRayCast)
        );
        assert_eq!(SensorType::from_name(" camera "), Some(SensorType::Camera));
        assert_eq!(SensorType::from_name("RADAR"), None);
        assert_eq!(SensorType::LidarRayCast.to_string(), "LIDAR_RAY_CAST");
    }

    #[test]
    fn loads_lidar_with_transform() {
        let sections = Sections::from_ini_str(
            "[CARLA/Sensor/Roof]
SensorType=LIDAR_RAY_CAST
PositionZ=2.5
Channels=64
Range=8000.0
",
        )
        .unwrap();
        let sensor = Sensor::load(&sections, "Roof").unwrap();

        assert_eq!(sensor.name, "Roof");
        assert_eq!(sensor.sensor_type(), SensorType::LidarRayCast);
        assert_eq!(sensor.transform.location.z, 2.5);
        let lidar = sensor.description.as_lidar().unwrap();
        assert_eq!(lidar.channels, 64);
        assert_eq!(lidar.range, 8000.0);
        assert_eq!(lidar.points_per_second, 56000);
        assert!(sensor.description.as_camera().is_none());
    }

    #[test]
    fn missing_sensor_type() {
        let sections = Sections::from_ini_str("[CARLA/Sensor/Roof]\nChannels=64\n").unwrap();
        let err = Sensor::load(&sections, "Roof").unwrap_err();
        assert!(matches!(err, Error::MissingKey { ref key, .. } if key == "SensorType"));
    }

    #[test]
    fn unknown_sensor_type() {
        let sections = Sections::from_ini_str("[CARLA/Sensor/Roof]\nSensorType=RADAR\n").unwrap();
        let err = Sensor::load(&sections, "Roof").unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownSensorType { ref sensor, ref value } if sensor == "Roof" && value == "RADAR"
        ));
    }

    #[test]
    fn set_routes_to_transform_then_description() {
        let mut sensor = Sensor::new("Front", SensorType::Camera);
        sensor.set("PositionX", "1.5").unwrap();
        sensor.set("ImageSizeX", "800").unwrap();
        assert_eq!(sensor.transform.location.x, 1.5);
        assert_eq!(sensor.description.as_camera().unwrap().image_size_x, 800);

        let err = sensor.set("Channels", "64").unwrap_err();
        assert!(matches!(err, Error::UnknownKey(_)));
    }

    #[test]
    fn validation_uses_sensor_name() {
        let mut sensor = Sensor::new("Roof", SensorType::LidarRayCast);
        sensor.set("UpperFOVLimit", "-5").unwrap();
        sensor.set("LowerFOVLimit", "10").unwrap();

        assert_eq!(sensor.validate(ValidationPolicy::Warn).unwrap().len(), 1);
        let err = sensor.validate(ValidationPolicy::Strict).unwrap_err();
        assert!(matches!(err, Error::Validation { ref subject, .. } if subject == "Roof"));
    }

    #[test]
    fn describe_starts_with_type_and_transform() {
        let sensor = Sensor::new("Roof", SensorType::LidarRayCast);
        let described = sensor.describe();
        assert_eq!(described[0], ("SensorType", "LIDAR_RAY_CAST".to_string()));
        assert_eq!(described[1].0, "PositionX");
        assert_eq!(described[7].0, "Channels");
        assert_eq!(described.len(), 1 + 6 + 12);
    }
}
