use crate::{
    config::SectionSource,
    consts::{SENSOR_LIST_KEY, SENSOR_LIST_SECTION},
    error::Result,
    sensor::{LidarDescription, Sensor},
    validate::ValidationPolicy,
};
use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, error, info};

/// Sensors declared by a CARLA settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CarlaSettings {
    pub sensors: Vec<Sensor>,
}

impl CarlaSettings {
    /// Loads every sensor named in `[CARLA/Sensor] Sensors=...` and validates it.
    ///
    /// Under [`ValidationPolicy::Warn`] a sensor whose type cannot be resolved
    /// is skipped. Under [`ValidationPolicy::Strict`] it fails the load, and so
    /// does any validation issue.
    pub fn load(source: &dyn SectionSource, policy: ValidationPolicy) -> Result<Self> {
        let Some(list) = source.get(SENSOR_LIST_SECTION, SENSOR_LIST_KEY) else {
            debug!("No [{SENSOR_LIST_SECTION}] {SENSOR_LIST_KEY} entry, no sensors attached");
            return Ok(Self::default());
        };

        let sensors: Vec<Sensor> = sensor_names(list)
            .filter_map(|name| match Sensor::load(source, name) {
                Ok(sensor) => Some(Ok(sensor)),
                Err(err) if policy == ValidationPolicy::Warn => {
                    error!("Skipping sensor '{name}': {err}");
                    None
                }
                Err(err) => Some(Err(err)),
            })
            .try_collect()?;

        for sensor in &sensors {
            sensor.validate(policy)?;
        }

        Ok(Self { sensors })
    }

    pub fn sensor(&self, name: &str) -> Option<&Sensor> {
        self.sensors
            .iter()
            .find(|sensor| sensor.name.eq_ignore_ascii_case(name))
    }

    pub fn lidars(&self) -> impl Iterator<Item = (&str, &LidarDescription)> {
        self.sensors.iter().filter_map(|sensor| {
            sensor
                .description
                .as_lidar()
                .map(|lidar| (sensor.name.as_str(), lidar))
        })
    }

    pub fn log(&self) {
        info!("{} sensor(s) attached", self.sensors.len());
        for sensor in &self.sensors {
            sensor.log();
        }
    }
}

/// Splits a `Sensors` list, dropping blanks and repeated names. Names
/// compare case-insensitively, like the sections they refer to.
pub fn sensor_names(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unique_by(|name| name.to_ascii_lowercase())
}
