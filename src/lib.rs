//! Sensor descriptions for the CARLA simulator, read from settings files.
//!
//! Settings are key/value pairs grouped in sections (INI or JSON5). Each
//! sensor lives in a `[CARLA/Sensor/<Name>]` section whose `SensorType` key
//! selects the description to fill:
//!
//! ```ini
//! [CARLA/Sensor]
//! Sensors=Roof
//!
//! [CARLA/Sensor/Roof]
//! SensorType=LIDAR_RAY_CAST
//! Channels=64
//! Range=8000.0
//! ```

pub mod config;
pub mod consts;
pub mod error;
pub mod field;
mod ini;
pub mod sensor;
pub mod settings;
pub mod validate;

pub use config::{SectionSource, Sections};
pub use error::{Error, Result};
pub use field::Configurable;
pub use sensor::{CameraDescription, Description, LidarDescription, Sensor, SensorType};
pub use settings::CarlaSettings;
pub use validate::{Issue, ValidationPolicy};
