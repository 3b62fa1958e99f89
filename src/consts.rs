use crate::sensor::{
    camera::{CameraDescription, PostProcessing},
    lidar::LidarDescription,
    transform::{Location, Rotation, SensorTransform},
};

/// Section listing the sensors attached to the player vehicle.
pub const SENSOR_LIST_SECTION: &str = "CARLA/Sensor";
pub const SENSOR_LIST_KEY: &str = "Sensors";
pub const SENSOR_TYPE_KEY: &str = "SensorType";

pub const DEFAULT_LIDAR: LidarDescription = LidarDescription {
    channels: 32,
    range: 5000.0,
    points_per_second: 56000,
    rotation_frequency: 10.0,
    upper_fov_limit: 10.0,
    lower_fov_limit: -30.0,
    show_debug_points: false,
    gaussian_noise: 0.0,
    drop_out_pattern: 1.0,
    lidar_type: 1,
    debug_flag: 2016,
    horizon_range: 360.0,
};

pub const DEFAULT_CAMERA: CameraDescription = CameraDescription {
    post_processing: PostProcessing::SceneFinal,
    image_size_x: 720,
    image_size_y: 512,
    fov: 90.0,
};

pub const DEFAULT_TRANSFORM: SensorTransform = SensorTransform {
    location: Location {
        x: 0.2,
        y: 0.0,
        z: 1.3,
    },
    rotation: Rotation {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    },
};
