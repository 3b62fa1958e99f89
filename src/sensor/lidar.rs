use crate::{
    consts::DEFAULT_LIDAR,
    field::{field, Configurable, Field},
    validate::Issue,
};
use serde::Serialize;

/// Tuning parameters of a ray-cast lidar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LidarDescription {
    /// Number of lasers.
    pub channels: u32,

    /// Measure distance in centimeters.
    pub range: f32,

    /// Points generated by all lasers per second.
    pub points_per_second: u32,

    /// Lidar rotation frequency in Hz.
    pub rotation_frequency: f32,

    /// Upper laser angle in degrees, counted from horizontal. Positive values
    /// point above the horizontal line.
    pub upper_fov_limit: f32,

    /// Lower laser angle in degrees, counted from horizontal. Negative values
    /// point below the horizontal line.
    pub lower_fov_limit: f32,

    /// Whether to draw laser hits in the simulator.
    pub show_debug_points: bool,

    /// Standard deviation of the noise added to point values.
    pub gaussian_noise: f32,

    /// Dropout pattern applied to the generated points.
    pub drop_out_pattern: f32,

    /// Sensor variant id.
    pub lidar_type: u32,

    /// Debug bitmask.
    pub debug_flag: u32,

    /// Horizontal sweep in degrees.
    pub horizon_range: f32,
}

impl Default for LidarDescription {
    fn default() -> Self {
        DEFAULT_LIDAR
    }
}

static LIDAR_FIELDS: &[Field<LidarDescription>] = &[
    field!(LidarDescription, "Channels" => channels),
    field!(LidarDescription, "Range" => range),
    field!(LidarDescription, "PointsPerSecond" => points_per_second),
    field!(LidarDescription, "RotationFrequency" => rotation_frequency),
    field!(LidarDescription, "UpperFOVLimit" => upper_fov_limit),
    field!(LidarDescription, "LowerFOVLimit" => lower_fov_limit),
    field!(LidarDescription, "ShowDebugPoints" => show_debug_points),
    field!(LidarDescription, "GaussianNoise" => gaussian_noise),
    field!(LidarDescription, "DropOutPattern" => drop_out_pattern),
    field!(LidarDescription, "LidarType" => lidar_type),
    field!(LidarDescription, "DebugFlag" => debug_flag),
    field!(LidarDescription, "HorizonRange" => horizon_range),
];

impl Configurable for LidarDescription {
    const SUBJECT: &'static str = "lidar";

    fn fields() -> &'static [Field<Self>] {
        LIDAR_FIELDS
    }

    // Conditions are negated so that NaN fails them.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check(&self) -> Vec<Issue> {
        let mut issues = vec![];

        if !(self.upper_fov_limit >= self.lower_fov_limit) {
            issues.push(Issue::InvertedFov {
                upper: self.upper_fov_limit,
                lower: self.lower_fov_limit,
            });
        }
        if self.channels == 0 {
            issues.push(Issue::NotPositive {
                key: "Channels",
                value: 0.0,
            });
        }
        if !(self.range > 0.0) {
            issues.push(Issue::NotPositive {
                key: "Range",
                value: self.range,
            });
        }
        if self.points_per_second == 0 {
            issues.push(Issue::NotPositive {
                key: "PointsPerSecond",
                value: 0.0,
            });
        }
        if !(self.rotation_frequency > 0.0) {
            issues.push(Issue::NotPositive {
                key: "RotationFrequency",
                value: self.rotation_frequency,
            });
        }
        if !(self.gaussian_noise >= 0.0) {
            issues.push(Issue::Negative {
                key: "GaussianNoise",
                value: self.gaussian_noise,
            });
        }
        if !(self.horizon_range > 0.0 && self.horizon_range <= 360.0) {
            issues.push(Issue::OutOfRange {
                key: "HorizonRange",
                value: self.horizon_range,
                bounds: "(0, 360]",
            });
        }

        issues
    }
}
