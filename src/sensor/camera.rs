use crate::{
    consts::DEFAULT_CAMERA,
    field::{field, Configurable, Field, FieldValue},
    validate::Issue,
};
use serde::Serialize;
use std::fmt;

/// Post-processing effect applied to the rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostProcessing {
    None,
    SceneFinal,
    Depth,
    SemanticSegmentation,
}

impl PostProcessing {
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::SceneFinal,
        Self::Depth,
        Self::SemanticSegmentation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::SceneFinal => "SceneFinal",
            Self::Depth => "Depth",
            Self::SemanticSegmentation => "SemanticSegmentation",
        }
    }
}

impl fmt::Display for PostProcessing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldValue for PostProcessing {
    fn parse_value(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|effect| effect.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| format!("unknown post-processing effect '{raw}'"))
    }

    fn render(&self) -> String {
        self.as_str().to_string()
    }
}

/// Scene capture camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraDescription {
    pub post_processing: PostProcessing,
    /// Image width in pixels.
    pub image_size_x: u32,
    /// Image height in pixels.
    pub image_size_y: u32,
    /// Horizontal field of view in degrees.
    pub fov: f32,
}

impl CameraDescription {
    pub fn set_image_size(&mut self, pixels_x: u32, pixels_y: u32) {
        self.image_size_x = pixels_x;
        self.image_size_y = pixels_y;
    }
}

impl Default for CameraDescription {
    fn default() -> Self {
        DEFAULT_CAMERA
    }
}

static CAMERA_FIELDS: &[Field<CameraDescription>] = &[
    field!(CameraDescription, "PostProcessing" => post_processing),
    field!(CameraDescription, "ImageSizeX" => image_size_x),
    field!(CameraDescription, "ImageSizeY" => image_size_y),
    field!(CameraDescription, "FOV" => fov),
];

impl Configurable for CameraDescription {
    const SUBJECT: &'static str = "camera";

    fn fields() -> &'static [Field<Self>] {
        CAMERA_FIELDS
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn check(&self) -> Vec<Issue> {
        let mut issues = vec![];
        for (key, size) in [
            ("ImageSizeX", self.image_size_x),
            ("ImageSizeY", self.image_size_y),
        ] {
            if size == 0 {
                issues.push(Issue::NotPositive { key, value: 0.0 });
            }
        }
        if !(self.fov > 0.0 && self.fov < 180.0) {
            issues.push(Issue::OutOfRange {
                key: "FOV",
                value: self.fov,
                bounds: "(0, 180)",
            });
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Sections;

    #[test]
    fn loads_fields() {
        let sections = Sections::from_ini_str(
            "[CARLA/Sensor/Camera]
PostProcessing=depth
ImageSizeX=1280
ImageSizeY=720
FOV=110
",
        )
        .unwrap();
        let mut camera = CameraDescription::default();
        camera.load(&sections, "CARLA/Sensor/Camera");
        assert_eq!(
            camera,
            CameraDescription {
                post_processing: PostProcessing::Depth,
                image_size_x: 1280,
                image_size_y: 720,
                fov: 110.0,
            }
        );
    }

    #[test]
    fn unknown_effect_is_rejected() {
        let mut camera = CameraDescription::default();
        assert!(camera.set("PostProcessing", "Sepia").is_err());
        assert_eq!(camera.post_processing, PostProcessing::SceneFinal);
    }

    #[test]
    fn checks_image_size_and_fov() {
        let camera = CameraDescription {
            image_size_y: 0,
            fov: 180.0,
            ..CameraDescription::default()
        };
        assert_eq!(
            camera.check(),
            vec![
                Issue::NotPositive {
                    key: "ImageSizeY",
                    value: 0.0
                },
                Issue::OutOfRange {
                    key: "FOV",
                    value: 180.0,
                    bounds: "(0, 180)"
                },
            ]
        );
        assert!(CameraDescription::default().check().is_empty());
    }

    #[test]
    fn nan_fov_is_reported() {
        let camera = CameraDescription {
            fov: f32::NAN,
            ..CameraDescription::default()
        };
        let issues = camera.check();
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], Issue::OutOfRange { key: "FOV", .. }));
    }

    #[test]
    fn set_image_size_sets_both_dimensions() {
        let mut camera = CameraDescription::default();
        camera.set_image_size(1920, 1080);
        assert_eq!(camera.image_size_x, 1920);
        assert_eq!(camera.image_size_y, 1080);
        assert_eq!(camera.fov, 90.0);
    }
}
