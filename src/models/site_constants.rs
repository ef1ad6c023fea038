use serde::{Deserialize, Serialize};
use validator::Validate;

/// Site metadata and the ordered variable list shared by every sample of a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SiteConstants {
    #[validate(range(min = 0, max = 360))]
    pub azimuth_angle: i64,

    pub elevation: i64,

    pub height_above_sea_level: i64,

    #[validate(length(min = 2))]
    pub variables: Vec<String>,
}

impl SiteConstants {
    pub fn new(
        azimuth_angle: i64,
        elevation: i64,
        height_above_sea_level: i64,
        variables: Vec<String>,
    ) -> Self {
        Self {
            azimuth_angle,
            elevation,
            height_above_sea_level,
            variables,
        }
    }
}
