use crate::error::{AuditError, Result};
use crate::models::{Header, SiteConstants};
use crate::readers::cursor::SegmentCursor;
use crate::readers::fields::parse_number;
use crate::utils::constants::{
    AZIMUTH_ANGLE_LABEL, COMMENT_PREFIX, ELEVATION_VARIABLE, ERROR_CODE_PREFIX, ERROR_VARIABLE,
    HEIGHT_ABOVE_GROUND_LABEL, HEIGHT_ABOVE_SEA_LEVEL_LABEL, MAIN_DATA_DECLARATION,
    VARIABLE_SEPARATOR,
};
use validator::Validate;

/// Parses segment 1: labeled site constants, the main data declaration and variable names
#[derive(Debug, Clone, Default)]
pub struct ConstantsParser;

impl ConstantsParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, segment: &[String], header: &Header) -> Result<SiteConstants> {
        let mut cursor = SegmentCursor::new("constants", segment);

        let mut azimuth_angle = None;
        let mut elevation = None;
        let mut height_above_sea_level = None;

        // Constants block runs until the next comment line
        let mut line = cursor.advance_past_comments()?;
        while !line.starts_with(COMMENT_PREFIX) {
            if line.starts_with(AZIMUTH_ANGLE_LABEL) {
                azimuth_angle = Some(trailing_integer(line, "azimuth angle")?);
            } else if line.starts_with(HEIGHT_ABOVE_GROUND_LABEL) {
                elevation = Some(trailing_integer(line, "height above ground")?);
            } else if line.starts_with(HEIGHT_ABOVE_SEA_LEVEL_LABEL) {
                height_above_sea_level = Some(trailing_integer(line, "height above sea level")?);
            }
            line = cursor.advance()?;
        }

        let azimuth_angle = azimuth_angle.ok_or(AuditError::MissingConstant {
            label: AZIMUTH_ANGLE_LABEL,
        })?;
        let elevation = elevation.ok_or(AuditError::MissingConstant {
            label: HEIGHT_ABOVE_GROUND_LABEL,
        })?;
        let height_above_sea_level = height_above_sea_level.ok_or(AuditError::MissingConstant {
            label: HEIGHT_ABOVE_SEA_LEVEL_LABEL,
        })?;

        let declaration = cursor.advance_past_comments()?;
        if !declaration.starts_with(MAIN_DATA_DECLARATION) {
            return Err(AuditError::MainDataMisplaced {
                found: declaration.to_string(),
            });
        }

        let mut line = cursor.advance_past_comments()?;
        let mut variables = Vec::new();
        for _ in 0..header.variable_count {
            let name = line
                .split(VARIABLE_SEPARATOR)
                .nth(1)
                .ok_or_else(|| AuditError::MalformedVariable {
                    line: line.to_string(),
                })?;
            variables.push(name.to_string());
            line = cursor.advance()?;
        }

        match variables.first() {
            Some(first) if first == ELEVATION_VARIABLE => {}
            first => {
                return Err(AuditError::FirstVariable {
                    found: first.cloned().unwrap_or_default(),
                })
            }
        }

        if !line.starts_with(ERROR_CODE_PREFIX) {
            return Err(AuditError::ErrorCodeMisplaced {
                found: line.to_string(),
            });
        }
        variables.push(ERROR_VARIABLE.to_string());

        let constants = SiteConstants::new(
            azimuth_angle,
            elevation,
            height_above_sea_level,
            variables,
        );
        constants.validate()?;
        Ok(constants)
    }
}

fn trailing_integer(line: &str, field: &'static str) -> Result<i64> {
    let value = line.split_whitespace().last().unwrap_or_default();
    parse_number(value, field)
}
