use chrono::Duration;
use serde::{Serialize, Serializer};
use std::fmt;

/// Elevation/time sampling geometry derived from one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    #[serde(
        rename = "sample_interval_seconds",
        serialize_with = "serialize_interval"
    )]
    pub sample_interval: Duration,
    pub min_elevation: i64,
    pub max_elevation: i64,
    pub bin_height: i64,
    pub bin_count: usize,
}

fn serialize_interval<S: Serializer>(
    interval: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i64(interval.num_seconds())
}

impl Grid {
    pub fn interval_seconds(&self) -> i64 {
        self.sample_interval.num_seconds()
    }

    /// Names of the fields that differ between two grids
    pub fn differences(&self, other: &Grid) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.sample_interval != other.sample_interval {
            fields.push("sample_interval");
        }
        if self.min_elevation != other.min_elevation {
            fields.push("min_elevation");
        }
        if self.max_elevation != other.max_elevation {
            fields.push("max_elevation");
        }
        if self.bin_height != other.bin_height {
            fields.push("bin_height");
        }
        if self.bin_count != other.bin_count {
            fields.push("bin_count");
        }
        fields
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "interval {}s, elevation {}..{} m, bin height {} m, {} bins",
            self.interval_seconds(),
            self.min_elevation,
            self.max_elevation,
            self.bin_height,
            self.bin_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid {
            sample_interval: Duration::minutes(10),
            min_elevation: 0,
            max_elevation: 470,
            bin_height: 10,
            bin_count: 48,
        }
    }

    #[test]
    fn test_grid_equality_is_per_field() {
        let base = grid();
        assert_eq!(base, grid());
        assert!(base.differences(&grid()).is_empty());

        let variants = [
            Grid {
                sample_interval: Duration::minutes(15),
                ..base
            },
            Grid {
                min_elevation: 10,
                ..base
            },
            Grid {
                max_elevation: 480,
                ..base
            },
            Grid {
                bin_height: 20,
                ..base
            },
            Grid {
                bin_count: 47,
                ..base
            },
        ];
        for variant in variants {
            assert_ne!(base, variant);
            assert_eq!(base.differences(&variant).len(), 1);
        }
    }

    #[test]
    fn test_grid_serializes_interval_in_seconds() {
        let json = serde_json::to_value(grid()).unwrap();
        assert_eq!(json["sample_interval_seconds"], 600);
        assert_eq!(json["bin_count"], 48);
    }

    #[test]
    fn test_grid_display() {
        assert_eq!(
            grid().to_string(),
            "interval 600s, elevation 0..470 m, bin height 10 m, 48 bins"
        );
    }
}
