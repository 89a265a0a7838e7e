use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::pixel::Palette;

/// Colors and drawing parameters used while solving. Missing keys in a config file keep their
/// default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub start_color: [u8; 3],
    pub end_color: [u8; 3],
    pub path_color: [u8; 3],
    /// line width of the drawn path in pixels
    pub stroke_width: u32,
    /// pixels with every channel below this value are walls
    pub wall_threshold: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            start_color: [255, 0, 0],
            end_color: [0, 0, 255],
            path_color: [0, 255, 0],
            stroke_width: 2,
            wall_threshold: 128,
        }
    }
}

impl SolverConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn palette(&self) -> Palette {
        Palette {
            start: self.start_color,
            end: self.end_color,
            wall_threshold: self.wall_threshold,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_json() {
        let config: SolverConfig =
            serde_json::from_str(r#"{ "end_color": [0, 200, 0], "stroke_width": 5 }"#).unwrap();

        assert_eq!(config.end_color, [0, 200, 0]);
        assert_eq!(config.stroke_width, 5);
        assert_eq!(config.start_color, SolverConfig::default().start_color);
        assert_eq!(config.wall_threshold, 128);
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("solver-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "wall_threshold": 64 }"#).unwrap();
        let config = SolverConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.wall_threshold, 64);
        assert_eq!(config.palette().wall_threshold, 64);

        assert!(SolverConfig::from_json_file(path.with_extension("missing")).is_err());
    }
}
