use crate::detection::snap::MIN_ANGULAR_STEP_DEGREES;
use crate::error::AnalysisError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Rendered colors of the two input images, RGB order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub baseline: [u8; 3],
    pub tensile: [u8; 3],
    pub compressive: [u8; 3],
    pub background: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            baseline: [160, 160, 160],
            tensile: [255, 165, 0],
            compressive: [160, 32, 240],
            background: [255, 255, 255],
        }
    }
}

/// Line style used when drawing sensors onto an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: [u8; 3],
    pub width: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            width: 2,
        }
    }
}

/// Tunable parameters of one analysis pass.
///
/// `noise_ratio`, `min_length` and `anchor_offset` are empirical values with
/// no derivation behind them. Defaults should only change with domain input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub palette: Palette,
    /// Per-channel +/- band around each palette color
    pub color_tolerance: u8,
    /// Overlay contours with at most this fraction of the baseline contour's
    /// point count are treated as render noise
    pub noise_ratio: f64,
    /// Sensors must be strictly longer than this (physical units)
    pub min_length: f64,
    /// How far anchors are pushed past the silhouette edge (physical units)
    pub anchor_offset: f64,
    pub angular_step_degrees: f64,
    /// Snapper ceiling in pixels; `None` uses the image diagonal
    pub max_search_radius: Option<u32>,
    pub parallel: bool,
    pub stroke: StrokeStyle,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            color_tolerance: 1,
            noise_ratio: 0.2,
            min_length: 40.0,
            anchor_offset: 15.0,
            angular_step_degrees: 1.0,
            max_search_radius: None,
            parallel: true,
            stroke: StrokeStyle::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load a JSON config file; missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, AnalysisError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
            .map_err(|e| AnalysisError::InvalidConfig(format!("{}: {e}", path.display())))
    }

    pub fn from_json_str(contents: &str) -> Result<Self, AnalysisError> {
        let config: AnalysisConfig = serde_json::from_str(contents)
            .map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let invalid = |msg: String| Err(AnalysisError::InvalidConfig(msg));

        if !(0.0..1.0).contains(&self.noise_ratio) {
            return invalid(format!("noise_ratio must be in [0, 1), got {}", self.noise_ratio));
        }
        if !(self.min_length.is_finite() && self.min_length > 0.0) {
            return invalid(format!("min_length must be positive, got {}", self.min_length));
        }
        if !(self.anchor_offset.is_finite() && self.anchor_offset > 0.0) {
            return invalid(format!("anchor_offset must be positive, got {}", self.anchor_offset));
        }
        if !(MIN_ANGULAR_STEP_DEGREES..=360.0).contains(&self.angular_step_degrees) {
            return invalid(format!(
                "angular_step_degrees must be in [{MIN_ANGULAR_STEP_DEGREES}, 360], got {}",
                self.angular_step_degrees
            ));
        }
        if self.max_search_radius == Some(0) {
            return invalid("max_search_radius must be at least 1".to_string());
        }
        if self.stroke.width == 0 {
            return invalid("stroke width must be at least 1".to_string());
        }
        if self.palette.baseline == self.palette.background {
            return invalid("baseline and background colors must differ".to_string());
        }

        Ok(())
    }
}
