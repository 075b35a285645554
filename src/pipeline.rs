use crate::config::AnalysisConfig;
use crate::detection::ranking::select_longest;
use crate::detection::segmentation::{ColorRange, segment};
use crate::detection::{self, Baseline, Detection};
use crate::error::AnalysisError;
use crate::models::{BoundingBox, ScaleFactors, SensorCandidate};
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Immutable state shared by every step of one analysis pass
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisContext {
    pub scale: ScaleFactors,
    /// Pixel footprint of the part; origin of the physical coordinate frame
    pub baseline_box: BoundingBox,
    pub config: AnalysisConfig,
}

impl AnalysisContext {
    /// Build a context from the baseline box and the part's physical size.
    ///
    /// `part_length` runs along the image x axis, `part_height` along y.
    pub fn new(
        baseline_box: BoundingBox,
        part_length: f64,
        part_height: f64,
        config: AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(part_length) || !valid(part_height) {
            return Err(AnalysisError::InvalidDimensions {
                length: part_length,
                height: part_height,
            });
        }
        let scale = ScaleFactors::from_dimensions(&baseline_box, part_length, part_height);
        Self::with_scale(baseline_box, scale, config)
    }

    /// Build a context from already calibrated scale factors
    pub fn with_scale(
        baseline_box: BoundingBox,
        scale: ScaleFactors,
        config: AnalysisConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        if baseline_box.is_degenerate() {
            return Err(AnalysisError::DegenerateBaseline {
                width: baseline_box.width,
                height: baseline_box.height,
            });
        }
        if !scale.is_valid() {
            return Err(AnalysisError::InvalidScale {
                scalex: scale.scalex,
                scaley: scale.scaley,
            });
        }

        Ok(Self {
            scale,
            baseline_box,
            config,
        })
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Directory receiving the intermediate masks
    pub output_dir: PathBuf,
    pub enabled: bool,
}

/// Result of one analysis pass
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub context: AnalysisContext,
    /// Accepted sensors, shortest first
    pub sensors: Vec<SensorCandidate>,
    pub rejected: usize,
}

impl AnalysisReport {
    /// The `count` longest sensors, longest first
    pub fn longest(&self, count: usize) -> Vec<&SensorCandidate> {
        select_longest(&self.sensors, count)
    }
}

/// Sensor placement pipeline builder
pub struct SensorPipeline {
    config: AnalysisConfig,
    verbose: bool,
    debug: Option<DebugConfig>,
}

impl SensorPipeline {
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
            verbose: false,
            debug: None,
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Log every rejected contour at info level instead of debug
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable debug mode with output directory.
    /// The directory must be empty or non-existent.
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self, AnalysisError> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "debug directory is not empty: {}",
                    output_dir.display()
                )));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.debug = Some(DebugConfig {
            output_dir,
            enabled: true,
        });

        Ok(self)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run a full pass on two decoded images
    pub fn run(
        &self,
        baseline_image: &RgbImage,
        values_image: &RgbImage,
        part_length: f64,
        part_height: f64,
    ) -> Result<AnalysisReport, AnalysisError> {
        self.config.validate()?;
        detection::check_dimensions(baseline_image, values_image)?;

        let baseline = Baseline::find(baseline_image, &self.config)?;
        let context =
            AnalysisContext::new(baseline.bbox, part_length, part_height, self.config.clone())?;
        info!(
            "baseline box {}x{} at ({}, {}), scalex={:.4}, scaley={:.4}",
            context.baseline_box.width,
            context.baseline_box.height,
            context.baseline_box.x,
            context.baseline_box.y,
            context.scale.scalex,
            context.scale.scaley
        );

        self.save_debug_masks(baseline_image, values_image)?;

        let Detection { sensors, rejections } =
            detection::detect_sensors(baseline_image, values_image, &baseline, &context)?;

        for (kind, rejection) in &rejections {
            if self.verbose {
                info!("rejected {} candidate: {}", kind, rejection);
            } else {
                debug!("rejected {} candidate: {}", kind, rejection);
            }
        }

        Ok(AnalysisReport {
            context,
            sensors,
            rejected: rejections.len(),
        })
    }

    /// Load both images from disk and run a pass
    pub fn run_files(
        &self,
        baseline_path: &Path,
        values_path: &Path,
        part_length: f64,
        part_height: f64,
    ) -> Result<AnalysisReport, AnalysisError> {
        info!("loading {} and {}", baseline_path.display(), values_path.display());
        let baseline = image::open(baseline_path)?.to_rgb8();
        let values = image::open(values_path)?.to_rgb8();
        self.run(&baseline, &values, part_length, part_height)
    }

    fn save_debug_masks(
        &self,
        baseline_image: &RgbImage,
        values_image: &RgbImage,
    ) -> Result<(), AnalysisError> {
        let Some(debug_config) = &self.debug else {
            return Ok(());
        };
        if !debug_config.enabled {
            return Ok(());
        }

        let palette = &self.config.palette;
        let tolerance = self.config.color_tolerance;
        let masks = [
            ("00_baseline.png", baseline_image, palette.baseline),
            ("01_tensile.png", values_image, palette.tensile),
            ("02_compressive.png", values_image, palette.compressive),
        ];

        for (name, source, color) in masks {
            let mask = segment(source, &ColorRange::around(color, tolerance));
            let path = debug_config.output_dir.join(name);
            mask.save(&path)?;
            debug!("saved debug mask {}", path.display());
        }

        Ok(())
    }
}

impl Default for SensorPipeline {
    fn default() -> Self {
        Self::new()
    }
}
