pub mod config;
pub mod coords;
pub mod detection;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;

pub use config::{AnalysisConfig, Palette, StrokeStyle};
pub use detection::{Baseline, Detection, detect_sensors};
pub use error::{AnalysisError, Rejection};
pub use models::{BoundingBox, Contour, ScaleFactors, SensorCandidate, SensorKind};
pub use pipeline::{AnalysisContext, AnalysisReport, DebugConfig, SensorPipeline};
