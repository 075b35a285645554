mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from strainmap for tests
pub use strainmap::{
    AnalysisConfig, AnalysisContext, AnalysisError, BoundingBox, Contour, Rejection,
    ScaleFactors, SensorCandidate, SensorKind, SensorPipeline,
};
