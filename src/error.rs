use thiserror::Error;

/// Failures that abort a whole analysis pass.
///
/// All variants except the I/O wrappers are precondition failures: they are
/// raised before any overlay contour is looked at.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no baseline silhouette found in the baseline image")]
    MissingBaseline,

    #[error("baseline bounding box is degenerate ({width}x{height})")]
    DegenerateBaseline { width: u32, height: u32 },

    #[error("part dimensions must be positive (length={length}, height={height})")]
    InvalidDimensions { length: f64, height: f64 },

    #[error("scale factors must be positive (scalex={scalex}, scaley={scaley})")]
    InvalidScale { scalex: f64, scaley: f64 },

    #[error("image dimensions differ: baseline {baseline:?}, values {values:?}")]
    DimensionMismatch {
        baseline: (u32, u32),
        values: (u32, u32),
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single contour did not produce a sensor.
///
/// These are expected outcomes for noise contours and never abort the pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("sensor length {length:.2} does not exceed the minimum of {min_length}")]
    TooShort { length: f64, min_length: f64 },

    #[error("no pixel of color {target:?} within radius {max_radius} of ({x}, {y})")]
    NotFound {
        x: i32,
        y: i32,
        target: [u8; 3],
        max_radius: u32,
    },

    #[error("contour has no points")]
    EmptyContour,

    #[error("anchor snapped onto its own endpoint at ({x}, {y})")]
    DegenerateAnchor { x: i32, y: i32 },
}
