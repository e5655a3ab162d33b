use pyrflow_image::{ImageError, ImageSize};

/// An error type for the flow module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FlowError {
    /// The two images (or the two flow components) do not share the same size.
    #[error("Shape mismatch: {0} vs {1}")]
    ShapeMismatch(ImageSize, ImageSize),

    /// The input image is not a single channel image.
    #[error("Expected a single channel image, got {0} channels")]
    Dimensionality(usize),

    /// The solver returned a flow field that does not match the level size.
    #[error("Solver returned a flow field of {1}, expected {0}")]
    SolverShape(ImageSize, ImageSize),

    /// A parameter is out of its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from the image operations.
    #[error(transparent)]
    Image(#[from] ImageError),
}
