use crate::error::FlowError;
use pyrflow_image::{GrayImage, Image, ImageSize};

/// A dense motion field.
///
/// The field holds one horizontal (`u`, along the columns) and one vertical
/// (`v`, along the rows) displacement per pixel. Both components always share
/// the same size.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowField {
    u: GrayImage,
    v: GrayImage,
}

impl FlowField {
    /// Create a flow field from its two components.
    ///
    /// # Errors
    ///
    /// If `u` and `v` have different sizes.
    pub fn new(u: GrayImage, v: GrayImage) -> Result<Self, FlowError> {
        if u.size() != v.size() {
            return Err(FlowError::ShapeMismatch(u.size(), v.size()));
        }
        Ok(Self { u, v })
    }

    /// Create a flow field with zero displacement everywhere.
    ///
    /// # Example
    ///
    /// ```
    /// use pyrflow_flow::FlowField;
    /// use pyrflow_image::ImageSize;
    ///
    /// let flow = FlowField::zeros(ImageSize { width: 4, height: 2 });
    ///
    /// assert_eq!(flow.size(), ImageSize { width: 4, height: 2 });
    /// assert!(flow.u().as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(size: ImageSize) -> Self {
        Self::from_constant(size, 0.0, 0.0)
    }

    /// Create a uniform flow field.
    pub fn from_constant(size: ImageSize, u: f32, v: f32) -> Self {
        Self {
            u: Image::from_fn(size, |_, _, _| u),
            v: Image::from_fn(size, |_, _, _| v),
        }
    }

    /// The size of the field.
    pub fn size(&self) -> ImageSize {
        self.u.size()
    }

    /// The horizontal component.
    pub fn u(&self) -> &GrayImage {
        &self.u
    }

    /// The vertical component.
    pub fn v(&self) -> &GrayImage {
        &self.v
    }

    /// Consume the field and return `(u, v)`.
    pub fn into_parts(self) -> (GrayImage, GrayImage) {
        (self.u, self.v)
    }

    /// Euclidean norm of the displacement at every pixel.
    pub fn magnitude(&self) -> GrayImage {
        let mut norm = self.u.clone();
        norm.as_slice_mut()
            .iter_mut()
            .zip(self.v.as_slice())
            .for_each(|(u, v)| *u = u.hypot(*v));
        norm
    }
}
