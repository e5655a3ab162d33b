#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pyrflow_image as image;

#[doc(inline)]
pub use pyrflow_imgproc as imgproc;

#[doc(inline)]
pub use pyrflow_flow as flow;
