mod flow;
pub use flow::{warp_flow, SamplingGrid};
