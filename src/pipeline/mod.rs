//! Request pipelines behind the two web tools
//!
//! Each pipeline owns its service dependencies behind trait objects so that
//! web handlers and tests can inject mocks.

pub mod image;
pub mod summary;

pub use image::ImagePipeline;
pub use summary::SummaryPipeline;
