//! Data models for the upload resource

mod upload;

pub use upload::*;
